//! 顶层应用状态机
//!
//! 驱动 闪屏 → 身份选择 → 登录 → {顾客端 | 后台} 的切换，并决定
//! 挂载哪一棵路由树。两棵树互斥，绝不同时挂载。
//!
//! 转移关系：
//! ```text
//! Splash --(4s 定时到期 或 已有会话)--> RoleSelect | Customer | Admin
//! RoleSelect --(选择身份)--> Auth(role)
//! Auth --(认证成功)--> Customer (顾客) | Admin (管理员)
//! Customer/Admin --(注销)--> RoleSelect
//! ```
//! 带着有效会话重新进入（整页刷新）时跳过闪屏等待、身份选择与登录，
//! 直接根据持久化用户的角色进入对应端。

use fournil_shared::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cart::CartStore;
use crate::components::admin::AdminApp;
use crate::components::auth_page::AuthPage;
use crate::components::customer::CustomerApp;
use crate::components::role_select::RoleSelectPage;
use crate::components::splash::SplashScreen;
use crate::session::SessionStore;

/// 闪屏停留时长（毫秒）
pub const SPLASH_MILLIS: u64 = 4_000;

/// 顶层界面模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    Splash,
    RoleSelect,
    /// 登录/注册页，携带用户在身份选择页挑中的角色
    Auth(Role),
    Customer,
    Admin,
}

impl AppPhase {
    /// 角色对应的终态
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Customer => Self::Customer,
            Role::Admin => Self::Admin,
        }
    }

    /// 启动时的初始状态：已有会话直接短路进入对应端，跳过闪屏等待
    pub fn boot(session_role: Option<Role>) -> Self {
        match session_role {
            Some(role) => Self::for_role(role),
            None => Self::Splash,
        }
    }

    /// 闪屏定时到期后的去向
    pub fn after_splash(session_role: Option<Role>) -> Self {
        match session_role {
            Some(role) => Self::for_role(role),
            None => Self::RoleSelect,
        }
    }

    /// 注销后的去向
    pub fn logout_target() -> Self {
        Self::RoleSelect
    }

    /// 是否处于某个应用终态
    pub fn is_app(&self) -> bool {
        matches!(self, Self::Customer | Self::Admin)
    }
}

/// 顶层外壳组件
///
/// 持有相位信号；身份选择与登录页通过回调推动状态机前进，
/// 注销通过会话信号的监听自动回到身份选择页。
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore should be provided");
    let cart = use_context::<CartStore>().expect("CartStore should be provided");

    let phase = RwSignal::new(AppPhase::boot(session.role()));

    // 闪屏定时器；到期时若仍在闪屏则前进
    if phase.get_untracked() == AppPhase::Splash {
        let session_for_timer = session.clone();
        set_timeout(
            move || {
                if phase.get_untracked() == AppPhase::Splash {
                    phase.set(AppPhase::after_splash(session_for_timer.role()));
                }
            },
            std::time::Duration::from_millis(SPLASH_MILLIS),
        );
    }

    // 用户切换（登录/注销/换号）→ 触发一次购物车重拉
    let user_signal = session.user_signal();
    Effect::new(move |prev: Option<Option<u64>>| {
        let user_id = user_signal.get().map(|u| u.user_id);
        if prev != Some(user_id) {
            let cart = cart.clone();
            spawn_local(async move { cart.on_user_change().await });
        }
        user_id
    });

    // 注销监听：处于应用终态而会话消失时回到身份选择页
    let is_authenticated = session.is_authenticated_signal();
    Effect::new(move |_| {
        if !is_authenticated.get() && phase.get_untracked().is_app() {
            phase.set(AppPhase::logout_target());
        }
    });

    let on_role_pick = Callback::new(move |role: Role| {
        phase.set(AppPhase::Auth(role));
    });

    // 认证成功：按返回用户的实际角色进入对应端
    let on_authenticated = Callback::new(move |role: Role| {
        phase.set(AppPhase::for_role(role));
    });

    view! {
        {move || match phase.get() {
            AppPhase::Splash => view! { <SplashScreen /> }.into_any(),
            AppPhase::RoleSelect => view! { <RoleSelectPage on_pick=on_role_pick /> }.into_any(),
            AppPhase::Auth(role) => {
                view! { <AuthPage role=role on_authenticated=on_authenticated /> }.into_any()
            }
            AppPhase::Customer => view! { <CustomerApp /> }.into_any(),
            AppPhase::Admin => view! { <AdminApp /> }.into_any(),
        }}
    }
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_short_circuits_persisted_sessions() {
        // 持久化管理员会话：直接进入后台，绝不经过身份选择页
        assert_eq!(AppPhase::boot(Some(Role::Admin)), AppPhase::Admin);
        assert_eq!(AppPhase::boot(Some(Role::Customer)), AppPhase::Customer);
        assert_eq!(AppPhase::boot(None), AppPhase::Splash);
    }

    #[test]
    fn splash_timer_targets() {
        assert_eq!(AppPhase::after_splash(None), AppPhase::RoleSelect);
        assert_eq!(AppPhase::after_splash(Some(Role::Customer)), AppPhase::Customer);
        assert_eq!(AppPhase::after_splash(Some(Role::Admin)), AppPhase::Admin);
    }

    #[test]
    fn logout_returns_to_role_select() {
        assert_eq!(AppPhase::logout_target(), AppPhase::RoleSelect);
        assert!(!AppPhase::logout_target().is_app());
    }

    #[test]
    fn app_phases_are_terminal_until_logout() {
        assert!(AppPhase::Customer.is_app());
        assert!(AppPhase::Admin.is_app());
        assert!(!AppPhase::Splash.is_app());
        assert!(!AppPhase::Auth(Role::Customer).is_app());
    }
}
