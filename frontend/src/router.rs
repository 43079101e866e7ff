//! 路由服务模块 - 核心引擎
//!
//! 封装 History API 驱动的单页路由：当前路由以 Signal 形式驱动界面更新，
//! 前进/后退通过 popstate 监听同步。引擎对路由树泛型，
//! 顾客端与后台端各持有一个互不相干的实例。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::routes::RoutePath;
use crate::web::{current_path, push_history_state, replace_history_state};

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；`R` 决定这是哪一棵路由树。
#[derive(Clone, Copy)]
pub struct Router<R: RoutePath> {
    /// 当前路由（只读信号）
    current: ReadSignal<R>,
    /// 设置当前路由（写入信号）
    set_current: WriteSignal<R>,
}

impl<R: RoutePath> Router<R> {
    /// 创建新的路由服务，初始路由从当前 URL 解析
    fn new() -> Self {
        let initial = R::from_path(&current_path());
        let (current, set_current) = signal(initial);
        Self {
            current,
            set_current,
        }
    }

    /// 获取当前路由信号
    pub fn current(&self) -> ReadSignal<R> {
        self.current
    }

    /// 导航到指定路由（pushState）
    pub fn navigate(&self, route: R) {
        push_history_state(&route.to_path());
        self.set_current.set(route);
    }

    /// 替换当前路由（replaceState，用于重定向）
    pub fn replace(&self, route: R) {
        replace_history_state(&route.to_path());
        self.set_current.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_current = self.set_current;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_current.set(R::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化监听
///
/// 应在对应路由树的根组件（CustomerApp / AdminApp）中调用一次。
pub fn provide_router<R: RoutePath>() -> Router<R> {
    let router = Router::<R>::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router<R: RoutePath>() -> Router<R> {
    use_context::<Router<R>>()
        .expect("Router not found in context. Ensure provide_router was called.")
}
