//! 会话状态管理
//!
//! 持有当前用户与 Token，与路由和页面解耦：页面通过注入的
//! [`SessionStore`] 登录、注销、更新资料；存储与网络依赖均为注入的
//! trait 对象，初始化顺序与测试隔离因此是显式的。
//!
//! 持久化契约：LocalStorage 键 `authToken`（裸字符串）与 `user`
//! （序列化 JSON）。两者同在为已认证，缺一视为无会话。

use std::sync::Arc;

use fournil_shared::error::{ApiError, ApiResult};
use fournil_shared::protocol::{RegisterRequest, UpdateProfileRequest};
use fournil_shared::{Role, STORAGE_TOKEN_KEY, STORAGE_USER_KEY, User};
use leptos::prelude::*;

use crate::api::auth::AuthGateway;
use crate::log::log_error;
use crate::web::KeyValueStore;

/// 会话状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// 启动时的一次性加载标记，hydrate 完成后恒为 false
    pub is_loading: bool,
}

impl SessionState {
    /// 不变量：Token 与用户必须同时存在才算已认证
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// 会话存储
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    vault: Arc<dyn KeyValueStore>,
    gateway: Arc<dyn AuthGateway>,
}

impl SessionStore {
    pub fn new(vault: Arc<dyn KeyValueStore>, gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            state: RwSignal::new(SessionState {
                is_loading: true,
                ..SessionState::default()
            }),
            vault,
            gateway,
        }
    }

    /// 启动时同步读取一次 LocalStorage
    ///
    /// 不做 Token 刷新或过期检查——过期由后续请求的 401 被动发现。
    /// 只残留一个键时视为无会话并清掉残留。
    pub fn hydrate(&self) {
        let token = self.vault.get(STORAGE_TOKEN_KEY);
        let user = self
            .vault
            .get(STORAGE_USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());

        let (token, user) = match (token, user) {
            (Some(token), Some(user)) => (Some(token), Some(user)),
            _ => {
                self.vault.remove(STORAGE_TOKEN_KEY);
                self.vault.remove(STORAGE_USER_KEY);
                (None, None)
            }
        };

        self.state.set(SessionState {
            user,
            token,
            is_loading: false,
        });
    }

    // --- 信号访问 ---

    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn user_signal(&self) -> Signal<Option<User>> {
        let state = self.state;
        Signal::derive(move || state.get().user)
    }

    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    pub fn is_loading_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_loading)
    }

    /// 当前用户角色（非响应式读取）
    pub fn role(&self) -> Option<Role> {
        self.snapshot().role()
    }

    // --- 操作 ---

    /// 登录；失败时携带服务端消息原样抛给调用方
    pub async fn login(&self, email: String, password: String) -> ApiResult<User> {
        let session = self.gateway.sign_in(email, password).await?;
        self.install(session.token, session.user.clone());
        Ok(session.user)
    }

    /// 注册；契约与登录一致
    pub async fn signup(&self, req: RegisterRequest) -> ApiResult<User> {
        let session = self.gateway.register(req).await?;
        self.install(session.token, session.user.clone());
        Ok(session.user)
    }

    /// 注销：同步清除内存与 LocalStorage，可重复调用
    pub fn logout(&self) {
        self.vault.remove(STORAGE_TOKEN_KEY);
        self.vault.remove(STORAGE_USER_KEY);
        self.state.set(SessionState {
            user: None,
            token: None,
            is_loading: false,
        });
    }

    /// 替换缓存的用户并沿用现有 Token 重新持久化
    pub fn update_user(&self, user: User) {
        self.persist_user(&user);
        self.state.update(|state| state.user = Some(user));
    }

    /// 更新资料：调用后端后以返回的用户替换缓存
    pub async fn update_profile(
        &self,
        full_name: String,
        phone_number: Option<String>,
    ) -> ApiResult<User> {
        let user_id = self
            .snapshot()
            .user
            .map(|u| u.user_id)
            .ok_or_else(ApiError::auth_required)?;

        let user = self
            .gateway
            .update_profile(UpdateProfileRequest {
                user_id,
                full_name,
                phone_number,
            })
            .await?;
        self.update_user(user.clone());
        Ok(user)
    }

    // --- 内部 ---

    fn install(&self, token: String, user: User) {
        self.vault.set(STORAGE_TOKEN_KEY, &token);
        self.persist_user(&user);
        self.state.set(SessionState {
            user: Some(user),
            token: Some(token),
            is_loading: false,
        });
    }

    fn persist_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => {
                self.vault.set(STORAGE_USER_KEY, &json);
            }
            Err(e) => log_error!("[Session] Failed to serialize user: {}", e),
        }
    }
}

// =========================================================
// 单元测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::storage::tests::MemoryStore;
    use async_trait::async_trait;
    use fournil_shared::SessionData;
    use std::sync::Mutex;

    struct MockAuthGateway {
        /// 操作日志，校验调用与顺序
        log: Mutex<Vec<String>>,
        /// None 时按业务失败处理
        session: Option<SessionData>,
        fail_message: String,
    }

    impl MockAuthGateway {
        fn accepting(user: User) -> Self {
            Self {
                log: Mutex::new(Vec::new()),
                session: Some(SessionData {
                    token: "tok-1".into(),
                    user,
                }),
                fail_message: String::new(),
            }
        }

        fn rejecting(message: &str) -> Self {
            Self {
                log: Mutex::new(Vec::new()),
                session: None,
                fail_message: message.into(),
            }
        }

        fn log_entries(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl AuthGateway for MockAuthGateway {
        async fn sign_in(&self, email: String, _password: String) -> ApiResult<SessionData> {
            self.log.lock().unwrap().push(format!("sign_in:{}", email));
            self.session
                .clone()
                .ok_or_else(|| ApiError::server(self.fail_message.clone()))
        }

        async fn register(&self, req: RegisterRequest) -> ApiResult<SessionData> {
            self.log
                .lock()
                .unwrap()
                .push(format!("register:{}", req.email));
            self.session
                .clone()
                .ok_or_else(|| ApiError::server(self.fail_message.clone()))
        }

        async fn update_profile(&self, req: UpdateProfileRequest) -> ApiResult<User> {
            self.log
                .lock()
                .unwrap()
                .push(format!("update_profile:{}", req.user_id));
            let mut user = self.session.clone().unwrap().user;
            user.full_name = req.full_name;
            user.phone_number = req.phone_number;
            Ok(user)
        }
    }

    fn customer(user_id: u64) -> User {
        User {
            user_id,
            full_name: "Marie Blanchard".into(),
            email: "marie@example.com".into(),
            phone_number: None,
            role: Role::Customer,
            profile_picture: None,
        }
    }

    fn store_with(
        vault_entries: &[(&str, &str)],
        gateway: MockAuthGateway,
    ) -> (Arc<MemoryStore>, Arc<MockAuthGateway>, SessionStore) {
        let vault = Arc::new(MemoryStore::with(vault_entries));
        let gateway = Arc::new(gateway);
        let store = SessionStore::new(vault.clone(), gateway.clone());
        (vault, gateway, store)
    }

    #[tokio::test]
    async fn login_persists_token_and_user() {
        let (vault, gateway, store) = store_with(&[], MockAuthGateway::accepting(customer(7)));
        store.hydrate();
        assert!(!store.snapshot().is_authenticated());

        let user = store
            .login("marie@example.com".into(), "secret".into())
            .await
            .unwrap();
        assert_eq!(user.user_id, 7);

        assert!(store.snapshot().is_authenticated());
        assert_eq!(vault.get(STORAGE_TOKEN_KEY).as_deref(), Some("tok-1"));
        let persisted: User =
            serde_json::from_str(&vault.get(STORAGE_USER_KEY).unwrap()).unwrap();
        assert_eq!(persisted.user_id, 7);
        assert_eq!(gateway.log_entries(), vec!["sign_in:marie@example.com"]);
    }

    #[tokio::test]
    async fn login_failure_propagates_message_and_leaves_vault_untouched() {
        let (vault, _, store) = store_with(&[], MockAuthGateway::rejecting("Invalid credentials"));
        store.hydrate();

        let err = store
            .login("marie@example.com".into(), "wrong".into())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Invalid credentials");
        assert!(vault.get(STORAGE_TOKEN_KEY).is_none());
        assert!(!store.snapshot().is_authenticated());
    }

    #[tokio::test]
    async fn logout_clears_vault_and_memory_idempotently() {
        let (vault, _, store) = store_with(&[], MockAuthGateway::accepting(customer(7)));
        store.hydrate();
        store
            .login("marie@example.com".into(), "secret".into())
            .await
            .unwrap();

        store.logout();
        assert!(vault.get(STORAGE_TOKEN_KEY).is_none());
        assert!(vault.get(STORAGE_USER_KEY).is_none());
        assert!(!store.snapshot().is_authenticated());
        assert!(!store.snapshot().is_loading);

        // 可重复调用
        store.logout();
        assert!(vault.get(STORAGE_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn hydrate_restores_persisted_session() {
        let user_json = serde_json::to_string(&customer(9)).unwrap();
        let (_, _, store) = store_with(
            &[(STORAGE_TOKEN_KEY, "tok-9"), (STORAGE_USER_KEY, &user_json)],
            MockAuthGateway::rejecting("unused"),
        );

        store.hydrate();
        let state = store.snapshot();
        assert!(state.is_authenticated());
        assert!(!state.is_loading);
        assert_eq!(state.user.unwrap().user_id, 9);
    }

    #[tokio::test]
    async fn hydrate_discards_partial_remnants() {
        // 只剩 Token：视为无会话，残留被清理
        let (vault, _, store) = store_with(
            &[(STORAGE_TOKEN_KEY, "tok-9")],
            MockAuthGateway::rejecting("unused"),
        );
        store.hydrate();
        assert!(!store.snapshot().is_authenticated());
        assert!(vault.get(STORAGE_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn update_profile_replaces_cached_user_and_repersists() {
        let (vault, gateway, store) = store_with(&[], MockAuthGateway::accepting(customer(7)));
        store.hydrate();
        store
            .login("marie@example.com".into(), "secret".into())
            .await
            .unwrap();

        let user = store
            .update_profile("Marie B.".into(), Some("0600000000".into()))
            .await
            .unwrap();
        assert_eq!(user.full_name, "Marie B.");

        // Token 不变，用户重新持久化
        assert_eq!(vault.get(STORAGE_TOKEN_KEY).as_deref(), Some("tok-1"));
        let persisted: User =
            serde_json::from_str(&vault.get(STORAGE_USER_KEY).unwrap()).unwrap();
        assert_eq!(persisted.full_name, "Marie B.");
        assert_eq!(
            gateway.log_entries(),
            vec!["sign_in:marie@example.com", "update_profile:7"]
        );
    }

    #[tokio::test]
    async fn logged_out_reload_boots_to_role_select() {
        use crate::app::AppPhase;

        let (_, _, store) = store_with(&[], MockAuthGateway::accepting(customer(7)));
        store.hydrate();
        store
            .login("marie@example.com".into(), "secret".into())
            .await
            .unwrap();
        store.logout();

        // 注销后重新启动：先闪屏，定时到期落在身份选择页，而不是应用端
        assert_eq!(AppPhase::boot(store.role()), AppPhase::Splash);
        assert_eq!(AppPhase::after_splash(store.role()), AppPhase::RoleSelect);
    }

    #[tokio::test]
    async fn persisted_admin_session_boots_straight_to_admin() {
        use crate::app::AppPhase;

        let admin = User {
            role: Role::Admin,
            ..customer(3)
        };
        let user_json = serde_json::to_string(&admin).unwrap();
        let (_, _, store) = store_with(
            &[(STORAGE_TOKEN_KEY, "tok-3"), (STORAGE_USER_KEY, &user_json)],
            MockAuthGateway::rejecting("unused"),
        );
        store.hydrate();

        // 整页刷新：跳过闪屏等待与身份选择，直接进入后台
        assert_eq!(AppPhase::boot(store.role()), AppPhase::Admin);
    }

    #[tokio::test]
    async fn update_profile_without_session_is_rejected() {
        let (_, gateway, store) = store_with(&[], MockAuthGateway::rejecting("unused"));
        store.hydrate();

        let err = store.update_profile("X".into(), None).await.unwrap_err();
        assert!(err.is_auth_required());
        assert!(gateway.log_entries().is_empty());
    }
}
