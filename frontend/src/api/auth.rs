//! 认证服务

use async_trait::async_trait;
use fournil_shared::error::ApiResult;
use fournil_shared::protocol::{RegisterRequest, SignInRequest, UpdateProfileRequest};
use fournil_shared::{SessionData, User};

use super::client::RestClient;

/// 会话层依赖的认证网关
///
/// 生产实现为 [`AuthService`]；测试注入 mock 以验证会话状态流转。
#[async_trait(?Send)]
pub trait AuthGateway: Send + Sync {
    async fn sign_in(&self, email: String, password: String) -> ApiResult<SessionData>;
    async fn register(&self, req: RegisterRequest) -> ApiResult<SessionData>;
    async fn update_profile(&self, req: UpdateProfileRequest) -> ApiResult<User>;
}

#[derive(Clone)]
pub struct AuthService {
    client: RestClient,
}

impl AuthService {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AuthGateway for AuthService {
    async fn sign_in(&self, email: String, password: String) -> ApiResult<SessionData> {
        self.client
            .execute(&SignInRequest { email, password })
            .await
            .map_err(|e| e.in_op("auth.sign_in"))
    }

    async fn register(&self, req: RegisterRequest) -> ApiResult<SessionData> {
        self.client
            .execute(&req)
            .await
            .map_err(|e| e.in_op("auth.register"))
    }

    async fn update_profile(&self, req: UpdateProfileRequest) -> ApiResult<User> {
        self.client
            .execute(&req)
            .await
            .map_err(|e| e.in_op("auth.update_profile"))
    }
}
