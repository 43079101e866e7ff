//! REST 客户端
//!
//! 所有后端调用的统一通道：
//! - 存在 Token 时自动附加 `Authorization: Bearer <token>`
//! - 固定 30 秒请求期限，超时按网络错误处理，不做任何重试
//! - 非 /auth/ 端点返回 401 视为会话过期：清除本地凭据并整页跳转 `/`
//! - 其余错误提取消息体原样交给调用方展示

use std::sync::Arc;

use fournil_shared::error::{ApiError, ApiResult};
use fournil_shared::protocol::{ApiEnvelope, ApiRequest, ErrorBody, HttpMethod};
use fournil_shared::{AUTH_PATH_MARKER, STORAGE_TOKEN_KEY, STORAGE_USER_KEY};

use crate::config::ApiConfig;
use crate::log::log_info;
use crate::web::{KeyValueStore, Navigator};

/// 请求期限（毫秒）
pub const REQUEST_DEADLINE_MS: u32 = 30_000;

/// 判定一个响应是否意味着会话过期
///
/// `/auth/` 端点自己的 401 是登录失败，不是会话过期。
pub fn is_session_expiry(status: u16, path: &str) -> bool {
    status == 401 && !path.contains(AUTH_PATH_MARKER)
}

/// 清除本地凭据并整页跳回 `/`
///
/// 独立成自由函数以便在原生测试中注入内存存储与记录导航器验证。
pub fn purge_session(vault: &dyn KeyValueStore, navigator: &dyn Navigator) {
    vault.remove(STORAGE_TOKEN_KEY);
    vault.remove(STORAGE_USER_KEY);
    log_info!("[RestClient] Session expired. Redirecting to /.");
    navigator.hard_redirect("/");
}

/// 从信封中取出数据
///
/// `data` 缺失时尝试以 `null` 反序列化响应类型，
/// 这让 `Response = ()` 的端点无需携带数据也能成功。
pub fn unwrap_envelope<T: serde::de::DeserializeOwned>(env: ApiEnvelope<T>) -> ApiResult<T> {
    if env.success {
        if let Some(data) = env.data {
            return Ok(data);
        }
        return serde_json::from_value::<T>(serde_json::Value::Null)
            .map_err(|_| ApiError::serialization("Response is missing its data payload"));
    }
    Err(ApiError::server(
        env.message.unwrap_or_else(|| "Request failed".to_string()),
    ))
}

/// 请求体序列化规则：空对象与 null 不发送请求体
fn body_value<R: ApiRequest>(req: &R) -> ApiResult<Option<serde_json::Value>> {
    let value = serde_json::to_value(req).map_err(|e| ApiError::serialization(e.to_string()))?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::Object(ref map) if map.is_empty() => None,
        other => Some(other),
    })
}

/// REST 客户端
#[derive(Clone)]
pub struct RestClient {
    config: Arc<ApiConfig>,
    vault: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
}

impl RestClient {
    pub fn new(
        config: ApiConfig,
        vault: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            vault,
            navigator,
        }
    }

    /// 当前存储的 Bearer Token（若有）
    fn bearer(&self) -> Option<String> {
        self.vault.get(STORAGE_TOKEN_KEY)
    }

    /// 执行一个类型化请求
    pub async fn execute<R: ApiRequest>(&self, req: &R) -> ApiResult<R::Response> {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        let path = req.path();
        let url = self.config.url(&path);

        let mut builder = match R::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };

        if let Some(token) = self.bearer() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let request = match body_value(req)? {
            Some(body) => builder
                .json(&body)
                .map_err(|e| ApiError::serialization(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::network(e.to_string()))?,
        };

        let send = request.send();
        let deadline = gloo_timers::future::TimeoutFuture::new(REQUEST_DEADLINE_MS);
        futures::pin_mut!(send, deadline);

        let response = match select(send, deadline).await {
            Either::Left((result, _)) => {
                result.map_err(|e| ApiError::network(e.to_string()).in_op_with("http", &path))?
            }
            Either::Right(_) => {
                return Err(
                    ApiError::network("Request timed out, please try again")
                        .in_op_with("http", &path),
                );
            }
        };

        let status = response.status();

        if is_session_expiry(status, &path) {
            purge_session(self.vault.as_ref(), self.navigator.as_ref());
            return Err(ApiError::unauthorized("Your session has expired"));
        }

        if !response.ok() {
            let raw = response.text().await.unwrap_or_default();
            let message = ErrorBody::extract_message(&raw)
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            return Err(match status {
                401 => ApiError::unauthorized(message),
                404 => ApiError::not_found(message),
                _ => ApiError::server(message),
            });
        }

        let envelope: ApiEnvelope<R::Response> = response
            .json()
            .await
            .map_err(|e| ApiError::serialization(e.to_string()).in_op_with("http", &path))?;

        unwrap_envelope(envelope)
    }
}

// =========================================================
// 单元测试（纯逻辑部分，不触碰 fetch）
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::navigation::tests::RecordingNavigator;
    use crate::web::storage::tests::MemoryStore;
    use fournil_shared::SessionData;
    use fournil_shared::protocol::ListProductsRequest;

    #[test]
    fn session_expiry_decision() {
        assert!(is_session_expiry(401, "/cart/7"));
        assert!(is_session_expiry(401, "/order/create"));
        // 登录失败不是会话过期
        assert!(!is_session_expiry(401, "/auth/users/signin"));
        assert!(!is_session_expiry(401, "/auth/users/register"));
        assert!(!is_session_expiry(200, "/cart/7"));
        assert!(!is_session_expiry(500, "/cart/7"));
    }

    #[test]
    fn purge_clears_both_keys_and_redirects() {
        let vault = MemoryStore::with(&[
            (STORAGE_TOKEN_KEY, "tok-123"),
            (STORAGE_USER_KEY, "{\"user\":1}"),
            ("unrelated", "keep"),
        ]);
        let navigator = RecordingNavigator::new();

        purge_session(&vault, &navigator);

        assert!(vault.get(STORAGE_TOKEN_KEY).is_none());
        assert!(vault.get(STORAGE_USER_KEY).is_none());
        assert_eq!(vault.get("unrelated").as_deref(), Some("keep"));
        assert_eq!(navigator.targets(), vec!["/".to_string()]);
    }

    #[test]
    fn envelope_unwrap_success_and_failure() {
        let env: ApiEnvelope<SessionData> = serde_json::from_str(
            r#"{"success":true,"data":{"token":"t","user":{
                "user_id":1,"full_name":"Ada","email":"ada@example.com","role":"customer"}}}"#,
        )
        .unwrap();
        let data = unwrap_envelope(env).unwrap();
        assert_eq!(data.token, "t");
        assert_eq!(data.user.full_name, "Ada");

        let env: ApiEnvelope<SessionData> =
            serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
        let err = unwrap_envelope(env).unwrap_err();
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[test]
    fn envelope_unit_response_tolerates_missing_data() {
        let env: ApiEnvelope<()> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(unwrap_envelope(env).is_ok());
    }

    #[test]
    fn empty_bodies_are_not_sent() {
        assert!(body_value(&ListProductsRequest).unwrap().is_none());

        let body = body_value(&fournil_shared::protocol::AddToCartRequest {
            user_id: 1,
            product_id: 42,
            quantity: 1,
        })
        .unwrap()
        .unwrap();
        assert_eq!(body["product_id"], 42);
    }
}
