//! 统一错误类型
//!
//! 客户端的错误分类与传播策略：
//! - `Network`: 网络失败或请求超时，界面提示「稍后重试」
//! - `Validation`: 本地校验失败，不发出请求
//! - `Unauthorized` / `AuthRequired`: 鉴权相关
//! - `Server`: 后端返回的业务错误，消息原样展示给用户

use std::fmt;

use serde::{Deserialize, Serialize};

// =========================================================
// 错误状态枚举
// =========================================================

/// 错误状态枚举，对应各错误的语义分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// 网络失败或超过请求期限
    Network,
    /// 请求发出前的本地校验失败
    Validation,
    /// 会话过期（非 /auth/ 端点返回 401）
    Unauthorized,
    /// 操作要求已登录用户但当前无会话
    AuthRequired,
    /// 资源未找到
    NotFound,
    /// JSON 解析或序列化错误
    Serialization,
    /// 后端返回的业务错误（4xx/5xx 携带消息体）
    Server,
}

impl ApiErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorKind::Network => "NETWORK_ERROR",
            ApiErrorKind::Validation => "VALIDATION_FAILED",
            ApiErrorKind::Unauthorized => "UNAUTHORIZED",
            ApiErrorKind::AuthRequired => "AUTH_REQUIRED",
            ApiErrorKind::NotFound => "RESOURCE_NOT_FOUND",
            ApiErrorKind::Serialization => "JSON_PARSE_ERROR",
            ApiErrorKind::Server => "SERVER_ERROR",
        }
    }
}

// =========================================================
// 错误上下文追踪
// =========================================================

/// 结构化的错误追踪片段，记录错误发生时的操作
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorSpan {
    /// 操作名称，如 "cart.add", "auth.sign_in"
    pub operation: String,
    /// 额外细节，如商品 id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

// =========================================================
// 核心错误类型
// =========================================================

/// Application Domain Errors
///
/// 高内聚的错误定义：
/// - kind: 错误语义分类
/// - message: 展示给用户的消息
/// - spans: 结构化的调用追踪栈
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    spans: Vec<ErrorSpan>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthorized, message)
    }

    pub fn auth_required() -> Self {
        Self::new(ApiErrorKind::AuthRequired, "Please sign in first")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Serialization, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Server, message)
    }

    // --- Context builders ---

    /// 添加操作追踪（无额外细节）
    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan {
            operation: operation.into(),
            detail: None,
        });
        self
    }

    /// 添加操作追踪（带额外细节）
    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan {
            operation: operation.into(),
            detail: Some(detail.into()),
        });
        self
    }

    // --- Accessors ---

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    pub fn is_auth_required(&self) -> bool {
        self.kind == ApiErrorKind::AuthRequired
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.error_code(), self.message)?;

        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_trace() {
        let err = ApiError::server("Out of stock")
            .in_op_with("cart.add", "product 42")
            .in_op("cart.store");
        let text = err.to_string();
        assert!(text.starts_with("[SERVER_ERROR] Out of stock"));
        assert!(text.contains("cart.add(product 42)"));
        assert!(text.contains("-> cart.store"));
    }

    #[test]
    fn kind_predicates() {
        assert!(ApiError::unauthorized("expired").is_unauthorized());
        assert!(ApiError::auth_required().is_auth_required());
        assert!(!ApiError::network("down").is_unauthorized());
    }
}
