//! 应用配置
//!
//! API 基地址在编译期通过 `FOURNIL_API_URL` 环境变量覆盖，
//! 默认指向本地开发后端。

/// 默认的后端基地址（含 `/api` 前缀）
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// API 基地址配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// 从编译期环境读取基地址
    pub fn from_env() -> Self {
        Self::new(option_env!("FOURNIL_API_URL").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接端点路径为完整 URL
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_and_joins() {
        let config = ApiConfig::new("https://api.fournil.example/api/");
        assert_eq!(config.base_url(), "https://api.fournil.example/api");
        assert_eq!(
            config.url("/cart/7"),
            "https://api.fournil.example/api/cart/7"
        );
        assert_eq!(
            config.url("products"),
            "https://api.fournil.example/api/products"
        );
    }
}
