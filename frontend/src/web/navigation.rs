//! 浏览器导航封装
//!
//! 封装 `web_sys` 的 History / Location API，实现高内聚：
//! 所有对 window.history 与 window.location 的操作都集中在此模块。

/// 获取当前浏览器路径
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
pub fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
pub fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
}

/// 硬导航抽象
///
/// 会话过期（非 /auth/ 端点返回 401）时需要整页跳转回 `/`，
/// 抽象成 trait 以便测试中记录跳转目标。
pub trait Navigator: Send + Sync {
    /// 整页跳转（绕过 History 路由）
    fn hard_redirect(&self, path: &str);
}

/// 浏览器实现：设置 window.location.href
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

// =========================================================
// 测试用记录实现
// =========================================================

#[cfg(test)]
pub mod tests {
    use super::Navigator;
    use std::sync::Mutex;

    /// 记录每次硬导航目标的测试实现
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        targets: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn targets(&self) -> Vec<String> {
            self.targets.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn hard_redirect(&self, path: &str) {
            self.targets.lock().unwrap().push(path.to_string());
        }
    }
}
