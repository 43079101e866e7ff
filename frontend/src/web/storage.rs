//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口。
//! 会话层通过 [`KeyValueStore`] 抽象访问存储，便于在原生测试中注入
//! 内存实现。

/// 键值存储抽象
///
/// 生产实现为浏览器 LocalStorage；测试注入 [`tests::MemoryStore`]。
pub trait KeyValueStore: Send + Sync {
    /// 获取存储的字符串值
    fn get(&self, key: &str) -> Option<String>;

    /// 设置存储值，返回操作是否成功
    fn set(&self, key: &str, value: &str) -> bool;

    /// 删除键值对，返回操作是否成功
    fn remove(&self, key: &str) -> bool;
}

/// 浏览器 LocalStorage 实现
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

// =========================================================
// 测试用内存实现
// =========================================================

#[cfg(test)]
pub mod tests {
    use super::KeyValueStore;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// 内存键值存储，模拟浏览器 LocalStorage
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(entries: &[(&str, &str)]) -> Self {
            let store = Self::new();
            for (key, value) in entries {
                store.set(key, value);
            }
            store
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            true
        }

        fn remove(&self, key: &str) -> bool {
            self.entries.lock().unwrap().remove(key).is_some()
        }
    }
}
