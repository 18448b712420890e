//! JSON 文档缓存实现
//!
//! 以文件路径为键的一次性加载缓存：
//! - 成功解析的文档按路径记忆
//! - 没有 TTL，没有容量上限，也没有淘汰策略
//! - 只能通过 `clear` 整体失效（数据刷新时）
//! - 线程安全访问
//!
//! # 使用示例
//!
//! ```rust
//! use std::path::Path;
//! use realty_data::data::cache::JsonDocumentCache;
//!
//! let cache = JsonDocumentCache::new();
//! cache.insert(
//!     Path::new("agents/agent_profiles.json").to_path_buf(),
//!     serde_json::json!({"agents": []}),
//! );
//! assert!(cache.get(Path::new("agents/agent_profiles.json")).is_some());
//! ```

use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// JSON 文档缓存
#[derive(Debug, Clone, Default)]
pub struct JsonDocumentCache {
    /// 键为文件路径，值为已解析的 JSON
    entries: Arc<RwLock<HashMap<PathBuf, Value>>>,
}

impl JsonDocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取缓存的文档
    ///
    /// # 返回
    ///
    /// - `Some(Value)`: 缓存命中
    /// - `None`: 未命中（或锁已中毒）
    pub fn get(&self, path: &Path) -> Option<Value> {
        let entries = self.entries.read().ok()?;
        entries.get(path).cloned()
    }

    /// 插入缓存（同路径覆盖旧值）
    pub fn insert(&self, path: PathBuf, value: Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(path, value);
        }
    }

    /// 清空所有缓存
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// 获取当前缓存项数量
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// 检查缓存是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_basic_insert_and_get() {
        let cache = JsonDocumentCache::new();
        let path = PathBuf::from("/data/market/market_analytics.json");
        let content = serde_json::json!({"market_overview": {"median_price": 1}});

        cache.insert(path.clone(), content.clone());

        assert_eq!(cache.get(&path).unwrap(), content);
    }

    #[test]
    fn test_cache_miss() {
        let cache = JsonDocumentCache::new();
        assert!(cache.get(Path::new("/data/nonexistent.json")).is_none());
    }

    #[test]
    fn test_insert_overwrites() {
        let cache = JsonDocumentCache::new();
        let path = PathBuf::from("a.json");

        cache.insert(path.clone(), serde_json::json!({"v": 1}));
        cache.insert(path.clone(), serde_json::json!({"v": 2}));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&path).unwrap()["v"], 2);
    }

    #[test]
    fn test_clear() {
        let cache = JsonDocumentCache::new();
        for i in 0..7 {
            cache.insert(PathBuf::from(format!("doc{}.json", i)), serde_json::json!({"id": i}));
        }
        assert_eq!(cache.len(), 7);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = JsonDocumentCache::new();
        let other = cache.clone();

        other.insert(PathBuf::from("shared.json"), serde_json::json!([]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_concurrent_access() {
        let cache = JsonDocumentCache::new();
        let mut handles = vec![];

        for i in 0..8 {
            let cache_clone = cache.clone();
            handles.push(thread::spawn(move || {
                for j in 0..10 {
                    cache_clone.insert(
                        PathBuf::from(format!("doc-{}-{}.json", i, j)),
                        serde_json::json!({"thread": i, "id": j}),
                    );
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 80);
    }
}
