//! JSON 文档管理器
//!
//! 提供 JSON 数据文件的只读加载，支持：
//! - 按绝对路径记忆已解析的文档，同一文件只读盘一次
//! - 直接反序列化为强类型文档
//! - 只缓存成功解析的文档，失败不会污染缓存
//!
//! # 使用示例
//!
//! ```rust
//! use std::path::Path;
//! use realty_data::data::managers::JsonManager;
//!
//! let manager = JsonManager::new();
//! let listings = manager.read(Path::new("data/properties/active_listings.json"))?;
//! ```

use crate::data::cache::JsonDocumentCache;
use crate::data::{DataError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON 文档管理器
#[derive(Debug, Default)]
pub struct JsonManager {
    cache: JsonDocumentCache,
}

impl JsonManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取整个 JSON 文件
    ///
    /// # 返回
    ///
    /// - `Ok(Value)`: JSON 值（可能来自缓存）
    /// - `Err(DataError)`: 读取或解析失败
    pub fn read(&self, path: &Path) -> Result<Value> {
        let key = cache_key(path);

        if let Some(cached_value) = self.cache.get(&key) {
            tracing::debug!(path = %key.display(), "命中文档缓存");
            return Ok(cached_value);
        }

        let content = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        let value: Value = serde_json::from_str(&content)?;

        self.cache.insert(key, value.clone());

        Ok(value)
    }

    /// 读取并反序列化为指定类型
    pub fn read_as<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let value = self.read(path)?;
        Ok(serde_json::from_value(value)?)
    }

    /// 清空缓存，下次读取重新读盘
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// 当前缓存的文档数
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

/// 缓存键使用绝对路径，同一文件不同写法只缓存一次
fn cache_key(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize)]
    struct Listings {
        #[serde(default)]
        active_listings: Vec<Value>,
    }

    #[test]
    fn test_read_parses_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("listings.json");
        fs::write(&path, r#"{"active_listings": [{"id": "p1"}]}"#).unwrap();

        let manager = JsonManager::new();
        let value = manager.read(&path).unwrap();

        assert_eq!(value, json!({"active_listings": [{"id": "p1"}]}));
    }

    #[test]
    fn test_cached_read_does_not_touch_disk_again() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("listings.json");
        fs::write(&path, r#"{"version": 1}"#).unwrap();

        let manager = JsonManager::new();
        assert_eq!(manager.read(&path).unwrap()["version"], 1);

        // 文件变更后仍返回缓存值
        fs::write(&path, r#"{"version": 2}"#).unwrap();
        assert_eq!(manager.read(&path).unwrap()["version"], 1);
        assert_eq!(manager.cached_len(), 1);

        // 手动清空后重新读盘
        manager.clear_cache();
        assert_eq!(manager.read(&path).unwrap()["version"], 2);
    }

    #[test]
    fn test_relative_and_absolute_paths_share_entry() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        fs::write(&path, r#"{"version": 1}"#).unwrap();

        let manager = JsonManager::new();
        manager.read(&path).unwrap();
        manager.read(&temp_dir.path().join(".").join("doc.json")).unwrap();

        assert_eq!(manager.cached_len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let manager = JsonManager::new();

        let err = manager.read(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(err.is_missing_file());
        assert_eq!(manager.cached_len(), 0);
    }

    #[test]
    fn test_invalid_json_is_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let manager = JsonManager::new();
        let err = manager.read(&path).unwrap_err();

        assert!(matches!(err, DataError::JsonSerialization(_)));
        assert_eq!(manager.cached_len(), 0);
    }

    #[test]
    fn test_read_as_typed_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("listings.json");
        fs::write(&path, r#"{"active_listings": [{"id": "p1"}, {"id": "p2"}]}"#).unwrap();

        let manager = JsonManager::new();
        let listings: Listings = manager.read_as(&path).unwrap();
        assert_eq!(listings.active_listings.len(), 2);
    }

    #[test]
    fn test_read_as_shape_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("listings.json");
        fs::write(&path, r#"{"active_listings": "nope"}"#).unwrap();

        let manager = JsonManager::new();
        let result: Result<Listings> = manager.read_as(&path);
        assert!(matches!(result, Err(DataError::JsonSerialization(_))));
    }
}
