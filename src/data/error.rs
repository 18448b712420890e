//! 统一错误类型定义
//!
//! 使用 `thiserror` 定义数据层的错误类型。查询接口本身不返回错误，
//! 这些错误只出现在文档加载与配置读取阶段，由调用方降级处理。

use std::path::PathBuf;
use thiserror::Error;

/// 数据层的统一错误类型
#[derive(Error, Debug)]
pub enum DataError {
    /// 文件 I/O 错误
    #[error("文件 I/O 错误: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 解析或结构不匹配
    #[error("JSON 解析错误: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// TOML 反序列化错误（配置文件）
    #[error("TOML 反序列化错误: {0}")]
    TomlDeserialization(#[from] toml::de::Error),
}

/// 便于与现有代码集成的类型别名
pub type Result<T> = std::result::Result<T, DataError>;

/// 便捷的 I/O 错误构造器
impl DataError {
    /// 从 `std::io::Error` 和路径创建 I/O 错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 是否为“文件不存在”
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_construction() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DataError::io("/data/properties/active_listings.json", io_err);
        assert!(err
            .to_string()
            .contains("/data/properties/active_listings.json"));
        assert!(err.is_missing_file());
    }

    #[test]
    fn test_permission_error_is_not_missing_file() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DataError::io("/data/x.json", io_err);
        assert!(!err.is_missing_file());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json").unwrap_err();
        let err: DataError = json_err.into();
        assert!(matches!(err, DataError::JsonSerialization(_)));
        assert!(!err.is_missing_file());
    }

    #[test]
    fn test_anyhow_conversion() {
        let toml_err = toml::from_str::<toml::Value>("data_dir = [").unwrap_err();
        let err: DataError = toml_err.into();
        // DataError 实现了 std::error::Error，可自动转换为 anyhow::Error
        let anyhow_err: anyhow::Error = err.into();
        assert!(anyhow_err.to_string().contains("TOML 反序列化错误"));
    }
}
