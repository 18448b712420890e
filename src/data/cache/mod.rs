//! 缓存层实现
//!
//! - `json_cache`: 按文件路径记忆已解析的 JSON 文档

pub mod json_cache;

pub use json_cache::JsonDocumentCache;
