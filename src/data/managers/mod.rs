//! 数据管理器实现
//!
//! - `json`: JSON 文档管理器（按路径缓存）

pub mod json;

pub use json::JsonManager;
