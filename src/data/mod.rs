//! 统一数据加载模块
//!
//! 负责从磁盘读取 JSON 数据集并按路径缓存。
//!
//! # 模块组织
//!
//! - `error`: 统一错误类型定义
//! - `cache`: 按路径记忆的文档缓存
//! - `managers`: 各格式管理器（目前只有 JSON）

pub mod cache;
pub mod error;
pub mod managers;

pub use error::{DataError, Result};
