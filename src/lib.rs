// lib.rs - 房产数据只读访问层
//
// 从数据根目录加载七个 JSON 数据集（房源、经纪人、市场、客户、配套、成交、区域），
// 提供查询、筛选、全文检索与组合报表。

pub mod core;
pub mod data;
pub mod models;
pub mod services;
pub mod utils;

pub use models::*;
pub use services::{AgentDashboard, AreaReport, DataStore, Dataset, PropertyInsights, Snapshot};

// 重新导出常用类型
pub use data::{DataError, Result};

pub use core::init_logger;
pub use utils::{default_data_dir, load_app_config};
