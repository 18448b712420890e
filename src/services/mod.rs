// 服务层：数据存储与查询

pub mod store;

pub use store::{AgentDashboard, AreaReport, DataStore, Dataset, PropertyInsights, Snapshot};
