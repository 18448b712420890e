// 数据模型：各数据集的强类型记录与文档结构

pub mod agent;
pub mod amenity;
pub mod area;
pub mod client;
pub mod config;
pub mod filter;
mod lenient;
pub mod market;
pub mod property;
pub mod transaction;

pub use agent::{Agent, AgentPerformance, AgentsDocument, Testimonial};
pub use amenity::{
    AmenitiesDocument, AreaAmenities, ParksAndRecreation, SchoolDirectory, ShoppingEntry, Venue,
};
pub use area::{AreaRecord, AreasDocument, CityOverview};
pub use client::{BudgetRange, Client, ClientPreferences, ClientsDocument};
pub use config::{AppConfig, LogConfig, LogFormat, LogLevel, LogOutput};
pub use filter::PropertyFilter;
pub use market::MarketDocument;
pub use property::{PropertiesDocument, Property};
pub use transaction::{MarketTrends, Sale, TransactionsDocument, ALL_AREAS};

/// 数值字段按 f64 参与计算
fn number(value: &Option<serde_json::Number>) -> Option<f64> {
    value.as_ref().and_then(serde_json::Number::as_f64)
}
