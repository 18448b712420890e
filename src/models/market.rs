// market/market_analytics.json 文档结构
//
// 市场分析数据是自由结构的指标集合，这里只固定顶层分区，分区内容原样保留。

use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketDocument {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub market_overview: Map<String, Value>,
    /// 区域名 -> 区域指标
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub area_performance: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub price_analytics: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub investment_opportunities: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
