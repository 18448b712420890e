// 成交记录与 transactions/recent_sales.json 文档结构

use super::lenient;
use super::number;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// 一笔成交
///
/// 同时用于经纪人档案中的 `recent_sales` 摘要。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub sale_price: Option<Number>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub days_on_market: Option<Number>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_per_sqft: Option<Number>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub area: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub agent_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Sale {
    pub fn sale_price(&self) -> Option<f64> {
        number(&self.sale_price)
    }

    pub fn days_on_market(&self) -> Option<f64> {
        number(&self.days_on_market)
    }

    pub fn price_per_sqft(&self) -> Option<f64> {
        number(&self.price_per_sqft)
    }
}

/// transactions/recent_sales.json 顶层结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionsDocument {
    #[serde(default, deserialize_with = "lenient::records")]
    pub recent_sales: Vec<Sale>,
}

/// 市场趋势统计（基于成交记录的算术平均）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrends {
    pub total_sales: usize,
    pub average_sale_price: f64,
    pub average_days_on_market: f64,
    pub average_price_per_sqft: f64,
    /// 区域名，未指定区域时为 [`ALL_AREAS`]
    pub area: String,
}

/// 未指定区域时的占位名称
pub const ALL_AREAS: &str = "All Areas";

impl MarketTrends {
    /// 汇总成交记录；没有成交时返回 `None`，不做除零
    pub fn from_sales<'a, I>(sales: I, area: Option<&str>) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Sale>,
    {
        let mut total_sales = 0usize;
        let (mut price, mut days, mut per_sqft) = (0.0, 0.0, 0.0);

        for sale in sales {
            total_sales += 1;
            price += sale.sale_price().unwrap_or(0.0);
            days += sale.days_on_market().unwrap_or(0.0);
            per_sqft += sale.price_per_sqft().unwrap_or(0.0);
        }

        if total_sales == 0 {
            return None;
        }

        let n = total_sales as f64;
        Some(Self {
            total_sales,
            average_sale_price: price / n,
            average_days_on_market: days / n,
            average_price_per_sqft: per_sqft / n,
            area: area.unwrap_or(ALL_AREAS).to_string(),
        })
    }
}
