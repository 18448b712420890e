//! 市场分析数据查询

use super::Snapshot;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

impl Snapshot {
    pub fn get_market_overview(&self) -> &Map<String, Value> {
        &self.market.market_overview
    }

    /// 区域指标（区域名精确匹配）
    pub fn get_area_market_data(&self, area: &str) -> Option<&Value> {
        self.market.area_performance.get(area)
    }

    pub fn get_price_analytics(&self) -> &Map<String, Value> {
        &self.market.price_analytics
    }

    pub fn get_investment_opportunities(&self) -> &Map<String, Value> {
        &self.market.investment_opportunities
    }

    /// 多区域指标对比，未知区域直接省略
    pub fn compare_areas<I, S>(&self, areas: I) -> BTreeMap<String, &Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        areas
            .into_iter()
            .filter_map(|area| {
                let area = area.as_ref();
                self.get_area_market_data(area)
                    .map(|data| (area.to_string(), data))
            })
            .collect()
    }
}
