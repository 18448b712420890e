//! 成交记录查询与市场趋势

use super::Snapshot;
use crate::models::{MarketTrends, Sale};

impl Snapshot {
    pub fn get_recent_sales(&self) -> &[Sale] {
        &self.transactions.recent_sales
    }

    /// 按区域查找（忽略大小写）
    pub fn get_sales_by_area(&self, area: &str) -> Vec<&Sale> {
        let area = area.to_lowercase();
        self.get_recent_sales()
            .iter()
            .filter(|s| s.area.as_deref().unwrap_or("").to_lowercase() == area)
            .collect()
    }

    pub fn get_sales_by_agent(&self, agent_id: &str) -> Vec<&Sale> {
        self.get_recent_sales()
            .iter()
            .filter(|s| s.agent_id.as_deref() == Some(agent_id))
            .collect()
    }

    /// 市场趋势统计
    ///
    /// 指定区域时只统计该区域成交（空字符串视为未指定），没有成交时返回 `None`。
    pub fn calculate_market_trends(&self, area: Option<&str>) -> Option<MarketTrends> {
        match area.filter(|a| !a.is_empty()) {
            Some(area) => MarketTrends::from_sales(self.get_sales_by_area(area), Some(area)),
            None => MarketTrends::from_sales(self.get_recent_sales(), None),
        }
    }
}
