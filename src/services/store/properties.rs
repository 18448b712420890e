//! 房源查询
//!
//! 所有结果保持文档原始顺序。

use super::Snapshot;
use crate::models::{Property, PropertyFilter};

impl Snapshot {
    /// 获取全部在售房源
    pub fn get_all_properties(&self) -> &[Property] {
        &self.properties.active_listings
    }

    /// 按 ID 精确查找，ID 重复时返回文档中的第一条
    pub fn get_property_by_id(&self, property_id: &str) -> Option<&Property> {
        self.get_all_properties()
            .iter()
            .find(|p| p.id.as_deref() == Some(property_id))
    }

    /// 按筛选条件过滤
    pub fn filter_properties(&self, filter: &PropertyFilter) -> Vec<&Property> {
        let matched: Vec<&Property> = self
            .get_all_properties()
            .iter()
            .filter(|p| filter.matches(p))
            .collect();
        tracing::debug!(matched = matched.len(), "房源筛选完成");
        matched
    }

    /// 忽略大小写的全文子串检索
    pub fn search_properties(&self, query: &str) -> Vec<&Property> {
        let query = query.to_lowercase();
        self.get_all_properties()
            .iter()
            .filter(|p| p.searchable_text().contains(&query))
            .collect()
    }

    pub fn get_properties_by_agent(&self, agent_id: &str) -> Vec<&Property> {
        self.get_all_properties()
            .iter()
            .filter(|p| p.agent_id.as_deref() == Some(agent_id))
            .collect()
    }

    /// 按区域查找（忽略大小写）
    pub fn get_properties_by_area(&self, area: &str) -> Vec<&Property> {
        let area = area.to_lowercase();
        self.get_all_properties()
            .iter()
            .filter(|p| p.area.as_deref().unwrap_or("").to_lowercase() == area)
            .collect()
    }
}
