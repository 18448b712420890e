//! 组合报表：区域综合报告、经纪人看板、房源洞察
//!
//! 这里只做已有查询的组合，不引入新的计算逻辑。

use super::Snapshot;
use crate::models::{
    Agent, AgentPerformance, AreaAmenities, AreaRecord, Client, MarketTrends, Property, Sale,
};
use serde::Serialize;
use serde_json::Value;

/// 区域综合报告
#[derive(Debug, Clone, Serialize)]
pub struct AreaReport<'a> {
    pub area_info: Option<&'a AreaRecord>,
    pub market_data: Option<&'a Value>,
    pub active_properties: Vec<&'a Property>,
    pub recent_sales: Vec<&'a Sale>,
    pub amenities: AreaAmenities<'a>,
    pub market_trends: Option<MarketTrends>,
}

/// 经纪人看板
#[derive(Debug, Clone, Serialize)]
pub struct AgentDashboard<'a> {
    pub agent_info: &'a Agent,
    pub performance: AgentPerformance,
    pub active_listings: Vec<&'a Property>,
    pub clients: Vec<&'a Client>,
    pub recent_sales: Vec<&'a Sale>,
}

/// 房源洞察
///
/// 房源没有 `area` 时，区域相关部分为空；没有 `agent_id` 时 `agent` 为空。
#[derive(Debug, Clone, Serialize)]
pub struct PropertyInsights<'a> {
    pub property: &'a Property,
    pub agent: Option<&'a Agent>,
    pub area_info: Option<&'a AreaRecord>,
    pub area_market_data: Option<&'a Value>,
    pub comparable_sales: Vec<&'a Sale>,
    pub area_amenities: Option<AreaAmenities<'a>>,
}

impl Snapshot {
    pub fn get_comprehensive_area_report(&self, area: &str) -> AreaReport<'_> {
        AreaReport {
            area_info: self.get_area_info(area),
            market_data: self.get_area_market_data(area),
            active_properties: self.get_properties_by_area(area),
            recent_sales: self.get_sales_by_area(area),
            amenities: self.get_area_amenities(area),
            market_trends: self.calculate_market_trends(Some(area)),
        }
    }

    /// 经纪人不存在时返回 `None`
    pub fn get_agent_dashboard(&self, agent_id: &str) -> Option<AgentDashboard<'_>> {
        let agent = self.get_agent_by_id(agent_id)?;

        Some(AgentDashboard {
            agent_info: agent,
            performance: self.performance_of(agent_id, agent),
            active_listings: self.get_properties_by_agent(agent_id),
            clients: self.get_clients_by_agent(agent_id),
            recent_sales: self.get_sales_by_agent(agent_id),
        })
    }

    /// 房源不存在时返回 `None`
    pub fn get_property_insights(&self, property_id: &str) -> Option<PropertyInsights<'_>> {
        let property = self.get_property_by_id(property_id)?;
        let agent = property
            .agent_id
            .as_deref()
            .and_then(|id| self.get_agent_by_id(id));

        let insights = match property.area.as_deref() {
            Some(area) => PropertyInsights {
                property,
                agent,
                area_info: self.get_area_info(area),
                area_market_data: self.get_area_market_data(area),
                comparable_sales: self.get_sales_by_area(area),
                area_amenities: Some(self.get_area_amenities(area)),
            },
            None => PropertyInsights {
                property,
                agent,
                area_info: None,
                area_market_data: None,
                comparable_sales: Vec::new(),
                area_amenities: None,
            },
        };

        Some(insights)
    }
}
