//! 经纪人查询与业绩统计

use super::Snapshot;
use crate::models::{Agent, AgentPerformance};

impl Snapshot {
    pub fn get_all_agents(&self) -> &[Agent] {
        &self.agents.agents
    }

    /// 按 ID 精确查找，ID 重复时返回文档中的第一条
    pub fn get_agent_by_id(&self, agent_id: &str) -> Option<&Agent> {
        self.get_all_agents()
            .iter()
            .find(|a| a.id.as_deref() == Some(agent_id))
    }

    /// 按姓名、专长、熟悉区域、简介检索（忽略大小写）
    pub fn search_agents(&self, query: &str) -> Vec<&Agent> {
        let query = query.to_lowercase();
        self.get_all_agents()
            .iter()
            .filter(|a| a.searchable_text().contains(&query))
            .collect()
    }

    /// 经纪人业绩汇总，经纪人不存在时返回 `None`
    pub fn get_agent_performance(&self, agent_id: &str) -> Option<AgentPerformance> {
        let agent = self.get_agent_by_id(agent_id)?;
        Some(self.performance_of(agent_id, agent))
    }

    pub(super) fn performance_of(&self, agent_id: &str, agent: &Agent) -> AgentPerformance {
        AgentPerformance {
            agent_id: agent_id.to_string(),
            name: agent.name.clone(),
            active_listings: self.get_properties_by_agent(agent_id).len(),
            recent_sales_count: agent.recent_sales.len(),
            avg_days_on_market: agent.average_days_on_market(),
            total_sales_volume: agent.total_sales_volume(),
            specializations: agent.specializations.clone(),
            client_rating: agent.average_rating(),
        }
    }
}
