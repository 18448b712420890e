//! 客户查询与买家房源匹配

use super::Snapshot;
use crate::models::{Client, Property, PropertyFilter};

impl Snapshot {
    pub fn get_all_clients(&self) -> &[Client] {
        &self.clients.clients
    }

    /// 按 ID 精确查找，ID 重复时返回文档中的第一条
    pub fn get_client_by_id(&self, client_id: &str) -> Option<&Client> {
        self.get_all_clients()
            .iter()
            .find(|c| c.id.as_deref() == Some(client_id))
    }

    pub fn get_clients_by_agent(&self, agent_id: &str) -> Vec<&Client> {
        self.get_all_clients()
            .iter()
            .filter(|c| c.agent_id.as_deref() == Some(agent_id))
            .collect()
    }

    /// 按买家偏好匹配房源
    ///
    /// 客户不存在或不是买家时返回空列表。
    pub fn match_clients_to_properties(&self, client_id: &str) -> Vec<&Property> {
        let Some(client) = self.get_client_by_id(client_id) else {
            return Vec::new();
        };
        if !client.is_buyer() {
            tracing::debug!(client_id, client_type = ?client.client_type, "非买家客户，跳过匹配");
            return Vec::new();
        }

        self.filter_properties(&PropertyFilter::from(&client.preferences))
    }
}
