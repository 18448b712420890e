// 经纪人档案与 agents/agent_profiles.json 文档结构

use super::lenient;
use super::number;
use super::transaction::Sale;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// 客户评价
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Testimonial {
    pub fn rating(&self) -> Option<f64> {
        number(&self.rating)
    }
}

/// 经纪人
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub specializations: Vec<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub expertise_areas: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub recent_sales: Vec<Sale>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub client_testimonials: Vec<Testimonial>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Agent {
    /// 全文检索用的文本：姓名、专长、熟悉区域、简介
    pub fn searchable_text(&self) -> String {
        let specializations = self.specializations.join(" ");
        let expertise_areas = self.expertise_areas.join(" ");
        [
            self.name.as_deref().unwrap_or(""),
            specializations.as_str(),
            expertise_areas.as_str(),
            self.bio.as_deref().unwrap_or(""),
        ]
        .join(" ")
        .to_lowercase()
    }

    /// 近期成交的平均在售天数（无成交为 0）
    pub fn average_days_on_market(&self) -> f64 {
        mean(self.recent_sales.iter().map(|s| s.days_on_market().unwrap_or(0.0)))
    }

    /// 近期成交总额
    pub fn total_sales_volume(&self) -> f64 {
        self.recent_sales
            .iter()
            .map(|s| s.sale_price().unwrap_or(0.0))
            .sum()
    }

    /// 客户评分均值（无评价为 0）
    pub fn average_rating(&self) -> f64 {
        mean(
            self.client_testimonials
                .iter()
                .map(|t| t.rating().unwrap_or(0.0)),
        )
    }
}

/// agents/agent_profiles.json 顶层结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentsDocument {
    #[serde(default, deserialize_with = "lenient::records")]
    pub agents: Vec<Agent>,
}

/// 经纪人业绩汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPerformance {
    pub agent_id: String,
    pub name: Option<String>,
    pub active_listings: usize,
    pub recent_sales_count: usize,
    pub avg_days_on_market: f64,
    pub total_sales_volume: f64,
    pub specializations: Vec<String>,
    pub client_rating: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_aggregates() {
        let agent: Agent = serde_json::from_value(json!({
            "id": "a1",
            "recent_sales": [
                {"sale_price": 500000, "days_on_market": 20},
                {"sale_price": 700000, "days_on_market": 40}
            ],
            "client_testimonials": [{"rating": 5}, {"rating": 4}, {}]
        }))
        .unwrap();

        assert_eq!(agent.average_days_on_market(), 30.0);
        assert_eq!(agent.total_sales_volume(), 1_200_000.0);
        assert_eq!(agent.average_rating(), 3.0);
    }

    #[test]
    fn test_mistyped_history_is_tolerated() {
        let agent: Agent = serde_json::from_value(json!({
            "id": "a1",
            "specializations": null,
            "recent_sales": [{"sale_price": "n/a", "days_on_market": 10}, 7],
            "client_testimonials": {"rating": 5}
        }))
        .unwrap();

        assert!(agent.specializations.is_empty());
        assert_eq!(agent.recent_sales.len(), 1);
        assert_eq!(agent.total_sales_volume(), 0.0);
        assert_eq!(agent.average_days_on_market(), 10.0);
        assert!(agent.client_testimonials.is_empty());
    }

    #[test]
    fn test_aggregates_without_history() {
        let agent = Agent::default();

        assert_eq!(agent.average_days_on_market(), 0.0);
        assert_eq!(agent.total_sales_volume(), 0.0);
        assert_eq!(agent.average_rating(), 0.0);
    }

    #[test]
    fn test_searchable_text() {
        let agent = Agent {
            name: Some("Sarah Chen".into()),
            specializations: vec!["Luxury Homes".into()],
            expertise_areas: vec!["Downtown".into(), "Riverside".into()],
            ..Default::default()
        };

        let text = agent.searchable_text();
        assert!(text.contains("sarah chen luxury homes downtown riverside"));
    }
}
