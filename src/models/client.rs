// 客户记录与 clients/client_database.json 文档结构

use super::lenient;
use super::number;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// 买家客户的类型标记
pub const BUYER: &str = "Buyer";

/// 预算区间
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub min: Option<Number>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<Number>,
}

impl BudgetRange {
    pub fn min(&self) -> Option<f64> {
        number(&self.min)
    }

    pub fn max(&self) -> Option<f64> {
        number(&self.max)
    }
}

/// 客户偏好
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientPreferences {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget_range: Option<BudgetRange>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub desired_areas: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub property_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 客户
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// "Buyer" / "Seller" 等
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub agent_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub preferences: ClientPreferences,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Client {
    pub fn is_buyer(&self) -> bool {
        self.client_type.as_deref() == Some(BUYER)
    }
}

/// clients/client_database.json 顶层结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientsDocument {
    #[serde(default, deserialize_with = "lenient::records")]
    pub clients: Vec<Client>,
}
