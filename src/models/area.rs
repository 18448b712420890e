// areas/city_overview.json 文档结构

use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// 城市中的一个区域
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaRecord {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AreaRecord {
    /// 名称是否匹配（忽略大小写）
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref().unwrap_or("").to_lowercase() == name.to_lowercase()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreasDocument {
    #[serde(default, deserialize_with = "lenient::records")]
    pub areas: Vec<AreaRecord>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub city_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub state: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub population: Option<Number>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub median_income: Option<Number>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub school_districts: Vec<Value>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub market_trends: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 城市概况
///
/// 缺失的标量字段序列化为 `null`，与文档中不存在时的含义一致。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CityOverview {
    pub city_name: Option<String>,
    pub state: Option<String>,
    pub population: Option<Number>,
    pub median_income: Option<Number>,
    pub school_districts: Vec<Value>,
    pub market_trends: Map<String, Value>,
}

impl From<&AreasDocument> for CityOverview {
    fn from(doc: &AreasDocument) -> Self {
        Self {
            city_name: doc.city_name.clone(),
            state: doc.state.clone(),
            population: doc.population.clone(),
            median_income: doc.median_income.clone(),
            school_districts: doc.school_districts.clone(),
            market_trends: doc.market_trends.clone(),
        }
    }
}
