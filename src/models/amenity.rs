// amenities/local_amenities.json 文档结构

use super::lenient;
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// 学校、公园、商店等配套设施的通用记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub area: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Venue {
    /// 区域名是否匹配（忽略大小写，缺省区域视为空串）
    pub fn in_area(&self, area: &str) -> bool {
        self.area.as_deref().unwrap_or("").to_lowercase() == area.to_lowercase()
    }
}

/// 按学段分组的学校
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchoolDirectory {
    #[serde(default, deserialize_with = "lenient::records")]
    pub elementary_schools: Vec<Venue>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub middle_schools: Vec<Venue>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub high_schools: Vec<Venue>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub private_schools: Vec<Venue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SchoolDirectory {
    /// 按固定顺序（小学、初中、高中、私立）串联全部学校
    pub fn all(&self) -> impl Iterator<Item = &Venue> {
        self.elementary_schools
            .iter()
            .chain(&self.middle_schools)
            .chain(&self.high_schools)
            .chain(&self.private_schools)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParksAndRecreation {
    #[serde(default, deserialize_with = "lenient::records")]
    pub parks: Vec<Venue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 购物分类下的条目：列表才参与区域筛选，其他结构原样保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShoppingEntry {
    Venues(Vec<Venue>),
    Other(Value),
}

/// amenities/local_amenities.json 顶层结构
///
/// 学校、公园、购物三个分区解析为强类型视图用于区域筛选，
/// 同时保留整份原始 JSON，按键查询时原样返回。
#[derive(Debug, Clone, Default)]
pub struct AmenitiesDocument {
    pub schools: Option<SchoolDirectory>,
    pub parks_and_recreation: Option<ParksAndRecreation>,
    pub shopping: Option<BTreeMap<String, ShoppingEntry>>,
    raw: Map<String, Value>,
}

#[derive(Deserialize)]
struct AmenitySections {
    #[serde(default, deserialize_with = "lenient::or_default")]
    schools: Option<SchoolDirectory>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    parks_and_recreation: Option<ParksAndRecreation>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    shopping: Option<BTreeMap<String, ShoppingEntry>>,
}

impl<'de> Deserialize<'de> for AmenitiesDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let sections: AmenitySections = serde_json::from_value(Value::Object(raw.clone()))
            .map_err(D::Error::custom)?;

        Ok(Self {
            schools: sections.schools,
            parks_and_recreation: sections.parks_and_recreation,
            shopping: sections.shopping,
            raw,
        })
    }
}

impl AmenitiesDocument {
    /// 按分类键取原始数据，键不存在时返回空对象
    pub fn by_type(&self, amenity_type: &str) -> Value {
        self.raw
            .get(amenity_type)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    pub fn parks(&self) -> &[Venue] {
        self.parks_and_recreation
            .as_ref()
            .map(|p| p.parks.as_slice())
            .unwrap_or_default()
    }
}

/// 某区域的配套设施汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AreaAmenities<'a> {
    pub schools: Vec<&'a Venue>,
    pub parks: Vec<&'a Venue>,
    /// 购物分类 -> 该区域内的商店
    pub shopping: BTreeMap<&'a str, Vec<&'a Venue>>,
}
