//! 房源筛选条件
//!
//! 所有条件按“与”组合，未设置的条件不参与判断。
//!
//! 边界行为：
//! - 数值条件为 0 时与未设置等价（包括 `max_*`）
//! - 房源缺少数值字段时，下限比较按 0，上限比较按正无穷
//! - `areas` / `property_types` 为精确匹配，区分大小写；空列表等价于未设置
//! - `features` 要求每个条件词都能以忽略大小写的子串形式出现在某个房源特性中

use super::client::ClientPreferences;
use super::property::Property;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub min_bedrooms: Option<f64>,
    #[serde(default)]
    pub max_bedrooms: Option<f64>,
    #[serde(default)]
    pub min_bathrooms: Option<f64>,
    #[serde(default)]
    pub max_bathrooms: Option<f64>,
    #[serde(default)]
    pub areas: Option<Vec<String>>,
    #[serde(default)]
    pub property_types: Option<Vec<String>>,
    #[serde(default)]
    pub min_sqft: Option<f64>,
    #[serde(default)]
    pub max_sqft: Option<f64>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_price(mut self, value: f64) -> Self {
        self.min_price = Some(value);
        self
    }

    pub fn max_price(mut self, value: f64) -> Self {
        self.max_price = Some(value);
        self
    }

    pub fn bedrooms(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_bedrooms = min;
        self.max_bedrooms = max;
        self
    }

    pub fn bathrooms(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_bathrooms = min;
        self.max_bathrooms = max;
        self
    }

    pub fn square_feet(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_sqft = min;
        self.max_sqft = max;
        self
    }

    pub fn areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.areas = Some(areas.into_iter().map(Into::into).collect());
        self
    }

    pub fn property_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.property_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = Some(features.into_iter().map(Into::into).collect());
        self
    }

    /// 判断房源是否满足全部已设置的条件
    pub fn matches(&self, property: &Property) -> bool {
        within(property.price(), self.min_price, self.max_price)
            && within(property.bedrooms(), self.min_bedrooms, self.max_bedrooms)
            && within(property.bathrooms(), self.min_bathrooms, self.max_bathrooms)
            && member_of(property.area.as_deref(), self.areas.as_deref())
            && member_of(
                property.property_type.as_deref(),
                self.property_types.as_deref(),
            )
            && within(property.square_feet(), self.min_sqft, self.max_sqft)
            && has_features(&property.features, self.features.as_deref())
    }
}

/// 由买家偏好生成筛选条件：预算区间、意向区域、单一房产类型
impl From<&ClientPreferences> for PropertyFilter {
    fn from(preferences: &ClientPreferences) -> Self {
        let budget = preferences.budget_range.clone().unwrap_or_default();
        Self {
            min_price: budget.min(),
            max_price: budget.max(),
            areas: preferences.desired_areas.clone(),
            property_types: preferences
                .property_type
                .as_ref()
                .filter(|t| !t.is_empty())
                .map(|t| vec![t.clone()]),
            ..Self::default()
        }
    }
}

/// 0 与未设置等价
fn active(bound: Option<f64>) -> Option<f64> {
    bound.filter(|v| *v != 0.0)
}

fn within(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if let Some(min) = active(min) {
        if value.unwrap_or(0.0) < min {
            return false;
        }
    }
    if let Some(max) = active(max) {
        if value.unwrap_or(f64::INFINITY) > max {
            return false;
        }
    }
    true
}

fn member_of(value: Option<&str>, allowed: Option<&[String]>) -> bool {
    match allowed {
        Some(allowed) if !allowed.is_empty() => {
            value.is_some_and(|v| allowed.iter().any(|a| a == v))
        }
        _ => true,
    }
}

fn has_features(features: &[String], required: Option<&[String]>) -> bool {
    let Some(required) = required else {
        return true;
    };
    let lowered: Vec<String> = features.iter().map(|f| f.to_lowercase()).collect();
    required.iter().all(|wanted| {
        let wanted = wanted.to_lowercase();
        lowered.iter().any(|f| f.contains(&wanted))
    })
}
