// 房源记录与 properties/active_listings.json 文档结构

use super::lenient;
use super::number;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// 在售房源
///
/// 所有字段均可缺省，缺省、为 `null` 或类型不符时按默认值处理（数值为 0、列表为空）。
/// 数值保留原始 JSON 形式，整数输出时不会变成浮点数。
/// 未建模的字段保存在 `extra` 中，序列化时原样输出。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
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
    pub price: Option<Number>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub bedrooms: Option<Number>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub bathrooms: Option<Number>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub area: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub property_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub square_feet: Option<Number>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub features: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub style: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub agent_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Property {
    pub fn price(&self) -> Option<f64> {
        number(&self.price)
    }

    pub fn bedrooms(&self) -> Option<f64> {
        number(&self.bedrooms)
    }

    pub fn bathrooms(&self) -> Option<f64> {
        number(&self.bathrooms)
    }

    pub fn square_feet(&self) -> Option<f64> {
        number(&self.square_feet)
    }

    /// 全文检索用的文本：地址、描述、区域、特性、类型、风格，以空格拼接后转小写
    pub fn searchable_text(&self) -> String {
        let features = self.features.join(" ");
        [
            self.address.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
            self.area.as_deref().unwrap_or(""),
            features.as_str(),
            self.property_type.as_deref().unwrap_or(""),
            self.style.as_deref().unwrap_or(""),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// properties/active_listings.json 顶层结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertiesDocument {
    #[serde(default, deserialize_with = "lenient::records")]
    pub active_listings: Vec<Property>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_record_defaults() {
        let property: Property = serde_json::from_value(json!({"id": "p1"})).unwrap();

        assert_eq!(property.id.as_deref(), Some("p1"));
        assert!(property.price().is_none());
        assert!(property.features.is_empty());
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = json!({"id": "p1", "price": 500000, "year_built": 1998, "images": ["a.jpg"]});
        let property: Property = serde_json::from_value(raw).unwrap();

        assert_eq!(property.extra["year_built"], 1998);
        let back = serde_json::to_value(&property).unwrap();
        assert_eq!(back["images"], json!(["a.jpg"]));
        assert_eq!(back["price"], json!(500000));
        assert_eq!(back.to_string().matches("500000.0").count(), 0);
    }

    #[test]
    fn test_fractional_bathrooms() {
        let property: Property = serde_json::from_value(json!({"bathrooms": 2.5})).unwrap();
        assert_eq!(property.bathrooms(), Some(2.5));
    }

    #[test]
    fn test_null_and_mistyped_fields_keep_the_record() {
        let property: Property = serde_json::from_value(json!({
            "id": 42,
            "price": null,
            "bedrooms": "three",
            "features": null,
            "area": "Downtown"
        }))
        .unwrap();

        assert!(property.id.is_none());
        assert!(property.price().is_none());
        assert!(property.bedrooms().is_none());
        assert!(property.features.is_empty());
        assert_eq!(property.area.as_deref(), Some("Downtown"));
    }

    #[test]
    fn test_document_skips_non_object_listings() {
        let doc: PropertiesDocument = serde_json::from_value(json!({
            "active_listings": [{"id": "p1", "price": 500000}, "garbage", {"id": 42}]
        }))
        .unwrap();

        assert_eq!(doc.active_listings.len(), 2);
        assert_eq!(doc.active_listings[0].price(), Some(500_000.0));
    }

    #[test]
    fn test_searchable_text_joins_fields() {
        let property = Property {
            address: Some("12 Oak St".into()),
            area: Some("Downtown".into()),
            features: vec!["2-Car Garage".into(), "Pool".into()],
            style: Some("Craftsman".into()),
            ..Default::default()
        };

        let text = property.searchable_text();
        assert!(text.contains("12 oak st"));
        assert!(text.contains("2-car garage pool"));
        assert!(text.ends_with("craftsman"));
    }
}
