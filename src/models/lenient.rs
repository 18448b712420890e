//! 宽松反序列化辅助函数
//!
//! 数据文件由外部维护，单条记录里出现 `null` 或类型不符的可选字段很常见。
//! 这些函数配合 `#[serde(default, deserialize_with = "...")]` 使用：
//! 字段取值不符合预期时退回默认值，而不是让整份文档加载失败。

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// 字段为 `null` 或类型不符时使用默认值
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }

    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(
            expected = std::any::type_name::<T>(),
            error = %e,
            "字段类型不符，使用默认值"
        );
        T::default()
    }))
}

/// 记录列表：逐条转换，跳过无法识别的条目；整体不是数组时视为空列表
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!(found = %type_label(&other), "期望数组，使用空列表");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(
                    expected = std::any::type_name::<T>(),
                    error = %e,
                    "跳过无法识别的记录"
                );
                None
            }
        })
        .collect())
}

fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "or_default")]
        id: Option<String>,
        #[serde(default, deserialize_with = "records")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_and_mistyped_fields_default() {
        let record: Record = serde_json::from_value(json!({"id": null, "tags": null})).unwrap();
        assert!(record.id.is_none());
        assert!(record.tags.is_empty());

        let record: Record = serde_json::from_value(json!({"id": 42, "tags": "pool"})).unwrap();
        assert!(record.id.is_none());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_records_skip_bad_items() {
        let record: Record =
            serde_json::from_value(json!({"id": "p1", "tags": ["pool", 3, "garage"]})).unwrap();

        assert_eq!(record.id.as_deref(), Some("p1"));
        assert_eq!(record.tags, vec!["pool", "garage"]);
    }
}
