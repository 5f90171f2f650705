use crate::error::{AppError, AppResult};
use crate::models::enums::{GroupCategory, GroupPrivacy};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 用户提交的原始群组数据
///
/// Required fields that are missing, `null` or not strings deserialize as
/// `None` and are reported by the validators as "required".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInput {
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub privacy: Option<String>,

    // passthrough, never inspected
    #[serde(default)]
    pub creator_id: Option<Value>,
    #[serde(default)]
    pub banner: Option<Value>,
    #[serde(default)]
    pub icon: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedGroup {
    pub name: String,
    pub description: String,
    pub category: GroupCategory,
    pub privacy: GroupPrivacy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// `null`, `false`, `0` and `""` are falsy; every other value is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl GroupInput {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        privacy: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            category: Some(category.into()),
            privacy: Some(privacy.into()),
            ..Self::default()
        }
    }

    /// Builds a `GroupInput` from untyped JSON. Anything other than a JSON
    /// object is rejected.
    pub fn from_json_value(value: Value) -> AppResult<Self> {
        if !value.is_object() {
            return Err(AppError::invalid_argument(
                "Group data must be a JSON object",
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json_value(value)
    }

    /// Passthrough fields that survive into the sanitized group.
    pub(crate) fn truthy_passthrough(&self) -> (Option<Value>, Option<Value>, Option<Value>) {
        let keep = |v: &Option<Value>| v.as_ref().filter(|v| is_truthy(v)).cloned();
        (keep(&self.creator_id), keep(&self.banner), keep(&self.icon))
    }
}
