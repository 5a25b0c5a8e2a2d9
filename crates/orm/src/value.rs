//! Attribute Values
//!
//! Dynamically typed value held by a record attribute. Date-typed attributes
//! carry `DateTime`/`Date` values once cast; component attributes of split
//! dates are plain integers.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value as JsonValue;

use crate::error::{ModelError, ModelResult};

/// Attribute value enumeration for record attribute storage
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttributeValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Json(JsonValue),
}

impl AttributeValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Coerce the value to an integer, as used for split-date components.
    ///
    /// Null yields `None`. Integral floats and integer strings are accepted.
    pub fn as_i64(&self) -> ModelResult<Option<i64>> {
        match self {
            AttributeValue::Null => Ok(None),
            AttributeValue::Integer(i) => Ok(Some(*i)),
            AttributeValue::Float(f) if f.fract() == 0.0 && f.is_finite() => Ok(Some(*f as i64)),
            AttributeValue::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ModelError::Cast(format!("cannot cast '{}' to an integer", s))),
            other => Err(ModelError::Cast(format!(
                "cannot cast {:?} to an integer",
                other
            ))),
        }
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> JsonValue {
        match self {
            AttributeValue::Null => JsonValue::Null,
            AttributeValue::Bool(b) => JsonValue::Bool(*b),
            AttributeValue::Integer(i) => JsonValue::Number(serde_json::Number::from(*i)),
            AttributeValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            AttributeValue::String(s) => JsonValue::String(s.clone()),
            AttributeValue::Date(d) => JsonValue::String(d.format("%Y-%m-%d").to_string()),
            AttributeValue::DateTime(dt) => {
                JsonValue::String(dt.format("%Y-%m-%d %H:%M:%S").to_string())
            }
            AttributeValue::Json(j) => j.clone(),
        }
    }

    /// Create AttributeValue from JSON value
    ///
    /// Strings stay strings; date-typed attributes are cast when they are set.
    pub fn from_json(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => AttributeValue::Null,
            JsonValue::Bool(b) => AttributeValue::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    AttributeValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    AttributeValue::Float(f)
                } else {
                    AttributeValue::Null
                }
            }
            JsonValue::String(s) => AttributeValue::String(s),
            other => AttributeValue::Json(other),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(value as i64)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Integer(value as i64)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<NaiveDate> for AttributeValue {
    fn from(value: NaiveDate) -> Self {
        AttributeValue::Date(value)
    }
}

impl From<NaiveDateTime> for AttributeValue {
    fn from(value: NaiveDateTime) -> Self {
        AttributeValue::DateTime(value)
    }
}

impl From<JsonValue> for AttributeValue {
    fn from(value: JsonValue) -> Self {
        AttributeValue::from_json(value)
    }
}

impl<T> From<Option<T>> for AttributeValue
where
    T: Into<AttributeValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => AttributeValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_i64_coercion() {
        assert_eq!(AttributeValue::Integer(2020).as_i64().unwrap(), Some(2020));
        assert_eq!(AttributeValue::Null.as_i64().unwrap(), None);
        assert_eq!(AttributeValue::Float(11.0).as_i64().unwrap(), Some(11));
        assert_eq!(AttributeValue::from(" 30 ").as_i64().unwrap(), Some(30));

        assert!(AttributeValue::Float(1.5).as_i64().is_err());
        assert!(AttributeValue::from("may").as_i64().is_err());
        assert!(AttributeValue::Bool(true).as_i64().is_err());
    }

    #[test]
    fn test_json_conversion() {
        let dt = NaiveDate::from_ymd_opt(2027, 7, 15)
            .unwrap()
            .and_hms_opt(19, 56, 1)
            .unwrap();
        assert_eq!(AttributeValue::from(dt).to_json(), json!("2027-07-15 19:56:01"));
        assert_eq!(AttributeValue::from_json(json!(18)), AttributeValue::Integer(18));
        assert_eq!(AttributeValue::from_json(json!(null)), AttributeValue::Null);
        assert_eq!(
            AttributeValue::from_json(json!({"a": 1})),
            AttributeValue::Json(json!({"a": 1}))
        );
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<i64> = None;
        assert!(AttributeValue::from(none).is_null());
        assert_eq!(AttributeValue::from(Some(5i64)), AttributeValue::Integer(5));
    }
}
