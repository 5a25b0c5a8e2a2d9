//! Date casting for date-typed attributes

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{ModelError, ModelResult};
use crate::value::AttributeValue;

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Cast an attribute value to a date/time.
///
/// Null and blank strings are "unset". Integers are Unix timestamps (UTC).
/// RFC 3339 strings keep their wall time, the offset is dropped.
pub fn cast_to_date_time(key: &str, value: &AttributeValue) -> ModelResult<Option<NaiveDateTime>> {
    match value {
        AttributeValue::Null => Ok(None),
        AttributeValue::DateTime(dt) => Ok(Some(*dt)),
        AttributeValue::Date(d) => Ok(d.and_hms_opt(0, 0, 0)),
        AttributeValue::Integer(ts) => DateTime::from_timestamp(*ts, 0)
            .map(|dt| Some(dt.naive_utc()))
            .ok_or_else(|| cast_error(key, value)),
        AttributeValue::String(s) if s.trim().is_empty() => Ok(None),
        AttributeValue::String(s) => parse_date_time(s.trim())
            .map(Some)
            .ok_or_else(|| cast_error(key, value)),
        _ => Err(cast_error(key, value)),
    }
}

fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local()))
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn cast_error(key: &str, value: &AttributeValue) -> ModelError {
    ModelError::Cast(format!("cannot cast {:?} to a date for attribute '{}'", value, key))
}
