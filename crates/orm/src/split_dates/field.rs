//! Date Fields - Calendar/time units a composite date can be split into
//!
//! Setters follow calendar arithmetic: a value outside the natural range of a
//! field carries into the higher-order fields (hour 27 is 03:00 the next day,
//! month 13 is January of the next year, day 0 is the last day of the
//! previous month).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::error::ModelError;

/// Field-level errors raised while splitting or composing a date
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateFieldError {
    #[error("unknown split date field '{0}' (expected one of year, month, day, hour, minute, second)")]
    UnknownField(String),

    #[error("setting {field} to {value} leaves the supported date range")]
    OutOfRange { field: DateField, value: i64 },
}

impl From<DateFieldError> for ModelError {
    fn from(err: DateFieldError) -> Self {
        match err {
            DateFieldError::UnknownField(_) => ModelError::Configuration(err.to_string()),
            DateFieldError::OutOfRange { .. } => ModelError::OutOfRange(err.to_string()),
        }
    }
}

/// A calendar/time unit of a composite date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl DateField {
    /// Every field, from the highest order to the lowest
    pub const ALL: [DateField; 6] = [
        DateField::Year,
        DateField::Month,
        DateField::Day,
        DateField::Hour,
        DateField::Minute,
        DateField::Second,
    ];

    /// Field list used when a split date is declared without one
    pub const DEFAULT: [DateField; 3] = [DateField::Year, DateField::Month, DateField::Day];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::Year => "year",
            DateField::Month => "month",
            DateField::Day => "day",
            DateField::Hour => "hour",
            DateField::Minute => "minute",
            DateField::Second => "second",
        }
    }

    /// Extract this field from a date/time value
    pub fn extract(&self, value: &NaiveDateTime) -> i64 {
        match self {
            DateField::Year => value.year() as i64,
            DateField::Month => value.month() as i64,
            DateField::Day => value.day() as i64,
            DateField::Hour => value.hour() as i64,
            DateField::Minute => value.minute() as i64,
            DateField::Second => value.second() as i64,
        }
    }

    /// Return `value` with this field replaced by `new_value`, carrying any
    /// overflow into the higher-order fields.
    pub fn apply(&self, value: NaiveDateTime, new_value: i64) -> Result<NaiveDateTime, DateFieldError> {
        let mut parts = [
            value.year() as i64,
            value.month() as i64,
            value.day() as i64,
            value.hour() as i64,
            value.minute() as i64,
            value.second() as i64,
        ];
        parts[self.index()] = new_value;

        compose(parts).ok_or(DateFieldError::OutOfRange {
            field: *self,
            value: new_value,
        })
    }

    /// January 1st, 00:00:00 of `year`
    pub fn start_of_year(year: i32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
    }

    fn index(&self) -> usize {
        match self {
            DateField::Year => 0,
            DateField::Month => 1,
            DateField::Day => 2,
            DateField::Hour => 3,
            DateField::Minute => 4,
            DateField::Second => 5,
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateField {
    type Err = DateFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DateFieldError::UnknownField(s.to_string()))
    }
}

/// Build a date/time from possibly out-of-range parts, normalizing them the
/// way calendar arithmetic does.
fn compose([year, month, day, hour, minute, second]: [i64; 6]) -> Option<NaiveDateTime> {
    let total_months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = total_months.rem_euclid(12) as u32 + 1;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first_of_month.checked_add_signed(Duration::try_days(day.checked_sub(1)?)?)?;

    let seconds = hour
        .checked_mul(3600)?
        .checked_add(minute.checked_mul(60)?)?
        .checked_add(second)?;

    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::try_seconds(seconds)?)
}
