//! Core Record Trait - Host abstraction for attribute-backed records
//!
//! A record owns an attribute store and declares which attributes are
//! date-typed. Every assignment goes through `set_attribute`, which routes
//! split-date attributes to the split-date interceptor and everything else to
//! `base_set_attribute`.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::error::ModelResult;
use crate::record::attributes::Attributes;
use crate::record::casting::cast_to_date_time;
use crate::split_dates::interceptor;
use crate::split_dates::SplitDates;
use crate::value::AttributeValue;

/// Core trait for records with dynamically assigned attributes
pub trait Record {
    /// Raw attribute storage
    fn attributes(&self) -> &Attributes;

    /// Mutable raw attribute storage, bypassing casting and interception
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Attributes the record itself treats as date/time typed
    fn base_dates(&self) -> Vec<String> {
        Vec::new()
    }

    /// Split dates of this record type, if it uses any
    fn split_dates(&self) -> Option<&SplitDates> {
        None
    }

    /// Every date/time typed attribute: the record's own dates followed by
    /// its split-date composites
    fn dates(&self) -> Vec<String> {
        interceptor::merge_dates(self.base_dates(), self.split_dates())
    }

    fn is_date_attribute(&self, key: &str) -> bool {
        self.dates().iter().any(|d| d == key)
    }

    /// Default assignment: cast date attributes, then store
    fn base_set_attribute(&mut self, key: &str, value: AttributeValue) -> ModelResult<()> {
        let value = if self.is_date_attribute(key) {
            cast_to_date_time(key, &value)?.into()
        } else {
            value
        };
        self.attributes_mut().insert(key, value);
        Ok(())
    }

    /// Assign an attribute, keeping split dates and their components in sync
    fn set_attribute(&mut self, key: &str, value: AttributeValue) -> ModelResult<&mut Self> {
        interceptor::set_attribute(self, key, value)?;
        Ok(self)
    }

    fn set<V>(&mut self, key: &str, value: V) -> ModelResult<&mut Self>
    where
        V: Into<AttributeValue>,
        Self: Sized,
    {
        self.set_attribute(key, value.into())
    }

    /// Assign several attributes in order
    fn fill<I, K, V>(&mut self, values: I) -> ModelResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttributeValue>,
        Self: Sized,
    {
        for (key, value) in values {
            self.set_attribute(key.as_ref(), value.into())?;
        }
        Ok(self)
    }

    /// Read an attribute; date attributes are cast on read
    fn get_attribute(&self, key: &str) -> ModelResult<AttributeValue> {
        let value = self.attributes().value(key);
        if self.is_date_attribute(key) {
            return Ok(cast_to_date_time(key, &value)?.into());
        }
        Ok(value)
    }

    /// Read an attribute as a date/time, whatever its declared type
    fn get_date(&self, key: &str) -> ModelResult<Option<NaiveDateTime>> {
        cast_to_date_time(key, &self.attributes().value(key))
    }

    /// Convert the record to field-value pairs
    fn to_fields(&self) -> HashMap<String, serde_json::Value> {
        self.attributes()
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect()
    }
}
