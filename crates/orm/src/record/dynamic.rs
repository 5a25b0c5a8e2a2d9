//! Dynamic Record - a ready-made record over a plain attribute bag
//!
//! Useful when the attribute set is only known at runtime. Record types that
//! share one split-date configuration hand out clones of the same
//! `Arc<SplitDates>`, so normalization happens once for all of them.

use std::sync::Arc;

use crate::record::attributes::Attributes;
use crate::record::core_trait::Record;
use crate::split_dates::SplitDates;
use crate::value::AttributeValue;

#[derive(Debug, Clone, Default)]
pub struct DynamicRecord {
    attributes: Attributes,
    dates: Vec<String>,
    split_dates: Option<Arc<SplitDates>>,
}

impl DynamicRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_split_dates(mut self, split_dates: Arc<SplitDates>) -> Self {
        self.split_dates = Some(split_dates);
        self
    }

    /// Declare the record's own date/time attributes
    pub fn with_dates<I, S>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dates = dates.into_iter().map(Into::into).collect();
        self
    }

    /// Seed a raw attribute, as loaded from storage, without interception
    pub fn with_raw_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }
}

impl Record for DynamicRecord {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn base_dates(&self) -> Vec<String> {
        self.dates.clone()
    }

    fn split_dates(&self) -> Option<&SplitDates> {
        self.split_dates.as_deref()
    }
}
