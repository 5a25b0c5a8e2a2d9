//! Split Date Mapping - Normalized mapping and attribute-name resolution
//!
//! `SplitDates` owns a record type's configuration. It is normalized lazily,
//! exactly once, on the first lookup that needs it; afterwards every lookup
//! reads the published normalized form.

use chrono::{Datelike, NaiveDateTime};
use once_cell::sync::OnceCell;

use crate::error::{ModelError, ModelResult};
use crate::split_dates::config::SplitDatesConfig;
use crate::split_dates::field::DateField;

/// A composite date attribute with its explicit component field list
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDateMapping {
    pub key: String,
    pub fields: Vec<String>,
}

impl SplitDateMapping {
    /// Name of the component attribute holding `field`
    pub fn component_name(&self, field: &str) -> String {
        format!("{}_{}", self.key, field)
    }

    pub fn component_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| self.component_name(f)).collect()
    }

    /// Parse one of this mapping's field names
    pub fn date_field(&self, field: &str) -> ModelResult<DateField> {
        field
            .parse::<DateField>()
            .map_err(|e| self.configuration_error(e.to_string()))
    }

    /// Parse the field list, failing on the first unknown field name
    pub fn date_fields(&self) -> ModelResult<Vec<DateField>> {
        self.fields.iter().map(|f| self.date_field(f)).collect()
    }

    fn configuration_error(&self, msg: String) -> ModelError {
        ModelError::Configuration(format!("split date '{}': {}", self.key, msg))
    }
}

/// What an attribute name refers to within the split-date mapping
#[derive(Debug, Clone, PartialEq)]
pub enum SplitDateTarget {
    /// The attribute is a composite date
    Composite(SplitDateMapping),
    /// The attribute is one component of a composite date
    Component {
        mapping: SplitDateMapping,
        field: String,
    },
}

/// Split dates of a record type
#[derive(Debug)]
pub struct SplitDates {
    config: SplitDatesConfig,
    normalized: OnceCell<Vec<SplitDateMapping>>,
}

impl SplitDates {
    pub fn new(config: SplitDatesConfig) -> Self {
        Self {
            config,
            normalized: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &SplitDatesConfig {
        &self.config
    }

    pub fn has_split_dates(&self) -> bool {
        !self.config.is_empty()
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized.get().is_some()
    }

    /// The normalized mapping, normalizing the configuration on first use
    pub fn mappings(&self) -> &[SplitDateMapping] {
        self.normalized.get_or_init(|| normalize(&self.config))
    }

    /// Composite attribute names, in declaration order
    pub fn attribute_names(&self) -> Vec<String> {
        if !self.has_split_dates() {
            return Vec::new();
        }
        self.mappings().iter().map(|m| m.key.clone()).collect()
    }

    pub fn mapping(&self, key: &str) -> Option<&SplitDateMapping> {
        if !self.has_split_dates() {
            return None;
        }
        self.mappings().iter().find(|m| m.key == key)
    }

    pub fn is_managed_composite(&self, name: &str) -> bool {
        self.mapping(name).is_some()
    }

    /// Find the composite owning a component attribute name.
    ///
    /// Only `{key}_{field}` with `field` in the key's own field list matches.
    pub fn resolve_component_owner(&self, name: &str) -> Option<(&SplitDateMapping, &str)> {
        if !self.has_split_dates() {
            return None;
        }
        self.mappings().iter().find_map(|mapping| {
            let field = name.strip_prefix(mapping.key.as_str())?.strip_prefix('_')?;
            mapping
                .fields
                .iter()
                .find(|f| f.as_str() == field)
                .map(|f| (mapping, f.as_str()))
        })
    }

    /// Classify an attribute name; composites win over components
    pub fn resolve(&self, name: &str) -> Option<SplitDateTarget> {
        if let Some(mapping) = self.mapping(name) {
            return Some(SplitDateTarget::Composite(mapping.clone()));
        }
        self.resolve_component_owner(name)
            .map(|(mapping, field)| SplitDateTarget::Component {
                mapping: mapping.clone(),
                field: field.to_string(),
            })
    }

    pub fn is_split_date(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Base value for a composite bootstrapped from its components:
    /// January 1st, 00:00:00 of the clock's current year.
    pub fn year_anchor(&self) -> ModelResult<NaiveDateTime> {
        let year = self.config.clock_source().today().year();
        DateField::start_of_year(year)
            .ok_or_else(|| ModelError::OutOfRange(format!("cannot anchor a date at year {}", year)))
    }

    /// Check every declared field name up front
    pub fn validate(&self) -> ModelResult<()> {
        for mapping in self.mappings() {
            if mapping.fields.is_empty() {
                return Err(mapping.configuration_error("field list is empty".to_string()));
            }
            mapping.date_fields()?;
        }
        Ok(())
    }
}

impl From<SplitDatesConfig> for SplitDates {
    fn from(config: SplitDatesConfig) -> Self {
        Self::new(config)
    }
}

fn normalize(config: &SplitDatesConfig) -> Vec<SplitDateMapping> {
    let mut normalized: Vec<SplitDateMapping> = Vec::with_capacity(config.declarations().len());

    for declaration in config.declarations() {
        let fields = declaration
            .fields
            .clone()
            .unwrap_or_else(|| config.default_field_names().to_vec());

        match normalized.iter_mut().find(|m| m.key == declaration.key) {
            Some(existing) => existing.fields = fields,
            None => normalized.push(SplitDateMapping {
                key: declaration.key.clone(),
                fields,
            }),
        }
    }

    tracing::debug!(
        "Normalized {} split date mapping(s): {:?}",
        normalized.len(),
        normalized.iter().map(|m| m.key.as_str()).collect::<Vec<_>>()
    );

    normalized
}
