//! Split Date Configuration
//!
//! Raw, as-declared mapping of composite date attributes to their component
//! fields. A configuration is built once per record type, either with the
//! chained builder methods or from JSON:
//!
//! ```json
//! ["begin_at", {"end_at": ["year", "minute"]}]
//! ```
//!
//! or, to override the default field list:
//!
//! ```json
//! {"default_fields": ["year", "month"], "dates": ["begin_at"]}
//! ```

use std::sync::Arc;

use serde::Deserialize;

use crate::error::{ModelError, ModelResult};
use crate::split_dates::clock::{Clock, SystemClock};
use crate::split_dates::field::DateField;

/// One declared split date: a composite attribute and, optionally, its fields
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDateDeclaration {
    pub key: String,
    /// `None` when declared by name only; the default field list applies
    pub fields: Option<Vec<String>>,
}

/// Split date configuration for a record type
#[derive(Debug, Clone)]
pub struct SplitDatesConfig {
    declarations: Vec<SplitDateDeclaration>,
    default_fields: Vec<String>,
    clock: Arc<dyn Clock>,
}

impl Default for SplitDatesConfig {
    fn default() -> Self {
        Self {
            declarations: Vec::new(),
            default_fields: DateField::DEFAULT.iter().map(|f| f.as_str().to_string()).collect(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl SplitDatesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a split date using the default field list
    pub fn date(mut self, key: impl Into<String>) -> Self {
        self.declarations.push(SplitDateDeclaration {
            key: key.into(),
            fields: None,
        });
        self
    }

    /// Declare a split date with an explicit field list
    pub fn date_with_fields<I, S>(mut self, key: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declarations.push(SplitDateDeclaration {
            key: key.into(),
            fields: Some(fields.into_iter().map(Into::into).collect()),
        });
        self
    }

    /// Override the field list used by name-only declarations
    pub fn default_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Clock used to anchor composites bootstrapped from components
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn declarations(&self) -> &[SplitDateDeclaration] {
        &self.declarations
    }

    pub fn default_field_names(&self) -> &[String] {
        &self.default_fields
    }

    pub fn clock_source(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Load a configuration from a JSON document
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Load a configuration from an already parsed JSON value
    pub fn from_json_value(value: serde_json::Value) -> ModelResult<Self> {
        let raw: RawConfig = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> ModelResult<Self> {
        let (default_fields, entries) = match raw {
            RawConfig::List(entries) => (None, entries),
            RawConfig::Full(full) => (full.default_fields, full.dates),
        };

        let mut config = Self::default();
        if let Some(fields) = default_fields {
            config = config.default_fields(fields.into_vec());
        }

        for entry in entries {
            match entry {
                RawEntry::Name(key) => {
                    ensure_key(&key)?;
                    config = config.date(key);
                }
                RawEntry::Mapped(map) => {
                    for (key, fields) in map {
                        ensure_key(&key)?;
                        let fields: FieldList = serde_json::from_value(fields)?;
                        config = config.date_with_fields(key, fields.into_vec());
                    }
                }
            }
        }

        Ok(config)
    }
}

fn ensure_key(key: &str) -> ModelResult<()> {
    if key.trim().is_empty() {
        return Err(ModelError::Configuration(
            "split date attribute name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawConfig {
    List(Vec<RawEntry>),
    Full(FullConfig),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FullConfig {
    #[serde(default)]
    default_fields: Option<FieldList>,
    dates: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Name(String),
    /// Keeps document order (serde_json `preserve_order`)
    Mapped(serde_json::Map<String, serde_json::Value>),
}

/// A field list may be written as a single field name
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldList {
    One(String),
    Many(Vec<String>),
}

impl FieldList {
    fn into_vec(self) -> Vec<String> {
        match self {
            FieldList::One(field) => vec![field],
            FieldList::Many(fields) => fields,
        }
    }
}
