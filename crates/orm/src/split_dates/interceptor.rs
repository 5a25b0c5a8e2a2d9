//! Split Date Interceptor - Routes attribute writes on records with split dates
//!
//! Writing a composite decomposes it into its components. Writing a component
//! stores the raw value and recomposes the composite from it.

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::error::ModelResult;
use crate::record::Record;
use crate::split_dates::mapping::{SplitDateMapping, SplitDateTarget, SplitDates};
use crate::value::AttributeValue;

/// Assign `value` to `key`, keeping composites and components in sync
pub fn set_attribute<R>(record: &mut R, key: &str, value: AttributeValue) -> ModelResult<()>
where
    R: Record + ?Sized,
{
    let target = record.split_dates().and_then(|dates| dates.resolve(key));

    match target {
        None => record.base_set_attribute(key, value),
        Some(SplitDateTarget::Composite(mapping)) => decompose(record, &mapping, value),
        Some(SplitDateTarget::Component { mapping, field }) => {
            compose(record, &mapping, key, &field, value)
        }
    }
}

/// Merge a record's own date attributes with its split-date composites
pub fn merge_dates(mut dates: Vec<String>, split_dates: Option<&SplitDates>) -> Vec<String> {
    if let Some(split_dates) = split_dates {
        for key in split_dates.attribute_names() {
            if !dates.contains(&key) {
                dates.push(key);
            }
        }
    }
    dates
}

fn decompose<R>(record: &mut R, mapping: &SplitDateMapping, value: AttributeValue) -> ModelResult<()>
where
    R: Record + ?Sized,
{
    let fields = mapping.date_fields()?;

    record.base_set_attribute(&mapping.key, value)?;
    let composite = record.get_date(&mapping.key)?;

    for (name, field) in mapping.fields.iter().zip(fields) {
        let component = match composite {
            Some(date) => AttributeValue::Integer(field.extract(&date)),
            None => AttributeValue::Null,
        };
        record.attributes_mut().insert(mapping.component_name(name), component);
    }

    trace!(
        "Split date '{}' decomposed into {:?} ({})",
        mapping.key,
        mapping.fields,
        composite.map_or_else(|| "null".to_string(), |d| d.to_string())
    );

    Ok(())
}

fn compose<R>(
    record: &mut R,
    mapping: &SplitDateMapping,
    key: &str,
    field_name: &str,
    value: AttributeValue,
) -> ModelResult<()>
where
    R: Record + ?Sized,
{
    let field = mapping.date_field(field_name)?;
    let component = value.as_i64()?;

    // Nothing is stored until the new composite is known
    let composite = match record.get_date(&mapping.key)? {
        Some(current) => match component {
            Some(component) => Some(field.apply(current, component)?),
            None => Some(current),
        },
        None => bootstrap(record, mapping, key, component)?,
    };

    record.attributes_mut().insert(key, value);

    let Some(composite) = composite else {
        return Ok(());
    };

    trace!("Split date '{}' composed from '{}' as {}", mapping.key, key, composite);

    record.base_set_attribute(&mapping.key, AttributeValue::DateTime(composite))
}

/// Build a composite from the set components, starting at January 1st of the
/// current year. The component being written (`key`) contributes `incoming`
/// rather than its stored value. `None` when no component holds a value.
fn bootstrap<R>(
    record: &R,
    mapping: &SplitDateMapping,
    key: &str,
    incoming: Option<i64>,
) -> ModelResult<Option<NaiveDateTime>>
where
    R: Record + ?Sized,
{
    let fields = mapping.date_fields()?;

    let mut components = Vec::with_capacity(fields.len());
    for (name, field) in mapping.fields.iter().zip(fields) {
        let component_name = mapping.component_name(name);
        let value = if component_name == key {
            incoming
        } else {
            record.attributes().value(&component_name).as_i64()?
        };
        if let Some(value) = value {
            components.push((field, value));
        }
    }

    if components.is_empty() {
        return Ok(None);
    }

    let mut date = match record.split_dates() {
        Some(split_dates) => split_dates.year_anchor()?,
        None => return Ok(None),
    };
    for (field, value) in components {
        date = field.apply(date, value)?;
    }

    debug!("Split date '{}' bootstrapped from its components as {}", mapping.key, date);

    Ok(Some(date))
}

/// Split-date queries available on every record
pub trait HasSplitDates: Record {
    fn has_split_dates(&self) -> bool {
        self.split_dates().is_some_and(|dates| dates.has_split_dates())
    }

    /// Composite attribute names
    fn split_date_attributes(&self) -> Vec<String> {
        self.split_dates()
            .map(|dates| dates.attribute_names())
            .unwrap_or_default()
    }

    /// Whether `key` is a composite or one of its components
    fn is_split_date(&self, key: &str) -> bool {
        self.split_dates().is_some_and(|dates| dates.is_split_date(key))
    }

    fn split_date_target(&self, key: &str) -> Option<SplitDateTarget> {
        self.split_dates().and_then(|dates| dates.resolve(key))
    }

    /// Component names and stored values of a composite, in field order
    fn split_date_components(&self, key: &str) -> Option<Vec<(String, AttributeValue)>> {
        let mapping = self.split_dates()?.mapping(key)?;
        Some(
            mapping
                .component_names()
                .into_iter()
                .map(|name| {
                    let value = self.attributes().value(&name);
                    (name, value)
                })
                .collect(),
        )
    }
}

impl<R: Record + ?Sized> HasSplitDates for R {}
