//! Record System - Host abstraction the split-date layer plugs into
//!
//! - `core_trait`: the `Record` trait and its assignment chokepoint
//! - `attributes`: raw attribute storage
//! - `casting`: date/time casting of date-typed attributes
//! - `dynamic`: `DynamicRecord`, a record over a runtime attribute bag

pub mod attributes;
pub mod casting;
pub mod core_trait;
pub mod dynamic;

pub use attributes::Attributes;
pub use casting::cast_to_date_time;
pub use core_trait::Record;
pub use dynamic::DynamicRecord;
