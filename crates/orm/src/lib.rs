//! # elif-orm-split-dates: Split date attributes for elif.rs records
//!
//! Lets a record expose one logical date/time attribute while storing its
//! calendar components (year, month, day, hour, minute, second, or any subset)
//! as separate attributes, kept in sync in both directions.
//!
//! This crate provides the `Record` host trait with its single assignment
//! chokepoint, the split-date mapping and interceptor, and a ready-made
//! `DynamicRecord`.

pub mod error;
pub mod record;
pub mod split_dates;
pub mod value;

// Re-export core traits and types
pub use error::*;
pub use record::*;
pub use split_dates::*;
pub use value::*;
