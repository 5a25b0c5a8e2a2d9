//! Split Dates - One logical date attribute stored as separate components
//!
//! A record declares composite date attributes (e.g. `begin_at`) together
//! with the calendar fields they are split into. Each field lives in its own
//! component attribute named `{composite}_{field}` (e.g. `begin_at_year`).
//!
//! - Setting the composite writes every component (null clears them all).
//! - Setting a component updates that field of the composite, or bootstraps
//!   the composite from January 1st of the current year when it is unset.
//!
//! ```ignore
//! use elif_orm_split_dates::{DynamicRecord, Record, SplitDates, SplitDatesConfig};
//! use std::sync::Arc;
//!
//! let split_dates = Arc::new(SplitDates::new(SplitDatesConfig::new().date("begin_at")));
//! let mut event = DynamicRecord::new().with_split_dates(split_dates);
//!
//! event.set("begin_at_year", 2020)?.set("begin_at_month", 11)?;
//! // begin_at == 2020-11-01 00:00:00, begin_at_day is still null
//! ```

pub mod clock;
pub mod config;
pub mod field;
pub mod interceptor;
pub mod mapping;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{SplitDateDeclaration, SplitDatesConfig};
pub use field::{DateField, DateFieldError};
pub use interceptor::HasSplitDates;
pub use mapping::{SplitDateMapping, SplitDateTarget, SplitDates};
