//! Wall clock used when a composite date has to be bootstrapped from its
//! components.

use std::fmt::Debug;

use chrono::{Local, NaiveDate};

/// Source of the current date
pub trait Clock: Send + Sync + Debug {
    /// Today's date in the clock's wall time
    fn today(&self) -> NaiveDate;
}

/// The local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at a given date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
