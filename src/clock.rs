//! Source of the current calendar date.

use chrono::{Local, NaiveDate};

/// Supplies "today" for birthday queries.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on one date, for tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
