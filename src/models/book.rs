//! The address book and its upcoming-birthday query.

use super::record::ContactRecord;
use crate::clock::{Clock, SystemClock};
use crate::domain::{BirthdayDate, BIRTHDAY_FORMAT};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Default look-ahead, in days, for [`ContactBook::upcoming_birthdays`].
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the query window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Day to send greetings on (`DD.MM.YYYY`), moved off weekends
    pub greeting_date: String,
}

/// Contacts keyed by name.
///
/// Iteration follows insertion order. Replacing the record under an existing
/// name keeps that name's original position.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: ContactRecord) {
        let key = record.name().as_str().to_string();
        match self.records.insert(key.clone(), record) {
            Some(_) => debug!(name = %key, "Contact replaced"),
            None => {
                debug!(name = %key, "Contact added");
                self.order.push(key);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`. Unknown names are ignored.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            self.order.retain(|key| key != name);
            debug!(name, "Contact deleted");
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Birthdays within `window_days` of the system date.
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_at(SystemClock.today(), window_days)
    }

    /// Birthdays whose next occurrence is between `today` and
    /// `today + window_days`, both inclusive.
    ///
    /// The window test uses the real occurrence; only the reported greeting
    /// date is moved off a weekend, so it can land past the window.
    pub fn upcoming_birthdays_at(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);

        let upcoming: Vec<UpcomingBirthday> = self
            .records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let Some(occurrence) = next_occurrence(birthday, today) else {
                    warn!(name = %record.name(), "Birthday has no occurrence in range");
                    return None;
                };

                let diff = (occurrence - today).num_days();
                if !(0..=window).contains(&diff) {
                    return None;
                }

                let greeting = skip_weekend(occurrence)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    greeting_date: greeting.format(BIRTHDAY_FORMAT).to_string(),
                })
            })
            .collect();

        debug!(%today, window_days, found = upcoming.len(), "Upcoming birthdays computed");
        upcoming
    }
}

/// This year's occurrence, or next year's once this year's has passed.
fn next_occurrence(birthday: &BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.occurrence_in(today.year())?;
    if this_year < today {
        birthday.occurrence_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

fn skip_weekend(mut date: NaiveDate) -> Option<NaiveDate> {
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date = date.succ_opt()?;
    }
    Some(date)
}

impl fmt::Display for ContactBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.records().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
