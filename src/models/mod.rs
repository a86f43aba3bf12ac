//! Data models for the address book.
//!
//! A [`ContactRecord`] holds one person; a [`ContactBook`] holds every record
//! keyed by name and answers the upcoming-birthday query.

pub mod book;
pub mod record;

pub use book::{ContactBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use record::ContactRecord;
