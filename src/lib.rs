//! Contact Assistant - an interactive bot over an in-memory address book.
//!
//! Contacts have a name, any number of phone numbers, and an optional
//! birthday. The book can report whose birthday is coming up, moving weekend
//! greetings to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and the address book with its birthday query
//! - **clock**: Source of the current date
//! - **bot**: Command parsing, handlers, and user-facing messages
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod bot;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use bot::{Assistant, CommandError, Reply};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{BirthdayDate, Name, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError};
pub use models::{ContactBook, ContactRecord, UpcomingBirthday};
