//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names, phone numbers, and birthdays. Each
//! value object validates at construction time so an invalid value can never
//! be represented in the system.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{BirthdayDate, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
