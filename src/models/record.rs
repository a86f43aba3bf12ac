//! Contact record: one person in the address book.

use crate::domain::{BirthdayDate, Name, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// Phone numbers keep insertion order and may repeat. The name is fixed at
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    name: Name,
    phones: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create an empty record for `name`.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `phone` is not a valid number; the
    /// phone list is left untouched.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Exact-match lookup of a stored phone number.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.position_of(phone) {
            self.phones.remove(index);
        }
    }

    /// Replace `old_phone` with `new_phone`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if no phone equals `old_phone`
    /// - `BookError::Validation` if `new_phone` is invalid
    ///
    /// On error the record is unchanged.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let index = self
            .position_of(old_phone)
            .ok_or_else(|| BookError::PhoneNotFound(old_phone.to_string()))?;
        let validated = PhoneNumber::new(new_phone)?;

        debug!(name = %self.name, old = old_phone, new = new_phone, "Phone edited");
        self.phones[index] = validated;
        Ok(())
    }

    /// Validate and store a birthday, replacing any previous one.
    pub fn set_birthday(&mut self, date: &str) -> BookResult<()> {
        self.birthday = Some(BirthdayDate::new(date)?);
        Ok(())
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
