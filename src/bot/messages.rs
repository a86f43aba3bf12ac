//! User-facing text.
//!
//! Every string the assistant prints lives here, including the mapping from
//! error kinds to replies.

use super::command::Verb;
use super::CommandError;
use crate::domain::ValidationError;
use crate::error::BookError;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GREETING: &str = "How can I help you?";
pub const GOODBYE: &str = "Good bye!";
pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const BIRTHDAY_SET: &str = "Birthday set.";
pub const NO_PHONES: &str = "No phones.";
pub const NO_CONTACTS: &str = "No contacts found.";
pub const NO_BIRTHDAY: &str = "No birthday set.";
pub const EMPTY_FIELD: &str = "—";

const INVALID_COMMAND: &str = "Invalid command.";
const CONTACT_NOT_FOUND: &str = "Contact not found.";
const NAME_AND_PHONE: &str = "Give me name and phone please.";
const ENTER_NAME: &str = "Enter user name.";
const OLD_PHONE_NOT_FOUND: &str = "Old phone not found.";
const BAD_PHONE_FORMAT: &str = "Incorrect phone number format. Number should be 10 digits long.";
const WRONG_ARGUMENTS: &str = "Wrong arguments.";

pub fn no_upcoming_birthdays(window_days: u32) -> String {
    format!("No birthdays in the next {} days.", window_days)
}

/// Reply for a failed command. `verb` is `None` when the verb itself was not
/// recognised.
pub fn error_message(verb: Option<Verb>, err: &CommandError) -> &'static str {
    match (verb, err) {
        (_, CommandError::UnknownCommand(_)) => INVALID_COMMAND,
        (_, CommandError::ContactNotFound(_)) => CONTACT_NOT_FOUND,
        (_, CommandError::Book(BookError::PhoneNotFound(_))) => OLD_PHONE_NOT_FOUND,
        (Some(Verb::Add | Verb::Change), CommandError::MissingArguments) => NAME_AND_PHONE,
        (Some(Verb::Phone), CommandError::MissingArguments) => ENTER_NAME,
        (
            Some(Verb::Add),
            CommandError::Book(BookError::Validation(ValidationError::InvalidPhone(_))),
        ) => NAME_AND_PHONE,
        (
            Some(Verb::Change),
            CommandError::Book(BookError::Validation(ValidationError::InvalidPhone(_))),
        ) => BAD_PHONE_FORMAT,
        _ => WRONG_ARGUMENTS,
    }
}
