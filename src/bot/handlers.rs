//! Command handlers for the assistant.
//!
//! Each handler runs one verb against the address book and returns the text
//! to show, or a [`CommandError`] that [`messages::error_message`] turns into
//! a reply.

use super::command::{parse_input, take_args, Verb};
use super::messages;
use super::{CommandError, CommandResult};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::domain::PhoneNumber;
use crate::models::{ContactBook, ContactRecord};
use tracing::{debug, warn};

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading
    Continue(String),
    /// Print the text and stop
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// The interactive assistant: an address book plus the command surface
/// around it.
pub struct Assistant {
    book: ContactBook,
    clock: Box<dyn Clock>,
    window_days: u32,
}

impl Assistant {
    /// Create an assistant with an empty book, using the system clock.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &Config, clock: Box<dyn Clock>) -> Self {
        Self {
            book: ContactBook::new(),
            clock,
            window_days: config.birthday_window_days,
        }
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// Run one line of user input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some((command, args)) = parse_input(line) else {
            let err = CommandError::UnknownCommand(String::new());
            return Reply::Continue(messages::error_message(None, &err).to_string());
        };

        let verb = match command.parse::<Verb>() {
            Ok(verb) => verb,
            Err(err) => {
                debug!(command, "Unknown command");
                return Reply::Continue(messages::error_message(None, &err).to_string());
            }
        };

        if verb == Verb::Exit {
            return Reply::Exit(messages::GOODBYE.to_string());
        }

        match self.dispatch(verb, &args) {
            Ok(text) => Reply::Continue(text),
            Err(err) => {
                warn!(?verb, error = %err, "Command failed");
                Reply::Continue(messages::error_message(Some(verb), &err).to_string())
            }
        }
    }

    fn dispatch(&mut self, verb: Verb, args: &[&str]) -> CommandResult<String> {
        match verb {
            Verb::Hello => Ok(messages::GREETING.to_string()),
            Verb::Exit => Ok(messages::GOODBYE.to_string()),
            Verb::Add => self.add_contact(args),
            Verb::Change => self.change_contact(args),
            Verb::Phone => self.show_phone(args),
            Verb::All => Ok(self.show_all()),
            Verb::AddBirthday => self.add_birthday(args),
            Verb::ShowBirthday => self.show_birthday(args),
            Verb::Birthdays => Ok(self.birthdays()),
        }
    }

    fn add_contact(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, phone] = take_args::<2>(args)?;

        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            return Ok(messages::CONTACT_UPDATED.to_string());
        }

        let mut record = ContactRecord::new(name);
        record.add_phone(phone)?;
        self.book.add_record(record);
        Ok(messages::CONTACT_ADDED.to_string())
    }

    fn change_contact(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, old_phone, new_phone] = take_args::<3>(args)?;
        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

        record.edit_phone(old_phone, new_phone)?;
        Ok(messages::CONTACT_UPDATED.to_string())
    }

    fn show_phone(&self, args: &[&str]) -> CommandResult<String> {
        let [name] = take_args::<1>(args)?;
        let record = self.find(name)?;

        if record.phones().is_empty() {
            return Ok(messages::NO_PHONES.to_string());
        }
        Ok(join_phones(record))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return messages::NO_CONTACTS.to_string();
        }

        self.book
            .records()
            .map(|record| {
                let phones = match record.phones() {
                    [] => messages::EMPTY_FIELD.to_string(),
                    _ => join_phones(record),
                };
                let birthday = record
                    .birthday()
                    .map_or(messages::EMPTY_FIELD, |b| b.as_str());
                format!("{}: {}; birthday: {}", record.name(), phones, birthday)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, date] = take_args::<2>(args)?;

        if let Some(record) = self.book.find_mut(name) {
            record.set_birthday(date)?;
        } else {
            let mut record = ContactRecord::new(name);
            record.set_birthday(date)?;
            self.book.add_record(record);
        }
        Ok(messages::BIRTHDAY_SET.to_string())
    }

    fn show_birthday(&self, args: &[&str]) -> CommandResult<String> {
        let [name] = take_args::<1>(args)?;
        let record = self.find(name)?;

        Ok(record
            .birthday()
            .map_or(messages::NO_BIRTHDAY, |b| b.as_str())
            .to_string())
    }

    fn birthdays(&self) -> String {
        let upcoming = self
            .book
            .upcoming_birthdays_at(self.clock.today(), self.window_days);

        if upcoming.is_empty() {
            return messages::no_upcoming_birthdays(self.window_days);
        }

        upcoming
            .iter()
            .map(|u| format!("{} — {}", u.greeting_date, u.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn find(&self, name: &str) -> CommandResult<&ContactRecord> {
        self.book
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }
}

fn join_phones(record: &ContactRecord) -> String {
    record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
