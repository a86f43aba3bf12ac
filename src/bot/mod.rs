//! Interactive command layer.
//!
//! Turns lines like `add John 0501234567` into address book operations and
//! owns every user-facing message, including how errors are reported. The
//! address book itself never produces text for the user.

pub mod command;
pub mod handlers;
pub mod messages;

pub use command::{parse_input, Verb};
pub use handlers::{Assistant, Reply};

use crate::error::BookError;
use thiserror::Error;

/// Errors raised while running a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few arguments for the verb
    #[error("Missing command arguments")]
    MissingArguments,

    /// No contact with this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The verb is not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The address book rejected the operation
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
