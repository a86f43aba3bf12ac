//! Command verbs and input tokenization.

use super::CommandError;
use std::str::FromStr;

/// A command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Hello,
    /// `close` or `exit`
    Exit,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
}

impl FromStr for Verb {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hello" => Ok(Verb::Hello),
            "close" | "exit" => Ok(Verb::Exit),
            "add" => Ok(Verb::Add),
            "change" => Ok(Verb::Change),
            "phone" => Ok(Verb::Phone),
            "all" => Ok(Verb::All),
            "add-birthday" => Ok(Verb::AddBirthday),
            "show-birthday" => Ok(Verb::ShowBirthday),
            "birthdays" => Ok(Verb::Birthdays),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Split a line into its command word and arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}

/// The first `N` arguments; anything after them is ignored.
pub(crate) fn take_args<'a, const N: usize>(
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    if args.len() < N {
        return Err(CommandError::MissingArguments);
    }
    Ok(std::array::from_fn(|i| args[i]))
}
