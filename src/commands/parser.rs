//! Tokenizing user input into commands.

use std::fmt;
use std::str::FromStr;

/// A command understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    /// `exit` or `close`
    Exit,
}

/// The input named a command that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid command")
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "delete" => Ok(Command::Delete),
            "exit" | "close" => Ok(Command::Exit),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

/// Split a line into a lower-cased command word and its arguments.
///
/// Tokens are separated by any whitespace. Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}
