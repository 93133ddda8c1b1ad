//! Line command parsing for the interactive shell.

use std::error::Error;
use std::fmt::{Display, Formatter};
use taskledger_core::{Intent, TaskId, View};

pub const HELP_TEXT: &str = "\
commands:
  add <text>       record a new task
  delete <id>      move an active task to deleted items
  purge <id>       remove a deleted item forever
  view <name>      switch to active | added | deleted
  show             print the current view
  help             print this help
  quit             exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidId(String),
    InvalidView(String),
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`; type `help`"),
            Self::MissingArgument(command) => write!(f, "`{command}` needs an argument"),
            Self::InvalidId(value) => write!(f, "invalid task id `{value}`"),
            Self::InvalidView(message) => f.write_str(message),
        }
    }
}

impl Error for CommandParseError {}

/// Parses one input line. Blank lines parse as `Show`.
///
/// `add` keeps its text untouched so the core decides what counts as blank.
pub fn parse_command(line: &str) -> Result<Command, CommandParseError> {
    let line = line.trim_start();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line.trim_end(), ""));

    match word.to_ascii_lowercase().as_str() {
        "" | "show" | "ls" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "add" => Ok(Command::Intent(Intent::SubmitText {
            text: rest.to_string(),
        })),
        "delete" | "rm" => {
            parse_id("delete", rest).map(|id| Command::Intent(Intent::RequestDelete { id }))
        }
        "purge" => parse_id("purge", rest).map(|id| Command::Intent(Intent::RequestPurge { id })),
        "view" => {
            let name = required("view", rest)?;
            let view = name
                .parse::<View>()
                .map_err(|err| CommandParseError::InvalidView(err.to_string()))?;
            Ok(Command::Intent(Intent::SelectView { view }))
        }
        other => Err(CommandParseError::Unknown(other.to_string())),
    }
}

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, CommandParseError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(CommandParseError::MissingArgument(command));
    }
    Ok(value)
}

fn parse_id(command: &'static str, rest: &str) -> Result<TaskId, CommandParseError> {
    let value = required(command, rest)?;
    value
        .parse::<TaskId>()
        .map_err(|_| CommandParseError::InvalidId(value.to_string()))
}
