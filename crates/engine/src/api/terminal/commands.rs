//! Line-oriented commands typed at the terminal.

use std::str::FromStr;

use tribunal_domain::Role;
use tribunal_shared::PlayerAction;

pub const HELP: &str = "\
Commands:
  advance | next      go to the next screen or question
  select <role>       choose prosecution, defense or judge
  answer <n>          answer the open question with option n (1-based)
  back                return to the intro from character select
  restart             start over
  view                show the current screen again
  help                show this help
  quit                leave the courtroom";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the session
    Action(PlayerAction),
    View,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'; type 'help' for the list")]
    Unknown(String),
    #[error("'{command}' needs an argument: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },
    #[error("unknown role '{0}'; choose prosecution, defense or judge")]
    InvalidRole(String),
    #[error("'{0}' is not an option number; options start at 1")]
    InvalidOption(String),
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandParseError::Empty);
        };
        let argument = words.next();

        match verb.to_lowercase().as_str() {
            "advance" | "next" => Ok(Self::Action(PlayerAction::Advance)),
            "select" => {
                let role = argument.ok_or(CommandParseError::MissingArgument {
                    command: "select",
                    usage: "select <prosecution|defense|judge>",
                })?;
                let role: Role = role
                    .parse()
                    .map_err(|_| CommandParseError::InvalidRole(role.to_string()))?;
                Ok(Self::Action(PlayerAction::SelectRole { role }))
            }
            "answer" => {
                let number = argument.ok_or(CommandParseError::MissingArgument {
                    command: "answer",
                    usage: "answer <option number>",
                })?;
                let option = parse_option_number(number)?;
                Ok(Self::Action(PlayerAction::SelectAnswer { option }))
            }
            "back" => Ok(Self::Action(PlayerAction::GoBack)),
            "restart" => Ok(Self::Action(PlayerAction::Restart)),
            "view" => Ok(Self::View),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

/// 1-based option number to 0-based option index.
fn parse_option_number(number: &str) -> Result<usize, CommandParseError> {
    number
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| CommandParseError::InvalidOption(number.to_string()))
}
