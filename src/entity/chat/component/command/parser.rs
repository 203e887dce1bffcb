use std::fmt;

use crate::entity::game::component::{coord::Coord, player::PlayerId};

use super::{ChatInput, Command, CommandError, DisplayRequest};

pub const DEFAULT_PREFIX: &str = "!";

pub struct InputParser {
    prefix: String,
}
impl fmt::Display for InputParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InputParser(prefix: '{}')", self.prefix)
    }
}
impl Default for InputParser {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl InputParser {
    pub fn new(prefix: &str) -> Self {
        InputParser {
            prefix: prefix.to_string(),
        }
    }
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parse a `<author> <message>` line.
    ///
    /// Returns `Ok(None)` when the message is not addressed to the bot.
    pub fn parse_line(&self, line: &str) -> Result<Option<ChatInput>, CommandError> {
        let line = line.trim();
        let (author, message) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| CommandError::MalformedLine(line.to_string()))?;
        let message = message.trim_start();
        match message.strip_prefix(self.prefix.as_str()) {
            None => Ok(None),
            Some(body) => {
                let command = self.parse_command(body)?;
                Ok(Some(ChatInput::new(PlayerId::new(author), command)))
            }
        }
    }

    /// Parse a message with the prefix already removed.
    pub fn parse_command(&self, body: &str) -> Result<Command, CommandError> {
        let args: Vec<&str> = body.split_whitespace().collect();
        match args.as_slice() {
            ["help"] => Ok(Command::Help),
            ["challenge", player] => Ok(Command::Challenge(PlayerId::new(mention(player)))),
            ["challenge", ..] => Err(CommandError::Usage("challenge <player>")),
            ["accept"] => Ok(Command::Accept),
            ["decline"] => Ok(Command::Decline),
            ["move", from, to] => Ok(Command::Move {
                from: Coord::from_conventional(from)?,
                to: Coord::from_conventional(to)?,
            }),
            ["move", squares] if squares.len() == 4 && squares.is_ascii() => Ok(Command::Move {
                from: Coord::from_conventional(&squares[..2])?,
                to: Coord::from_conventional(&squares[2..])?,
            }),
            ["move", ..] => Err(CommandError::Usage("move <from> <to>")),
            ["display"] | ["display", "text"] => Ok(Command::Display(DisplayRequest::Text)),
            ["display", mode] => Ok(Command::Display(DisplayRequest::Snapshot(mode.parse()?))),
            ["check"] => Ok(Command::Check),
            ["resign"] => Ok(Command::Resign),
            ["stats"] => Ok(Command::Stats(None)),
            ["stats", player] => Ok(Command::Stats(Some(PlayerId::new(mention(player))))),
            ["history"] => Ok(Command::History),
            [] => Err(CommandError::Unknown(String::new())),
            [cmd, ..] => Err(CommandError::Unknown(cmd.to_string())),
        }
    }
}

// chat clients send mentions as `<@id>` or `<@!id>`
fn mention(arg: &str) -> &str {
    arg.strip_prefix("<@")
        .and_then(|s| s.strip_suffix('>'))
        .map(|s| s.trim_start_matches('!'))
        .unwrap_or(arg)
}
