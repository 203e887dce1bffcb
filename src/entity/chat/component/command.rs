pub mod parser;

use thiserror::Error;

use crate::entity::game::component::{
    coord::{Coord, CoordError},
    player::PlayerId,
    snapshot::{DisplayMode, UnknownDisplayMode},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    InvalidSquare(#[from] CoordError),
    #[error(transparent)]
    InvalidDisplayMode(#[from] UnknownDisplayMode),
    #[error("malformed input line '{0}', expected '<author> <message>'")]
    MalformedLine(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplayRequest {
    /// Unicode board with the match header.
    Text,
    Snapshot(DisplayMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Challenge(PlayerId),
    Accept,
    Decline,
    Move { from: Coord, to: Coord },
    Display(DisplayRequest),
    Check,
    Resign,
    Stats(Option<PlayerId>),
    History,
}

/// A command and the player who sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatInput {
    author: PlayerId,
    command: Command,
}
impl ChatInput {
    pub fn new(author: PlayerId, command: Command) -> Self {
        Self { author, command }
    }
    pub fn author(&self) -> &PlayerId {
        &self.author
    }
    pub fn command(&self) -> &Command {
        &self.command
    }
}

pub fn help(prefix: &str) -> String {
    format!(
        "Chesscord is a chess bot for chat rooms.
Commands:
    {p}help: this message
    {p}challenge <player>: challenge a player
    {p}accept / {p}decline: answer a pending challenge
    {p}move <from> <to>: move a piece, e.g. '{p}move e2 e4' or '{p}move e2e4'
    {p}display [mode]: show the board, mode is one of text (default), numerical, lexical, characterial, locational, colored
    {p}check: tell whether you are in check
    {p}history: list the moves of your match
    {p}resign: give up your match
    {p}stats [player]: played, won, lost and stale matches",
        p = prefix
    )
}
