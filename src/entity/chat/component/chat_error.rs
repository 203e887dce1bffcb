use thiserror::Error;

use crate::entity::game::component::{chess_match::MoveRejection, player::PlayerId};
use crate::entity::registry::component::registry_error::RegistryError;

/// Failure of a well-formed command.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("move rejected: {0}")]
    Move(#[from] MoveRejection),
    #[error("you are not playing a match")]
    NotInMatch,
    #[error("no statistics for {0}")]
    NoStats(PlayerId),
    #[error("match is no longer available")]
    MatchUnavailable,
    #[error("internal error: {0}")]
    Mailbox(#[from] actix::MailboxError),
}
