use thiserror::Error;

use crate::entity::game::component::{chess_match::MoveRejection, player::PlayerId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("you cannot challenge yourself")]
    SelfChallenge,
    #[error("{0} is already playing a match")]
    AlreadyInMatch(PlayerId),
    #[error("{0} already has a pending challenge")]
    AlreadyChallenged(PlayerId),
    #[error("there is no pending challenge for {0}")]
    NoPendingChallenge(PlayerId),
    #[error("{0} is not playing a match")]
    NotInMatch(PlayerId),
    #[error("{0}")]
    Rejected(#[from] MoveRejection),
}
