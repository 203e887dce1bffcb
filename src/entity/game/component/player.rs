use std::fmt;

use super::square::{Color, Piece};

/// Stable external identity of a player, as given by the chat host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: &str) -> Self {
        PlayerId(id.to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    color: Color,
    captures: Vec<Piece>,
}

impl Player {
    pub fn new(id: PlayerId, color: Color) -> Self {
        Player {
            id,
            color,
            captures: vec![],
        }
    }
    pub fn id(&self) -> &PlayerId {
        &self.id
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn captures(&self) -> &[Piece] {
        &self.captures
    }
    pub(super) fn add_capture(&mut self, piece: Piece) {
        self.captures.push(piece);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    white: Player,
    black: Player,
}

impl Players {
    pub fn new(white_id: PlayerId, black_id: PlayerId) -> Self {
        Players {
            white: Player::new(white_id, Color::White),
            black: Player::new(black_id, Color::Black),
        }
    }
    pub fn get_player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
    pub fn get_player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
    pub fn is_participant(&self, id: &PlayerId) -> bool {
        self.white.id == *id || self.black.id == *id
    }
    pub fn color_of(&self, id: &PlayerId) -> Option<Color> {
        if self.white.id == *id {
            Some(Color::White)
        } else if self.black.id == *id {
            Some(Color::Black)
        } else {
            None
        }
    }
}
