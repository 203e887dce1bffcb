pub mod board;
pub mod check;
pub mod chess_match;
pub mod coord;
pub mod history;
pub mod piece_move;
pub mod player;
pub mod snapshot;
pub mod square;
