pub mod chat;
pub mod game;
pub mod registry;
pub mod stat;
