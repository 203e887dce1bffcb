pub mod chat_error;
pub mod command;
