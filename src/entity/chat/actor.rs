pub mod chat_entity;
