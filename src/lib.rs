pub mod configuration;
pub mod entity;
pub mod monitoring;
pub mod ui;
