pub mod actor;
pub mod component;
