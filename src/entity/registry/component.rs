pub mod id_generator;
pub mod registry_error;
