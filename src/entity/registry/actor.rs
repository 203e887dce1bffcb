pub mod match_registry;
