pub mod match_manager;
