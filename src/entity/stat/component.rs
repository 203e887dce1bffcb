pub mod stat_data;
