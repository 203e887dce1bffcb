pub mod stat_entity;
