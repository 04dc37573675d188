//! Configuration and wire/domain data types

pub mod config;
pub mod models;
