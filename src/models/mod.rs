//! Diesel row models and configuration.

pub mod config;
pub mod employee;
pub mod error_log;
