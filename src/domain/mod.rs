//! Domain aggregates exposed by the staff screen service layer.

pub mod employee;
pub mod error_log;
pub mod types;
pub mod user;
