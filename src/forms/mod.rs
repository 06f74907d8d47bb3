//! Form definitions backing the text inputs of the staff screen.

use thiserror::Error;
use validator::ValidationErrors;

pub mod employee;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid employment date")]
    InvalidEmploymentDate,
}
