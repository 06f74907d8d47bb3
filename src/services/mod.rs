//! Service functions shared by the staff screen and the host binary.

use thiserror::Error;

use crate::domain::user::LocalUserData;
use crate::repository::errors::RepositoryError;

pub mod employees;
pub mod error_log;

#[derive(Debug, Error)]
/// Failure of a service call.
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("form error: {0}")]
    Form(String),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Checks whether `role` is among `roles`.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// Fails with [`ServiceError::Unauthorized`] when the user lacks `role`.
pub fn ensure_role(user: &LocalUserData, role: &str) -> ServiceResult<()> {
    if check_role(role, &user.roles) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}
