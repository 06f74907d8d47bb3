//! Collaborators consumed by the staff screen and their Diesel implementation.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::employee::EmployeeExOrg;
use crate::domain::error_log::{ErrorLog, NewErrorLog};
use crate::domain::types::{DepartmentId, EmployeeExOrgId};
use crate::domain::user::LocalUserData;
use crate::repository::errors::RepositoryResult;

pub mod employee;
pub mod error_log;
pub mod errors;
pub mod identity;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use identity::SystemIdentity;

/// Diesel-backed store shared by the screen and the host binary.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait EmployeeExOrgReader {
    /// Loads every employee, dismissed or not, with region assignments.
    fn list_employees_ex_org(&self, user: &LocalUserData) -> RepositoryResult<Vec<EmployeeExOrg>>;
}

pub trait EmployeeExOrgWriter {
    /// Stores a new employee and returns the identifier it was given.
    fn add_employee_ex_org(
        &self,
        employee: &EmployeeExOrg,
        user: &LocalUserData,
    ) -> RepositoryResult<EmployeeExOrgId>;

    /// Updates a persisted employee and its region flag for `department_id`.
    fn update_employee_ex_org(
        &self,
        employee: &EmployeeExOrg,
        department_id: &DepartmentId,
        working_in_region: bool,
        user: &LocalUserData,
    ) -> RepositoryResult<()>;
}

pub trait ErrorLogWriter {
    fn create_error_log(&self, entry: &NewErrorLog) -> RepositoryResult<ErrorLog>;
}

pub trait ErrorLogReader {
    fn list_error_logs(&self, limit: i64) -> RepositoryResult<Vec<ErrorLog>>;
}

pub trait LocalUserReader {
    /// Identifies the operator; `None` when nothing is known about them.
    fn get_local_user(&self) -> RepositoryResult<Option<LocalUserData>>;
}
