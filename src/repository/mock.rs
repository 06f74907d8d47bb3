//! Mock repository implementations for isolating the screen in tests.

use mockall::mock;

use crate::domain::employee::EmployeeExOrg;
use crate::domain::error_log::{ErrorLog, NewErrorLog};
use crate::domain::types::{DepartmentId, EmployeeExOrgId};
use crate::domain::user::LocalUserData;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    EmployeeExOrgReader, EmployeeExOrgWriter, ErrorLogReader, ErrorLogWriter, LocalUserReader,
};

mock! {
    pub Repository {}

    impl EmployeeExOrgReader for Repository {
        fn list_employees_ex_org(&self, user: &LocalUserData) -> RepositoryResult<Vec<EmployeeExOrg>>;
    }

    impl EmployeeExOrgWriter for Repository {
        fn add_employee_ex_org(
            &self,
            employee: &EmployeeExOrg,
            user: &LocalUserData,
        ) -> RepositoryResult<EmployeeExOrgId>;
        fn update_employee_ex_org(
            &self,
            employee: &EmployeeExOrg,
            department_id: &DepartmentId,
            working_in_region: bool,
            user: &LocalUserData,
        ) -> RepositoryResult<()>;
    }

    impl ErrorLogWriter for Repository {
        fn create_error_log(&self, entry: &NewErrorLog) -> RepositoryResult<ErrorLog>;
    }

    impl ErrorLogReader for Repository {
        fn list_error_logs(&self, limit: i64) -> RepositoryResult<Vec<ErrorLog>>;
    }

    impl LocalUserReader for Repository {
        fn get_local_user(&self) -> RepositoryResult<Option<LocalUserData>>;
    }
}
