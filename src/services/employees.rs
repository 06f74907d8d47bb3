//! Services handling the external-organization employee roster.

use crate::domain::employee::EmployeeExOrg;
use crate::domain::types::{DepartmentId, EmployeeExOrgId};
use crate::domain::user::LocalUserData;
use crate::repository::{EmployeeExOrgReader, EmployeeExOrgWriter};
use crate::services::{ServiceError, ServiceResult};

/// How a save request reaches the repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveRoute {
    /// Persisted record with a department to attach the region flag to.
    Update {
        id: EmployeeExOrgId,
        department_id: DepartmentId,
    },
    Add,
}

/// Picks update for persisted records when a department is known, add otherwise.
pub fn resolve_save_route(
    employee: &EmployeeExOrg,
    department_id: Option<&DepartmentId>,
) -> SaveRoute {
    match (employee.persisted_id(), department_id) {
        (Some(id), Some(department_id)) => SaveRoute::Update {
            id,
            department_id: department_id.clone(),
        },
        _ => SaveRoute::Add,
    }
}

/// Loads the roster visible to the operator.
pub fn load_roster<R>(repo: &R, user: &LocalUserData) -> ServiceResult<Vec<EmployeeExOrg>>
where
    R: EmployeeExOrgReader + ?Sized,
{
    repo.list_employees_ex_org(user)
        .map_err(ServiceError::from)
}

/// Repairs the dismissal flag and persists the record.
///
/// Returns the identifier the record is stored under, which is newly
/// assigned when the record was added.
pub fn save_employee<R>(
    repo: &R,
    user: &LocalUserData,
    employee: &mut EmployeeExOrg,
    department_id: Option<&DepartmentId>,
    working_in_region: bool,
) -> ServiceResult<EmployeeExOrgId>
where
    R: EmployeeExOrgWriter + ?Sized,
{
    if employee.repair_dismissal() {
        log::info!(
            "Employee {} has a dismissal date, marking as dismissed",
            employee.id
        );
    }
    if !employee.is_consistent() {
        return Err(ServiceError::Form(format!(
            "employee {} is dismissed without a dismissal date",
            employee.id
        )));
    }

    match resolve_save_route(employee, department_id) {
        SaveRoute::Update { id, department_id } => {
            repo.update_employee_ex_org(employee, &department_id, working_in_region, user)?;
            Ok(id)
        }
        SaveRoute::Add => {
            let id = repo.add_employee_ex_org(employee, user)?;
            Ok(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
    }

    fn department() -> DepartmentId {
        DepartmentId::new("015").expect("valid department")
    }

    fn operator() -> LocalUserData {
        LocalUserData::new("comp89", "operator")
    }

    fn persisted(id: i32) -> EmployeeExOrg {
        EmployeeExOrg {
            id,
            full_name: format!("Employee #{id}"),
            ..EmployeeExOrg::new_transient(today())
        }
    }

    #[test]
    fn persisted_record_with_department_routes_to_update() {
        let route = resolve_save_route(&persisted(5), Some(&department()));

        assert_eq!(
            route,
            SaveRoute::Update {
                id: EmployeeExOrgId::new(5).expect("valid id"),
                department_id: department(),
            }
        );
    }

    #[test]
    fn transient_record_routes_to_add_regardless_of_department() {
        let transient = EmployeeExOrg::new_transient(today());

        assert_eq!(
            resolve_save_route(&transient, Some(&department())),
            SaveRoute::Add
        );
        assert_eq!(resolve_save_route(&transient, None), SaveRoute::Add);
    }

    #[test]
    fn persisted_record_without_department_routes_to_add() {
        assert_eq!(resolve_save_route(&persisted(5), None), SaveRoute::Add);
    }

    #[test]
    fn save_repairs_dismissal_before_update() {
        let mut repo = MockRepository::new();
        repo.expect_update_employee_ex_org()
            .withf(|employee, department_id, working, user| {
                employee.id == 5
                    && employee.is_dismissal
                    && department_id.as_str() == "015"
                    && *working
                    && user.user_name == "operator"
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        repo.expect_add_employee_ex_org().times(0);

        let mut employee = persisted(5);
        employee.date_dismissal = Some(today());

        let id = save_employee(&repo, &operator(), &mut employee, Some(&department()), true)
            .expect("should save");

        assert_eq!(id.get(), 5);
        assert!(employee.is_dismissal);
    }

    #[test]
    fn save_adds_transient_record_and_returns_new_id() {
        let mut repo = MockRepository::new();
        repo.expect_add_employee_ex_org()
            .withf(|employee, _| employee.id == 0 && employee.date_dismissal.is_none())
            .times(1)
            .returning(|_, _| Ok(EmployeeExOrgId::new(42).expect("valid id")));
        repo.expect_update_employee_ex_org().times(0);

        let mut employee = EmployeeExOrg::new_transient(today());

        let id = save_employee(&repo, &operator(), &mut employee, Some(&department()), false)
            .expect("should save");

        assert_eq!(id.get(), 42);
    }

    #[test]
    fn save_propagates_repository_failure() {
        let mut repo = MockRepository::new();
        repo.expect_add_employee_ex_org()
            .times(1)
            .returning(|_, _| Err(RepositoryError::DatabaseError("disk full".into())));

        let mut employee = EmployeeExOrg::new_transient(today());
        let result = save_employee(&repo, &operator(), &mut employee, None, false);

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::DatabaseError(_)))
        ));
    }

    #[test]
    fn save_rejects_dismissal_without_date() {
        let mut repo = MockRepository::new();
        repo.expect_update_employee_ex_org().times(0);
        repo.expect_add_employee_ex_org().times(0);

        let mut employee = persisted(5);
        employee.is_dismissal = true;
        let result = save_employee(&repo, &operator(), &mut employee, Some(&department()), false);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn load_roster_returns_all_records() {
        let mut repo = MockRepository::new();
        repo.expect_list_employees_ex_org()
            .withf(|user| user.machine_name == "comp89")
            .times(1)
            .returning(|_| Ok(vec![persisted(1), persisted(2)]));

        let roster = load_roster(&repo, &operator()).expect("should load");

        assert_eq!(roster.len(), 2);
    }
}
