use chrono::NaiveDate;
use diesel::prelude::*;
use staff_exorg::db::get_connection;
use staff_exorg::domain::employee::{EmployeeExOrg, EmployeeExOrgAddInRegion};
use staff_exorg::domain::error_log::NewErrorLog;
use staff_exorg::domain::types::DepartmentId;
use staff_exorg::domain::user::LocalUserData;
use staff_exorg::repository::errors::RepositoryError;
use staff_exorg::repository::{
    DieselRepository, EmployeeExOrgReader, EmployeeExOrgWriter, ErrorLogReader, ErrorLogWriter,
};
use staff_exorg::schema::employees_ex_org;

mod common;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn operator() -> LocalUserData {
    LocalUserData::new("comp89", "operator")
}

fn department() -> DepartmentId {
    DepartmentId::new("015").unwrap()
}

fn new_employee(name: &str) -> EmployeeExOrg {
    EmployeeExOrg {
        full_name: name.into(),
        card_number: Some("A-1".into()),
        ..EmployeeExOrg::new_transient(date(2024, 3, 1))
    }
}

#[test]
fn test_employee_repository_add_and_list() {
    let test_db = common::TestDb::new("test_employee_repository_add_and_list.db");
    let repo = DieselRepository::new(test_db.pool());

    let mut bob = new_employee("Bob");
    bob.regions = vec![EmployeeExOrgAddInRegion::new(department(), true)];
    let bob_id = repo.add_employee_ex_org(&bob, &operator()).unwrap();
    let alice_id = repo
        .add_employee_ex_org(&new_employee("Alice"), &operator())
        .unwrap();
    assert_ne!(bob_id, alice_id);

    let items = repo.list_employees_ex_org(&operator()).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].full_name, "Alice");
    assert_eq!(items[0].id, alice_id.get());
    assert!(items[0].regions.is_empty());
    assert_eq!(items[1].id, bob_id.get());
    assert_eq!(items[1].working_in_region(&department()), Some(true));
    assert_eq!(items[1].date_dismissal, None);
    assert!(!items[1].is_dismissal);
}

#[test]
fn test_never_dismissed_is_stored_as_sentinel() {
    let test_db = common::TestDb::new("test_never_dismissed_is_stored_as_sentinel.db");
    let repo = DieselRepository::new(test_db.pool());

    let id = repo
        .add_employee_ex_org(&new_employee("Alice"), &operator())
        .unwrap();

    let mut conn = get_connection(&test_db.pool()).unwrap();
    let (stored, changed_by) = employees_ex_org::table
        .find(id.get())
        .select((employees_ex_org::date_dismissal, employees_ex_org::changed_by))
        .first::<(NaiveDate, String)>(&mut conn)
        .unwrap();
    assert_eq!(stored, date(1876, 12, 31));
    assert_eq!(changed_by, "operator");
}

#[test]
fn test_employee_repository_update_and_region_upsert() {
    let test_db = common::TestDb::new("test_employee_repository_update_and_region_upsert.db");
    let repo = DieselRepository::new(test_db.pool());

    let id = repo
        .add_employee_ex_org(&new_employee("Alice"), &operator())
        .unwrap();
    let mut alice = repo.list_employees_ex_org(&operator()).unwrap().remove(0);
    assert_eq!(alice.id, id.get());

    alice.full_name = "Alice Smith".into();
    alice.card_number = None;
    alice.photo = Some(vec![1, 2, 3]);
    alice.dismiss(date(2026, 9, 30));
    repo.update_employee_ex_org(&alice, &department(), true, &operator())
        .unwrap();

    let stored = repo.list_employees_ex_org(&operator()).unwrap().remove(0);
    assert_eq!(stored.full_name, "Alice Smith");
    assert_eq!(stored.card_number, None);
    assert_eq!(stored.photo, Some(vec![1, 2, 3]));
    assert!(stored.is_dismissal);
    assert_eq!(stored.date_dismissal, Some(date(2026, 9, 30)));
    assert_eq!(stored.working_in_region(&department()), Some(true));

    repo.update_employee_ex_org(&stored, &department(), false, &operator())
        .unwrap();
    let stored = repo.list_employees_ex_org(&operator()).unwrap().remove(0);
    assert_eq!(stored.regions.len(), 1);
    assert_eq!(stored.working_in_region(&department()), Some(false));
}

#[test]
fn test_update_of_unknown_employee_is_not_found() {
    let test_db = common::TestDb::new("test_update_of_unknown_employee_is_not_found.db");
    let repo = DieselRepository::new(test_db.pool());

    let ghost = EmployeeExOrg {
        id: 404,
        ..new_employee("Ghost")
    };
    let result = repo.update_employee_ex_org(&ghost, &department(), false, &operator());
    assert!(matches!(result, Err(RepositoryError::NotFound)));

    let transient = new_employee("Transient");
    let result = repo.update_employee_ex_org(&transient, &department(), false, &operator());
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[test]
fn test_error_log_repository() {
    let test_db = common::TestDb::new("test_error_log_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_error_log(&NewErrorLog::new("first failure", &operator()))
        .unwrap();
    assert_eq!(first.message, "first failure");
    assert_eq!(first.user_name, "operator");
    assert_eq!(first.machine_name, "comp89");

    repo.create_error_log(&NewErrorLog::new("second failure", &operator()))
        .unwrap();

    let entries = repo.list_error_logs(10).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].message, "second failure");

    let latest = repo.list_error_logs(1).unwrap();
    assert_eq!(latest.len(), 1);
}
