use diesel::connection::SimpleConnection;
use staff_exorg::db::{get_connection, run_pending_migrations};

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new("test_in_memory_connection.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_are_idempotent.db");
    run_pending_migrations(&test_db.pool()).unwrap();

    let mut conn = get_connection(&test_db.pool()).unwrap();
    conn.batch_execute("SELECT id, full_name, date_dismissal FROM employees_ex_org; SELECT id FROM error_logs;")
        .unwrap();
}

#[test]
fn test_foreign_keys_are_enforced() {
    let test_db = common::TestDb::new("test_foreign_keys_are_enforced.db");
    let mut conn = get_connection(&test_db.pool()).unwrap();

    let orphan = conn.batch_execute(
        "INSERT INTO employee_ex_org_add_in_regions (employee_ex_org_id, department_id, working_in_timesheet) VALUES (999, '015', 1);",
    );
    assert!(orphan.is_err());
}
