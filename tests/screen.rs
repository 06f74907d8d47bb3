use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use staff_exorg::domain::types::DepartmentId;
use staff_exorg::forms::employee::EmployeeForm;
use staff_exorg::repository::{
    DieselRepository, EmployeeExOrgReader, ErrorLogReader, SystemIdentity,
};
use staff_exorg::view::picker::FileFilter;
use staff_exorg::view::screen::StaffExOrgScreen;
use staff_exorg::view::state::{FormFlags, Visibility};

mod common;

type Picker = fn(&[FileFilter]) -> Option<PathBuf>;

fn no_photo(_: &[FileFilter]) -> Option<PathBuf> {
    None
}

fn open(
    test_db: &common::TestDb,
    machine_name: &str,
) -> StaffExOrgScreen<DieselRepository, SystemIdentity, Picker> {
    let identity = SystemIdentity::new(
        Some(machine_name.to_string()),
        Some("operator".to_string()),
        vec!["comp89".to_string(), "comp17".to_string()],
    );
    let mut screen = StaffExOrgScreen::new(
        DieselRepository::new(test_db.pool()),
        identity,
        no_photo as Picker,
        Some(DepartmentId::new("015").unwrap()),
    );
    screen.initialize();
    screen
}

fn form(name: &str, hired: NaiveDate) -> EmployeeForm {
    EmployeeForm {
        full_name: name.to_string(),
        card_number: "C-17".to_string(),
        description: String::new(),
        date_employment: hired,
    }
}

#[test]
fn test_create_save_dismiss_and_filter() {
    let test_db = common::TestDb::new("test_create_save_dismiss_and_filter.db");
    let hired = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
    let today = Local::now().date_naive();

    let mut screen = open(&test_db, "COMP89");
    assert!(screen.state().privileged);
    assert_eq!(screen.state().visibility_buttons, Visibility::Visible);
    assert!(screen.state().roster.projection().is_empty());

    screen.create_new();
    screen.apply_edits(form("Sidorov S.", hired));
    screen.set_add_working_in_region(true);
    screen.save();

    let state = screen.state();
    assert_eq!(state.roster.projection().len(), 1);
    let saved = state.selected.clone().unwrap();
    assert_eq!(saved.full_name, "Sidorov S.");
    assert_eq!(saved.card_number.as_deref(), Some("C-17"));
    assert_eq!(saved.date_employment, hired);
    assert_eq!(state.form, FormFlags::browse());
    assert_eq!(state.visibility_add_main_region, Visibility::Visible);

    // The region flag is stored only once the record has an identifier.
    screen.edit();
    screen.set_add_working_in_region(true);
    screen.save();
    assert!(screen.state().add_working_in_region);

    screen.toggle_dismissal();
    screen.save();

    assert!(screen.state().roster.projection().is_empty());
    assert!(screen.state().selected.is_none());

    screen.set_show_dismissed(true);
    let dismissed = screen.state().selected.clone().unwrap();
    assert_eq!(dismissed.id, saved.id);
    assert!(dismissed.is_dismissal);
    assert_eq!(dismissed.date_dismissal, Some(today));
}

#[test]
fn test_read_only_machine_cannot_change_roster() {
    let test_db = common::TestDb::new("test_read_only_machine_cannot_change_roster.db");

    let mut admin = open(&test_db, "comp17");
    admin.create_new();
    admin.apply_edits(form("Ivanov I.", NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()));
    admin.save();

    let mut viewer = open(&test_db, "comp01");
    assert!(!viewer.state().privileged);
    assert_eq!(viewer.state().visibility_buttons, Visibility::Collapsed);
    assert_eq!(viewer.state().roster.projection().len(), 1);

    viewer.create_new();
    viewer.toggle_dismissal();
    viewer.edit();
    viewer.set_add_working_in_region(true);
    viewer.save();

    let state = viewer.state();
    assert_eq!(state.form, FormFlags::browse());
    assert!(!state.add_working_in_region);
    assert!(!state.editing.as_ref().unwrap().is_dismissal);

    let stored = viewer
        .repository()
        .list_employees_ex_org(&viewer.state().user)
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].regions.is_empty());
    assert!(viewer.repository().list_error_logs(10).unwrap().is_empty());
}

#[test]
fn test_invalid_form_is_reported_to_error_log() {
    let test_db = common::TestDb::new("test_invalid_form_is_reported_to_error_log.db");

    let mut screen = open(&test_db, "comp89");
    screen.create_new();
    screen.apply_edits(form("   ", NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()));

    assert_eq!(screen.state().editing.as_ref().unwrap().full_name, "");

    let entries = screen.repository().list_error_logs(10).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].machine_name, "comp89");
    assert_eq!(entries[0].user_name, "operator");
}
