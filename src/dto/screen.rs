//! Serializable view of the staff screen for rendering hosts.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::employee::EmployeeExOrg;
use crate::view::state::{FormFlags, FormMode, ScreenState, Visibility};

/// Row of the employee list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: i32,
    pub full_name: String,
    pub card_number: Option<String>,
    pub date_employment: NaiveDate,
    pub date_dismissal: Option<NaiveDate>,
    pub is_dismissal: bool,
}

impl From<&EmployeeExOrg> for EmployeeRow {
    fn from(employee: &EmployeeExOrg) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name.clone(),
            card_number: employee.card_number.clone(),
            date_employment: employee.date_employment,
            date_dismissal: employee.date_dismissal,
            is_dismissal: employee.is_dismissal,
        }
    }
}

/// Contents of the employee card.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmployeeCard {
    #[serde(flatten)]
    pub row: EmployeeRow,
    pub description: Option<String>,
    /// Size of the attached photo in bytes.
    pub photo_size: Option<usize>,
}

impl From<&EmployeeExOrg> for EmployeeCard {
    fn from(employee: &EmployeeExOrg) -> Self {
        Self {
            row: EmployeeRow::from(employee),
            description: employee.description.clone(),
            photo_size: employee.photo.as_ref().map(Vec::len),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScreenSnapshot {
    pub user_name: String,
    pub machine_name: String,
    pub privileged: bool,
    pub show_dismissed: bool,
    pub rows: Vec<EmployeeRow>,
    /// Number of loaded records, dismissed or not.
    pub total_records: usize,
    pub selected: Option<i32>,
    pub editing: Option<EmployeeCard>,
    pub add_working_in_region: bool,
    pub mode: FormMode,
    pub form: FormFlags,
    pub visibility_add_main_region: Visibility,
    pub visibility_buttons: Visibility,
    pub closed: bool,
}

impl From<&ScreenState> for ScreenSnapshot {
    fn from(state: &ScreenState) -> Self {
        Self {
            user_name: state.user.user_name.clone(),
            machine_name: state.user.machine_name.clone(),
            privileged: state.privileged,
            show_dismissed: state.show_dismissed,
            rows: state.roster.projection().iter().map(EmployeeRow::from).collect(),
            total_records: state.roster.source().len(),
            selected: state.selected.as_ref().map(|record| record.id),
            editing: state.editing.as_ref().map(EmployeeCard::from),
            add_working_in_region: state.add_working_in_region,
            mode: state.mode,
            form: state.form,
            visibility_add_main_region: state.visibility_add_main_region,
            visibility_buttons: state.visibility_buttons,
            closed: state.closed,
        }
    }
}
