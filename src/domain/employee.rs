//! External-organization employee aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{DepartmentId, EmployeeExOrgId, EmployeeName};

/// Per-department "additional region" assignment of an employee.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeExOrgAddInRegion {
    pub department_id: DepartmentId,
    /// Whether the employee is also counted in this department's timesheet.
    pub working_in_timesheet: bool,
}

impl EmployeeExOrgAddInRegion {
    #[must_use]
    pub fn new(department_id: DepartmentId, working_in_timesheet: bool) -> Self {
        Self {
            department_id,
            working_in_timesheet,
        }
    }
}

/// Worker of an external organization tracked by the timesheet.
///
/// `id == 0` marks a record that was created in memory and not yet accepted
/// by the repository. `date_dismissal` is `None` for employees that were
/// never dismissed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeExOrg {
    pub id: i32,
    pub full_name: String,
    pub card_number: Option<String>,
    pub description: Option<String>,
    pub date_employment: NaiveDate,
    pub date_dismissal: Option<NaiveDate>,
    pub is_dismissal: bool,
    #[serde(skip)]
    pub photo: Option<Vec<u8>>,
    pub regions: Vec<EmployeeExOrgAddInRegion>,
}

/// Edits coming from the text inputs of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeEdits {
    pub full_name: EmployeeName,
    pub card_number: Option<String>,
    pub description: Option<String>,
    pub date_employment: NaiveDate,
}

impl EmployeeExOrg {
    /// Builds the transient record shown when the user starts a new entry.
    #[must_use]
    pub fn new_transient(today: NaiveDate) -> Self {
        Self {
            id: 0,
            full_name: String::new(),
            card_number: None,
            description: None,
            date_employment: today,
            date_dismissal: None,
            is_dismissal: false,
            photo: None,
            regions: Vec::new(),
        }
    }

    /// Returns the persisted identifier, if the record has one.
    pub fn persisted_id(&self) -> Option<EmployeeExOrgId> {
        EmployeeExOrgId::new(self.id).ok()
    }

    /// Whether the dismissal flag agrees with the dismissal date.
    pub fn is_consistent(&self) -> bool {
        self.is_dismissal == self.date_dismissal.is_some()
    }

    /// Marks the record dismissed when a dismissal date is set but the flag
    /// is not. Returns `true` when the record was changed.
    pub fn repair_dismissal(&mut self) -> bool {
        if self.date_dismissal.is_some() && !self.is_dismissal {
            self.is_dismissal = true;
            return true;
        }
        false
    }

    pub fn dismiss(&mut self, date: NaiveDate) {
        self.is_dismissal = true;
        self.date_dismissal = Some(date);
    }

    pub fn reinstate(&mut self) {
        self.is_dismissal = false;
        self.date_dismissal = None;
    }

    /// Looks up the "working in region" flag for the given department.
    ///
    /// The first matching assignment wins.
    pub fn working_in_region(&self, department_id: &DepartmentId) -> Option<bool> {
        self.regions
            .iter()
            .find(|region| &region.department_id == department_id)
            .map(|region| region.working_in_timesheet)
    }

    pub fn apply_edits(&mut self, edits: EmployeeEdits) {
        self.full_name = edits.full_name.into_inner();
        self.card_number = edits.card_number;
        self.description = edits.description;
        self.date_employment = edits.date_employment;
    }
}
