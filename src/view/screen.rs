//! The external-organization staff screen.
//!
//! [`StaffExOrgScreen`] runs the user actions: it calls the collaborators,
//! feeds the outcome to the reducer, and turns every failure into an error
//! report. Actions take `&mut self`, so only one runs at a time.

use chrono::{Local, NaiveDate};

use crate::STAFF_ADMIN_ROLE;
use crate::domain::types::DepartmentId;
use crate::domain::user::LocalUserData;
use crate::dto::screen::ScreenSnapshot;
use crate::forms::employee::EmployeeForm;
use crate::repository::{EmployeeExOrgReader, EmployeeExOrgWriter, ErrorLogWriter, LocalUserReader};
use crate::services::employees::{load_roster, save_employee};
use crate::services::error_log::report_failure;
use crate::services::{ServiceError, ServiceResult, check_role, ensure_role};
use crate::view::picker::{FilePicker, IMAGE_FILTERS};
use crate::view::reducer::{ScreenEvent, apply_event};
use crate::view::state::ScreenState;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct StaffExOrgScreen<R, I, P> {
    repo: R,
    identity: I,
    picker: P,
    department_id: Option<DepartmentId>,
    state: ScreenState,
}

impl<R, I, P> StaffExOrgScreen<R, I, P>
where
    R: EmployeeExOrgReader + EmployeeExOrgWriter + ErrorLogWriter,
    I: LocalUserReader,
    P: FilePicker,
{
    pub fn new(repo: R, identity: I, picker: P, department_id: Option<DepartmentId>) -> Self {
        Self {
            repo,
            identity,
            picker,
            department_id,
            state: ScreenState::default(),
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::from(&self.state)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Resolves the operator and loads the roster.
    pub fn initialize(&mut self) {
        let user = match self.identity.get_local_user() {
            Ok(user) => user.unwrap_or_default(),
            Err(err) => {
                report_failure(&self.repo, &self.state.user, &err);
                LocalUserData::default()
            }
        };

        let privileged = check_role(STAFF_ADMIN_ROLE, &user.roles);
        log::info!(
            "Staff screen opened by {}@{} ({})",
            user.user_name,
            user.machine_name,
            if privileged { "editor" } else { "read-only" }
        );

        self.dispatch(ScreenEvent::Initialized {
            user,
            department_id: self.department_id.clone(),
            privileged,
        });
        self.reload_roster();
    }

    pub fn refresh(&mut self) {
        if self.permitted("refresh") {
            self.reload_roster();
        }
    }

    pub fn close(&mut self) {
        self.dispatch(ScreenEvent::Closed);
    }

    /// Persists the record on the card and reloads the roster.
    pub fn save(&mut self) {
        if !self.permitted("save") {
            return;
        }
        if let Err(err) = self.try_save() {
            self.report(&err);
        }
    }

    pub fn toggle_dismissal(&mut self) {
        if self.permitted("toggle dismissal") {
            self.dispatch(ScreenEvent::DismissalToggled { today: today() });
        }
    }

    pub fn edit(&mut self) {
        if self.permitted("edit") {
            self.dispatch(ScreenEvent::EditRequested);
        }
    }

    pub fn create_new(&mut self) {
        if self.permitted("create") {
            self.dispatch(ScreenEvent::NewRecordCreated { today: today() });
        }
    }

    /// Prompts for an image and attaches it to the card.
    pub fn load_photo(&mut self) {
        if !self.permitted("load photo") {
            return;
        }
        if let Err(err) = self.try_load_photo() {
            self.report(&err);
        }
    }

    pub fn set_show_dismissed(&mut self, show_dismissed: bool) {
        self.dispatch(ScreenEvent::FilterToggled(show_dismissed));
    }

    pub fn select(&mut self, id: Option<i32>) {
        self.dispatch(ScreenEvent::SelectionChanged(id));
    }

    /// Applies the typed values to the card while text input is enabled.
    pub fn apply_edits(&mut self, form: EmployeeForm) {
        if !self.state.form.is_enabled_text_box || self.state.editing.is_none() {
            return;
        }
        match form.into_edits(today()) {
            Ok(edits) => self.dispatch(ScreenEvent::EditsApplied(edits)),
            Err(err) => self.report(&ServiceError::from(err)),
        }
    }

    /// Changes the dismissal date while the dismissal control is enabled.
    pub fn set_dismissal_date(&mut self, date: NaiveDate) {
        if !self.state.form.is_enabled_date_dismissal || self.state.editing.is_none() {
            return;
        }
        if date > today() {
            self.report(&ServiceError::Form(format!(
                "dismissal date {date} is in the future"
            )));
            return;
        }
        self.dispatch(ScreenEvent::DismissalDateChanged(date));
    }

    pub fn set_add_working_in_region(&mut self, flag: bool) {
        if !self.permitted("change region flag") {
            return;
        }
        self.dispatch(ScreenEvent::AddWorkingInRegionChanged(flag));
    }

    fn try_save(&mut self) -> ServiceResult<()> {
        let Some(mut employee) = self.state.editing.clone() else {
            return Ok(());
        };

        let id = save_employee(
            &self.repo,
            &self.state.user,
            &mut employee,
            self.state.department_id.as_ref(),
            self.state.add_working_in_region,
        )?;

        self.dispatch(ScreenEvent::SaveAccepted);
        self.reload_roster();
        self.dispatch(ScreenEvent::Reselected(id.get()));
        Ok(())
    }

    fn try_load_photo(&mut self) -> ServiceResult<()> {
        if self.state.editing.is_none() {
            return Ok(());
        }
        let Some(path) = self.picker.pick_file(IMAGE_FILTERS) else {
            return Ok(());
        };
        let photo = std::fs::read(&path)?;
        log::info!("Loaded photo {} ({} bytes)", path.display(), photo.len());
        self.dispatch(ScreenEvent::PhotoLoaded(photo));
        Ok(())
    }

    fn reload_roster(&mut self) {
        match load_roster(&self.repo, &self.state.user) {
            Ok(records) => self.dispatch(ScreenEvent::RosterRefreshed(records)),
            Err(err) => self.report(&err),
        }
    }

    fn permitted(&self, action: &str) -> bool {
        match ensure_role(&self.state.user, STAFF_ADMIN_ROLE) {
            Ok(()) => true,
            Err(_) => {
                log::warn!(
                    "Refused `{action}` for {}@{}",
                    self.state.user.user_name,
                    self.state.user.machine_name
                );
                false
            }
        }
    }

    fn report(&self, err: &ServiceError) {
        report_failure(&self.repo, &self.state.user, err);
    }

    fn dispatch(&mut self, event: ScreenEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = apply_event(state, event);
    }
}
