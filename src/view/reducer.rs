//! Pure state transitions of the staff screen.
//!
//! Every change the screen makes to its [`ScreenState`] is expressed as a
//! [`ScreenEvent`] folded in by [`apply_event`]. Calls to collaborators
//! happen outside, in [`crate::view::screen`].

use chrono::NaiveDate;

use crate::domain::employee::{EmployeeEdits, EmployeeExOrg};
use crate::domain::types::DepartmentId;
use crate::domain::user::LocalUserData;
use crate::view::state::{FormFlags, FormMode, ScreenState, Visibility};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenEvent {
    Initialized {
        user: LocalUserData,
        department_id: Option<DepartmentId>,
        privileged: bool,
    },
    RosterRefreshed(Vec<EmployeeExOrg>),
    FilterToggled(bool),
    /// User picked a row by identifier, or cleared the selection.
    SelectionChanged(Option<i32>),
    /// Selects the record again after a save, if it is still displayed.
    Reselected(i32),
    EditRequested,
    NewRecordCreated {
        today: NaiveDate,
    },
    DismissalToggled {
        today: NaiveDate,
    },
    DismissalDateChanged(NaiveDate),
    PhotoLoaded(Vec<u8>),
    EditsApplied(EmployeeEdits),
    AddWorkingInRegionChanged(bool),
    SaveAccepted,
    Closed,
}

pub fn apply_event(mut state: ScreenState, event: ScreenEvent) -> ScreenState {
    match event {
        ScreenEvent::Initialized {
            user,
            department_id,
            privileged,
        } => {
            state.user = user;
            state.department_id = department_id;
            state.privileged = privileged;
            state.visibility_add_main_region = Visibility::Visible;
            state.visibility_buttons = if privileged {
                Visibility::Visible
            } else {
                Visibility::Collapsed
            };
            enter_browse(&mut state);
            set_filter(&mut state, false);
        }
        ScreenEvent::RosterRefreshed(records) => {
            state.roster.replace(records);
            let show_dismissed = state.show_dismissed;
            state.roster.rederive(show_dismissed);
            sync_selection(&mut state);
        }
        ScreenEvent::FilterToggled(show_dismissed) => set_filter(&mut state, show_dismissed),
        ScreenEvent::SelectionChanged(id) => {
            let record = id.and_then(|id| state.roster.find(id).cloned());
            select(&mut state, record);
        }
        ScreenEvent::Reselected(id) => {
            if let Some(record) = state.roster.find(id).cloned() {
                select(&mut state, Some(record));
            }
        }
        ScreenEvent::EditRequested => {
            if state.selected.is_some() {
                enter_editing(&mut state);
            }
        }
        ScreenEvent::NewRecordCreated { today } => {
            set_editing(&mut state, Some(EmployeeExOrg::new_transient(today)));
            state.visibility_add_main_region = Visibility::Hidden;
            enter_editing(&mut state);
        }
        ScreenEvent::DismissalToggled { today } => {
            if let Some(record) = state.editing.as_mut() {
                if record.is_dismissal {
                    record.reinstate();
                } else {
                    record.dismiss(today);
                    state.form = FormFlags::dismissing();
                    state.mode = FormMode::Dismissing;
                }
            }
        }
        ScreenEvent::DismissalDateChanged(date) => {
            if state.form.is_enabled_date_dismissal {
                if let Some(record) = state.editing.as_mut() {
                    record.dismiss(date);
                }
            }
        }
        ScreenEvent::PhotoLoaded(photo) => {
            if let Some(record) = state.editing.as_mut() {
                record.photo = Some(photo);
            }
        }
        ScreenEvent::EditsApplied(edits) => {
            if state.form.is_enabled_text_box {
                if let Some(record) = state.editing.as_mut() {
                    record.apply_edits(edits);
                }
            }
        }
        ScreenEvent::AddWorkingInRegionChanged(flag) => state.add_working_in_region = flag,
        ScreenEvent::SaveAccepted => state.visibility_add_main_region = Visibility::Visible,
        ScreenEvent::Closed => state.closed = true,
    }
    state
}

fn enter_browse(state: &mut ScreenState) {
    state.form = FormFlags::browse();
    state.mode = FormMode::Browse;
}

fn enter_editing(state: &mut ScreenState) {
    state.form = FormFlags::editing();
    state.mode = FormMode::Editing;
}

fn set_filter(state: &mut ScreenState, show_dismissed: bool) {
    state.show_dismissed = show_dismissed;
    if state.roster.rederive(show_dismissed) {
        sync_selection(state);
    }
}

/// First displayed record becomes selected; an empty list clears both the
/// selection and the card.
fn sync_selection(state: &mut ScreenState) {
    let first = state.roster.projection().first().cloned();
    select(state, first);
}

fn select(state: &mut ScreenState, record: Option<EmployeeExOrg>) {
    state.selected = record.clone();
    set_editing(state, record);
    enter_browse(state);
}

/// Binds a record to the card and, for persisted records, picks up its
/// region flag for the configured department.
fn set_editing(state: &mut ScreenState, record: Option<EmployeeExOrg>) {
    state.editing = record;
    let (Some(record), Some(department_id)) = (&state.editing, &state.department_id) else {
        return;
    };
    if record.persisted_id().is_some() {
        state.add_working_in_region = record.working_in_region(department_id).unwrap_or_default();
    }
}
