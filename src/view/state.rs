//! State of the staff screen and the enablement flags of its widgets.

use serde::Serialize;

use crate::domain::employee::EmployeeExOrg;
use crate::domain::types::DepartmentId;
use crate::domain::user::LocalUserData;
use crate::view::roster::Roster;

/// Visibility of a widget, mirroring what desktop toolkits expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Not shown, layout space kept.
    Hidden,
    /// Not shown, no layout space.
    Collapsed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Default)]
pub enum FormMode {
    #[default]
    Browse,
    Editing,
    Dismissing,
}

/// Enablement of the employee card widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FormFlags {
    pub is_enabled_text_box: bool,
    pub is_enabled_date_dismissal: bool,
    pub visibility_button_load: Visibility,
}

impl FormFlags {
    pub const fn browse() -> Self {
        Self {
            is_enabled_text_box: false,
            is_enabled_date_dismissal: false,
            visibility_button_load: Visibility::Hidden,
        }
    }

    pub const fn editing() -> Self {
        Self {
            is_enabled_text_box: true,
            is_enabled_date_dismissal: false,
            visibility_button_load: Visibility::Visible,
        }
    }

    pub const fn dismissing() -> Self {
        Self {
            is_enabled_text_box: false,
            is_enabled_date_dismissal: true,
            visibility_button_load: Visibility::Hidden,
        }
    }
}

impl Default for FormFlags {
    fn default() -> Self {
        Self::browse()
    }
}

/// Everything the screen shows. Owned by the screen and changed only
/// through [`crate::view::reducer::apply_event`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenState {
    pub user: LocalUserData,
    pub department_id: Option<DepartmentId>,
    /// Operator may use the create/edit/dismiss/refresh/photo actions.
    pub privileged: bool,
    pub roster: Roster,
    pub show_dismissed: bool,
    pub selected: Option<EmployeeExOrg>,
    /// Record bound to the card; a transient record while creating.
    pub editing: Option<EmployeeExOrg>,
    pub add_working_in_region: bool,
    pub form: FormFlags,
    pub mode: FormMode,
    pub visibility_add_main_region: Visibility,
    pub visibility_buttons: Visibility,
    pub closed: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            user: LocalUserData::default(),
            department_id: None,
            privileged: false,
            roster: Roster::default(),
            show_dismissed: false,
            selected: None,
            editing: None,
            add_working_in_region: false,
            form: FormFlags::browse(),
            mode: FormMode::Browse,
            visibility_add_main_region: Visibility::Visible,
            visibility_buttons: Visibility::Collapsed,
            closed: false,
        }
    }
}
