use crate::db::{establish_connection_pool, run_pending_migrations};
use crate::domain::types::DepartmentId;
use crate::models::config::AppConfig;
use crate::repository::{DieselRepository, SystemIdentity};
use crate::view::picker::FilePicker;
use crate::view::screen::StaffExOrgScreen;

pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
pub mod view;

/// Role granting the create, edit, dismiss, refresh and photo actions.
pub const STAFF_ADMIN_ROLE: &str = "staff_admin";

pub type DieselStaffScreen<P> = StaffExOrgScreen<DieselRepository, SystemIdentity, P>;

/// Opens the database described by `app_config` and builds an initialized
/// staff screen on top of it.
pub fn open_screen<P: FilePicker>(
    app_config: &AppConfig,
    picker: P,
) -> std::io::Result<DieselStaffScreen<P>> {
    let department_id = app_config
        .department_id
        .as_deref()
        .map(DepartmentId::new)
        .transpose()
        .map_err(|e| std::io::Error::other(format!("Invalid department id: {e}")))?;

    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&app_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;
    run_pending_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to prepare database: {e}")))?;

    let repo = DieselRepository::new(pool);
    let identity = SystemIdentity::from_config(app_config);

    let mut screen = StaffExOrgScreen::new(repo, identity, picker, department_id);
    screen.initialize();
    Ok(screen)
}
