//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the staff screen host.
pub struct AppConfig {
    pub database_url: String,
    /// Department whose "additional region" flag the screen edits.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Overrides the machine name reported by the operating system.
    #[serde(default)]
    pub machine_name: Option<String>,
    /// Overrides the user name reported by the operating system.
    #[serde(default)]
    pub user_name: Option<String>,
    /// Machines whose operators may create, edit and dismiss employees.
    #[serde(default)]
    pub privileged_machines: Vec<String>,
}
