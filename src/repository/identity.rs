//! Operator identity resolved from configuration and the host environment.

use std::env;

use sysinfo::System;

use crate::STAFF_ADMIN_ROLE;
use crate::domain::user::LocalUserData;
use crate::models::config::AppConfig;
use crate::repository::LocalUserReader;
use crate::repository::errors::RepositoryResult;

const USER_NAME_VARS: [&str; 2] = ["USERNAME", "USER"];

/// Identity of the operator of this machine.
///
/// A machine name that is not configured is the host name reported by the
/// operating system; a user name that is not configured comes from the
/// environment.
/// Operators on one of `privileged_machines` receive [`STAFF_ADMIN_ROLE`].
#[derive(Clone, Debug, Default)]
pub struct SystemIdentity {
    machine_name: Option<String>,
    user_name: Option<String>,
    privileged_machines: Vec<String>,
}

impl SystemIdentity {
    pub fn new(
        machine_name: Option<String>,
        user_name: Option<String>,
        privileged_machines: Vec<String>,
    ) -> Self {
        Self {
            machine_name: machine_name.filter(|name| !name.trim().is_empty()),
            user_name: user_name.filter(|name| !name.trim().is_empty()),
            privileged_machines,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.machine_name.clone(),
            config.user_name.clone(),
            config.privileged_machines.clone(),
        )
    }

    /// Whether the machine is on the allow-list, ignoring case.
    pub fn is_privileged_machine(&self, machine_name: &str) -> bool {
        let machine_name = machine_name.trim();
        !machine_name.is_empty()
            && self
                .privileged_machines
                .iter()
                .any(|allowed| allowed.trim().eq_ignore_ascii_case(machine_name))
    }

    fn resolve_machine_name<F>(&self, host_name: F) -> Option<String>
    where
        F: FnOnce() -> Option<String>,
    {
        self.machine_name.clone().or_else(|| {
            host_name()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
        })
    }

    fn resolve_user_name(&self) -> Option<String> {
        self.user_name
            .clone()
            .or_else(|| first_env_value(&USER_NAME_VARS))
    }
}

fn first_env_value(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

impl LocalUserReader for SystemIdentity {
    fn get_local_user(&self) -> RepositoryResult<Option<LocalUserData>> {
        let machine_name = self.resolve_machine_name(System::host_name);
        let user_name = self.resolve_user_name();

        if machine_name.is_none() && user_name.is_none() {
            return Ok(None);
        }

        let machine_name = machine_name.unwrap_or_default();
        let mut user = LocalUserData::new(machine_name, user_name.unwrap_or_default());
        if self.is_privileged_machine(&user.machine_name) {
            user = user.with_role(STAFF_ADMIN_ROLE);
        }

        Ok(Some(user))
    }
}
