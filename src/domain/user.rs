use serde::{Deserialize, Serialize};

/// Operator of the screen: the machine it runs on and the signed-in user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LocalUserData {
    pub machine_name: String,
    pub user_name: String,
    /// Roles granted by the identity provider.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl LocalUserData {
    #[must_use]
    pub fn new(machine_name: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            machine_name: machine_name.into(),
            user_name: user_name.into(),
            roles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }
}
