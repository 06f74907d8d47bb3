use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::ErrorLogId;
use crate::domain::user::LocalUserData;

/// Stored failure report.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorLog {
    pub id: ErrorLogId,
    pub message: String,
    pub user_name: String,
    pub machine_name: String,
    pub created_at: NaiveDateTime,
}

/// Failure report about to be written by the error log collaborator.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewErrorLog {
    pub message: String,
    pub user_name: String,
    pub machine_name: String,
    pub created_at: NaiveDateTime,
}

impl NewErrorLog {
    /// Captures the message together with the operator that hit it.
    #[must_use]
    pub fn new(message: impl Into<String>, user: &LocalUserData) -> Self {
        Self {
            message: message.into(),
            user_name: user.user_name.clone(),
            machine_name: user.machine_name.clone(),
            created_at: Utc::now().naive_utc(),
        }
    }
}
