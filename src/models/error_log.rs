//! Diesel models for stored failure reports.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::error_log::{ErrorLog as DomainErrorLog, NewErrorLog as DomainNewErrorLog};
use crate::domain::types::{ErrorLogId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::error_logs)]
pub struct ErrorLog {
    pub id: i32,
    pub message: String,
    pub user_name: String,
    pub machine_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::error_logs)]
pub struct NewErrorLog<'a> {
    pub message: &'a str,
    pub user_name: &'a str,
    pub machine_name: &'a str,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ErrorLog> for DomainErrorLog {
    type Error = TypeConstraintError;

    fn try_from(log: ErrorLog) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ErrorLogId::new(log.id)?,
            message: log.message,
            user_name: log.user_name,
            machine_name: log.machine_name,
            created_at: log.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewErrorLog> for NewErrorLog<'a> {
    fn from(log: &'a DomainNewErrorLog) -> Self {
        Self {
            message: log.message.as_str(),
            user_name: log.user_name.as_str(),
            machine_name: log.machine_name.as_str(),
            created_at: log.created_at,
        }
    }
}
