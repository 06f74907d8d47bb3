//! Failure reporting for screen actions.

use std::fmt::Display;

use crate::domain::error_log::NewErrorLog;
use crate::domain::user::LocalUserData;
use crate::repository::ErrorLogWriter;

/// Logs the failure with the operator's identity and stores it.
///
/// Never fails: a store error is only written to the log.
pub fn report_failure<R, E>(repo: &R, user: &LocalUserData, err: &E)
where
    R: ErrorLogWriter + ?Sized,
    E: Display + ?Sized,
{
    log::error!(
        "Operation failed for {}@{}: {err}",
        user.user_name,
        user.machine_name
    );

    let entry = NewErrorLog::new(err.to_string(), user);
    if let Err(store_err) = repo.create_error_log(&entry) {
        log::error!("Failed to store error log entry: {store_err}");
    }
}
