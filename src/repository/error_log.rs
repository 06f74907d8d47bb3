//! Repository implementation for stored failure reports.

use diesel::prelude::*;

use crate::{
    domain::error_log::{ErrorLog, NewErrorLog},
    models::error_log::{ErrorLog as DbErrorLog, NewErrorLog as DbNewErrorLog},
    repository::{
        DieselRepository, ErrorLogReader, ErrorLogWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ErrorLogWriter for DieselRepository {
    fn create_error_log(&self, entry: &NewErrorLog) -> RepositoryResult<ErrorLog> {
        use crate::schema::error_logs;

        let mut conn = self.conn()?;

        let db_new_entry: DbNewErrorLog = entry.into();

        let db_entry = diesel::insert_into(error_logs::table)
            .values(&db_new_entry)
            .returning(DbErrorLog::as_returning())
            .get_result::<DbErrorLog>(&mut conn)?;

        ErrorLog::try_from(db_entry).map_err(RepositoryError::from)
    }
}

impl ErrorLogReader for DieselRepository {
    fn list_error_logs(&self, limit: i64) -> RepositoryResult<Vec<ErrorLog>> {
        use crate::schema::error_logs;

        let mut conn = self.conn()?;

        error_logs::table
            .order(error_logs::id.desc())
            .limit(limit)
            .select(DbErrorLog::as_select())
            .load::<DbErrorLog>(&mut conn)?
            .into_iter()
            .map(|entry| ErrorLog::try_from(entry).map_err(RepositoryError::from))
            .collect()
    }
}
