//! Roster containers behind the employee list.
//!
//! `source` is the roster exactly as loaded, `snapshot` is the working copy
//! the filter reads from, and `projection` is what the list displays. The
//! projection only changes through [`Roster::rederive`].

use crate::domain::employee::EmployeeExOrg;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    source: Option<Vec<EmployeeExOrg>>,
    snapshot: Option<Vec<EmployeeExOrg>>,
    projection: Option<Vec<EmployeeExOrg>>,
}

/// Keeps dismissed records when `show_dismissed`, active ones otherwise.
pub fn filter_by_dismissal(records: &[EmployeeExOrg], show_dismissed: bool) -> Vec<EmployeeExOrg> {
    records
        .iter()
        .filter(|record| record.is_dismissal == show_dismissed)
        .cloned()
        .collect()
}

impl Roster {
    /// Replaces all three containers with a freshly loaded roster.
    ///
    /// The projection holds the unfiltered roster until the next
    /// [`Roster::rederive`].
    pub fn replace(&mut self, records: Vec<EmployeeExOrg>) {
        self.snapshot = Some(records.clone());
        self.projection = Some(records.clone());
        self.source = Some(records);
    }

    /// Rebuilds the projection from the snapshot.
    ///
    /// Returns `false` without touching anything while the snapshot or the
    /// projection has not been created yet.
    pub fn rederive(&mut self, show_dismissed: bool) -> bool {
        let (Some(snapshot), Some(_)) = (&self.snapshot, &self.projection) else {
            return false;
        };
        self.projection = Some(filter_by_dismissal(snapshot, show_dismissed));
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> &[EmployeeExOrg] {
        self.source.as_deref().unwrap_or_default()
    }

    pub fn snapshot(&self) -> &[EmployeeExOrg] {
        self.snapshot.as_deref().unwrap_or_default()
    }

    pub fn projection(&self) -> &[EmployeeExOrg] {
        self.projection.as_deref().unwrap_or_default()
    }

    /// Finds a displayed record by identifier.
    pub fn find(&self, id: i32) -> Option<&EmployeeExOrg> {
        self.projection().iter().find(|record| record.id == id)
    }

    pub fn projection_ids(&self) -> Vec<i32> {
        self.projection().iter().map(|record| record.id).collect()
    }
}
