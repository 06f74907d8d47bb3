//! Diesel models representing external-organization employees.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::employee::{
    EmployeeExOrg as DomainEmployeeExOrg, EmployeeExOrgAddInRegion as DomainAddInRegion,
};
use crate::domain::types::{DepartmentId, TypeConstraintError};

/// Date stored in `date_dismissal` for employees that were never dismissed.
pub fn never_dismissed() -> NaiveDate {
    NaiveDate::from_ymd_opt(1876, 12, 31).unwrap_or(NaiveDate::MIN)
}

fn dismissal_from_column(date: NaiveDate) -> Option<NaiveDate> {
    (date != never_dismissed()).then_some(date)
}

fn dismissal_to_column(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(never_dismissed)
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::employees_ex_org)]
/// Diesel model for [`crate::domain::employee::EmployeeExOrg`].
pub struct EmployeeExOrg {
    pub id: i32,
    pub full_name: String,
    pub card_number: Option<String>,
    pub description: Option<String>,
    pub date_employment: NaiveDate,
    pub date_dismissal: NaiveDate,
    pub is_dismissal: bool,
    pub photo: Option<Vec<u8>>,
    pub changed_by: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees_ex_org)]
/// Insertable form of [`EmployeeExOrg`].
pub struct NewEmployeeExOrg<'a> {
    pub full_name: &'a str,
    pub card_number: Option<&'a str>,
    pub description: Option<&'a str>,
    pub date_employment: NaiveDate,
    pub date_dismissal: NaiveDate,
    pub is_dismissal: bool,
    pub photo: Option<&'a [u8]>,
    pub changed_by: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::employees_ex_org)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating an [`EmployeeExOrg`] record.
pub struct UpdateEmployeeExOrg<'a> {
    pub full_name: &'a str,
    pub card_number: Option<&'a str>,
    pub description: Option<&'a str>,
    pub date_employment: NaiveDate,
    pub date_dismissal: NaiveDate,
    pub is_dismissal: bool,
    pub photo: Option<&'a [u8]>,
    pub changed_by: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Queryable, Selectable, Associations, Identifiable)]
#[diesel(primary_key(employee_ex_org_id, department_id))]
#[diesel(belongs_to(EmployeeExOrg, foreign_key = employee_ex_org_id))]
#[diesel(table_name = crate::schema::employee_ex_org_add_in_regions)]
/// Region assignment row of an employee.
pub struct EmployeeExOrgAddInRegion {
    pub employee_ex_org_id: i32,
    pub department_id: String,
    pub working_in_timesheet: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employee_ex_org_add_in_regions)]
/// Insertable variant of [`EmployeeExOrgAddInRegion`].
pub struct NewEmployeeExOrgAddInRegion<'a> {
    pub employee_ex_org_id: i32,
    pub department_id: &'a str,
    pub working_in_timesheet: bool,
}

impl EmployeeExOrg {
    /// Combines the row with its region assignments into the domain type.
    pub fn into_domain(
        self,
        regions: Vec<EmployeeExOrgAddInRegion>,
    ) -> Result<DomainEmployeeExOrg, TypeConstraintError> {
        let regions = regions
            .into_iter()
            .map(DomainAddInRegion::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut date_dismissal = dismissal_from_column(self.date_dismissal);
        if self.is_dismissal && date_dismissal.is_none() {
            // Legacy rows may carry the flag without a date.
            let fallback = self.updated_at.date();
            log::warn!(
                "Employee {} is dismissed without a dismissal date, using {fallback}",
                self.id
            );
            date_dismissal = Some(fallback);
        }

        Ok(DomainEmployeeExOrg {
            id: self.id,
            full_name: self.full_name,
            card_number: self.card_number,
            description: self.description,
            date_employment: self.date_employment,
            date_dismissal,
            is_dismissal: self.is_dismissal,
            photo: self.photo,
            regions,
        })
    }
}

impl TryFrom<EmployeeExOrgAddInRegion> for DomainAddInRegion {
    type Error = TypeConstraintError;

    fn try_from(region: EmployeeExOrgAddInRegion) -> Result<Self, Self::Error> {
        Ok(Self {
            department_id: DepartmentId::new(region.department_id)?,
            working_in_timesheet: region.working_in_timesheet,
        })
    }
}

impl<'a> NewEmployeeExOrg<'a> {
    pub fn from_domain(
        employee: &'a DomainEmployeeExOrg,
        changed_by: &'a str,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            full_name: employee.full_name.as_str(),
            card_number: employee.card_number.as_deref(),
            description: employee.description.as_deref(),
            date_employment: employee.date_employment,
            date_dismissal: dismissal_to_column(employee.date_dismissal),
            is_dismissal: employee.is_dismissal,
            photo: employee.photo.as_deref(),
            changed_by,
            updated_at,
        }
    }
}

impl<'a> From<&NewEmployeeExOrg<'a>> for UpdateEmployeeExOrg<'a> {
    fn from(employee: &NewEmployeeExOrg<'a>) -> Self {
        Self {
            full_name: employee.full_name,
            card_number: employee.card_number,
            description: employee.description,
            date_employment: employee.date_employment,
            date_dismissal: employee.date_dismissal,
            is_dismissal: employee.is_dismissal,
            photo: employee.photo,
            changed_by: employee.changed_by,
            updated_at: employee.updated_at,
        }
    }
}
