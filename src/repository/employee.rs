//! Repository implementation for external-organization employees.

use std::collections::HashMap;

use chrono::Utc;
use diesel::{Connection, prelude::*, upsert::excluded};

use crate::{
    domain::{
        employee::EmployeeExOrg,
        types::{DepartmentId, EmployeeExOrgId},
        user::LocalUserData,
    },
    models::employee::{
        EmployeeExOrg as DbEmployeeExOrg, EmployeeExOrgAddInRegion as DbAddInRegion,
        NewEmployeeExOrg as DbNewEmployeeExOrg,
        NewEmployeeExOrgAddInRegion as DbNewAddInRegion,
        UpdateEmployeeExOrg as DbUpdateEmployeeExOrg,
    },
    repository::{
        DieselRepository, EmployeeExOrgReader, EmployeeExOrgWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl EmployeeExOrgReader for DieselRepository {
    fn list_employees_ex_org(&self, user: &LocalUserData) -> RepositoryResult<Vec<EmployeeExOrg>> {
        use crate::schema::{employee_ex_org_add_in_regions, employees_ex_org};

        let mut conn = self.conn()?;

        let db_employees = employees_ex_org::table
            .order((employees_ex_org::full_name.asc(), employees_ex_org::id.asc()))
            .select(DbEmployeeExOrg::as_select())
            .load::<DbEmployeeExOrg>(&mut conn)?;

        let employee_ids = db_employees
            .iter()
            .map(|employee| employee.id)
            .collect::<Vec<i32>>();

        let mut regions_by_employee: HashMap<i32, Vec<DbAddInRegion>> = HashMap::new();
        for region in employee_ex_org_add_in_regions::table
            .filter(employee_ex_org_add_in_regions::employee_ex_org_id.eq_any(employee_ids))
            .order(employee_ex_org_add_in_regions::department_id.asc())
            .select(DbAddInRegion::as_select())
            .load::<DbAddInRegion>(&mut conn)?
        {
            regions_by_employee
                .entry(region.employee_ex_org_id)
                .or_default()
                .push(region);
        }

        log::debug!(
            "Loaded {} external employees for {}@{}",
            db_employees.len(),
            user.user_name,
            user.machine_name
        );

        db_employees
            .into_iter()
            .map(|employee| {
                let regions = regions_by_employee.remove(&employee.id).unwrap_or_default();
                employee
                    .into_domain(regions)
                    .map_err(RepositoryError::from)
            })
            .collect()
    }
}

impl EmployeeExOrgWriter for DieselRepository {
    fn add_employee_ex_org(
        &self,
        employee: &EmployeeExOrg,
        user: &LocalUserData,
    ) -> RepositoryResult<EmployeeExOrgId> {
        use crate::schema::{employee_ex_org_add_in_regions, employees_ex_org};

        let mut conn = self.conn()?;

        let db_new_employee =
            DbNewEmployeeExOrg::from_domain(employee, &user.user_name, Utc::now().naive_utc());

        let id = conn.transaction::<i32, diesel::result::Error, _>(|conn| {
            let id = diesel::insert_into(employees_ex_org::table)
                .values(&db_new_employee)
                .returning(employees_ex_org::id)
                .get_result::<i32>(conn)?;

            let regions = employee
                .regions
                .iter()
                .map(|region| DbNewAddInRegion {
                    employee_ex_org_id: id,
                    department_id: region.department_id.as_str(),
                    working_in_timesheet: region.working_in_timesheet,
                })
                .collect::<Vec<_>>();

            if !regions.is_empty() {
                diesel::insert_into(employee_ex_org_add_in_regions::table)
                    .values(&regions)
                    .execute(conn)?;
            }

            Ok(id)
        })?;

        log::info!(
            "External employee {id} added by {}@{}",
            user.user_name,
            user.machine_name
        );

        Ok(EmployeeExOrgId::new(id)?)
    }

    fn update_employee_ex_org(
        &self,
        employee: &EmployeeExOrg,
        department_id: &DepartmentId,
        working_in_region: bool,
        user: &LocalUserData,
    ) -> RepositoryResult<()> {
        use crate::schema::{employee_ex_org_add_in_regions, employees_ex_org};

        let id = employee.persisted_id().ok_or(RepositoryError::NotFound)?;

        let mut conn = self.conn()?;

        let db_new_employee =
            DbNewEmployeeExOrg::from_domain(employee, &user.user_name, Utc::now().naive_utc());
        let db_update: DbUpdateEmployeeExOrg = (&db_new_employee).into();

        let region = DbNewAddInRegion {
            employee_ex_org_id: id.get(),
            department_id: department_id.as_str(),
            working_in_timesheet: working_in_region,
        };

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let updated = diesel::update(employees_ex_org::table.find(id.get()))
                .set(&db_update)
                .execute(conn)?;

            if updated == 0 {
                return Err(RepositoryError::NotFound);
            }

            diesel::insert_into(employee_ex_org_add_in_regions::table)
                .values(&region)
                .on_conflict((
                    employee_ex_org_add_in_regions::employee_ex_org_id,
                    employee_ex_org_add_in_regions::department_id,
                ))
                .do_update()
                .set(
                    employee_ex_org_add_in_regions::working_in_timesheet
                        .eq(excluded(employee_ex_org_add_in_regions::working_in_timesheet)),
                )
                .execute(conn)?;

            Ok(())
        })?;

        log::info!(
            "External employee {id} updated by {}@{} (department {department_id}, working in region: {working_in_region})",
            user.user_name,
            user.machine_name
        );

        Ok(())
    }
}
