use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::employee::EmployeeEdits;
use crate::domain::types::EmployeeName;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Values typed into the employee card.
pub struct EmployeeForm {
    /// Full name of the employee.
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    /// Pass card number, empty when the employee has none.
    #[validate(length(max = 64))]
    #[serde(default)]
    pub card_number: String,
    /// Free-form note.
    #[validate(length(max = 1024))]
    #[serde(default)]
    pub description: String,
    /// Date the employee started working.
    pub date_employment: NaiveDate,
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl EmployeeForm {
    /// Validates the form and converts it into edits, rejecting employment
    /// dates in the future.
    pub fn into_edits(self, today: NaiveDate) -> Result<EmployeeEdits, FormError> {
        self.validate()?;

        if self.date_employment > today {
            return Err(FormError::InvalidEmploymentDate);
        }

        let full_name = EmployeeName::new(self.full_name).map_err(|_| FormError::InvalidName)?;

        Ok(EmployeeEdits {
            full_name,
            card_number: optional_text(&self.card_number),
            description: optional_text(&self.description),
            date_employment: self.date_employment,
        })
    }
}
