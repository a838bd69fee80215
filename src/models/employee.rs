//! Employee model.
//!
//! An employee carries two reference dates: the hire date, which drives the
//! company seniority bonus, and the tenure anchor date, which drives the
//! working-years tier. They differ when prior employment counts toward
//! tenure but not toward company-specific benefits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an employee whose leave entitlement is being computed.
///
/// A date that was absent or could not be read as a calendar date is `None`.
/// The engine treats such an employee as having no entitlement rather than
/// failing the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Identifier, unique within one batch.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The date the employee joined the company.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// The date from which total working tenure is measured.
    #[serde(default)]
    pub tenure_anchor_date: Option<NaiveDate>,
}

impl Employee {
    /// Creates an employee with both reference dates present.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let hired = NaiveDate::from_ymd_opt(2015, 3, 1).unwrap();
    /// let anchor = NaiveDate::from_ymd_opt(2008, 9, 1).unwrap();
    /// let employee = Employee::new("E001", "Li Wei", hired, anchor);
    ///
    /// assert_eq!(employee.hire_date, Some(hired));
    /// assert!(employee.has_valid_dates());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        tenure_anchor_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hire_date: Some(hire_date),
            tenure_anchor_date: Some(tenure_anchor_date),
        }
    }

    /// Returns true if both reference dates are present.
    pub fn has_valid_dates(&self) -> bool {
        self.hire_date.is_some() && self.tenure_anchor_date.is_some()
    }
}
