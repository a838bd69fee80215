//! Request types for the Leave Entitlement Engine API.
//!
//! This module defines the JSON request structures for the `/entitlements` endpoint.
//! Employee dates are read leniently: a date that is absent, blank or not a real
//! calendar date is carried as missing for that employee only, so one bad row
//! never rejects the whole batch.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Date layouts accepted for employee dates.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Request body for the `/entitlements` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// The date to evaluate as "today"; defaults to the server's local date.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// The employees to compute, in output order.
    pub employees: Vec<EmployeeRequest>,
}

/// Employee information in an entitlement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Identifier, unique within the request.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Hire date as `YYYY-MM-DD` or `YYYY/MM/DD`.
    #[serde(default)]
    pub hire_date: Option<String>,
    /// Tenure anchor date as `YYYY-MM-DD` or `YYYY/MM/DD`.
    #[serde(default)]
    pub tenure_anchor_date: Option<String>,
}

impl EntitlementRequest {
    /// Splits the request into its evaluation date and validated employees.
    ///
    /// Fails on blank or repeated employee ids.
    pub fn into_parts(self) -> EngineResult<(Option<NaiveDate>, Vec<Employee>)> {
        let mut seen = HashSet::new();
        let mut employees = Vec::with_capacity(self.employees.len());

        for request in self.employees {
            if request.id.trim().is_empty() {
                return Err(EngineError::InvalidEmployee {
                    field: "id".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
            if !seen.insert(request.id.clone()) {
                return Err(EngineError::DuplicateEmployee { id: request.id });
            }
            employees.push(request.into());
        }

        Ok((self.as_of, employees))
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            hire_date: req.hire_date.as_deref().and_then(parse_calendar_date),
            tenure_anchor_date: req.tenure_anchor_date.as_deref().and_then(parse_calendar_date),
        }
    }
}

/// Parses a calendar date, returning `None` for blank or invalid input.
///
/// # Examples
///
/// ```
/// use leave_engine::api::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2015, 3, 9);
/// assert_eq!(parse_calendar_date("2015-03-09"), expected);
/// assert_eq!(parse_calendar_date("2015/03/09"), expected);
/// assert_eq!(parse_calendar_date("2015-02-30"), None);
/// ```
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
