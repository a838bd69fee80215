//! Entitlement result models.
//!
//! This module contains the per-year [`YearEntitlement`] value and the
//! per-employee [`EmployeeEntitlementReport`] produced by the series builder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditTrace, Employee};

/// Leave entitlement for one employee in one calendar year.
///
/// `days` is never negative and never above the policy's annual cap.
///
/// # Example
///
/// ```
/// use leave_engine::models::YearEntitlement;
/// use rust_decimal::Decimal;
///
/// let entitlement = YearEntitlement { year: 2019, days: Decimal::from(9) };
/// assert_eq!(entitlement.year, 2019);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntitlement {
    /// The calendar year.
    pub year: i32,
    /// Entitled days for the year, unrounded.
    pub days: Decimal,
}

/// The entitlement series for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeEntitlementReport {
    /// The employee the report is for.
    pub employee: Employee,
    /// One entry per evaluation year, in increasing year order.
    pub entitlements: Vec<YearEntitlement>,
    /// Sum of all yearly days, rounded down to the nearest half day.
    pub total: Decimal,
    /// How each year was derived.
    pub audit_trace: AuditTrace,
}

impl EmployeeEntitlementReport {
    /// Returns the entitlement for the given year, if it is part of the series.
    pub fn days_for(&self, year: i32) -> Option<Decimal> {
        self.entitlements
            .iter()
            .find(|e| e.year == year)
            .map(|e| e.days)
    }

    /// Returns the unrounded sum of all yearly entitlements.
    pub fn unrounded_total(&self) -> Decimal {
        self.entitlements.iter().map(|e| e.days).sum()
    }
}
