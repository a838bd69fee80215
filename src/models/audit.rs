//! Audit trail models.
//!
//! Every computed year records the inputs and intermediate values that
//! produced its entitlement, so an HR reviewer can see why an employee got
//! the days they did.

use serde::{Deserialize, Serialize};

/// Warning code for an employee whose hire date or tenure anchor is missing.
pub const WARNING_INVALID_DATE: &str = "INVALID_DATE";

/// Warning code for a crossing year in which the tenure anniversary falls
/// before the hire date.
pub const WARNING_ANNIVERSARY_BEFORE_HIRE: &str = "ANNIVERSARY_BEFORE_HIRE";

/// A single step in the audit trace, one per evaluated year.
///
/// # Example
///
/// ```
/// use leave_engine::models::AuditStep;
///
/// let step = AuditStep {
///     year: 2019,
///     rule_id: "tier_crossing".to_string(),
///     input: serde_json::json!({"cutoff": "2019-12-31"}),
///     output: serde_json::json!({"days": "7.5"}),
///     reasoning: "Tier rose from 5 to 10 on 2019-06-15".to_string(),
/// };
/// assert_eq!(step.year, 2019);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The evaluation year this step describes.
    pub year: i32,
    /// Identifier of the rule path that decided the year.
    pub rule_id: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never change the computed numbers; they flag records a reviewer
/// should look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// The year the warning was raised for, if it is year specific.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year: Option<i32>,
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for one employee's entitlement series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The per-year calculation steps, in year order.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if any warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}
