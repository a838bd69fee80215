//! Core data models for the Leave Entitlement Engine.

mod audit;
mod employee;
mod entitlement;

pub use audit::{
    AuditStep, AuditTrace, AuditWarning, WARNING_ANNIVERSARY_BEFORE_HIRE, WARNING_INVALID_DATE,
};
pub use employee::Employee;
pub use entitlement::{EmployeeEntitlementReport, YearEntitlement};
