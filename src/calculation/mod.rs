//! Calculation logic for the Leave Entitlement Engine.
//!
//! This module contains the working-years tier resolution, the company
//! seniority bonus, the per-year entitlement with anniversary proration,
//! the per-employee series builder and half-day rounding. All functions are
//! pure: the same employee, year, current date and policy always give the
//! same result.

mod rounding;
mod seniority_bonus;
mod series;
mod tenure;
mod work_tier;
mod year_entitlement;

pub use rounding::round_to_half_day;
pub use seniority_bonus::seniority_bonus;
pub use series::{build_employee_report, build_reports, evaluation_years};
pub use tenure::{
    anniversary_in_year, days_between, end_of_year, fractional_years_between, start_of_year,
};
pub use work_tier::{WorkTier, resolve_work_tier, work_tier_days};
pub use year_entitlement::{
    AccrualCase, ProrationSplit, YearEntitlementResult, calculate_year_entitlement,
    cutoff_for_year, entitlement_for_year,
};
