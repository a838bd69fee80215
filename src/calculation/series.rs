//! Entitlement series for a batch of employees.
//!
//! Each employee gets one entitlement per calendar year from the policy's
//! series start year through `now`'s year, plus a half-day-rounded total.
//! A malformed employee produces an all-zero series and a warning; it never
//! stops the rest of the batch.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use super::rounding::round_to_half_day;
use super::year_entitlement::calculate_year_entitlement;
use crate::config::LeavePolicy;
use crate::models::{
    AuditTrace, AuditWarning, Employee, EmployeeEntitlementReport, WARNING_INVALID_DATE,
};

/// Decimal places kept when summing yearly days before half-day rounding.
///
/// Each year is a quotient over `days_per_year` carried to 28 significant
/// digits, so an exact whole or half day can sum to a hair below it. A
/// non-exact sum sits at least `1 / (2 * days_per_year)` away from the
/// nearest half day, far above this scale.
const TOTAL_SCALE: u32 = 12;

/// The calendar years evaluated when the current date is `now`.
///
/// Empty when `now` precedes the series start year.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::evaluation_years;
/// use leave_engine::config::LeavePolicy;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2021, 4, 1).unwrap();
/// let years: Vec<i32> = evaluation_years(&LeavePolicy::statutory(), now).collect();
/// assert_eq!(years, vec![2018, 2019, 2020, 2021]);
/// ```
pub fn evaluation_years(policy: &LeavePolicy, now: NaiveDate) -> RangeInclusive<i32> {
    policy.series_start_year..=now.year()
}

/// Builds the entitlement series for one employee.
pub fn build_employee_report(
    employee: &Employee,
    now: NaiveDate,
    policy: &LeavePolicy,
) -> EmployeeEntitlementReport {
    let mut entitlements = Vec::new();
    let mut audit_trace = AuditTrace::default();

    if !employee.has_valid_dates() {
        audit_trace.warnings.push(AuditWarning {
            year: None,
            code: WARNING_INVALID_DATE.to_string(),
            message: format!(
                "Employee '{}' is missing a hire date or tenure anchor date; no entitlement computed",
                employee.id
            ),
            severity: "high".to_string(),
        });
    }

    for year in evaluation_years(policy, now) {
        let result = calculate_year_entitlement(employee, year, now, policy);
        entitlements.push(result.entitlement);
        audit_trace.steps.push(result.audit_step);
        audit_trace.warnings.extend(result.warning);
    }

    let sum: Decimal = entitlements.iter().map(|e| e.days).sum();

    EmployeeEntitlementReport {
        employee: employee.clone(),
        entitlements,
        total: round_to_half_day(sum.round_dp(TOTAL_SCALE)),
        audit_trace,
    }
}

/// Builds entitlement reports for a batch, in input order.
///
/// `now` is used for every employee and year so the whole batch shares one
/// cutoff.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::build_reports;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let hired = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
/// let employees = vec![Employee::new("E001", "Zhang San", hired, hired)];
/// let now = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
///
/// let reports = build_reports(&employees, now, &LeavePolicy::statutory());
/// assert_eq!(reports[0].entitlements.len(), 1);
/// assert_eq!(reports[0].total, Decimal::from(9));
/// ```
pub fn build_reports(
    employees: &[Employee],
    now: NaiveDate,
    policy: &LeavePolicy,
) -> Vec<EmployeeEntitlementReport> {
    debug!(
        employees = employees.len(),
        as_of = %now,
        series_start_year = policy.series_start_year,
        "Building entitlement series"
    );

    employees
        .iter()
        .map(|employee| build_employee_report(employee, now, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WARNING_ANNIVERSARY_BEFORE_HIRE;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy() -> LeavePolicy {
        LeavePolicy::statutory()
    }

    #[test]
    fn test_years_run_from_start_to_now_inclusive() {
        let years: Vec<i32> = evaluation_years(&policy(), date(2020, 1, 1)).collect();
        assert_eq!(years, vec![2018, 2019, 2020]);
    }

    #[test]
    fn test_no_years_before_series_start() {
        assert!(evaluation_years(&policy(), date(2017, 6, 1)).next().is_none());
    }

    #[test]
    fn test_report_has_one_entry_per_year_in_order() {
        let e = Employee::new("E001", "Zhang San", date(2010, 5, 1), date(2010, 5, 1));
        let report = build_employee_report(&e, date(2022, 8, 1), &policy());

        let years: Vec<i32> = report.entitlements.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2018, 2019, 2020, 2021, 2022]);
        assert_eq!(report.audit_trace.steps.len(), 5);
        assert_eq!(report.employee, e);
    }

    #[test]
    fn test_years_before_hire_are_zero() {
        let e = Employee::new("E001", "Zhang San", date(2020, 1, 1), date(2010, 1, 1));
        let report = build_employee_report(&e, date(2021, 12, 31), &policy());

        assert_eq!(report.days_for(2018), Some(Decimal::ZERO));
        assert_eq!(report.days_for(2019), Some(Decimal::ZERO));
        assert!(report.days_for(2020).unwrap() > Decimal::ZERO);
    }

    #[test]
    fn test_total_is_rounded_down_to_half_day() {
        // 2019: 5 x 184/365 = 2.52...
        // 2020: 5 x 366/365 + 1 seniority day = 6.01...
        let e = Employee::new("E001", "Zhang San", date(2019, 7, 1), date(2015, 1, 1));
        let report = build_employee_report(&e, date(2020, 12, 31), &policy());

        let unrounded = report.unrounded_total();
        assert!(unrounded > dec("8.5") && unrounded < dec("9"));
        assert_eq!(report.total, dec("8.5"));
    }

    #[test]
    fn test_total_landing_on_whole_day_is_not_rounded_down() {
        // 2018: 5 x 361/365, 2019: 5 x 365/365 + 1, 2020: 10 x 366/365 + 2,
        // 2021: 10 x 1/365 + 2. Accrual numerators sum to 7300/365 = 20.
        let e = Employee::new("E001", "Zhang San", date(2018, 1, 5), date(2010, 1, 1));
        let report = build_employee_report(&e, date(2021, 1, 1), &policy());

        assert_eq!(report.days_for(2019), Some(dec("6")));
        assert_eq!(report.total, dec("25"));
    }

    #[test]
    fn test_missing_anchor_gives_all_zero_series_and_warning() {
        let mut e = Employee::new("E001", "Zhang San", date(2015, 1, 1), date(2015, 1, 1));
        e.tenure_anchor_date = None;
        let report = build_employee_report(&e, date(2024, 6, 30), &policy());

        assert!(report.entitlements.iter().all(|y| y.days == Decimal::ZERO));
        assert_eq!(report.entitlements.len(), 7);
        assert_eq!(report.total, Decimal::ZERO);
        assert!(report.audit_trace.has_warning(WARNING_INVALID_DATE));
    }

    #[test]
    fn test_anniversary_before_hire_is_flagged_in_trace() {
        let e = Employee::new("E001", "Zhang San", date(2019, 9, 1), date(2009, 6, 15));
        let report = build_employee_report(&e, date(2020, 1, 1), &policy());

        assert!(report.audit_trace.has_warning(WARNING_ANNIVERSARY_BEFORE_HIRE));
        assert!(!report.audit_trace.has_warning(WARNING_INVALID_DATE));
    }

    #[test]
    fn test_batch_preserves_input_order_and_duplicates() {
        let a = Employee::new("B", "Second", date(2012, 1, 1), date(2012, 1, 1));
        let b = Employee::new("A", "First", date(2016, 1, 1), date(2016, 1, 1));
        let reports = build_reports(&[a.clone(), b, a], date(2020, 6, 1), &policy());

        let ids: Vec<&str> = reports.iter().map(|r| r.employee.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "B"]);
        assert_eq!(reports[0], reports[2]);
    }

    #[test]
    fn test_bad_record_does_not_affect_neighbours() {
        let good = Employee::new("E001", "Zhang San", date(2015, 1, 1), date(2015, 1, 1));
        let mut bad = good.clone();
        bad.id = "E002".to_string();
        bad.hire_date = None;

        let alone = build_reports(std::slice::from_ref(&good), date(2018, 12, 31), &policy());
        let mixed = build_reports(&[bad, good], date(2018, 12, 31), &policy());

        assert_eq!(mixed[0].total, Decimal::ZERO);
        assert_eq!(mixed[1], alone[0]);
    }

    #[test]
    fn test_identical_inputs_give_identical_reports() {
        let employees = vec![
            Employee::new("E001", "Zhang San", date(2009, 6, 15), date(1999, 6, 15)),
            Employee::new("E002", "Li Si", date(2021, 3, 1), date(2021, 3, 1)),
        ];
        let now = date(2023, 11, 30);

        assert_eq!(
            build_reports(&employees, now, &policy()),
            build_reports(&employees, now, &policy())
        );
    }

    #[test]
    fn test_empty_batch_gives_empty_output() {
        assert!(build_reports(&[], date(2024, 1, 1), &policy()).is_empty());
    }
}
