//! Entitlement for one employee in one calendar year.
//!
//! A year's entitlement combines three things evaluated as of the year's
//! cutoff date:
//!
//! - the working-years tier, accrued day by day through the year;
//! - when the employee moved into their tier during the year, a split of the
//!   year at the tenure anniversary, with days before it accruing at the
//!   lower band's rate and days from it (inclusive) at the new rate;
//! - the company seniority bonus.
//!
//! The sum is capped once, by the policy's annual cap.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::seniority_bonus::seniority_bonus;
use super::tenure::{anniversary_in_year, days_between, end_of_year, start_of_year};
use super::work_tier::{WorkTier, resolve_work_tier};
use crate::config::LeavePolicy;
use crate::models::{
    AuditStep, AuditWarning, Employee, WARNING_ANNIVERSARY_BEFORE_HIRE, YearEntitlement,
};

/// Which rule path decided a year's entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualCase {
    /// Hire date or tenure anchor is missing.
    InvalidDates,
    /// The cutoff precedes the hire date.
    NotYetHired,
    /// Tenure at the cutoff is below the first accruing band.
    BelowFirstTier,
    /// The employee moved into their band during the year.
    TierCrossing,
    /// The whole employed part of the year accrues at one rate.
    SingleRate,
    /// The year precedes the hire year.
    BeforeHireYear,
}

impl AccrualCase {
    fn rule_id(self) -> &'static str {
        match self {
            AccrualCase::InvalidDates => "invalid_dates",
            AccrualCase::NotYetHired => "not_yet_hired",
            AccrualCase::BelowFirstTier => "below_first_tier",
            AccrualCase::TierCrossing => "tier_crossing",
            AccrualCase::SingleRate => "single_rate",
            AccrualCase::BeforeHireYear => "before_hire_year",
        }
    }
}

/// Day counts accrued at the prior band's rate (`before_days`) and at the
/// current band's rate (`after_days`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationSplit {
    /// Days before the tenure anniversary.
    pub before_days: i64,
    /// Days from the tenure anniversary (or hire, or January 1) to the cutoff, inclusive.
    pub after_days: i64,
}

/// The result of calculating one year, with its audit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearEntitlementResult {
    /// The capped entitlement.
    pub entitlement: YearEntitlement,
    /// The rule path taken.
    pub case: AccrualCase,
    /// The accrual day split.
    pub split: ProrationSplit,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Raised when the year hits the anniversary-before-hire ordering.
    pub warning: Option<AuditWarning>,
}

/// The date as of which `year` is evaluated: December 31 for years before
/// `now`'s year, otherwise `now` itself.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::cutoff_for_year;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
/// assert_eq!(cutoff_for_year(2023, now), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
/// assert_eq!(cutoff_for_year(2024, now), now);
/// ```
pub fn cutoff_for_year(year: i32, now: NaiveDate) -> NaiveDate {
    if year < now.year() {
        end_of_year(year).unwrap_or(now)
    } else {
        now
    }
}

/// Entitled days for `employee` in `year`, evaluated with `now` as the
/// current date.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::entitlement_for_year;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let hired = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
/// let employee = Employee::new("E001", "Zhang San", hired, hired);
/// let now = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
///
/// // 5 days of tier accrual plus a 4 day seniority bonus
/// let days = entitlement_for_year(&employee, 2018, now, &LeavePolicy::statutory());
/// assert_eq!(days, Decimal::from(9));
/// ```
pub fn entitlement_for_year(
    employee: &Employee,
    year: i32,
    now: NaiveDate,
    policy: &LeavePolicy,
) -> Decimal {
    calculate_year_entitlement(employee, year, now, policy)
        .entitlement
        .days
}

/// Calculates one year's entitlement and records how it was derived.
///
/// Years after `now`'s year are evaluated as of `now`.
pub fn calculate_year_entitlement(
    employee: &Employee,
    year: i32,
    now: NaiveDate,
    policy: &LeavePolicy,
) -> YearEntitlementResult {
    let cutoff = cutoff_for_year(year, now);
    let accrual = accrue(employee, cutoff, policy);

    let accrued = match accrual.tier {
        Some(tier) => {
            let prior = tier.prior_days.unwrap_or(Decimal::ZERO);
            let weighted = prior * Decimal::from(accrual.split.before_days)
                + tier.days * Decimal::from(accrual.split.after_days);
            weighted
                .checked_div(Decimal::from(policy.days_per_year))
                .unwrap_or(Decimal::ZERO)
        }
        None => Decimal::ZERO,
    };

    let uncapped = match accrual.tier {
        Some(_) => accrued + Decimal::from(accrual.seniority_bonus),
        None => Decimal::ZERO,
    };
    let days = uncapped.min(policy.annual_cap).max(Decimal::ZERO);

    let audit_step = AuditStep {
        year,
        rule_id: accrual.case.rule_id().to_string(),
        input: serde_json::json!({
            "employee_id": employee.id,
            "hire_date": employee.hire_date,
            "tenure_anchor_date": employee.tenure_anchor_date,
            "cutoff": cutoff,
        }),
        output: serde_json::json!({
            "tier_days": accrual.tier.map(|t| t.days.normalize().to_string()),
            "prior_tier_days": accrual.tier.and_then(|t| t.prior_days).map(|d| d.normalize().to_string()),
            "anniversary": accrual.anniversary,
            "before_days": accrual.split.before_days,
            "after_days": accrual.split.after_days,
            "seniority_bonus": accrual.seniority_bonus,
            "accrued": accrued.normalize().to_string(),
            "uncapped": uncapped.normalize().to_string(),
            "days": days.normalize().to_string(),
        }),
        reasoning: reasoning(&accrual, cutoff, accrued, uncapped, days, policy),
    };

    let warning = accrual.anniversary_before_hire.then(|| AuditWarning {
        year: Some(year),
        code: WARNING_ANNIVERSARY_BEFORE_HIRE.to_string(),
        message: format!(
            "Tenure anniversary {} precedes hire date {}; the employed part of {} accrues entirely at the new rate",
            accrual
                .anniversary
                .map(|d| d.to_string())
                .unwrap_or_default(),
            employee
                .hire_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            cutoff.year()
        ),
        severity: "low".to_string(),
    });

    YearEntitlementResult {
        entitlement: YearEntitlement { year, days },
        case: accrual.case,
        split: accrual.split,
        audit_step,
        warning,
    }
}

/// Intermediate values of one year's accrual.
#[derive(Debug, Clone, Copy)]
struct Accrual {
    case: AccrualCase,
    tier: Option<WorkTier>,
    seniority_bonus: u32,
    split: ProrationSplit,
    anniversary: Option<NaiveDate>,
    anniversary_before_hire: bool,
}

impl Accrual {
    fn nothing(case: AccrualCase) -> Self {
        Self {
            case,
            tier: None,
            seniority_bonus: 0,
            split: ProrationSplit::default(),
            anniversary: None,
            anniversary_before_hire: false,
        }
    }
}

fn accrue(employee: &Employee, cutoff: NaiveDate, policy: &LeavePolicy) -> Accrual {
    let (Some(hire), Some(anchor)) = (employee.hire_date, employee.tenure_anchor_date) else {
        return Accrual::nothing(AccrualCase::InvalidDates);
    };
    if hire > cutoff {
        return Accrual::nothing(AccrualCase::NotYetHired);
    }

    let bonus = seniority_bonus(Some(hire), cutoff, policy.days_per_year);
    let Some(tier) = resolve_work_tier(Some(anchor), cutoff, policy) else {
        return Accrual {
            seniority_bonus: bonus,
            ..Accrual::nothing(AccrualCase::BelowFirstTier)
        };
    };

    // The split is taken within the cutoff's calendar year.
    let year = cutoff.year();
    let hired_this_year = hire.year() == year;
    let period_start = if hired_this_year {
        hire
    } else {
        start_of_year(year).unwrap_or(hire)
    };

    let mut accrual = Accrual {
        case: AccrualCase::SingleRate,
        tier: Some(tier),
        seniority_bonus: bonus,
        split: ProrationSplit::default(),
        anniversary: None,
        anniversary_before_hire: false,
    };

    let anniversary = tier
        .crossing_year(anchor)
        .filter(|crossing| *crossing == year)
        .and_then(|_| anniversary_in_year(anchor, year));

    match anniversary {
        Some(anniversary) => {
            accrual.case = AccrualCase::TierCrossing;
            accrual.anniversary = Some(anniversary);
            if anniversary >= period_start {
                accrual.split = ProrationSplit {
                    before_days: days_between(period_start, anniversary),
                    after_days: days_between(anniversary, cutoff) + 1,
                };
            } else {
                // Only reachable when hired this year, after the anniversary.
                accrual.anniversary_before_hire = true;
                accrual.split = ProrationSplit {
                    before_days: 0,
                    after_days: days_between(hire, cutoff) + 1,
                };
            }
        }
        None if year >= hire.year() => {
            accrual.split = ProrationSplit {
                before_days: 0,
                after_days: days_between(period_start, cutoff) + 1,
            };
        }
        None => {
            accrual.case = AccrualCase::BeforeHireYear;
        }
    }

    accrual
}

fn reasoning(
    accrual: &Accrual,
    cutoff: NaiveDate,
    accrued: Decimal,
    uncapped: Decimal,
    days: Decimal,
    policy: &LeavePolicy,
) -> String {
    let Some(tier) = accrual.tier else {
        return match accrual.case {
            AccrualCase::InvalidDates => {
                "Hire date or tenure anchor date is missing - no entitlement".to_string()
            }
            AccrualCase::NotYetHired => format!("Not yet hired as of {} - no entitlement", cutoff),
            _ => format!(
                "Less than {} year(s) of tenure as of {} - no entitlement regardless of {} seniority day(s)",
                policy.tiers.first().map(|b| b.min_years).unwrap_or(1),
                cutoff,
                accrual.seniority_bonus
            ),
        };
    };

    let per_year = policy.days_per_year;
    let accrual_text = match (accrual.case, tier.prior_days) {
        (AccrualCase::TierCrossing, Some(prior)) => format!(
            "{} x {}/{} + {} x {}/{} = {}",
            prior.normalize(),
            accrual.split.before_days,
            per_year,
            tier.days.normalize(),
            accrual.split.after_days,
            per_year,
            accrued.normalize()
        ),
        _ => format!(
            "{} x {}/{} = {}",
            tier.days.normalize(),
            accrual.split.after_days,
            per_year,
            accrued.normalize()
        ),
    };

    let mut text = format!(
        "As of {}: {}; plus {} seniority day(s) = {}",
        cutoff,
        accrual_text,
        accrual.seniority_bonus,
        uncapped.normalize()
    );
    if days < uncapped {
        text.push_str(&format!(", capped at {}", days.normalize()));
    }
    text
}
