//! Working-years tier resolution.
//!
//! The base accrual rate depends on total working tenure measured from the
//! employee's tenure anchor date. Under the statutory policy tenure below one
//! year accrues nothing, then 5, 10 and 15 days a year from 1, 10 and 20 years.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tenure::fractional_years_between;
use crate::config::LeavePolicy;

/// The accruing band an employee falls in on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTier {
    /// Annual accrual for the band.
    pub days: Decimal,
    /// Tenure in whole years at which the band starts.
    pub min_years: u32,
    /// Annual accrual of the band below, when that band also accrues.
    pub prior_days: Option<Decimal>,
}

impl WorkTier {
    /// The calendar year in which the employee moved into this band from an
    /// accruing band below it.
    ///
    /// The first accruing band has no crossing year: the year it is reached
    /// is not split.
    pub fn crossing_year(&self, tenure_anchor_date: NaiveDate) -> Option<i32> {
        self.prior_days
            .map(|_| tenure_anchor_date.year() + self.min_years as i32)
    }
}

/// Resolves the band for the tenure elapsed between the anchor and the cutoff.
///
/// Returns `None` when the anchor is absent or tenure is below the first band.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::resolve_work_tier;
/// use leave_engine::config::LeavePolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = LeavePolicy::statutory();
/// let anchor = NaiveDate::from_ymd_opt(2009, 6, 15).unwrap();
/// let cutoff = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();
///
/// let tier = resolve_work_tier(Some(anchor), cutoff, &policy).unwrap();
/// assert_eq!(tier.days, Decimal::from(10));
/// assert_eq!(tier.prior_days, Some(Decimal::from(5)));
/// assert_eq!(tier.crossing_year(anchor), Some(2019));
/// ```
pub fn resolve_work_tier(
    tenure_anchor_date: Option<NaiveDate>,
    cutoff: NaiveDate,
    policy: &LeavePolicy,
) -> Option<WorkTier> {
    let years = fractional_years_between(tenure_anchor_date?, cutoff)?;

    let index = policy
        .tiers
        .iter()
        .rposition(|band| years >= f64::from(band.min_years))?;

    let band = policy.tiers[index];
    let prior_days = index
        .checked_sub(1)
        .map(|i| policy.tiers[i].days)
        .filter(|days| *days > Decimal::ZERO);

    Some(WorkTier {
        days: band.days,
        min_years: band.min_years,
        prior_days,
    })
}

/// Annual base accrual for the tenure at `cutoff`; zero below the first band
/// or when the anchor is absent.
pub fn work_tier_days(
    tenure_anchor_date: Option<NaiveDate>,
    cutoff: NaiveDate,
    policy: &LeavePolicy,
) -> Decimal {
    resolve_work_tier(tenure_anchor_date, cutoff, policy)
        .map(|tier| tier.days)
        .unwrap_or(Decimal::ZERO)
}
