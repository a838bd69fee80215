//! Company seniority bonus.
//!
//! One extra day of leave per whole 365-day period since hire, independent
//! of the tenure anchor and of the working-years tier. The bonus is uncapped
//! here; the annual cap is applied to the combined year total.

use chrono::NaiveDate;

use super::tenure::days_between;

/// Whole `days_per_year` periods elapsed from hire to `cutoff`.
///
/// Zero when the hire date is absent or after the cutoff.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::seniority_bonus;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
/// let cutoff = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
/// assert_eq!(seniority_bonus(Some(hired), cutoff, 365), 4);
/// assert_eq!(seniority_bonus(None, cutoff, 365), 0);
/// ```
pub fn seniority_bonus(hire_date: Option<NaiveDate>, cutoff: NaiveDate, days_per_year: u32) -> u32 {
    let Some(hire_date) = hire_date else {
        return 0;
    };
    if days_per_year == 0 {
        return 0;
    }

    let periods = days_between(hire_date, cutoff).div_euclid(i64::from(days_per_year));
    u32::try_from(periods.max(0)).unwrap_or(u32::MAX)
}
