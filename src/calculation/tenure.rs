//! Calendar arithmetic shared by the entitlement calculations.
//!
//! Tenure is measured in fractional years using month arithmetic: the whole
//! months between two dates plus the elapsed fraction of the month that
//! straddles the later date. Adding months clamps to the last day of the
//! target month, so a Feb 29 anchor reaches its anniversary on Feb 28 in
//! common years.

use chrono::{Datelike, Months, NaiveDate};

/// Signed number of days from `start` to `end`.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::days_between;
/// use chrono::NaiveDate;
///
/// let jan1 = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
/// let dec31 = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();
/// assert_eq!(days_between(jan1, dec31), 364);
/// assert_eq!(days_between(dec31, jan1), -364);
/// ```
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Fractional years from `start` to `end`; negative when `end` is earlier.
///
/// Returns `None` only when month arithmetic leaves chrono's date range.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::fractional_years_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2019, 12, 1).unwrap();
/// let years = fractional_years_between(start, end).unwrap();
/// assert!((years - 119.0 / 12.0).abs() < 1e-12);
/// ```
pub fn fractional_years_between(start: NaiveDate, end: NaiveDate) -> Option<f64> {
    month_difference(end, start).map(|months| months / 12.0)
}

/// The date in `year` with the anchor's month and day.
pub fn anniversary_in_year(anchor: NaiveDate, year: i32) -> Option<NaiveDate> {
    shift_months(anchor, (year - anchor.year()) * 12)
}

/// January 1 of `year`.
pub fn start_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// December 31 of `year`.
pub fn end_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Months from `b` to `a` (positive when `a` is later).
fn month_difference(a: NaiveDate, b: NaiveDate) -> Option<f64> {
    if a.day() < b.day() {
        return month_difference(b, a).map(|m| -m);
    }

    let whole = (b.year() - a.year()) * 12 + (b.month() as i32 - a.month() as i32);
    let anchor = shift_months(a, whole)?;
    let offset = days_between(anchor, b) as f64;

    let adjust = if b < anchor {
        let previous = shift_months(a, whole - 1)?;
        offset / days_between(previous, anchor) as f64
    } else {
        let next = shift_months(a, whole + 1)?;
        offset / days_between(anchor, next) as f64
    };

    let months = -(whole as f64 + adjust);
    // -0.0 for identical dates
    Some(if months == 0.0 { 0.0 } else { months })
}
