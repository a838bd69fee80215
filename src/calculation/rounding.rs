//! Half-day rounding of accumulated leave.

use rust_decimal::Decimal;

/// Rounds down to the nearest half day.
///
/// A fractional remainder of at least one half becomes exactly one half;
/// anything less is dropped. The result is never larger than the input.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::round_to_half_day;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// assert_eq!(round_to_half_day(dec("7.3")), dec("7"));
/// assert_eq!(round_to_half_day(dec("7.9")), dec("7.5"));
/// ```
pub fn round_to_half_day(days: Decimal) -> Decimal {
    let whole = days.floor();
    let half = Decimal::new(5, 1);
    if days - whole >= half {
        whole + half
    } else {
        whole
    }
}
