//! Payday calendar math.
//!
//! Payday recurs monthly on a fixed day-of-month. The "next" payday is the
//! soonest such date at or after the reference date, and the day count to it
//! is floored to 1 so downstream per-day division never sees a zero divisor.

use chrono::{Datelike, NaiveDate};

use crate::errors::BudgetError;

/// Day-of-month the payday falls on unless configured otherwise.
pub const DEFAULT_PAYDAY_DAY: u32 = 11;

/// Validates a configurable payday day.
///
/// Restricted to `1..=28` so the payday exists in every Gregorian month.
pub fn validate_payday_day(day: u32) -> Result<u32, BudgetError> {
    if (1..=28).contains(&day) {
        Ok(day)
    } else {
        Err(BudgetError::InvalidPaydayDay(day))
    }
}

/// Returns the next payday at or after `reference`.
///
/// The candidate is the payday of the reference month; once the reference is
/// strictly past it, the candidate moves to the following month, rolling
/// December over into January of the next year.
pub fn next_payday(reference: NaiveDate, day: u32) -> Result<NaiveDate, BudgetError> {
    let day = validate_payday_day(day)?;
    let (mut year, mut month) = (reference.year(), reference.month());
    if reference.day() > day {
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    // Unreachable for a validated day, but calendar construction keeps an
    // explicit failure path instead of panicking.
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| BudgetError::Calendar(format!("no day {day} in {year}-{month:02}")))
}

/// Whole days from `reference` to the next payday, floored to a minimum of 1.
///
/// On the payday itself the raw span is 0 and the floor yields 1.
pub fn days_until_payday(reference: NaiveDate, day: u32) -> Result<i64, BudgetError> {
    let payday = next_payday(reference, day)?;
    let days = payday.signed_duration_since(reference).num_days();
    Ok(days.max(1))
}
