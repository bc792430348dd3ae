//! Closed-form Gregorian date arithmetic.
//!
//! Weekdays come from a perpetual-calendar sum of fixed codes for the year
//! within its century, the month and the century, reduced modulo 7. No
//! state survives between calls.

use crate::CalendarError;
use crate::consts::{
    CENTURY_CODES, CENTURY_CYCLE, DAYS_PER_WEEK, FIRST_CENTURY, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MARCH, MONTH_CODES,
};
use crate::types::{Day, Month, Weekday};

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12.
pub fn days_in_month(year: u16, month: u8) -> Result<u8, CalendarError> {
    Ok(Month::new(month)?.days_in(year))
}

/// Day of the week `year-month-day` falls on, Monday first.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay` for a
/// date that does not exist, and `CalendarError::UnsupportedYear` when the
/// year's century has no entry in the century table (before 1500 or after 2399).
pub fn weekday(year: u16, month: u8, day: u8) -> Result<Weekday, CalendarError> {
    let day = Day::new(day, year, month)?;
    let month = Month::new(month)?;
    let century = century_code(year)?;
    Ok(weekday_unchecked(year, month, day, century))
}

fn century_code(year: u16) -> Result<u8, CalendarError> {
    (year / CENTURY_CYCLE)
        .checked_sub(FIRST_CENTURY)
        .and_then(|offset| CENTURY_CODES.get(usize::from(offset)))
        .copied()
        .ok_or(CalendarError::UnsupportedYear(year))
}

const fn year_code(year: u16) -> u8 {
    let yy = year % CENTURY_CYCLE;
    ((yy + yy / 4) % DAYS_PER_WEEK as u16) as u8
}

fn weekday_unchecked(year: u16, month: Month, day: Day, century: u8) -> Weekday {
    let leap_correction = i16::from(is_leap_year(year) && month.get() < MARCH);
    let sum = i16::from(year_code(year))
        + i16::from(MONTH_CODES[usize::from(month.get() - 1)])
        + i16::from(century)
        + i16::from(day.get())
        - leap_correction;
    // rem_euclid keeps the result in 0..7
    let raw = sum.rem_euclid(DAYS_PER_WEEK as i16) as u8;
    Weekday::from_sunday_index(raw)
}
