/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Columns in a week row, Monday through Sunday
pub const DAYS_PER_WEEK: usize = 7;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Weekday offset of each month (index 0 is January)
pub(crate) const MONTH_CODES: [u8; 12] = [0, 3, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5];

/// First century covered by `CENTURY_CODES` (the 1500s)
pub(crate) const FIRST_CENTURY: u16 = 15;

/// Weekday offset of each century, starting at `FIRST_CENTURY`
pub(crate) const CENTURY_CODES: [u8; 9] = [
    0, // 1500s
    6, // 1600s
    4, // 1700s
    2, // 1800s
    0, // 1900s
    6, // 2000s
    4, // 2100s
    2, // 2200s
    0, // 2300s
];

/// Earliest year the weekday tables can place (inclusive)
pub const MIN_SUPPORTED_YEAR: u16 = FIRST_CENTURY * CENTURY_CYCLE;
/// Latest year the weekday tables can place (inclusive)
pub const MAX_SUPPORTED_YEAR: u16 =
    (FIRST_CENTURY + CENTURY_CODES.len() as u16) * CENTURY_CYCLE - 1;

/// First year of the Gregorian calendar, default lower bound for a page request
pub const GREGORIAN_ADOPTION_YEAR: u16 = 1582;
/// Default upper bound for a page request, leaving room for the following year
pub const DEFAULT_MAX_YEAR: u16 = MAX_SUPPORTED_YEAR - 1;
