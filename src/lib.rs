mod arithmetic;
mod consts;
mod grid;
mod page;
mod prelude;
pub mod render;
mod types;

pub use arithmetic::{days_in_month, is_leap_year, weekday};
pub use consts::*;
pub use grid::{DayCell, MonthGrid, WeekRow, YearGrid, month_grid, year_grid};
pub use page::{Page, PageError, YearBounds};
pub use types::{Day, Month, Weekday};

use crate::prelude::*;

/// Broad classes of failure, shared by the core and the page layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// A month, day or year the calendar tables cannot place
    #[display(fmt = "invalid argument")]
    InvalidArgument,
    /// A requested year outside the configured page bounds
    #[display(fmt = "range validation")]
    RangeValidation,
}

/// Errors raised by the date arithmetic and grid builder.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(
        fmt = "Unsupported year: {} (must be {}-{})",
        "_0",
        MIN_SUPPORTED_YEAR,
        MAX_SUPPORTED_YEAR
    )]
    UnsupportedYear(u16),
    #[display(fmt = "Invalid weekday index: {} (must be 0-6)", "_0")]
    InvalidWeekday(u8),
}

impl CalendarError {
    /// Every core failure is an invalid argument; nothing is transient.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMonth(_)
            | Self::InvalidDay { .. }
            | Self::UnsupportedYear(_)
            | Self::InvalidWeekday(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl std::error::Error for CalendarError {}
