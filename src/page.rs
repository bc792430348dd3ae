use serde::Serialize;
use tracing::debug;

use crate::consts::{
    DEFAULT_MAX_YEAR, GREGORIAN_ADOPTION_YEAR, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR,
};
use crate::grid::{YearGrid, year_grid};
use crate::{CalendarError, ErrorKind};

/// Error type for page requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// Requested year falls outside the configured bounds.
    #[error("Year {year} is out of range (must be {min}-{max})")]
    YearOutOfRange { year: u16, min: u16, max: u16 },

    /// Bounds that would put a neighbouring year outside the weekday tables.
    #[error("Invalid year bounds {min}-{max}")]
    InvalidBounds { min: u16, max: u16 },

    /// Error building a calendar grid.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl PageError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::YearOutOfRange { .. } => ErrorKind::RangeValidation,
            Self::InvalidBounds { .. } => ErrorKind::InvalidArgument,
            Self::Calendar(err) => err.kind(),
        }
    }
}

/// Inclusive range of years a page may be requested for.
///
/// A page also shows the year before and after the request, so both
/// neighbours of every accepted year must fall inside the weekday tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearBounds {
    min: u16,
    max: u16,
}

impl YearBounds {
    /// # Errors
    /// Returns `PageError::InvalidBounds` if `min > max` or either neighbour
    /// year would be unsupported.
    pub const fn new(min: u16, max: u16) -> Result<Self, PageError> {
        if min > max || min <= MIN_SUPPORTED_YEAR || max >= MAX_SUPPORTED_YEAR {
            return Err(PageError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> u16 {
        self.min
    }

    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Validates a requested year before any calendar work is done.
    ///
    /// # Errors
    /// Returns `PageError::YearOutOfRange` if `year` is outside the bounds.
    pub fn check(&self, year: u16) -> Result<u16, PageError> {
        if !(self.min..=self.max).contains(&year) {
            return Err(PageError::YearOutOfRange {
                year,
                min: self.min,
                max: self.max,
            });
        }
        Ok(year)
    }
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            min: GREGORIAN_ADOPTION_YEAR,
            max: DEFAULT_MAX_YEAR,
        }
    }
}

/// Grids for a requested year and the years either side of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    year:  u16,
    years: [YearGrid; 3],
}

impl Page {
    /// Checks `year` against `bounds`, then builds grids for `year - 1`,
    /// `year` and `year + 1`.
    ///
    /// # Errors
    /// Returns `PageError::YearOutOfRange` before touching the calendar if
    /// `year` is out of bounds, or `PageError::Calendar` if a grid fails.
    pub fn compose(year: u16, bounds: &YearBounds) -> Result<Self, PageError> {
        let year = bounds.check(year)?;
        debug!(year, "composing calendar page");

        let years = [
            year_grid(year - 1)?,
            year_grid(year)?,
            year_grid(year + 1)?,
        ];
        Ok(Self { year, years })
    }

    /// The year the page was requested for
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Previous, requested and following year, in that order
    pub const fn years(&self) -> &[YearGrid; 3] {
        &self.years
    }
}
