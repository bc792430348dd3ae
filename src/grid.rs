use serde::Serialize;

use crate::CalendarError;
use crate::arithmetic::weekday;
use crate::consts::{DAYS_PER_WEEK, MIN_DAY};
use crate::prelude::*;
use crate::types::{Day, Month, Weekday};

/// One cell of a week row: either a real date or padding outside the month.
/// Padding displays as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCell {
    #[display(fmt = "")]
    Empty,
    #[display(fmt = "{day}")]
    Day { day: Day, weekday: Weekday },
}

impl DayCell {
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Day of the month, or 0 for padding
    pub const fn day_number(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Day { day, .. } => day.get(),
        }
    }
}

/// Seven cells, Monday through Sunday.
pub type WeekRow = [DayCell; DAYS_PER_WEEK];

/// The weeks of a single month, padded so every row is full.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonthGrid {
    year:  u16,
    month: Month,
    weeks: Vec<WeekRow>,
}

impl MonthGrid {
    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// All cells in row-major order, padding included
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    /// Real dates in order, padding skipped
    pub fn days(&self) -> impl Iterator<Item = (Day, Weekday)> + '_ {
        self.cells().filter_map(|cell| match *cell {
            DayCell::Day { day, weekday } => Some((day, weekday)),
            DayCell::Empty => None,
        })
    }

    /// Empty cells before the first of the month
    pub fn leading_padding(&self) -> usize {
        self.cells().take_while(|cell| cell.is_empty()).count()
    }

    /// Empty cells after the last day of the month
    pub fn trailing_padding(&self) -> usize {
        self.weeks
            .iter()
            .rev()
            .flat_map(|week| week.iter().rev())
            .take_while(|cell| cell.is_empty())
            .count()
    }
}

/// The twelve month grids of one year, January first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct YearGrid {
    year:   u16,
    months: Vec<MonthGrid>,
}

impl YearGrid {
    pub const fn year(&self) -> u16 {
        self.year
    }

    pub fn months(&self) -> &[MonthGrid] {
        &self.months
    }

    /// Grid for a single month of this year
    pub fn month(&self, month: Month) -> &MonthGrid {
        &self.months[usize::from(month.get() - 1)]
    }
}

/// Builds the padded week grid for `month` of `year`.
///
/// Day 1 lands in its weekday column; the cells before it and after the
/// last day are [`DayCell::Empty`].
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` for a month outside 1-12 and
/// `CalendarError::UnsupportedYear` for a year the weekday tables cannot place.
pub fn month_grid(year: u16, month: u8) -> Result<MonthGrid, CalendarError> {
    let month = Month::new(month)?;
    let lead = weekday(year, month.get(), MIN_DAY)?.index();

    let mut cells = vec![DayCell::Empty; usize::from(lead)];
    for value in MIN_DAY..=month.days_in(year) {
        cells.push(DayCell::Day {
            day:     Day::new(value, year, month.get())?,
            weekday: weekday(year, month.get(), value)?,
        });
    }
    while !cells.len().is_multiple_of(DAYS_PER_WEEK) {
        cells.push(DayCell::Empty);
    }

    let weeks = cells
        .chunks_exact(DAYS_PER_WEEK)
        .map(|chunk| {
            let mut row = [DayCell::Empty; DAYS_PER_WEEK];
            row.copy_from_slice(chunk);
            row
        })
        .collect();

    Ok(MonthGrid { year, month, weeks })
}

/// Builds the grids for January through December of `year`.
///
/// # Errors
/// Returns `CalendarError::UnsupportedYear` for a year the weekday tables cannot place.
pub fn year_grid(year: u16) -> Result<YearGrid, CalendarError> {
    let months = Month::all()
        .map(|month| month_grid(year, month.get()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(YearGrid { year, months })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::days_in_month;
    use crate::consts::{MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};

    /// Checks every structural invariant of a month grid.
    fn assert_well_formed(grid: &MonthGrid) {
        let (year, month) = (grid.year(), grid.month().get());
        let expected_days = days_in_month(year, month).unwrap();
        let label = format!("{year:04}-{month:02}");

        assert!(!grid.weeks().is_empty(), "{label}: no weeks");

        let numbers: Vec<u8> = grid.days().map(|(day, _)| day.get()).collect();
        assert_eq!(
            numbers,
            (1..=expected_days).collect::<Vec<_>>(),
            "{label}: day sequence"
        );

        // Padding only at the edges: the non-empty cells form one contiguous run
        let total = grid.cells().count();
        assert_eq!(
            grid.leading_padding() + usize::from(expected_days) + grid.trailing_padding(),
            total,
            "{label}: interior padding"
        );
        assert!(grid.leading_padding() < DAYS_PER_WEEK, "{label}: empty first row");
        assert!(grid.trailing_padding() < DAYS_PER_WEEK, "{label}: empty last row");

        // Each day sits in the column matching its weekday
        for week in grid.weeks() {
            for (column, cell) in week.iter().enumerate() {
                if let DayCell::Day { weekday, .. } = cell {
                    assert_eq!(usize::from(weekday.index()), column, "{label}: column");
                }
            }
        }
    }

    #[test]
    fn test_month_grid_every_supported_month() {
        for year in MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR {
            for month in 1..=12 {
                assert_well_formed(&month_grid(year, month).unwrap());
            }
        }
    }

    #[test]
    fn test_month_grid_shapes() {
        struct TestCase {
            year: u16,
            month: u8,
            rows: usize,
            leading: usize,
            trailing: usize,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2021,
                month: 2,
                rows: 4,
                leading: 0,
                trailing: 0,
                description: "28-day February starting on Monday",
            },
            TestCase {
                year: 2024,
                month: 2,
                rows: 5,
                leading: 3,
                trailing: 3,
                description: "leap February starting on Thursday",
            },
            TestCase {
                year: 2000,
                month: 1,
                rows: 6,
                leading: 5,
                trailing: 6,
                description: "31-day month starting on Saturday",
            },
            TestCase {
                year: 2024,
                month: 9,
                rows: 6,
                leading: 6,
                trailing: 6,
                description: "30-day month starting on Sunday",
            },
            TestCase {
                year: 2015,
                month: 2,
                rows: 5,
                leading: 6,
                trailing: 1,
                description: "28-day February starting on Sunday",
            },
        ];

        for case in &cases {
            let grid = month_grid(case.year, case.month).unwrap();
            assert_eq!(grid.weeks().len(), case.rows, "{}", case.description);
            assert_eq!(grid.leading_padding(), case.leading, "{}", case.description);
            assert_eq!(grid.trailing_padding(), case.trailing, "{}", case.description);
        }
    }

    #[test]
    fn test_month_grid_first_row() {
        let grid = month_grid(2024, 2).unwrap();
        let first = grid.weeks()[0];
        assert!(first[..3].iter().all(DayCell::is_empty));
        assert_eq!(
            first[3],
            DayCell::Day {
                day: Day::new(1, 2024, 2).unwrap(),
                weekday: Weekday::Thursday
            }
        );
        assert_eq!(first[6].day_number(), 4);
    }

    #[test]
    fn test_month_grid_invalid_arguments() {
        assert!(matches!(
            month_grid(2024, 0),
            Err(CalendarError::InvalidMonth(0))
        ));
        assert!(matches!(
            month_grid(2024, 13),
            Err(CalendarError::InvalidMonth(13))
        ));
        assert!(matches!(
            month_grid(1499, 1),
            Err(CalendarError::UnsupportedYear(1499))
        ));
        assert!(matches!(
            month_grid(2400, 1),
            Err(CalendarError::UnsupportedYear(2400))
        ));
    }

    #[test]
    fn test_year_grid_has_twelve_months_in_order() {
        for year in [1582, 1600, 1900, 2000, 2024, 2398] {
            let grid = year_grid(year).unwrap();
            assert_eq!(grid.year(), year);
            assert_eq!(grid.months().len(), 12);
            for (i, month) in grid.months().iter().enumerate() {
                assert_eq!(usize::from(month.month().get()), i + 1);
                assert_eq!(month.year(), year);
            }
        }
    }

    #[test]
    fn test_year_grid_month_lookup() {
        let grid = year_grid(2024).unwrap();
        let feb = grid.month(Month::new(2).unwrap());
        assert_eq!(feb.days().count(), 29);
        assert_eq!(feb, &month_grid(2024, 2).unwrap());
    }

    #[test]
    fn test_year_grid_lower_boundary() {
        assert!(year_grid(1582).is_ok());
        assert!(matches!(
            year_grid(1499),
            Err(CalendarError::UnsupportedYear(1499))
        ));
    }

    #[test]
    fn test_year_grid_is_idempotent() {
        assert_eq!(year_grid(2024).unwrap(), year_grid(2024).unwrap());
    }

    #[test]
    fn test_day_cell_display() {
        assert_eq!(DayCell::Empty.to_string(), "");
        let cell = DayCell::Day {
            day: Day::new(17, 2024, 5).unwrap(),
            weekday: Weekday::Friday,
        };
        assert_eq!(cell.to_string(), "17");
        assert_eq!(DayCell::Empty.day_number(), 0);
        assert!(!cell.is_empty());
    }

    #[test]
    fn test_month_grid_serde() {
        let grid = month_grid(2021, 2).unwrap();
        let value = serde_json::to_value(&grid).unwrap();
        assert_eq!(value["year"], 2021);
        assert_eq!(value["month"], 2);
        assert_eq!(value["weeks"].as_array().unwrap().len(), 4);
        assert_eq!(
            value["weeks"][0][0],
            serde_json::json!({ "day": { "day": 1, "weekday": 0 } })
        );

        let padded = serde_json::to_value(month_grid(2024, 2).unwrap()).unwrap();
        assert_eq!(padded["weeks"][0][0], serde_json::json!("empty"));
    }
}
