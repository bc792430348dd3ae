//! HTML and JSON output for calendar pages.
//!
//! Names for months and weekdays live here rather than in the grid types;
//! the grids stay numeric.

use crate::grid::{MonthGrid, WeekRow, YearGrid};
use crate::page::Page;
use crate::types::{Month, Weekday};

/// Stylesheet inlined into every generated document
pub const STYLESHEET: &str = include_str!("../assets/style.css");

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tues", "Weds", "Thurs", "Fri", "Sat", "Sun"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column header text for a weekday
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.index() as usize]
}

pub const fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[(month.get() - 1) as usize]
}

fn week_html(week: &WeekRow) -> String {
    let cells: String = week
        .iter()
        .map(|cell| format!("\n            <td>{cell}</td>"))
        .collect();
    format!("\n        <tr>{cells}\n        </tr>")
}

/// A `<table>` with the month name, weekday headers and one row per week.
pub fn month_html(grid: &MonthGrid) -> String {
    let headers: String = Weekday::ALL
        .iter()
        .map(|&day| {
            format!(
                "\n            <th class=\"day-header\">{}</th>",
                weekday_name(day)
            )
        })
        .collect();
    let weeks: String = grid.weeks().iter().map(week_html).collect();

    format!(
        "<table cellpadding=\"0\" cellspacing=\"0\">
        <tr>
            <th colspan=\"7\" class=\"month-name\">{}</th>
        </tr>
        <tr>{headers}
        </tr>{weeks}
    </table>",
        month_name(grid.month()),
    )
}

/// An `<article>` holding the year heading and its twelve month tables.
pub fn year_html(grid: &YearGrid) -> String {
    let months: String = grid
        .months()
        .iter()
        .map(|month| format!("\n    <div>{}</div>", month_html(month)))
        .collect();

    format!(
        "<article>
    <h1 class=\"year\">{}</h1>
    <section class=\"grid\">{months}
    </section>
</article>",
        grid.year()
    )
}

/// The complete standalone document for a page.
pub fn html(page: &Page) -> String {
    let year = page.year();
    let body: String = page
        .years()
        .iter()
        .map(|grid| format!("\n{}", year_html(grid)))
        .collect();

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <title>Calendar for {}, {year} and {}</title>
    <style>
{STYLESHEET}
    </style>
</head>
<body>{body}
</body>
</html>
",
        year - 1,
        year + 1,
    )
}

/// Pretty-printed JSON of the page's grids.
///
/// # Errors
/// Propagates any `serde_json` serialization failure.
pub fn json(page: &Page) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(page)
}
