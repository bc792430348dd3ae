use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use calendar_grid::{DEFAULT_MAX_YEAR, GREGORIAN_ADOPTION_YEAR};

/// Generate a three-year calendar document centred on a given year.
#[derive(Debug, Parser)]
#[command(
    name = "calendar-grid",
    version,
    about = "Generate a calendar page for a year and its neighbours"
)]
pub struct Cli {
    /// The year to generate the calendar for.
    pub year: u16,

    /// Output file, created or overwritten.
    pub file: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Earliest year accepted.
    #[arg(long, default_value_t = GREGORIAN_ADOPTION_YEAR)]
    pub min_year: u16,

    /// Latest year accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_YEAR)]
    pub max_year: u16,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Document formats the page can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Standalone HTML page with inlined stylesheet.
    Html,
    /// The raw grids as pretty-printed JSON.
    Json,
}
