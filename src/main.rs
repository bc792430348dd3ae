mod cli;
mod logging;

use std::{fs, process};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use calendar_grid::{Page, YearBounds, render};

use crate::cli::{Cli, Format};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let bounds = YearBounds::new(cli.min_year, cli.max_year).context("invalid year bounds")?;
    let year = bounds.check(cli.year)?;

    let page = Page::compose(year, &bounds)
        .with_context(|| format!("failed to build calendar for {year}"))?;

    let document = match cli.format {
        Format::Html => render::html(&page),
        Format::Json => render::json(&page).context("failed to serialize calendar")?,
    };

    fs::write(&cli.file, &document)
        .with_context(|| format!("failed to write {}", cli.file.display()))?;
    info!(
        year,
        path = %cli.file.display(),
        bytes = document.len(),
        "calendar written"
    );
    Ok(())
}
