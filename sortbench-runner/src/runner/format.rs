//! The format of the sortbench-runner terminal output
//!
//! All direct print statements should be part of this module and there should be no `println!` or
//! similar statement in any other module of the runner.
use std::io::{stdout, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::summary::{Report, Row};

/// The string used to signal that a value is not available
pub const NOT_AVAILABLE: &str = "N/A";
/// The width in bytes of the size column
pub const SIZE_WIDTH: usize = 10;
/// The width in bytes of the columns with the elapsed seconds
pub const TIME_WIDTH: usize = 12;

/// The kind of the output format can be either json or the default terminal output
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormatKind {
    /// The default terminal output
    #[default]
    Default,
    /// Json terminal output
    Json,
    /// Pretty json terminal output
    PrettyJson,
}

/// The lines printed before the table
pub fn banner() -> String {
    format!(
        "{}\n   - an array that keeps getting compacted, or a linked list?\n\nElapsed seconds for \
         various sizes:\n",
        "Which is faster for random adding and deleting elements:".bold()
    )
}

/// Format the elapsed seconds with one decimal or [`NOT_AVAILABLE`]
pub fn format_seconds(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| NOT_AVAILABLE.to_owned(), |s| format!("{s:.1}"))
}

/// Format a single table row
pub fn format_row(row: &Row) -> String {
    format!(
        "{:>SIZE_WIDTH$}  {:>TIME_WIDTH$}   {:>TIME_WIDTH$}",
        row.size,
        format_seconds(row.array),
        format_seconds(row.linked_list)
    )
}

/// Print the [`banner`] and the table header
pub fn print_header() {
    println!("{}", banner());
    println!("{}", table_header());
}

/// Print the whole `report` in one of the json formats
///
/// Nothing is printed for [`OutputFormatKind::Default`]. The rows were already printed with
/// [`print_row`] while running the benchmarks.
pub fn print_report(report: &Report, kind: OutputFormatKind) -> Result<()> {
    let output = match kind {
        OutputFormatKind::Default => return Ok(()),
        OutputFormatKind::Json => serde_json::to_string(report),
        OutputFormatKind::PrettyJson => serde_json::to_string_pretty(report),
    }
    .with_context(|| "Failed to serialize the report")?;

    println!("{output}");
    Ok(())
}

/// Print a single table row as soon as it is complete
pub fn print_row(row: &Row) -> Result<()> {
    let mut stdout = stdout().lock();
    writeln!(stdout, "{}", format_row(row)).with_context(|| "Failed to print row")?;
    stdout.flush().with_context(|| "Failed to flush stdout")
}

/// The headline and separator of the table
pub fn table_header() -> String {
    format!(
        "{:>SIZE_WIDTH$}  {:>TIME_WIDTH$}   {:>TIME_WIDTH$}\n{}  {}   {}",
        "Size",
        "Array",
        "Linked List",
        "-".repeat(SIZE_WIDTH),
        "-".repeat(TIME_WIDTH),
        "-".repeat(TIME_WIDTH),
    )
}
