//! Output formatting.
//!
//! Renders matched records as plain contact cards or JSON on stdout, and
//! provides styled diagnostic messages on stderr.

use crate::cli::OutputFormat;
use crate::types::Record;
use console::style;
use std::io::{self, Write};

/// Render one record as a contact card.
///
/// Five lines: callsign; "firstname lastname"; address; "city, state"; map
/// URL. Fields are printed verbatim, even if empty.
pub fn format_card(record: &Record) -> String {
    format!(
        "{}\n{} {}\n{}\n{}, {}\n{}",
        record.callsign,
        record.firstname,
        record.lastname,
        record.address,
        record.city,
        record.state,
        record.map_url()
    )
}

/// Print matched records to stdout in the requested format.
///
/// An empty match set prints nothing and succeeds.
pub fn print_records(records: &[Record], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => print_plain(records),
        OutputFormat::Json => print_json(records),
    }
}

fn print_plain(records: &[Record]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for record in records {
        writeln!(out, "{}", format_card(record))?;
    }

    Ok(())
}

fn print_json(records: &[Record]) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let json = serde_json::to_string_pretty(records)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold(), msg);
}
