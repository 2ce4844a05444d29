//! Command-line interface for qrz.
//!
//! Uses `clap` derive macros for declarative argument parsing. The driver
//! resolves the storage location, opens the store, optionally performs the
//! destructive reload, then runs one lookup per positional argument.

use crate::config;
use crate::error::CliResult;
use crate::import;
use crate::output;
use crate::storage::RecordStore;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

/// Default location of the FCC entity file, as installed by xastir.
pub const DEFAULT_INPUT: &str = "/usr/local/share/xastir/fcc/EN.dat";

/// Look up FCC amateur-radio callsigns from a local SQLite cache.
///
/// Patterns are matched with SQL LIKE semantics: a bare callsign is an
/// exact match, and `%`/`_` wildcards are honored (e.g. `qrz 'KI4%'`).
#[derive(Parser, Debug)]
#[command(name = "qrz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "FCC callsign lookup with a local SQLite cache", long_about = None)]
pub struct Cli {
    /// Callsign patterns to look up (SQL LIKE wildcards honored)
    #[arg(value_name = "CALLSIGN")]
    pub callsigns: Vec<String>,

    /// Rebuild the database from the input file before any lookups
    #[arg(short = 'r', long = "reload")]
    pub reload: bool,

    /// Pipe-delimited FCC entity file to import on reload
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output format for matched records
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Enable verbose diagnostic output on stderr
    #[arg(short, long)]
    pub debug: bool,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable contact cards
    Plain,
    /// JSON structured output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Execute the parsed command line.
///
/// All component failures propagate here; only `main` decides process
/// termination and exit status.
pub fn run(cli: Cli) -> CliResult<()> {
    let db_path = config::database_path()?;
    debug!(path = %db_path.display(), "opening record store");
    let store = RecordStore::open(&db_path)?;

    if cli.reload {
        debug!(input = %cli.input.display(), "reloading database");
        let summary = import::import_file(&store, &cli.input)?;
        output::print_info(&format!(
            "imported {} records from {} ({} malformed, {} rejected)",
            summary.imported,
            cli.input.display(),
            summary.malformed,
            summary.rejected
        ));
    }

    for pattern in &cli.callsigns {
        let records = store.query(pattern)?;
        debug!(pattern = %pattern, matches = records.len(), "lookup complete");
        output::print_records(&records, cli.output)?;
    }

    Ok(())
}
