//! # qrz - FCC Callsign Lookup
//!
//! qrz imports amateur-radio license records from the FCC's pipe-delimited
//! entity file into a local SQLite database, then answers callsign lookups
//! with a formatted contact card including a map link.
//!
//! ## Features
//!
//! - **Local cache**: records live in an embedded SQLite database under the
//!   per-user cache directory, loaded once and read many times
//! - **Wholesale reload**: `-r` drops and rebuilds the table from the source
//!   file; bad lines are skipped and logged, never fatal
//! - **Pattern lookup**: SQL LIKE semantics, so `KI4HDU` is an exact match
//!   and `KI4%` matches a prefix
//! - **Multiple output formats**: plain contact cards or JSON
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use qrz::storage::RecordStore;
//!
//! let store = RecordStore::open_in_memory()?;
//! for record in store.query("KI4%")? {
//!     println!("{} -> {}", record.callsign, record.map_url());
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - The license record data model
//! - [`config`] - Application constants and cache directory resolution
//! - [`storage`] - SQLite-backed record persistence
//! - [`import`] - Flat-file importer with a named field schema
//! - [`output`] - Contact-card formatting and styled diagnostics
//! - [`cli`] - Argument parsing and the driver
//! - [`error`] - Per-component error types

pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod output;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ImportError, PathError, StorageError};
pub use storage::RecordStore;
pub use types::Record;
