//! License record persistence.
//!
//! Provides SQLite-backed storage keyed by callsign, with LIKE-pattern
//! lookup.

mod sqlite_store;

pub use sqlite_store::{RecordStore, TABLE_NAME};
