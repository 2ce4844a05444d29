//! Core type definitions.

mod record;

pub use record::Record;
