//! Flat-file importer for FCC license data.
//!
//! Reads a pipe-delimited file (the public `EN.dat` layout) line by line and
//! loads the interesting fields into the record store. A reload is wholesale:
//! the table is dropped and recreated before any rows are inserted, so the
//! net effect is "replace entire dataset".

use crate::error::{ImportError, ImportResult};
use crate::storage::RecordStore;
use crate::types::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Zero-based positions of the fields we extract from each `|`-delimited
/// line. The rest of the line is ignored.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub callsign: usize,
    pub firstname: usize,
    pub lastname: usize,
    pub address: usize,
    pub city: usize,
    pub state: usize,
}

/// Field layout of the FCC `EN.dat` entity file.
pub const EN_DAT: FieldSchema = FieldSchema {
    callsign: 4,
    firstname: 8,
    lastname: 10,
    address: 15,
    city: 16,
    state: 17,
};

impl FieldSchema {
    /// The highest index this schema reads; lines with fewer fields are
    /// malformed.
    pub fn max_index(&self) -> usize {
        self.callsign
            .max(self.firstname)
            .max(self.lastname)
            .max(self.address)
            .max(self.city)
            .max(self.state)
    }

    /// Extract a [`Record`] from a split line, or `None` if the line is too
    /// short.
    pub fn extract(&self, fields: &[&str]) -> Option<Record> {
        if fields.len() <= self.max_index() {
            return None;
        }

        Some(Record {
            callsign: fields[self.callsign].to_string(),
            firstname: fields[self.firstname].to_string(),
            lastname: fields[self.lastname].to_string(),
            address: fields[self.address].to_string(),
            city: fields[self.city].to_string(),
            state: fields[self.state].to_string(),
        })
    }
}

/// Outcome counters for one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records inserted.
    pub imported: usize,
    /// Lines skipped because they had fewer fields than the schema needs.
    pub malformed: usize,
    /// Lines whose insert the store rejected (duplicate callsign etc.).
    pub rejected: usize,
}

/// Rebuild the store from a pipe-delimited source file.
///
/// Malformed lines and rejected inserts are logged and skipped; the import
/// only aborts on a missing file, an IO error mid-scan, or a store failure
/// that is not a per-row rejection.
pub fn import_file(store: &RecordStore, path: &Path) -> ImportResult<ImportSummary> {
    import_file_with_schema(store, path, EN_DAT)
}

/// Like [`import_file`], with an explicit field schema.
pub fn import_file_with_schema(
    store: &RecordStore,
    path: &Path,
    schema: FieldSchema,
) -> ImportResult<ImportSummary> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    store.initialize()?;

    let mut summary = ImportSummary::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('|').collect();
        let Some(record) = schema.extract(&fields) else {
            warn!(
                line = lineno + 1,
                fields = fields.len(),
                "skipping malformed line"
            );
            summary.malformed += 1;
            continue;
        };

        match store.insert(&record) {
            Ok(()) => summary.imported += 1,
            Err(e) if e.is_duplicate() => {
                warn!(line = lineno + 1, callsign = %record.callsign, "duplicate callsign, keeping first");
                summary.rejected += 1;
            }
            Err(e) => {
                warn!(line = lineno + 1, callsign = %record.callsign, error = %e, "insert rejected");
                summary.rejected += 1;
            }
        }
    }

    debug!(
        imported = summary.imported,
        malformed = summary.malformed,
        rejected = summary.rejected,
        "import complete"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Build an 18-field EN.dat-style line with the given values at the
    /// schema positions and `X` filler everywhere else.
    fn en_line(callsign: &str, first: &str, last: &str, addr: &str, city: &str, state: &str) -> String {
        let mut fields = vec!["X"; 18];
        fields[EN_DAT.callsign] = callsign;
        fields[EN_DAT.firstname] = first;
        fields[EN_DAT.lastname] = last;
        fields[EN_DAT.address] = addr;
        fields[EN_DAT.city] = city;
        fields[EN_DAT.state] = state;
        fields.join("|")
    }

    fn write_input(lines: &[String]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("EN.dat");
        let mut file = File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        (dir, path)
    }

    #[test]
    fn test_import_then_query_roundtrip() {
        let store = RecordStore::open_in_memory().unwrap();
        let (_dir, path) = write_input(&[en_line(
            "KI4HDU", "John", "Doe", "123 Main St", "Anytown", "NC",
        )]);

        let summary = import_file(&store, &path).unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.malformed, 0);
        assert_eq!(summary.rejected, 0);

        let results = store.query("KI4HDU").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].firstname, "John");
        assert_eq!(results[0].lastname, "Doe");
        assert_eq!(results[0].address, "123 Main St");
        assert_eq!(results[0].city, "Anytown");
        assert_eq!(results[0].state, "NC");
    }

    #[test]
    fn test_reload_is_idempotent() {
        let store = RecordStore::open_in_memory().unwrap();
        let (_dir, path) = write_input(&[
            en_line("KI4HDU", "John", "Doe", "123 Main St", "Anytown", "NC"),
            en_line("W1AW", "Hiram", "Maxim", "225 Main St", "Newington", "CT"),
        ]);

        let first = import_file(&store, &path).unwrap();
        let second = import_file(&store, &path).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_malformed_line_skipped() {
        let store = RecordStore::open_in_memory().unwrap();
        let (_dir, path) = write_input(&[
            "too|few|fields".to_string(),
            en_line("KI4HDU", "John", "Doe", "123 Main St", "Anytown", "NC"),
        ]);

        let summary = import_file(&store, &path).unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.malformed, 1);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_callsign_keeps_first_and_continues() {
        let store = RecordStore::open_in_memory().unwrap();
        let (_dir, path) = write_input(&[
            en_line("KI4HDU", "John", "Doe", "123 Main St", "Anytown", "NC"),
            en_line("KI4HDU", "Jane", "Roe", "456 Oak Ave", "Othertown", "VA"),
            en_line("W1AW", "Hiram", "Maxim", "225 Main St", "Newington", "CT"),
        ]);

        let summary = import_file(&store, &path).unwrap();
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.rejected, 1);

        let results = store.query("KI4HDU").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].firstname, "John");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let store = RecordStore::open_in_memory().unwrap();
        let err = import_file(&store, Path::new("/no/such/EN.dat")).unwrap_err();
        assert!(matches!(err, ImportError::FileNotFound(_)));
    }

    #[test]
    fn test_empty_lines_ignored() {
        let store = RecordStore::open_in_memory().unwrap();
        let (_dir, path) = write_input(&[
            String::new(),
            en_line("KI4HDU", "John", "Doe", "123 Main St", "Anytown", "NC"),
            String::new(),
        ]);

        let summary = import_file(&store, &path).unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.malformed, 0);
    }

    #[test]
    fn test_schema_max_index() {
        assert_eq!(EN_DAT.max_index(), 17);
    }
}
