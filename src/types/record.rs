//! The license record data model.

use serde::{Deserialize, Serialize};

/// One imported FCC license entry.
///
/// The callsign is the unique identifier and the primary key of the store.
/// All other fields come from the flat file verbatim and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Callsign assigned to the licensee.
    pub callsign: String,
    /// Licensee first name.
    pub firstname: String,
    /// Licensee last name.
    pub lastname: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
}

impl Record {
    /// Build an Apple Maps link for the record's address.
    ///
    /// The query parameter is `address,city,state` with every space in the
    /// final URL replaced by `+`.
    pub fn map_url(&self) -> String {
        format!(
            "http://maps.apple.com/?address={},{},{}",
            self.address, self.city, self.state
        )
        .replace(' ', "+")
    }
}
