//! Reference data store for offline species lookups.
//!
//! The species table is a static JSON asset compiled into the binary (or
//! loaded from a user-supplied file), read eagerly and entirely into
//! memory at startup, and never mutated afterwards.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Bundled species table, compiled into the binary.
const BUNDLED_DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/species.json"));

/// One row of the species reference table.
///
/// Field names mirror the columns of the published species dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRecord {
    /// Canonical display name; the lookup key.
    #[serde(rename = "Common English Name(s)")]
    pub common_name: String,

    /// Scientific name with naming authority.
    #[serde(rename = "Scientific Name & Authority")]
    pub scientific_name: String,

    /// Sinhala and Tamil names, where recorded.
    #[serde(rename = "Local Name(s) (Sinhala/Tamil)")]
    pub local_names: Option<String>,

    /// Venom and medical-significance notes.
    #[serde(rename = "Venom & Medical Significance")]
    pub venom: Option<String>,

    /// General description of the species.
    #[serde(rename = "Description")]
    pub description: String,

    /// Global IUCN Red List status.
    #[serde(rename = "Global IUCN Red List Status")]
    pub conservation_status: String,

    /// Taxonomic family.
    #[serde(rename = "Family")]
    pub family: String,
}

impl SpeciesRecord {
    /// Synthesize the derived fun-fact sentence from the taxonomic family.
    pub fn fun_fact(&self) -> String {
        format!("This species is from the '{}' family.", self.family)
    }
}

/// In-memory species table with precomputed lookup keys.
#[derive(Debug)]
pub struct SpeciesDb {
    // Normalized key alongside each record; first match in table order wins.
    records: Vec<(String, SpeciesRecord)>,
}

impl SpeciesDb {
    /// Load the species table bundled with the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATA).map_err(|e| Error::DatabaseParse {
            path: std::path::PathBuf::from("<bundled>"),
            source: e,
        })
    }

    /// Load a species table from an external JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::DatabaseRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json(&contents).map_err(|e| Error::DatabaseParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn from_json(contents: &str) -> std::result::Result<Self, serde_json::Error> {
        let records: Vec<SpeciesRecord> = serde_json::from_str(contents)?;
        debug!("Loaded species table: {} records", records.len());

        Ok(Self {
            records: records
                .into_iter()
                .map(|record| (normalize(&record.common_name), record))
                .collect(),
        })
    }

    /// Look up a species by display name.
    ///
    /// Matching is case- and surrounding-whitespace-insensitive; the first
    /// matching record in table order wins. Absence is a normal outcome.
    pub fn lookup(&self, name: &str) -> Option<&SpeciesRecord> {
        let key = normalize(name);
        self.records
            .iter()
            .find(|(record_key, _)| *record_key == key)
            .map(|(_, record)| record)
    }

    /// Iterate over all records in table order.
    pub fn records(&self) -> impl Iterator<Item = &SpeciesRecord> {
        self.records.iter().map(|(_, record)| record)
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalize a display name into a lookup key.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
