//! Immutable launch-record dataset and its CSV loader.
//!
//! The dataset is loaded once at startup and never mutated afterwards.
//! Loading is all-or-nothing: any malformed row fails the whole load, so
//! the rest of the system only ever sees a fully valid dataset.

use crate::record::{LaunchRecord, Outcome};
use serde::Deserialize;
use std::path::Path;

/// Immutable, in-memory table of launch records.
///
/// Constructed once (from CSV at startup, or from records in tests) and
/// shared read-only. All aggregation happens in the filter engine without
/// ever mutating this table.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    /// Builds a dataset directly from records, validating each one.
    ///
    /// # Errors
    /// Returns an error if any record has an empty site or a negative or
    /// non-finite payload mass — partial datasets are not a valid state.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        for (index, record) in records.iter().enumerate() {
            if record.site.trim().is_empty() {
                return Err(DatasetError::InvalidRecord {
                    row: index,
                    reason: "empty launch site".to_string(),
                });
            }
            if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
                return Err(DatasetError::InvalidRecord {
                    row: index,
                    reason: format!("invalid payload mass {}", record.payload_mass_kg),
                });
            }
        }
        Ok(Dataset { records })
    }

    /// Loads a dataset from a launch-records CSV file.
    ///
    /// Expects the source column layout: `Launch Site`, `Payload Mass (kg)`,
    /// `Booster Version Category`, `class` (0 or 1). Extra columns are
    /// ignored.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, a row fails to parse,
    /// or any record fails validation.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path.as_ref())
            .map_err(|e| DatasetError::Io(e.to_string()))?;

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
            let row = row.map_err(|e| DatasetError::InvalidRecord {
                row: index,
                reason: e.to_string(),
            })?;
            let outcome = Outcome::from_class(row.class).ok_or_else(|| {
                DatasetError::InvalidRecord {
                    row: index,
                    reason: format!("outcome class must be 0 or 1, got {}", row.class),
                }
            })?;
            records.push(LaunchRecord {
                site: row.site,
                payload_mass_kg: row.payload_mass_kg,
                booster_category: row.booster_category,
                outcome,
            });
        }

        Self::from_records(records)
    }

    /// All records, in original file order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in first-appearance order.
    pub fn sites(&self) -> Vec<String> {
        let mut sites: Vec<String> = Vec::new();
        for record in &self.records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }
        sites
    }

    /// Dataset-wide `(min, max)` payload mass bounds.
    ///
    /// Used only to seed the initial payload-range filter. Returns
    /// `(0.0, 0.0)` for an empty dataset.
    pub fn payload_bounds(&self) -> (f64, f64) {
        let mut bounds: Option<(f64, f64)> = None;
        for record in &self.records {
            let mass = record.payload_mass_kg;
            bounds = Some(match bounds {
                None => (mass, mass),
                Some((min, max)) => (min.min(mass), max.max(mass)),
            });
        }
        bounds.unwrap_or((0.0, 0.0))
    }
}

/// Raw CSV row matching the source file's column headers.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
    #[serde(rename = "class")]
    class: u8,
}

/// Errors that can occur while loading the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The CSV file could not be opened or read
    Io(String),
    /// A row failed to parse or validate
    InvalidRecord { row: usize, reason: String },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(msg) => write!(f, "Failed to read dataset: {}", msg),
            DatasetError::InvalidRecord { row, reason } => {
                write!(f, "Invalid record at row {}: {}", row, reason)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn sample_records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, "v1.0", Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 1500.0, "v1.1", Outcome::Failure),
            LaunchRecord::new("KSC LC-39A", 800.0, "FT", Outcome::Success),
        ]
    }

    #[test]
    fn test_from_records_valid() {
        let dataset = Dataset::from_records(sample_records()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_from_records_rejects_negative_payload() {
        let mut records = sample_records();
        records[1].payload_mass_kg = -10.0;
        let result = Dataset::from_records(records);
        assert!(matches!(
            result,
            Err(DatasetError::InvalidRecord { row: 1, .. })
        ));
    }

    #[test]
    fn test_from_records_rejects_empty_site() {
        let mut records = sample_records();
        records[0].site = "  ".to_string();
        let result = Dataset::from_records(records);
        assert!(matches!(
            result,
            Err(DatasetError::InvalidRecord { row: 0, .. })
        ));
    }

    #[test]
    fn test_sites_first_appearance_order() {
        let dataset = Dataset::from_records(sample_records()).unwrap();
        assert_eq!(dataset.sites(), vec!["CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn test_payload_bounds() {
        let dataset = Dataset::from_records(sample_records()).unwrap();
        assert_eq!(dataset.payload_bounds(), (500.0, 1500.0));
    }

    #[test]
    fn test_payload_bounds_empty_dataset() {
        let dataset = Dataset::from_records(Vec::new()).unwrap();
        assert_eq!(dataset.payload_bounds(), (0.0, 0.0));
    }

    #[test]
    fn test_from_csv_path() {
        let file = write_csv(
            "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             1,CCAFS LC-40,0,0,v1.0\n\
             2,KSC LC-39A,1,2500,FT\n",
        );

        let dataset = Dataset::from_csv_path(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].site, "KSC LC-39A");
        assert_eq!(dataset.records()[1].payload_mass_kg, 2500.0);
        assert!(dataset.records()[1].outcome.is_success());
    }

    #[test]
    fn test_from_csv_path_rejects_bad_class() {
        let file = write_csv(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             CCAFS LC-40,3,100,v1.0\n",
        );

        let result = Dataset::from_csv_path(file.path());
        assert!(matches!(
            result,
            Err(DatasetError::InvalidRecord { row: 0, .. })
        ));
    }

    #[test]
    fn test_from_csv_path_missing_file() {
        let result = Dataset::from_csv_path("does-not-exist.csv");
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }
}
