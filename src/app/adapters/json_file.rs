//! JSON file source for delivery records
//!
//! The reference input format is a single JSON array of record objects with
//! `postcode`, `recipe` and `delivery` fields. The whole array is decoded up
//! front; a malformed element (including a bad delivery window) fails the
//! decode with no partial results, and the error carries the source path.

use crate::app::models::DeliveryRecord;
use crate::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A fully-decoded delivery record source backed by a JSON file
#[derive(Debug)]
pub struct JsonFileSource {
    path: PathBuf,
    records: Vec<DeliveryRecord>,
}

impl JsonFileSource {
    /// Open and decode a source file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::source_not_found(path.display().to_string()));
        }

        let file = File::open(path).map_err(|e| {
            Error::io(format!("failed to open source file '{}'", path.display()), e)
        })?;
        let reader = BufReader::new(file);
        let records: Vec<DeliveryRecord> = serde_json::from_reader(reader).map_err(|e| {
            Error::json_decoding(
                path.display().to_string(),
                "expected a JSON array of delivery records",
                Some(e),
            )
        })?;

        debug!(
            "Decoded {} delivery records from '{}'",
            records.len(),
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of decoded records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the source holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the source, yielding records in file order
    ///
    /// The item type matches the report processor's input contract; a
    /// fully-decoded file can no longer fail mid-iteration, so every item
    /// is `Ok`.
    pub fn into_records(self) -> impl Iterator<Item = Result<DeliveryRecord>> {
        self.records.into_iter().map(Ok)
    }
}
