//! # Storage Layer
//!
//! The record collection is the unit of persistence: it is read once when a
//! session opens and rewritten in full after every change. [`RecordStore`] is
//! that contract, and nothing above this module knows which backend is in use.
//!
//! ## Implementations
//!
//! - [`sheet::SheetStore`]: tabular layout on top of any [`sheet::Worksheet`].
//!   Row 0 holds the column headers (written upper-cased, read lower-cased),
//!   rows 1..N hold one record each in [`crate::model::FIELD_NAMES`] order.
//!   - [`csv_sheet::CsvWorksheet`]: the worksheet as a CSV file (production)
//!   - [`sheet::MemoryWorksheet`]: the worksheet as a `Vec` of rows (testing)
//! - [`json::JsonStore`]: a pretty-printed JSON array of records.
//! - [`memory::InMemoryStore`]: no persistence, counts saves (testing).
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── config.json     # backend choice, allow-lists, minimum age
//! ├── hris.csv        # sheet backend
//! └── records.json    # json backend
//! ```

use crate::config::{Backend, HrisConfig};
use crate::error::Result;
use crate::model::Employee;
use std::path::Path;

pub mod csv_sheet;
pub mod json;
pub mod memory;
pub mod sheet;

/// Abstract interface for record persistence.
pub trait RecordStore {
    /// Read the whole collection, in stored order.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Replace everything persisted with `records`.
    fn save(&mut self, records: &[Employee]) -> Result<()>;

    /// Shown when a session opens on an empty store.
    fn empty_notice(&self) -> &'static str {
        "No records found."
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn load(&self) -> Result<Vec<Employee>> {
        (**self).load()
    }

    fn save(&mut self, records: &[Employee]) -> Result<()> {
        (**self).save(records)
    }

    fn empty_notice(&self) -> &'static str {
        (**self).empty_notice()
    }
}

/// Builds the store selected by `config`, rooted at `data_dir`.
pub fn open_store(config: &HrisConfig, data_dir: &Path) -> Box<dyn RecordStore> {
    match config.backend {
        Backend::Sheet => {
            let worksheet = csv_sheet::CsvWorksheet::new(data_dir.join(&config.sheet_file));
            Box::new(sheet::SheetStore::new(worksheet))
        }
        Backend::Json => Box::new(json::JsonStore::new(data_dir.join(&config.json_file))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::employee;

    #[test]
    fn configured_backend_decides_the_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let records = vec![employee("Anna", "Smith")];

        let mut config = HrisConfig::default();
        let mut sheet = open_store(&config, temp_dir.path());
        sheet.save(&records).unwrap();
        assert!(temp_dir.path().join("hris.csv").exists());

        config.backend = Backend::Json;
        let mut json = open_store(&config, temp_dir.path());
        json.save(&records).unwrap();
        assert!(temp_dir.path().join("records.json").exists());
        assert_eq!(json.load().unwrap(), sheet.load().unwrap());
    }
}
