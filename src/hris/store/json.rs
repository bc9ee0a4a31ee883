use super::RecordStore;
use crate::error::{HrisError, Result};
use crate::model::Employee;
use std::fs;
use std::path::{Path, PathBuf};

/// Records as a pretty-printed JSON array in a single file.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonStore {
    fn load(&self) -> Result<Vec<Employee>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(HrisError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Employee> =
            serde_json::from_str(&content).map_err(HrisError::Serialization)?;
        tracing::debug!(count = records.len(), path = %self.path.display(), "loaded records");
        Ok(records)
    }

    fn save(&mut self, records: &[Employee]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(HrisError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(records).map_err(HrisError::Serialization)?;
        fs::write(&self.path, content).map_err(HrisError::Io)?;
        tracing::debug!(count = records.len(), path = %self.path.display(), "saved records");
        Ok(())
    }

    fn empty_notice(&self) -> &'static str {
        "No records found in the records file."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::employee;

    #[test]
    fn round_trips_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(temp_dir.path().join("records.json"));
        let records = vec![employee("Anna", "Smith"), employee("Bob", "Jones")];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn dates_are_stored_day_first() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(temp_dir.path().join("records.json"));
        store.save(&[employee("Anna", "Smith")]).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains(r#""date_of_birth": "15-06-1990""#), "{}", raw);
    }

    #[test]
    fn empty_notice_names_the_records_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(temp_dir.path().join("records.json"));
        assert_eq!(store.empty_notice(), "No records found in the records file.");
    }

    #[test]
    fn empty_or_missing_file_is_empty_collection() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("records.json");
        let store = JsonStore::new(path.clone());
        assert!(store.load().unwrap().is_empty());

        fs::write(&path, "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("records.json");
        fs::write(&path, "[{\"first_name\": 3}]").unwrap();
        assert!(matches!(
            JsonStore::new(path).load(),
            Err(HrisError::Serialization(_))
        ));
    }
}
