use super::sheet::Worksheet;
use crate::error::{HrisError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A worksheet kept in a CSV file. Every write replaces the file through a
/// temporary sibling and a rename, so a failed write leaves the old content.
pub struct CsvWorksheet {
    path: PathBuf,
}

impl CsvWorksheet {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(HrisError::Io)?;
            }
        }
        Ok(())
    }

    fn write_rows(&self, rows: &[Vec<String>]) -> Result<()> {
        self.ensure_parent()?;
        let tmp = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_path(&tmp)
                .map_err(HrisError::Csv)?;
            for row in rows {
                writer.write_record(row).map_err(HrisError::Csv)?;
            }
            writer.flush().map_err(HrisError::Io)?;
        }
        fs::rename(&tmp, &self.path).map_err(HrisError::Io)?;
        Ok(())
    }
}

impl Worksheet for CsvWorksheet {
    fn get_all_values(&self) -> Result<Vec<Vec<String>>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(HrisError::Csv)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(HrisError::Csv)?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn clear(&mut self) -> Result<()> {
        self.write_rows(&[])
    }

    fn append_rows(&mut self, rows: &[Vec<String>]) -> Result<()> {
        let mut all = self.get_all_values()?;
        all.extend_from_slice(rows);
        self.write_rows(&all)
    }

    fn replace_all(&mut self, rows: &[Vec<String>]) -> Result<()> {
        self.write_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::employee;
    use crate::store::sheet::SheetStore;
    use crate::store::RecordStore;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sheet = CsvWorksheet::new(temp_dir.path().join("absent.csv"));
        assert!(sheet.get_all_values().unwrap().is_empty());
    }

    #[test]
    fn append_then_clear() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sheet = CsvWorksheet::new(temp_dir.path().join("sub").join("sheet.csv"));

        sheet.append_rows(&[row(&["A", "B"])]).unwrap();
        sheet.append_rows(&[row(&["12 Main St., Apt #4", "x"])]).unwrap();
        assert_eq!(
            sheet.get_all_values().unwrap(),
            vec![row(&["A", "B"]), row(&["12 Main St., Apt #4", "x"])]
        );

        sheet.clear().unwrap();
        assert!(sheet.get_all_values().unwrap().is_empty());
        assert!(sheet.path().exists());
    }

    #[test]
    fn sheet_store_round_trip_on_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("hris.csv");
        let mut store = SheetStore::new(CsvWorksheet::new(path.clone()));

        let mut anna = employee("Anna", "Smith");
        anna.address = "Flat 2, 10 High St.".to_string();
        let records = vec![anna, employee("Bob", "Jones")];
        store.save(&records).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("FIRST_NAME,LAST_NAME,DATE_OF_BIRTH,AGE"));

        let reopened = SheetStore::new(CsvWorksheet::new(path));
        assert_eq!(reopened.load().unwrap(), records);
    }

    #[test]
    fn padded_address_survives_a_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("hris.csv");
        let mut store = SheetStore::new(CsvWorksheet::new(path.clone()));

        let mut anna = employee("Anna", "Smith");
        anna.address = "12 Main St.  ".to_string();
        store.save(&[anna.clone()]).unwrap();

        let reopened = SheetStore::new(CsvWorksheet::new(path));
        assert_eq!(reopened.load().unwrap(), vec![anna]);
    }

    #[test]
    fn failed_save_keeps_previous_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("hris.csv");
        let mut store = SheetStore::new(CsvWorksheet::new(path.clone()));

        let saved = vec![employee("Anna", "Smith"), employee("Bob", "Jones")];
        store.save(&saved).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        // A directory where the temporary file goes makes the next write fail.
        fs::create_dir(path.with_extension("csv.tmp")).unwrap();
        assert!(store.save(&[employee("Carla", "Diaz")]).is_err());
        assert!(store.save(&[]).is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert_eq!(store.load().unwrap(), saved);
    }

    #[test]
    fn replace_all_overwrites_in_one_write() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sheet = CsvWorksheet::new(temp_dir.path().join("sheet.csv"));
        sheet.append_rows(&[row(&["old"])]).unwrap();

        sheet.replace_all(&[row(&["A", "B"]), row(&["1", "2"])]).unwrap();
        assert_eq!(
            sheet.get_all_values().unwrap(),
            vec![row(&["A", "B"]), row(&["1", "2"])]
        );
    }
}
