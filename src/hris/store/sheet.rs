use super::RecordStore;
use crate::error::{HrisError, Result};
use crate::model::{Employee, FIELD_NAMES};
use std::collections::HashMap;

/// A grid of text cells, addressed by row.
pub trait Worksheet {
    /// Every row, top to bottom. An empty worksheet has no rows.
    fn get_all_values(&self) -> Result<Vec<Vec<String>>>;

    /// Remove every row.
    fn clear(&mut self) -> Result<()>;

    /// Add rows after the last existing one.
    fn append_rows(&mut self, rows: &[Vec<String>]) -> Result<()>;

    /// Replace the whole content with `rows`. Worksheets that can swap their
    /// content in one step override this so a failed write keeps the old rows.
    fn replace_all(&mut self, rows: &[Vec<String>]) -> Result<()> {
        self.clear()?;
        self.append_rows(rows)
    }
}

/// Stores records in a worksheet: a header row followed by one row per record.
pub struct SheetStore<W: Worksheet> {
    sheet: W,
}

impl<W: Worksheet> SheetStore<W> {
    pub fn new(sheet: W) -> Self {
        Self { sheet }
    }

    pub fn worksheet(&self) -> &W {
        &self.sheet
    }
}

impl<W: Worksheet> RecordStore for SheetStore<W> {
    fn load(&self) -> Result<Vec<Employee>> {
        let rows = self.sheet.get_all_values()?;
        let Some((header, body)) = rows.split_first() else {
            tracing::debug!("worksheet is empty");
            return Ok(Vec::new());
        };

        let columns: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
        let mut records = Vec::with_capacity(body.len());
        for (i, row) in body.iter().enumerate() {
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            let fields: HashMap<String, String> =
                columns.iter().cloned().zip(row.iter().cloned()).collect();
            // +2: one for the header row, one for 1-based sheet numbering
            let record = Employee::from_fields(&fields)
                .map_err(|e| HrisError::Store(format!("row {}: {}", i + 2, e)))?;
            records.push(record);
        }

        tracing::debug!(count = records.len(), "loaded records from worksheet");
        Ok(records)
    }

    fn save(&mut self, records: &[Employee]) -> Result<()> {
        if records.is_empty() {
            self.sheet.replace_all(&[])?;
            tracing::debug!("worksheet cleared, no records to write");
            return Ok(());
        }

        let mut rows = Vec::with_capacity(records.len() + 1);
        rows.push(FIELD_NAMES.iter().map(|f| f.to_uppercase()).collect());
        rows.extend(records.iter().map(Employee::to_row));
        self.sheet.replace_all(&rows)?;

        tracing::debug!(count = records.len(), "wrote records to worksheet");
        Ok(())
    }

    fn empty_notice(&self) -> &'static str {
        "No records found in the worksheet."
    }
}

/// In-memory worksheet for tests and development.
#[derive(Debug, Default, Clone)]
pub struct MemoryWorksheet {
    pub rows: Vec<Vec<String>>,
}

impl MemoryWorksheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

impl Worksheet for MemoryWorksheet {
    fn get_all_values(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }

    fn clear(&mut self) -> Result<()> {
        self.rows.clear();
        Ok(())
    }

    fn append_rows(&mut self, rows: &[Vec<String>]) -> Result<()> {
        self.rows.extend_from_slice(rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::employee;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn save_writes_upper_case_header_then_rows() {
        let mut store = SheetStore::new(MemoryWorksheet::new());
        let records = vec![employee("Anna", "Smith"), employee("Bob", "Jones")];
        store.save(&records).unwrap();

        let rows = &store.worksheet().rows;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "FIRST_NAME");
        assert_eq!(rows[0][9], "HIRE_DATE");
        assert_eq!(rows[1], records[0].to_row());
        assert_eq!(rows[2], records[1].to_row());
    }

    #[test]
    fn saving_nothing_leaves_sheet_blank() {
        let mut store = SheetStore::new(MemoryWorksheet::with_rows(vec![cells(&["stale"])]));
        store.save(&[]).unwrap();
        assert!(store.worksheet().rows.is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_reads_headers_case_insensitively() {
        let record = employee("Anna", "Smith");
        let header: Vec<String> = FIELD_NAMES.iter().map(|f| f.to_string()).collect();
        let store = SheetStore::new(MemoryWorksheet::with_rows(vec![header, record.to_row()]));
        assert_eq!(store.load().unwrap(), vec![record]);
    }

    #[test]
    fn load_follows_header_order_not_position() {
        let record = employee("Anna", "Smith");
        let mut header: Vec<String> = FIELD_NAMES.iter().map(|f| f.to_uppercase()).collect();
        let mut row = record.to_row();
        header.swap(0, 1);
        row.swap(0, 1);
        let store = SheetStore::new(MemoryWorksheet::with_rows(vec![header, row]));
        assert_eq!(store.load().unwrap(), vec![record]);
    }

    #[test]
    fn save_then_load_is_stable() {
        let mut store = SheetStore::new(MemoryWorksheet::new());
        store
            .save(&[employee("Anna", "Smith"), employee("Hannah", "Lee")])
            .unwrap();
        let first = store.load().unwrap();
        store.save(&first).unwrap();
        assert_eq!(store.load().unwrap(), first);
    }

    #[test]
    fn malformed_row_reports_its_position() {
        let header: Vec<String> = FIELD_NAMES.iter().map(|f| f.to_uppercase()).collect();
        let mut bad = employee("Anna", "Smith").to_row();
        bad[3] = "old".to_string();
        let store = SheetStore::new(MemoryWorksheet::with_rows(vec![
            header,
            employee("Bob", "Jones").to_row(),
            bad,
        ]));

        let err = store.load().unwrap_err().to_string();
        assert!(err.contains("row 3"), "{}", err);
        assert!(err.contains("age"), "{}", err);
    }

    /// Accepts only whole-sheet replacement.
    struct ReplaceOnly(MemoryWorksheet);

    impl Worksheet for ReplaceOnly {
        fn get_all_values(&self) -> Result<Vec<Vec<String>>> {
            self.0.get_all_values()
        }

        fn clear(&mut self) -> Result<()> {
            Err(HrisError::Store("clear not supported".into()))
        }

        fn append_rows(&mut self, _rows: &[Vec<String>]) -> Result<()> {
            Err(HrisError::Store("append not supported".into()))
        }

        fn replace_all(&mut self, rows: &[Vec<String>]) -> Result<()> {
            self.0.rows = rows.to_vec();
            Ok(())
        }
    }

    #[test]
    fn save_replaces_the_sheet_in_one_step() {
        let mut store = SheetStore::new(ReplaceOnly(MemoryWorksheet::with_rows(vec![cells(&[
            "stale",
        ])])));
        let records = vec![employee("Anna", "Smith")];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);

        store.save(&[]).unwrap();
        assert!(store.worksheet().0.rows.is_empty());
    }

    #[test]
    fn blank_rows_are_skipped() {
        let header: Vec<String> = FIELD_NAMES.iter().map(|f| f.to_uppercase()).collect();
        let store = SheetStore::new(MemoryWorksheet::with_rows(vec![
            header,
            cells(&["", ""]),
            employee("Anna", "Smith").to_row(),
        ]));
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
