use super::RecordStore;
use crate::error::Result;
use crate::model::Employee;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Employee>,
    /// How many times `save` has been called.
    pub saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Employee>) -> Self {
        Self { records, saves: 0 }
    }

    /// What the last `save` left behind.
    pub fn persisted(&self) -> &[Employee] {
        &self.records
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Employee>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Employee]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    /// A valid record with the given names; every other field has a fixed value.
    pub fn employee(first_name: &str, last_name: &str) -> Employee {
        Employee {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            age: 33,
            address: "12 Main St.".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            job_position: "Developer".to_string(),
            department: "IT".to_string(),
            salary: 4500.0,
            hire_date: NaiveDate::from_ymd_opt(2015, 2, 1).unwrap(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_employees(mut self, count: usize) -> Self {
            const NAMES: [&str; 5] = ["Anna", "Bob", "Carla", "Dmitri", "Eve"];
            for i in 0..count {
                let first = NAMES[i % NAMES.len()];
                self.store.records.push(employee(first, "Tester"));
            }
            self
        }

        pub fn with_employee(mut self, record: Employee) -> Self {
            self.store.records.push(record);
            self
        }
    }
}
