use crate::commands::{display_records, CmdMessage, CmdResult};
use crate::console::Console;
use crate::error::{HrisError, Result};
use crate::model::Employee;
use crate::store::RecordStore;
use std::fmt;
use std::str::FromStr;

use super::helpers::persist;

const EMPTY_NOTICE: &str = "No records available to sort.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    FirstName,
    LastName,
    Age,
    Department,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::FirstName,
        SortKey::LastName,
        SortKey::Age,
        SortKey::Department,
    ];

    /// Stable ascending sort by this key.
    pub fn sort(self, records: &mut [Employee]) {
        match self {
            SortKey::FirstName => records.sort_by(|a, b| a.first_name.cmp(&b.first_name)),
            SortKey::LastName => records.sort_by(|a, b| a.last_name.cmp(&b.last_name)),
            SortKey::Age => records.sort_by_key(|r| r.age),
            SortKey::Department => records.sort_by(|a, b| a.department.cmp(&b.department)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::FirstName => "first name",
            SortKey::LastName => "last name",
            SortKey::Age => "age",
            SortKey::Department => "department",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortKey {
    type Err = HrisError;

    /// Accepts the display names in any case; `_` and `-` may stand in for the space.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        SortKey::ALL
            .into_iter()
            .find(|key| key.to_string() == normalized)
            .ok_or_else(|| HrisError::Api(format!("Invalid sorting choice: {}", s.trim())))
    }
}

/// Sorts by the key named in `choice` and persists. An unknown key leaves the
/// collection and the store untouched.
pub fn run<S: RecordStore + ?Sized>(
    store: &mut S,
    records: &mut [Employee],
    choice: &str,
) -> Result<CmdResult> {
    if records.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_NOTICE)));
    }

    let key = match choice.parse::<SortKey>() {
        Ok(key) => key,
        Err(_) => {
            tracing::debug!(choice, "rejected sort key");
            return Ok(
                CmdResult::default().with_message(CmdMessage::warning("Invalid sorting choice!"))
            );
        }
    };

    key.sort(records);
    tracing::info!(key = %key, "records sorted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Records sorted successfully by {}!",
        key
    )));
    persist(store, records, &mut result)?;
    Ok(result.with_listed_records(display_records(records)))
}

/// Asks the operator for a key, then sorts.
pub fn prompt<S, C>(store: &mut S, records: &mut [Employee], console: &mut C) -> Result<CmdResult>
where
    S: RecordStore + ?Sized,
    C: Console + ?Sized,
{
    if records.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_NOTICE)));
    }
    let choice = console.read_line("Sort records by (first name/last name/age/department): ")?;
    run(store, records, &choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::store::memory::fixtures::employee;
    use crate::store::memory::InMemoryStore;

    fn bob_and_amy() -> Vec<Employee> {
        let mut bob = employee("Bob", "Adams");
        bob.age = 40;
        bob.department = "Sales".into();
        let mut amy = employee("Amy", "Brown");
        amy.age = 30;
        amy.department = "HR".into();
        vec![bob, amy]
    }

    fn first_names(records: &[Employee]) -> Vec<&str> {
        records.iter().map(|r| r.first_name.as_str()).collect()
    }

    #[test]
    fn parses_keys_loosely() {
        assert_eq!("First Name".parse::<SortKey>().unwrap(), SortKey::FirstName);
        assert_eq!("last_name".parse::<SortKey>().unwrap(), SortKey::LastName);
        assert_eq!(" AGE ".parse::<SortKey>().unwrap(), SortKey::Age);
        assert!("salary".parse::<SortKey>().is_err());
    }

    #[test]
    fn sorts_by_first_name_and_persists() {
        let mut records = bob_and_amy();
        let mut store = InMemoryStore::with_records(records.clone());

        let result = run(&mut store, &mut records, "first name").unwrap();

        assert_eq!(first_names(&records), vec!["Amy", "Bob"]);
        assert_eq!(store.persisted(), records.as_slice());
        assert_eq!(result.listed_records.len(), 2);
    }

    #[test]
    fn sorts_by_age_and_department() {
        let mut records = bob_and_amy();
        let mut store = InMemoryStore::new();

        run(&mut store, &mut records, "age").unwrap();
        assert_eq!(first_names(&records), vec!["Amy", "Bob"]);

        records.reverse();
        run(&mut store, &mut records, "department").unwrap();
        assert_eq!(first_names(&records), vec!["Amy", "Bob"]);

        run(&mut store, &mut records, "last name").unwrap();
        assert_eq!(first_names(&records), vec!["Bob", "Amy"]);
    }

    #[test]
    fn sort_is_stable() {
        let mut records = vec![
            employee("Zed", "One"),
            employee("Amy", "Two"),
            employee("Kim", "Three"),
        ];
        let mut store = InMemoryStore::new();
        // every fixture shares the same age, so order must not move
        run(&mut store, &mut records, "age").unwrap();
        assert_eq!(first_names(&records), vec!["Zed", "Amy", "Kim"]);
    }

    #[test]
    fn invalid_key_leaves_order_and_store() {
        let mut records = bob_and_amy();
        let mut store = InMemoryStore::with_records(records.clone());

        let result = run(&mut store, &mut records, "salary").unwrap();

        assert_eq!(first_names(&records), vec!["Bob", "Amy"]);
        assert_eq!(store.saves, 0);
        assert_eq!(result.messages, vec![CmdMessage::warning("Invalid sorting choice!")]);
        assert!(result.listed_records.is_empty());
    }

    #[test]
    fn prompt_reads_key() {
        let mut records = bob_and_amy();
        let mut store = InMemoryStore::new();
        let mut console = ScriptedConsole::new(["Age"]);
        prompt(&mut store, &mut records, &mut console).unwrap();
        assert_eq!(first_names(&records), vec!["Amy", "Bob"]);
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn empty_collection_is_a_notice() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &mut [], "age").unwrap();
        assert_eq!(result.messages[0].content, EMPTY_NOTICE);
    }
}
