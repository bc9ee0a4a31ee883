use crate::commands::{display_records, CmdMessage, CmdResult};
use crate::console::Console;
use crate::error::Result;
use crate::model::Employee;
use crate::prompt::{ask_confirmation, ask_record_number};
use crate::store::RecordStore;

use super::helpers::persist;

/// Removes one record after an explicit `y`. Answering `n` leaves both the
/// collection and the store as they were.
pub fn run<S, C>(store: &mut S, records: &mut Vec<Employee>, console: &mut C) -> Result<CmdResult>
where
    S: RecordStore + ?Sized,
    C: Console + ?Sized,
{
    if records.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info("No records available to delete.")));
    }

    console.show_records(&display_records(records));
    let number = ask_record_number(console, "Enter the record number to delete: ", records.len())?;
    let idx = number - 1;
    console.notice(CmdMessage::info(format!(
        "Deleting record {}: {}",
        number,
        records[idx].full_name()
    )));

    if !ask_confirmation(console, "Are you sure you want to delete this record? (y/n): ")? {
        tracing::debug!(record = number, "deletion cancelled");
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Deletion cancelled.")));
    }

    let removed = records.remove(idx);
    tracing::info!(record = number, name = %removed.full_name(), "deleting record");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Record deleted successfully!"));
    persist(store, records, &mut result)?;
    Ok(result.with_affected_records(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::store::memory::fixtures::employee;
    use crate::store::memory::InMemoryStore;

    fn three() -> Vec<Employee> {
        vec![
            employee("Anna", "Smith"),
            employee("Bob", "Jones"),
            employee("Carla", "Diaz"),
        ]
    }

    #[test]
    fn confirmed_delete_removes_and_persists() {
        let mut records = three();
        let mut store = InMemoryStore::with_records(records.clone());
        let mut console = ScriptedConsole::new(["2", "y"]);

        let result = run(&mut store, &mut records, &mut console).unwrap();

        let names: Vec<_> = records.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Carla"]);
        assert_eq!(store.persisted(), records.as_slice());
        assert_eq!(store.saves, 1);
        assert_eq!(result.affected_records[0].first_name, "Bob");
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let mut records = three();
        let mut store = InMemoryStore::with_records(records.clone());
        let mut console = ScriptedConsole::new(["2", "maybe", "N"]);

        let result = run(&mut store, &mut records, &mut console).unwrap();

        assert_eq!(records, three());
        assert_eq!(store.persisted(), three().as_slice());
        assert_eq!(store.saves, 0);
        assert_eq!(result.messages, vec![CmdMessage::warning("Deletion cancelled.")]);
        assert_eq!(console.diagnostics.len(), 1);
    }

    #[test]
    fn empty_collection_is_a_notice() {
        let mut store = InMemoryStore::new();
        let mut records = Vec::new();
        let mut console = ScriptedConsole::new(["1", "y"]);
        let result = run(&mut store, &mut records, &mut console).unwrap();
        assert_eq!(result.messages[0].content, "No records available to delete.");
        assert_eq!(console.remaining(), 2);
    }
}
