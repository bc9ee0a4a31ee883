use crate::commands::{display_records, CmdMessage, CmdResult};
use crate::config::FieldRules;
use crate::console::Console;
use crate::error::Result;
use crate::model::Employee;
use crate::prompt::ask_record_number;
use crate::store::RecordStore;
use chrono::NaiveDate;

use super::helpers::{collect_employee, persist};

/// Replaces one record with freshly collected fields. Every field is asked
/// again; age is re-derived against `today`.
pub fn run<S, C>(
    store: &mut S,
    records: &mut [Employee],
    console: &mut C,
    rules: &FieldRules,
    today: NaiveDate,
) -> Result<CmdResult>
where
    S: RecordStore + ?Sized,
    C: Console + ?Sized,
{
    if records.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info("No records available to update.")));
    }

    console.show_records(&display_records(records));
    let number = ask_record_number(console, "Enter the record number to update: ", records.len())?;
    let idx = number - 1;
    console.notice(CmdMessage::info(format!(
        "Updating record {}: {}",
        number,
        records[idx].full_name()
    )));

    let updated = collect_employee(console, rules, today)?;
    tracing::info!(record = number, name = %updated.full_name(), "updating record");
    records[idx] = updated.clone();

    let mut result = CmdResult::default();
    persist(store, records, &mut result)?;
    result.add_message(CmdMessage::success("Record updated successfully!"));
    Ok(result.with_affected_records(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::store::memory::fixtures::employee;
    use crate::store::memory::InMemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn empty_collection_is_a_notice() {
        let mut store = InMemoryStore::new();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let result = run(
            &mut store,
            &mut [],
            &mut console,
            &FieldRules::default(),
            today(),
        )
        .unwrap();

        assert_eq!(result.messages[0].content, "No records available to update.");
        assert!(console.prompts.is_empty());
        assert_eq!(store.saves, 0);
    }

    #[test]
    fn replaces_chosen_record_and_recomputes_age() {
        let mut records = vec![employee("Anna", "Smith"), employee("Bob", "Jones")];
        let mut store = InMemoryStore::with_records(records.clone());
        let mut console = ScriptedConsole::new([
            "5",
            "2",
            "Robert",
            "Jones",
            "01-01-1980",
            "9 Elm Road",
            "robert@example.com",
            "manager",
            "SALES",
            "7000",
            "01-03-2005",
        ]);

        run(
            &mut store,
            &mut records,
            &mut console,
            &FieldRules::default(),
            today(),
        )
        .unwrap();

        assert_eq!(console.listings, vec![2]);
        assert_eq!(console.diagnostics.len(), 1);
        assert_eq!(console.notices[0].content, "Updating record 2: Bob Jones");
        assert_eq!(records[0].first_name, "Anna");
        assert_eq!(records[1].first_name, "Robert");
        assert_eq!(records[1].age, 44);
        assert_eq!(records[1].department, "Sales");
        assert_eq!(store.persisted(), records.as_slice());
    }
}
