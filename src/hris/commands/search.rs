use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::console::Console;
use crate::error::Result;
use crate::model::Employee;

const EMPTY_NOTICE: &str = "No records available to search.";

/// Case-insensitive substring match on first or last name. Matches keep
/// their position in the full collection.
pub fn run(records: &[Employee], term: &str) -> CmdResult {
    if records.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info(EMPTY_NOTICE));
    }

    let needle = term.to_lowercase();
    let matches: Vec<DisplayRecord> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            r.first_name.to_lowercase().contains(&needle)
                || r.last_name.to_lowercase().contains(&needle)
        })
        .map(|(i, r)| DisplayRecord {
            index: i + 1,
            record: r.clone(),
        })
        .collect();

    tracing::debug!(term, matches = matches.len(), "search finished");
    if matches.is_empty() {
        return CmdResult::default().with_message(CmdMessage::warning("No matching records found."));
    }
    CmdResult::default().with_listed_records(matches)
}

/// Asks the operator for a term, then searches.
pub fn prompt<C: Console + ?Sized>(records: &[Employee], console: &mut C) -> Result<CmdResult> {
    if records.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_NOTICE)));
    }
    let term = console.read_line("Enter the search term (first/last name): ")?;
    Ok(run(records, term.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::store::memory::fixtures::employee;

    #[test]
    fn matches_first_names_case_insensitively() {
        let records = vec![employee("Anna", "Smith"), employee("Hannah", "Lee")];
        let result = run(&records, "ann");
        assert_eq!(result.listed_records.len(), 2);
    }

    #[test]
    fn matches_last_names_and_keeps_positions() {
        let records = vec![
            employee("Bob", "Jones"),
            employee("Carla", "Diaz"),
            employee("Dmitri", "JONESCU"),
        ];
        let result = run(&records, "jones");
        let indexes: Vec<usize> = result.listed_records.iter().map(|d| d.index).collect();
        assert_eq!(indexes, vec![1, 3]);
    }

    #[test]
    fn no_match_is_a_notice() {
        let records = vec![employee("Bob", "Jones")];
        let result = run(&records, "zed");
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "No matching records found.");
    }

    #[test]
    fn prompt_skips_question_when_empty() {
        let mut console = ScriptedConsole::new(["ann"]);
        let result = prompt(&[], &mut console).unwrap();
        assert_eq!(result.messages[0].content, EMPTY_NOTICE);
        assert!(console.prompts.is_empty());
    }

    #[test]
    fn prompt_reads_term() {
        let records = vec![employee("Anna", "Smith"), employee("Bob", "Jones")];
        let mut console = ScriptedConsole::new(["  smi "]);
        let result = prompt(&records, &mut console).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].record.first_name, "Anna");
    }
}
