use crate::commands::{CmdMessage, CmdResult};
use crate::config::FieldRules;
use crate::console::Console;
use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;
use chrono::NaiveDate;

use super::helpers::{collect_employee, persist};

pub fn run<S, C>(
    store: &mut S,
    records: &mut Vec<Employee>,
    console: &mut C,
    rules: &FieldRules,
    today: NaiveDate,
) -> Result<CmdResult>
where
    S: RecordStore + ?Sized,
    C: Console + ?Sized,
{
    let employee = collect_employee(console, rules, today)?;
    tracing::info!(name = %employee.full_name(), "adding record");

    records.push(employee.clone());
    let mut result = CmdResult::default();
    persist(store, records, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Record added: {}",
        employee.full_name()
    )));
    Ok(result.with_affected_records(vec![employee]))
}
