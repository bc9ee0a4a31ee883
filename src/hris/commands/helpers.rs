use crate::commands::{CmdMessage, CmdResult};
use crate::config::FieldRules;
use crate::console::Console;
use crate::error::Result;
use crate::model::{age_on, min_hire_date, Employee};
use crate::prompt;
use crate::store::RecordStore;
use crate::validation::CaseRule;
use chrono::NaiveDate;

const SALARY_HINT: &str =
    "Enter a positive amount using only numbers and the decimal point (e.g. 4500.80).";

/// Asks for every field of a record, in the fixed order used by both add and
/// update. Age and the hire-date lower bound are derived, never asked.
pub fn collect_employee<C: Console + ?Sized>(
    console: &mut C,
    rules: &FieldRules,
    today: NaiveDate,
) -> Result<Employee> {
    let first_name = prompt::ask_name(console, "Enter the employee first name: ")?;
    let last_name = prompt::ask_name(console, "Enter the employee last name: ")?;
    let date_of_birth = prompt::ask_date_of_birth(
        console,
        "Enter the employee's date of birth (DD-MM-YYYY): ",
        today,
        rules.min_age,
    )?;
    let age = age_on(date_of_birth, today);
    let address = prompt::ask_address(console, "Enter the employee address: ")?;
    let email = prompt::ask_email(console, "Enter the employee's email address: ")?;
    let job_position = prompt::ask_choice(
        console,
        "Enter the job position: ",
        "job position",
        &rules.job_positions,
        CaseRule::Capitalized,
    )?;
    let department = prompt::ask_choice(
        console,
        "Enter the department: ",
        "department",
        &rules.departments,
        CaseRule::CapitalizedOrUpper,
    )?;
    let salary: f64 = prompt::ask_number(
        console,
        "Enter the employee's salary($): ",
        |x: &f64| x.is_finite() && *x >= 0.0,
        SALARY_HINT,
    )?;
    let hire_date = prompt::ask_hire_date(
        console,
        "Enter the employee's hire date (DD-MM-YYYY): ",
        today,
        Some(min_hire_date(date_of_birth)),
    )?;

    Ok(Employee {
        first_name,
        last_name,
        date_of_birth,
        age,
        address,
        email,
        job_position,
        department,
        salary,
        hire_date,
    })
}

/// Rewrites the store with the whole collection and notes it in `result`.
pub fn persist<S: RecordStore + ?Sized>(
    store: &mut S,
    records: &[Employee],
    result: &mut CmdResult,
) -> Result<()> {
    store.save(records)?;
    tracing::info!(count = records.len(), "records saved");
    result.add_message(CmdMessage::success("Records saved successfully!"));
    Ok(())
}
