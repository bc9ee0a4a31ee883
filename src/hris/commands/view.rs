use crate::commands::{display_records, CmdMessage, CmdResult};
use crate::model::Employee;

pub fn run(records: &[Employee]) -> CmdResult {
    if records.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No records found!"));
    }
    CmdResult::default().with_listed_records(display_records(records))
}
