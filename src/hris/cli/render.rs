//! Output formatting. `render_*` functions build strings so they can be
//! tested without a terminal; `print_*` writes them to stdout.

use colored::Colorize;
use hris::commands::{CmdMessage, CmdResult, DisplayRecord, MessageLevel};

const FIELD_LABELS: [&str; 10] = [
    "First Name",
    "Last Name",
    "Date of Birth",
    "Age",
    "Address",
    "Email",
    "Job Position",
    "Department",
    "Salary",
    "Hire Date",
];

const STARS: &str = "*****************************************************";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub fn render_records(records: &[DisplayRecord]) -> String {
    let mut output = String::new();
    for dp in records {
        output.push_str(&format!(
            "\n{}\n",
            format!("Record {}:", dp.index).yellow().bold()
        ));
        for (label, value) in FIELD_LABELS.iter().zip(dp.record.to_row()) {
            output.push_str(&format!("{}: {}\n", label.blue(), value.green()));
        }
    }
    output
}

pub fn render_config_values(values: &[(String, String)]) -> String {
    values
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key.blue(), value))
        .collect()
}

pub fn render_banner() -> String {
    format!(
        "{}\n{}\n{}\n\n{}\n",
        STARS.green(),
        "    Welcome to Human Resources Information System".blue().bold(),
        STARS.green(),
        "Manage employee records from your terminal: add, view, update,\n\
         delete, search and sort them. Every change is saved immediately."
    )
}

pub fn render_menu_header() -> String {
    format!(
        "\n{}\n{}\n{}\n",
        "=========================".yellow(),
        "  HRIS MENU - Select an option".yellow().bold(),
        "=========================".yellow()
    )
}

pub fn render_instructions() -> String {
    let steps = [
        "Choose 'HRIS Menu' from the main menu to work with employee records.",
        "Add Record asks for each field in turn. An invalid answer is explained and asked again.",
        "Dates use the DD-MM-YYYY format. Employees must be at least 18 at hire.",
        "View Records lists every record with its number.",
        "Update Record and Delete Record ask for that number first.",
        "Search Records matches part of a first or last name, ignoring case.",
        "Sort Records orders by first name, last name, age or department.",
        "Exit returns to the main menu.",
    ];

    let mut output = format!("{}\n\n", "Brief Application Instructions".blue().bold());
    for (i, step) in steps.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, step));
    }
    output
}

/// Records first, then the messages about them.
pub fn print_result(result: &CmdResult) {
    print!("{}", render_records(&result.listed_records));
    print!("{}", render_config_values(&result.config_values));
    print_messages(&result.messages);
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn print_records(records: &[DisplayRecord]) {
    print!("{}", render_records(records));
}

pub fn print_banner() {
    println!("{}", render_banner());
}

pub fn print_menu_header() {
    print!("{}", render_menu_header());
}

pub fn print_instructions() {
    println!("{}", render_instructions());
}
