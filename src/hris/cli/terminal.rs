use super::render;
use colored::Colorize;
use hris::commands::{CmdMessage, DisplayRecord};
use hris::console::Console;
use hris::error::{HrisError, Result};
use std::io::{self, BufRead, Write};

/// [`Console`] over the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        read_answer(&mut io::stdin().lock())
    }

    fn diagnostic(&mut self, message: &str) {
        println!("{}\n", message.red());
    }

    fn notice(&mut self, message: CmdMessage) {
        render::print_messages(&[message]);
    }

    fn show_records(&mut self, records: &[DisplayRecord]) {
        render::print_records(records);
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(HrisError::InputClosed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
