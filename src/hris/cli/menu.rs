//! Option selection for the shell menus.
//!
//! On an interactive terminal the options are drawn with a cursor and picked
//! with the arrow keys. Otherwise they are printed as a numbered list and one
//! line is read from stdin.

use colored::Colorize;
use console::{Key, Term};
use hris::error::{HrisError, Result};
use std::io::{self, BufRead, IsTerminal, Write};

/// What the operator did with a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 0-based index of the picked option.
    Chosen(usize),
    /// Esc or `q`.
    Cancelled,
    /// A line that is not one of the listed numbers.
    Invalid,
}

/// Lets the operator pick one of `options`. End of input is
/// [`HrisError::InputClosed`].
pub fn select(term: &Term, options: &[&str]) -> Result<Selection> {
    if options.is_empty() {
        return Ok(Selection::Cancelled);
    }
    if term.is_term() && io::stdin().is_terminal() {
        select_with_keys(term, options)
    } else {
        let mut stdin = io::stdin().lock();
        select_numbered(&mut stdin, options)
    }
}

fn select_with_keys(term: &Term, options: &[&str]) -> Result<Selection> {
    let mut cursor = 0;
    term.hide_cursor()?;

    loop {
        for (i, option) in options.iter().enumerate() {
            if i == cursor {
                term.write_line(&format!("{} {}", ">".cyan(), option.cyan().bold()))?;
            } else {
                term.write_line(&format!("  {}", option))?;
            }
        }

        let key = match term.read_key() {
            Ok(key) => key,
            // Ctrl-C arrives as an interrupted read while the terminal is raw.
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                term.show_cursor()?;
                return Err(HrisError::InputClosed);
            }
            Err(e) => {
                term.show_cursor()?;
                return Err(e.into());
            }
        };
        term.clear_last_lines(options.len())?;

        let picked = match key {
            Key::ArrowUp | Key::Char('k') => {
                cursor = cursor.checked_sub(1).unwrap_or(options.len() - 1);
                continue;
            }
            Key::ArrowDown | Key::Char('j') | Key::Tab => {
                cursor = (cursor + 1) % options.len();
                continue;
            }
            Key::Enter => Selection::Chosen(cursor),
            Key::Escape | Key::Char('q') => Selection::Cancelled,
            Key::Char(c) => match number_in_range(&c.to_string(), options.len()) {
                Some(index) => Selection::Chosen(index),
                None => continue,
            },
            _ => continue,
        };

        term.show_cursor()?;
        if let Selection::Chosen(index) = picked {
            term.write_line(&format!("{} {}", ">".cyan(), options[index]))?;
        }
        return Ok(picked);
    }
}

fn select_numbered<R: BufRead>(input: &mut R, options: &[&str]) -> Result<Selection> {
    let mut stdout = io::stdout();
    for (i, option) in options.iter().enumerate() {
        writeln!(stdout, "  {}) {}", i + 1, option)?;
    }
    write!(stdout, "Select an option: ")?;
    stdout.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(HrisError::InputClosed);
    }
    if line.trim().eq_ignore_ascii_case("q") {
        return Ok(Selection::Cancelled);
    }
    Ok(number_in_range(&line, options.len())
        .map(Selection::Chosen)
        .unwrap_or(Selection::Invalid))
}

/// Parses a 1-based option number into a 0-based index.
fn number_in_range(input: &str, len: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
