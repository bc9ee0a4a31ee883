//! # Console Abstraction
//!
//! Operations that need the operator (collecting fields, picking a record,
//! confirming a delete) talk to a [`Console`] instead of stdin/stdout. The CLI
//! provides a terminal-backed implementation; tests use [`ScriptedConsole`],
//! which replays a finite list of answers and records everything it was asked
//! to show.
//!
//! Running out of input is the only way a prompt gives up: `read_line` returns
//! [`HrisError::InputClosed`] and the operation unwinds with it.

use crate::commands::{CmdMessage, DisplayRecord};
use crate::error::{HrisError, Result};
use std::collections::VecDeque;

pub trait Console {
    /// Shows `prompt` and blocks for the next line of input, without its line ending.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Explains why the last answer was rejected. The prompt is repeated afterwards.
    fn diagnostic(&mut self, message: &str);

    /// Progress or status line emitted in the middle of an operation.
    fn notice(&mut self, message: CmdMessage);

    /// Lists records so the operator can pick one by number.
    fn show_records(&mut self, records: &[DisplayRecord]);
}

/// Replays canned answers. Everything shown is kept for later assertions.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub diagnostics: Vec<String>,
    pub notices: Vec<CmdMessage>,
    /// Number of records in each listing shown, in order.
    pub listings: Vec<usize>,
}

impl ScriptedConsole {
    pub fn new<I, T>(answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(HrisError::InputClosed)
    }

    fn diagnostic(&mut self, message: &str) {
        self.diagnostics.push(message.to_string());
    }

    fn notice(&mut self, message: CmdMessage) {
        self.notices.push(message);
    }

    fn show_records(&mut self, records: &[DisplayRecord]) {
        self.listings.push(records.len());
    }
}
