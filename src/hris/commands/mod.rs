//! # Command Layer
//!
//! One module per operation. Commands receive the collection and the store
//! explicitly, talk to the operator only through a [`Console`](crate::console::Console),
//! and report back through a [`CmdResult`]. They never print.
//!
//! Every command that changes the collection (add, update, delete, sort)
//! rewrites the whole store before returning; view and search only read.
//! Preconditions that fail (empty collection, unknown sort key, declined
//! confirmation) are not errors: they come back as messages.

use crate::model::Employee;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod search;
pub mod sort;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record together with its 1-based position in the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: Employee,
}

/// Numbers the whole collection from 1.
pub fn display_records(records: &[Employee]) -> Vec<DisplayRecord> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: i + 1,
            record: record.clone(),
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Employee>,
    pub listed_records: Vec<DisplayRecord>,
    pub config_values: Vec<(String, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Employee>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config_values(mut self, values: Vec<(String, String)>) -> Self {
        self.config_values = values;
        self
    }
}
