//! # API Facade
//!
//! [`HrisApi`] is the single entry point for record operations. It owns the
//! two pieces of session state: the store handle and the in-memory record
//! collection, loaded once in [`HrisApi::open`] and handed explicitly to each
//! command.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command modules
//! - **Supplies context**: field rules and "today" for age derivation
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! ## Generic Over RecordStore
//!
//! - Production: `HrisApi<Box<dyn RecordStore>>` (backend chosen by config)
//! - Testing: `HrisApi<InMemoryStore>`

use crate::commands;
use crate::config::FieldRules;
use crate::console::Console;
use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;
use chrono::{Local, NaiveDate};
use std::path::Path;

pub struct HrisApi<S: RecordStore> {
    store: S,
    records: Vec<Employee>,
    rules: FieldRules,
    today: Option<NaiveDate>,
}

impl<S: RecordStore> HrisApi<S> {
    /// Loads the collection from `store`. The returned result carries a
    /// notice when the store holds no records.
    pub fn open(store: S, rules: FieldRules) -> Result<(Self, commands::CmdResult)> {
        let records = store.load()?;
        tracing::info!(count = records.len(), "session opened");

        let mut opened = commands::CmdResult::default();
        if records.is_empty() {
            opened.add_message(commands::CmdMessage::warning(store.empty_notice()));
        }

        let api = Self {
            store,
            records,
            rules,
            today: None,
        };
        Ok((api, opened))
    }

    /// Pins the date used for age checks and derivation.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<commands::CmdResult> {
        let today = self.today();
        commands::add::run(
            &mut self.store,
            &mut self.records,
            console,
            &self.rules,
            today,
        )
    }

    pub fn view(&self) -> Result<commands::CmdResult> {
        Ok(commands::view::run(&self.records))
    }

    pub fn update<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<commands::CmdResult> {
        let today = self.today();
        commands::update::run(
            &mut self.store,
            &mut self.records,
            console,
            &self.rules,
            today,
        )
    }

    pub fn delete<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &mut self.records, console)
    }

    pub fn search<C: Console + ?Sized>(&self, console: &mut C) -> Result<commands::CmdResult> {
        commands::search::prompt(&self.records, console)
    }

    pub fn search_term(&self, term: &str) -> Result<commands::CmdResult> {
        Ok(commands::search::run(&self.records, term))
    }

    pub fn sort<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<commands::CmdResult> {
        commands::sort::prompt(&mut self.store, &mut self.records, console)
    }

    pub fn sort_by(&mut self, choice: &str) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.store, &mut self.records, choice)
    }
}

/// Reads or changes the configuration stored in `config_dir`.
pub fn configure(config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::sort::SortKey;
pub use commands::{CmdMessage, CmdResult, DisplayRecord, MessageLevel};
