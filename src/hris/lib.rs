//! # HRIS Architecture
//!
//! HRIS is a small human resources information system: employee records are
//! created, listed, updated, deleted, searched and sorted from a terminal,
//! and the whole collection is persisted after every change.
//!
//! Like most of our tools it is a library first. The binary is a thin client
//! that wires a terminal to the library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menus, argument parsing, colored output, logging setup   │
//! │  - Implements `Console` on top of stdin/stdout              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store handle and the record collection          │
//! │  - Dispatches to commands, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / view / update / delete / search / sort             │
//! │  - Field prompts (prompt.rs) over pure checks (validation)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `RecordStore` trait: load all / save all                 │
//! │  - worksheet (CSV), JSON file, in-memory                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operator Input
//!
//! Commands never read stdin. Anything they need from the operator goes
//! through the [`console::Console`] trait, so tests drive whole operations with
//! a [`console::ScriptedConsole`] holding a finite list of answers.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`validation`]: Pure field checks and their diagnostics
//! - [`prompt`]: Retry-until-valid prompts built on the checks
//! - [`console`]: Operator I/O abstraction
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Employee` record and derived fields
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod prompt;
pub mod store;
pub mod validation;
