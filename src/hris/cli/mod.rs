//! # CLI Behavior
//!
//! This is **one possible UI client** for hris, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Interactive Session (`hris`)
//!
//! 1. Records are loaded once from the configured store.
//! 2. The main menu offers `HRIS Menu` and `Instructions`.
//! 3. The HRIS menu dispatches Add, View, Update, Delete, Search, Sort and Exit
//!    (back to the main menu). Every change is saved before the menu returns.
//!
//! On a terminal, menus are driven with the arrow keys (Enter selects, Esc or
//! `q` cancels). When stdin is not a terminal the options are numbered and a
//! line is read instead, so sessions can be scripted: `q` cancels, anything
//! else that is not a listed number is reported and the menu is shown again.
//! Cancelling the main menu or reaching end of input quits.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch, context setup and per-command handlers
//! - `menu`: Option selection
//! - `render`: Output formatting (records, messages, banners)
//! - `setup`: Argument parsing via clap
//! - `terminal`: `Console` implementation over stdin/stdout
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod menu;
mod render;
pub mod setup;
mod terminal;

pub use commands::run;
