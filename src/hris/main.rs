//! # HRIS CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/hris/cli/)                                  │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Menus and dispatch (menu.rs, commands.rs)                │
//! │  - Terminal-backed Console (terminal.rs)                    │
//! │  - Colored rendering of results (render.rs)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (hris::api and below)                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Running `hris` with no subcommand opens the interactive menus. `view`,
//! `search`, `sort` and `config` run once and exit, which keeps the tool
//! scriptable.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
