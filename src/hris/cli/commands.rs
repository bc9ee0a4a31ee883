//! # Dispatch
//!
//! - `run()`: parses arguments, installs logging, resolves the data directory
//! - `init_context()`: loads configuration and opens the record store
//! - `handle_*()`: per-command handlers that call the API and print results
//!
//! Running out of input in the interactive session is a normal way to leave
//! it, so [`HrisError::InputClosed`] ends the process successfully.

use super::logging;
use super::menu::{self, Selection};
use super::render::{
    print_banner, print_instructions, print_menu_header, print_messages, print_result,
};
use super::setup::{Cli, Commands};
use super::terminal::TerminalConsole;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use hris::api::{self, CmdMessage, CmdResult, ConfigAction, HrisApi};
use hris::config::HrisConfig;
use hris::error::{HrisError, Result};
use hris::store::{open_store, RecordStore};
use std::path::{Path, PathBuf};

const DATA_DIR_ENV: &str = "HRIS_HOME";

const MAIN_MENU: [&str; 2] = ["HRIS Menu", "Instructions"];
const INSTRUCTIONS_MENU: [&str; 1] = ["Main Menu"];
const HRIS_MENU: [&str; 7] = [
    "Add Record",
    "View Records",
    "Update Record",
    "Delete Record",
    "Search Records",
    "Sort Records",
    "Exit",
];

struct AppContext {
    api: HrisApi<Box<dyn RecordStore>>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(&data_dir, key, value);
    }

    let (mut ctx, opened) = init_context(&data_dir)?;

    match cli.command {
        None | Some(Commands::Menu) => match handle_interactive(&mut ctx, &opened) {
            Err(HrisError::InputClosed) => {
                tracing::debug!("input closed, leaving");
                println!();
                Ok(())
            }
            other => other,
        },
        Some(Commands::View) => handle_view(&ctx),
        Some(Commands::Search { term }) => handle_search(&ctx, &term.join(" ")),
        Some(Commands::Sort { key }) => handle_sort(&mut ctx, &key.join(" ")),
        // Handled before the store is opened.
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "hris", "hris")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            HrisError::Config(format!(
                "Could not determine a data directory; pass --data-dir or set {}",
                DATA_DIR_ENV
            ))
        })
}

fn init_context(data_dir: &Path) -> Result<(AppContext, CmdResult)> {
    let config = HrisConfig::load(data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        HrisConfig::default()
    });
    let store = open_store(&config, data_dir);
    let (api, opened) = HrisApi::open(store, config.rules())?;
    Ok((AppContext { api }, opened))
}

fn handle_view(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.view()?;
    print_result(&result);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search_term(term)?;
    print_result(&result);
    Ok(())
}

fn handle_sort(ctx: &mut AppContext, key: &str) -> Result<()> {
    let result = ctx.api.sort_by(key)?;
    print_result(&result);
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = api::configure(data_dir, action)?;
    print_result(&result);
    Ok(())
}

fn handle_interactive(ctx: &mut AppContext, opened: &CmdResult) -> Result<()> {
    let term = Term::stdout();
    let mut console = TerminalConsole::new();

    clear(&term);
    print_messages(&opened.messages);
    print_banner();

    loop {
        match menu::select(&term, &MAIN_MENU)? {
            Selection::Chosen(0) => {
                clear(&term);
                run_hris_menu(ctx, &term, &mut console)?;
            }
            Selection::Chosen(1) => {
                clear(&term);
                print_instructions();
                menu::select(&term, &INSTRUCTIONS_MENU)?;
                clear(&term);
                print_banner();
            }
            Selection::Cancelled => return Ok(()),
            _ => print_messages(&[invalid_choice()]),
        }
    }
}

/// Runs operations until Exit is chosen or the menu is cancelled.
fn run_hris_menu(ctx: &mut AppContext, term: &Term, console: &mut TerminalConsole) -> Result<()> {
    loop {
        print_menu_header();
        let choice = menu::select(term, &HRIS_MENU)?;
        clear(term);

        let result = match choice {
            Selection::Chosen(0) => ctx.api.add(console)?,
            Selection::Chosen(1) => ctx.api.view()?,
            Selection::Chosen(2) => ctx.api.update(console)?,
            Selection::Chosen(3) => ctx.api.delete(console)?,
            Selection::Chosen(4) => ctx.api.search(console)?,
            Selection::Chosen(5) => ctx.api.sort(console)?,
            Selection::Chosen(6) | Selection::Cancelled => return Ok(()),
            _ => CmdResult::default().with_message(invalid_choice()),
        };
        print_result(&result);
    }
}

fn invalid_choice() -> CmdMessage {
    CmdMessage::error("Invalid choice! Please try again.")
}

fn clear(term: &Term) {
    if term.is_term() {
        let _ = term.clear_screen();
    }
}
