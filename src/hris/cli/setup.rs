use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hris", bin_name = "hris", version)]
#[command(about = "Human resources information system for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json and the record files (default: $HRIS_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive menus (the default)
    #[command(alias = "m")]
    Menu,

    /// Print every record
    #[command(alias = "ls")]
    View,

    /// Print records whose first or last name contains the term
    Search {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Sort records and save the new order
    Sort {
        /// first name, last name, age or department
        #[arg(required = true, num_args = 1..)]
        key: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., backend, min-age, departments)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
