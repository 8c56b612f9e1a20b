pub mod catalog;
pub mod cli;
pub mod date_pattern;
pub mod field;
pub mod guess;
mod guess_cmd;
pub mod io_utils;
pub mod layout;
pub mod number_pattern;
pub mod sampling;
mod show_cmd;
pub mod symbols;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

pub use crate::field::{FieldDescriptor, FieldType, TrimPolicy};
pub use crate::guess_cmd::guess_fields;
pub use crate::symbols::NumberSymbols;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("field_guesser", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Guess(args) => guess_cmd::execute(&args),
        Commands::Show(args) => show_cmd::execute(&args),
    }
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b'\t' => "\\t".to_string(),
        b'\n' => "\\n".to_string(),
        other => (other as char).to_string(),
    }
}
