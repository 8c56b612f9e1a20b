use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::sampling::DEFAULT_SAMPLE_ROWS;

#[derive(Debug, Parser)]
#[command(author, version, about = "Guess field types of delimited and fixed-width text files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sample a text file and guess type, format, trimming and ignore flags per field
    Guess(GuessArgs),
    /// Print a saved layout as a table
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct GuessArgs {
    /// Input file to sample ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Destination layout file (.yml/.yaml or .json); prints a table when omitted
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Number of rows to sample (0 means full scan)
    #[arg(long, default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub sample_rows: usize,
    /// Field delimiter for delimited input (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter, conflicts_with = "fixed_width")]
    pub delimiter: Option<u8>,
    /// Treat the input as fixed-width; requires --field definitions
    #[arg(long = "fixed-width", requires = "fields")]
    pub fixed_width: bool,
    /// Fixed-width field as `name:position:length` (length -1 runs to end of line)
    #[arg(long = "field", action = clap::ArgAction::Append)]
    pub fields: Vec<String>,
    /// Input has no header row; delimited fields are named field_0, field_1, ...
    #[arg(long = "no-header")]
    pub no_header: bool,
    /// Literal that marks a null value (compared case-insensitively)
    #[arg(long = "null-string", default_value = "")]
    pub null_string: String,
    /// Decimal separator assumed until samples show otherwise
    #[arg(long = "decimal-symbol", default_value_t = '.')]
    pub decimal_symbol: char,
    /// Grouping separator assumed until samples show otherwise
    #[arg(long = "group-symbol", default_value_t = ',')]
    pub group_symbol: char,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Layout file written by `guess`
    #[arg(short = 'l', long = "layout")]
    pub layout: PathBuf,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
