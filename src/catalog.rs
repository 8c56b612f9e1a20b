//! Priority-ordered candidate formats tried while guessing a field type.
//!
//! Order is significant: when several candidates fit every sample, the one
//! listed first wins.

use std::sync::OnceLock;

use log::warn;

use crate::{date_pattern::DatePattern, number_pattern::NumberPattern};

pub const DATE_FORMATS: &[&str] = &[
    "yyyy/MM/dd HH:mm:ss.SSS",
    "yyyy/MM/dd HH:mm:ss",
    "dd/MM/yyyy",
    "dd-MM-yyyy",
    "yyyy/MM/dd",
    "yyyy-MM-dd",
    "yyyyMMdd",
    "ddMMyyyy",
    "d-M-yyyy",
    "d/M/yyyy",
    "d-M-yy",
    "d/M/yy",
];

pub const DEFAULT_NUMBER_FORMAT: &str = "#,##0.###";

pub const NUMBER_FORMATS: &[&str] = &[
    "",
    "#",
    DEFAULT_NUMBER_FORMAT,
    "0.00",
    "0000000000000",
    "###,###,###.#######",
    "###############.###############",
    "#####.###############%",
];

/// Plausible calendar years for a guessed date column.
pub const MIN_PLAUSIBLE_YEAR: i32 = 1800;
pub const MAX_PLAUSIBLE_YEAR: i32 = 2200;

static DATE_CANDIDATES: OnceLock<Vec<Option<DatePattern>>> = OnceLock::new();
static NUMBER_CANDIDATES: OnceLock<Vec<NumberPattern>> = OnceLock::new();

/// Compiled date candidates, index-aligned with [`DATE_FORMATS`].
///
/// An entry that fails to compile is `None` and never considered viable.
pub fn date_candidates() -> &'static [Option<DatePattern>] {
    DATE_CANDIDATES.get_or_init(|| {
        DATE_FORMATS
            .iter()
            .map(|format| match DatePattern::compile(*format) {
                Ok(pattern) => Some(pattern),
                Err(err) => {
                    warn!("Skipping date format '{format}': {err}");
                    None
                }
            })
            .collect()
    })
}

/// Compiled number candidates, index-aligned with [`NUMBER_FORMATS`].
pub fn number_candidates() -> &'static [NumberPattern] {
    NUMBER_CANDIDATES.get_or_init(|| {
        NUMBER_FORMATS
            .iter()
            .map(|format| NumberPattern::compile(*format))
            .collect()
    })
}
