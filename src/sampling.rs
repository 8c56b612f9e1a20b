//! Collects per-field sample values from delimited and fixed-width files.
//!
//! Samples keep their raw text (no trimming, empty strings stay empty) since
//! the guessers decide themselves what whitespace means. A value that is not
//! present in a row at all (a short delimited row, a fixed-width line that
//! ends before the field starts, undecodable bytes) is recorded as `None`.

use std::path::Path;

use anyhow::{Context, Result, anyhow, ensure};
use encoding_rs::{Encoding, UTF_8};
use itertools::Itertools;
use log::debug;

use crate::io_utils;

pub const DEFAULT_SAMPLE_ROWS: usize = 100;

#[derive(Debug, Clone, Copy)]
pub struct SampleOptions {
    /// Rows to sample; 0 reads the whole input.
    pub sample_rows: usize,
    pub has_headers: bool,
    pub encoding: &'static Encoding,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            sample_rows: DEFAULT_SAMPLE_ROWS,
            has_headers: true,
            encoding: UTF_8,
        }
    }
}

impl SampleOptions {
    fn wants_more(&self, rows_read: usize) -> bool {
        self.sample_rows == 0 || rows_read < self.sample_rows
    }
}

/// One fixed-width slot given as `name:position:length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWidthSpec {
    pub name: String,
    pub position: i32,
    /// `-1` runs to the end of the line.
    pub length: i32,
}

impl FixedWidthSpec {
    pub fn parse(raw: &str) -> Result<Self> {
        let (name, position, length) = raw
            .split(':')
            .map(str::trim)
            .collect_tuple()
            .ok_or_else(|| anyhow!("Field definition '{raw}' must use the form name:position:length"))?;
        ensure!(!name.is_empty(), "Field name cannot be empty in '{raw}'");
        let position: i32 = position
            .parse()
            .with_context(|| format!("Invalid position in field definition '{raw}'"))?;
        let length: i32 = length
            .parse()
            .with_context(|| format!("Invalid length in field definition '{raw}'"))?;
        ensure!(position >= 0, "Position must not be negative in '{raw}'");
        ensure!(
            length > 0 || length == -1,
            "Length must be positive (or -1 for the rest of the line) in '{raw}'"
        );
        Ok(Self {
            name: name.to_string(),
            position,
            length,
        })
    }

    /// Cuts this slot out of `line`, counting characters rather than bytes.
    pub fn slice(&self, line: &str) -> Option<String> {
        let start = usize::try_from(self.position).ok()?;
        if line.chars().count() <= start {
            return None;
        }
        let rest = line.chars().skip(start);
        Some(match usize::try_from(self.length) {
            Ok(length) => rest.take(length).collect(),
            Err(_) => rest.collect(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SampledColumns {
    pub names: Vec<String>,
    pub columns: Vec<Vec<Option<String>>>,
    pub rows_read: usize,
    pub decode_errors: usize,
}

impl SampledColumns {
    fn with_names(names: Vec<String>) -> Self {
        let columns = vec![Vec::new(); names.len()];
        Self {
            names,
            columns,
            rows_read: 0,
            decode_errors: 0,
        }
    }

    pub fn column(&self, name: &str) -> Option<&[Option<String>]> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Hands out `(name, samples)` pairs in layout order.
    pub fn into_fields(self) -> impl Iterator<Item = (String, Vec<Option<String>>)> {
        self.names.into_iter().zip(self.columns)
    }
}

pub fn generate_field_names(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("field_{idx}")).collect()
}

pub fn sample_delimited(
    path: &Path,
    delimiter: u8,
    options: &SampleOptions,
) -> Result<SampledColumns> {
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter, false)?;
    let mut record = csv::ByteRecord::new();

    let mut sampled = if options.has_headers {
        if !reader.read_byte_record(&mut record)? {
            return Ok(SampledColumns::default());
        }
        let headers = io_utils::decode_record(&record, options.encoding)
            .with_context(|| format!("Decoding header row of {path:?}"))?;
        SampledColumns::with_names(headers)
    } else {
        SampledColumns::default()
    };

    while options.wants_more(sampled.rows_read) && reader.read_byte_record(&mut record)? {
        if !options.has_headers && record.len() > sampled.names.len() {
            let width = record.len();
            let missing = sampled.rows_read;
            sampled.names = generate_field_names(width);
            sampled.columns.resize_with(width, || vec![None; missing]);
        }
        for (idx, column) in sampled.columns.iter_mut().enumerate() {
            let value = match record.get(idx) {
                Some(bytes) => match io_utils::decode_bytes(bytes, options.encoding) {
                    Ok(text) => Some(text),
                    Err(_) => {
                        sampled.decode_errors += 1;
                        None
                    }
                },
                None => None,
            };
            column.push(value);
        }
        sampled.rows_read += 1;
    }

    debug!(
        "Sampled {} row(s) across {} field(s) from {:?}",
        sampled.rows_read,
        sampled.names.len(),
        path
    );
    Ok(sampled)
}

pub fn sample_fixed_width(
    path: &Path,
    specs: &[FixedWidthSpec],
    options: &SampleOptions,
) -> Result<SampledColumns> {
    ensure!(
        !specs.is_empty(),
        "Fixed-width sampling needs at least one field definition"
    );
    if let Some(duplicate) = specs.iter().map(|spec| spec.name.as_str()).duplicates().next() {
        return Err(anyhow!("Duplicate field name '{duplicate}'"));
    }

    let mut reader = io_utils::open_line_reader(path)?;
    let mut buffer = Vec::new();
    let mut sampled = SampledColumns::with_names(specs.iter().map(|s| s.name.clone()).collect());

    if options.has_headers && !io_utils::read_raw_line(&mut reader, &mut buffer)? {
        return Ok(sampled);
    }

    while options.wants_more(sampled.rows_read) && io_utils::read_raw_line(&mut reader, &mut buffer)? {
        let line = match io_utils::decode_bytes(&buffer, options.encoding) {
            Ok(line) => Some(line),
            Err(_) => {
                sampled.decode_errors += 1;
                None
            }
        };
        for (spec, column) in specs.iter().zip(sampled.columns.iter_mut()) {
            column.push(line.as_deref().and_then(|line| spec.slice(line)));
        }
        sampled.rows_read += 1;
    }

    debug!(
        "Sampled {} fixed-width line(s) for {} field(s) from {:?}",
        sampled.rows_read,
        specs.len(),
        path
    );
    Ok(sampled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_spec_parses_triplets() {
        let spec = FixedWidthSpec::parse("amount: 10 :8").expect("spec");
        assert_eq!(spec.name, "amount");
        assert_eq!(spec.position, 10);
        assert_eq!(spec.length, 8);
        assert_eq!(FixedWidthSpec::parse("tail:4:-1").unwrap().length, -1);
    }

    #[test]
    fn fixed_width_spec_rejects_bad_definitions() {
        assert!(FixedWidthSpec::parse("amount:10").is_err());
        assert!(FixedWidthSpec::parse("amount:10:8:2").is_err());
        assert!(FixedWidthSpec::parse(":0:1").is_err());
        assert!(FixedWidthSpec::parse("a:-1:3").is_err());
        assert!(FixedWidthSpec::parse("a:0:0").is_err());
        assert!(FixedWidthSpec::parse("a:x:3").is_err());
    }

    #[test]
    fn slice_counts_characters() {
        let spec = FixedWidthSpec::parse("city:2:4").unwrap();
        assert_eq!(spec.slice("01Köln  X").as_deref(), Some("Köln"));
        assert_eq!(spec.slice("01Kö").as_deref(), Some("Kö"));
        assert_eq!(spec.slice("01"), None);

        let rest = FixedWidthSpec::parse("rest:3:-1").unwrap();
        assert_eq!(rest.slice("abc  tail ").as_deref(), Some("  tail "));
    }

    #[test]
    fn generated_names_are_positional() {
        assert_eq!(generate_field_names(3), ["field_0", "field_1", "field_2"]);
    }
}
