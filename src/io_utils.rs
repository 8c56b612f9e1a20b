//! Input helpers for sampling text files.
//!
//! - **Delimiter resolution**: `.tsv` → tab, anything else → comma, unless
//!   the caller provides one.
//! - **Encoding**: input decoding via `encoding_rs`, defaulting to UTF-8.
//! - **Readers**: a flexible CSV reader (rows may be short) and a line reader
//!   for fixed-width files.
//! - **stdin**: the `-` path convention reads from standard input.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use encoding_rs::{Encoding, UTF_8};

pub const DEFAULT_CSV_DELIMITER: u8 = b',';
pub const DEFAULT_TSV_DELIMITER: u8 = b'\t';

pub fn is_dash(path: &Path) -> bool {
    path == Path::new("-")
}

pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding> {
    match label {
        Some(value) => Encoding::for_label(value.trim().as_bytes())
            .ok_or_else(|| anyhow!("Unknown encoding '{value}'")),
        None => Ok(UTF_8),
    }
}

pub fn resolve_input_delimiter(path: &Path, provided: Option<u8>) -> u8 {
    provided.unwrap_or_else(|| match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => DEFAULT_TSV_DELIMITER,
        _ => DEFAULT_CSV_DELIMITER,
    })
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if is_dash(path) {
        return Ok(Box::new(std::io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("Opening input file {path:?}"))?;
    Ok(Box::new(BufReader::new(file)))
}

/// CSV reader that tolerates rows with fewer or more fields than the header.
pub fn open_csv_reader<R>(reader: R, delimiter: u8, has_headers: bool) -> csv::Reader<R>
where
    R: Read,
{
    csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(delimiter)
        .double_quote(true)
        .flexible(true)
        .from_reader(reader)
}

pub fn open_csv_reader_from_path(
    path: &Path,
    delimiter: u8,
    has_headers: bool,
) -> Result<csv::Reader<Box<dyn Read>>> {
    Ok(open_csv_reader(open_input(path)?, delimiter, has_headers))
}

pub fn open_line_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    Ok(BufReader::new(open_input(path)?))
}

/// Reads the next raw line into `buffer` without its terminator; `false` at end of input.
pub fn read_raw_line<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> Result<bool> {
    buffer.clear();
    let read = reader
        .read_until(b'\n', buffer)
        .context("Reading input line")?;
    if read == 0 {
        return Ok(false);
    }
    if buffer.ends_with(b"\n") {
        buffer.pop();
        if buffer.ends_with(b"\r") {
            buffer.pop();
        }
    }
    Ok(true)
}

pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        Err(anyhow!(
            "Failed to decode text with encoding {}",
            encoding.name()
        ))
    } else {
        Ok(text.into_owned())
    }
}

pub fn decode_record(record: &csv::ByteRecord, encoding: &'static Encoding) -> Result<Vec<String>> {
    record
        .iter()
        .map(|field| decode_bytes(field, encoding))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn delimiter_defaults_follow_extension() {
        assert_eq!(
            resolve_input_delimiter(&PathBuf::from("data.tsv"), None),
            b'\t'
        );
        assert_eq!(
            resolve_input_delimiter(&PathBuf::from("data.txt"), None),
            b','
        );
        assert_eq!(
            resolve_input_delimiter(&PathBuf::from("data.tsv"), Some(b';')),
            b';'
        );
    }

    #[test]
    fn resolve_encoding_accepts_known_labels() {
        assert_eq!(resolve_encoding(None).unwrap(), UTF_8);
        assert_eq!(resolve_encoding(Some("latin1")).unwrap(), WINDOWS_1252);
        assert!(resolve_encoding(Some("no-such-encoding")).is_err());
    }

    #[test]
    fn read_raw_line_strips_terminators() {
        let mut reader = Cursor::new(b"first\r\nsecond\nlast".to_vec());
        let mut buffer = Vec::new();
        let mut lines = Vec::new();
        while read_raw_line(&mut reader, &mut buffer).unwrap() {
            lines.push(String::from_utf8(buffer.clone()).unwrap());
        }
        assert_eq!(lines, ["first", "second", "last"]);
    }

    #[test]
    fn decode_bytes_reports_invalid_utf8() {
        assert!(decode_bytes(&[0x66, 0xff], UTF_8).is_err());
        assert_eq!(decode_bytes(b"Caf\xe9", WINDOWS_1252).unwrap(), "Café");
    }
}
