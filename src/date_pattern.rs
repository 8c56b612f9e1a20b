//! Strict date parsing for `yyyy-MM-dd` style layout patterns.
//!
//! Layout formats are stored in the letter notation common to text-file
//! readers (`yyyy`, `MM`, `dd`, `HH`, `mm`, `ss`, `SSS`). A [`DatePattern`]
//! translates such a pattern once into a chrono format string and then parses
//! values against it. Fields are range-checked, so a 13th month fails, but
//! text after a complete match (a time after a date) is left unread.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("date pattern is empty")]
    Empty,
    #[error("unsupported pattern letter '{letter}' (x{count}) in '{pattern}'")]
    UnsupportedLetter {
        pattern: String,
        letter: char,
        count: usize,
    },
    #[error("unterminated quoted literal in '{0}'")]
    UnterminatedQuote(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pattern: &'static str,
    chrono_format: String,
    has_time: bool,
}

impl DatePattern {
    pub fn compile(pattern: &'static str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        let mut chrono_format = String::with_capacity(pattern.len() * 2);
        let mut has_time = false;
        let chars: Vec<char> = pattern.chars().collect();
        let mut idx = 0;
        while idx < chars.len() {
            let ch = chars[idx];
            if ch == '\'' {
                let close = chars[idx + 1..]
                    .iter()
                    .position(|c| *c == '\'')
                    .ok_or_else(|| PatternError::UnterminatedQuote(pattern.to_string()))?;
                for literal in &chars[idx + 1..idx + 1 + close] {
                    push_literal(&mut chrono_format, *literal);
                }
                idx += close + 2;
                continue;
            }
            if !ch.is_ascii_alphabetic() {
                push_literal(&mut chrono_format, ch);
                idx += 1;
                continue;
            }
            let count = chars[idx..].iter().take_while(|c| **c == ch).count();
            let token = match (ch, count) {
                ('y', 2) => "%y",
                ('y', _) => "%Y",
                ('M', 1 | 2) => "%m",
                ('d', 1 | 2) => "%d",
                ('H', 1 | 2) => "%H",
                ('m', 1 | 2) => "%M",
                ('s', 1 | 2) => "%S",
                ('S', 3) => "%3f",
                (letter, count) => {
                    return Err(PatternError::UnsupportedLetter {
                        pattern: pattern.to_string(),
                        letter,
                        count,
                    });
                }
            };
            if matches!(ch, 'H' | 'm' | 's' | 'S') {
                has_time = true;
            }
            chrono_format.push_str(token);
            idx += count;
        }
        Ok(Self {
            pattern,
            chrono_format,
            has_time,
        })
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn chrono_format(&self) -> &str {
        &self.chrono_format
    }

    /// Reads the leading part of `value` that matches the pattern.
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        if self.has_time {
            NaiveDateTime::parse_and_remainder(value, &self.chrono_format)
                .ok()
                .map(|(parsed, _)| parsed)
        } else {
            NaiveDate::parse_and_remainder(value, &self.chrono_format)
                .ok()
                .and_then(|(date, _)| date.and_hms_opt(0, 0, 0))
        }
    }

    /// Calendar year of `value` when it parses under this pattern.
    pub fn parse_year(&self, value: &str) -> Option<i32> {
        self.parse(value).map(|parsed| parsed.year())
    }
}

fn push_literal(target: &mut String, ch: char) {
    if ch == '%' {
        target.push_str("%%");
    } else {
        target.push(ch);
    }
}
