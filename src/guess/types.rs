//! Date, then number, then string classification of a sampled field.
//!
//! Each stage keeps a viability flag per catalog entry in a side table indexed
//! by catalog position. A single sample that a candidate cannot read removes
//! that candidate for the whole field. Once all samples are scanned the
//! lowest-index survivor wins.

use log::debug;

use crate::{
    catalog::{
        DATE_FORMATS, MAX_PLAUSIBLE_YEAR, MIN_PLAUSIBLE_YEAR, NUMBER_FORMATS, date_candidates,
        number_candidates,
    },
    field::{FieldDescriptor, FieldType},
    guess::precision::estimate_precision,
    symbols::NumberSymbols,
};

/// Resolves type, format, precision and number symbols from the field's samples.
///
/// With no sample collection the field simply becomes a string.
pub fn guess_type(field: &mut FieldDescriptor, symbols: &NumberSymbols) {
    field.field_type = FieldType::String;
    let Some(samples) = field.samples() else {
        return;
    };

    if let Some(format) = guess_date_format(samples, &field.null_string) {
        debug!("Field '{}' resolved as date '{format}'", field.name);
        field.field_type = FieldType::Date;
        field.format = format.to_string();
        field.precision = -1;
        field.decimal_symbol.clear();
        field.group_symbol.clear();
        field.currency_symbol.clear();
        return;
    }

    if let Some(guess) = guess_number_format(samples, &field.null_string, symbols) {
        debug!(
            "Field '{}' resolved as number '{}' (precision {}, {})",
            field.name, guess.format, guess.precision, guess.symbols
        );
        field.field_type = FieldType::Number;
        field.format = guess.format.to_string();
        field.precision = guess.precision;
        field.decimal_symbol = guess.symbols.decimal.to_string();
        field.group_symbol = guess.symbols.group.to_string();
        return;
    }

    debug!("Field '{}' falls back to string", field.name);
    field.field_type = FieldType::String;
    field.format.clear();
    field.precision = -1;
    field.decimal_symbol.clear();
    field.group_symbol.clear();
    field.currency_symbol.clear();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberGuess {
    pub format: &'static str,
    pub precision: i32,
    pub symbols: NumberSymbols,
}

fn is_null_sample(sample: &str, null_string: &str) -> bool {
    !sample.is_empty() && sample.to_lowercase() == null_string.to_lowercase()
}

/// First date format that reads every non-null sample as a plausible date.
pub fn guess_date_format(samples: &[Option<String>], null_string: &str) -> Option<&'static str> {
    let candidates = date_candidates();
    let mut viable = candidates
        .iter()
        .map(Option::is_some)
        .collect::<Vec<_>>();
    let mut viable_count = viable.iter().filter(|v| **v).count();
    let mut null_samples = 0usize;

    for sample in samples {
        if let Some(text) = sample.as_deref()
            && is_null_sample(text, null_string)
        {
            null_samples += 1;
            continue;
        }
        let text = sample.as_deref().filter(|text| !text.trim().is_empty());
        for (idx, candidate) in candidates.iter().enumerate() {
            if !viable[idx] {
                continue;
            }
            let plausible = match (text, candidate) {
                (Some(text), Some(pattern)) => pattern
                    .parse_year(text)
                    .is_some_and(|year| (MIN_PLAUSIBLE_YEAR..=MAX_PLAUSIBLE_YEAR).contains(&year)),
                _ => false,
            };
            if !plausible {
                viable[idx] = false;
                viable_count -= 1;
            }
        }
    }

    if viable_count == 0 || null_samples == samples.len() {
        return None;
    }
    viable
        .iter()
        .position(|v| *v)
        .map(|first| DATE_FORMATS[first])
}

/// Characters a numeric sample may contain; `-` only as the first character.
fn passes_number_gate(sample: &str) -> bool {
    sample.char_indices().all(|(idx, ch)| {
        ch.is_ascii_digit() || matches!(ch, '.' | ',' | 'E' | 'e') || (ch == '-' && idx == 0)
    })
}

/// Separators implied by the sample, or `None` when it carries neither `.` nor `,`.
fn separators_for(sample: &str) -> Option<NumberSymbols> {
    match (sample.find('.'), sample.find(',')) {
        (Some(_), None) => Some(NumberSymbols::point()),
        (None, Some(_)) => Some(NumberSymbols::comma()),
        (Some(dot), Some(comma)) if dot > comma => Some(NumberSymbols::point()),
        (Some(_), Some(_)) => Some(NumberSymbols::comma()),
        (None, None) => None,
    }
}

/// First number format that reads every non-null sample, with the largest
/// precision it observed and the separators the samples settled on.
pub fn guess_number_format(
    samples: &[Option<String>],
    null_string: &str,
    baseline: &NumberSymbols,
) -> Option<NumberGuess> {
    let candidates = number_candidates();
    let mut viable = vec![true; candidates.len()];
    let mut max_precision = vec![-1i32; candidates.len()];
    let mut symbols = *baseline;
    let mut null_samples = 0usize;

    for sample in samples {
        let text = sample.as_deref().unwrap_or_default();
        if is_null_sample(text, null_string) {
            null_samples += 1;
            continue;
        }
        if !passes_number_gate(text) {
            debug!("Sample '{text}' rules out a numeric type");
            return None;
        }
        let separated = separators_for(text);
        if let Some(implied) = separated {
            symbols = implied;
        }

        let integer = separated
            .is_none()
            .then(|| text.parse::<i64>().ok())
            .flatten()
            .map(|_| 0);

        for (idx, candidate) in candidates.iter().enumerate() {
            if !viable[idx] {
                continue;
            }
            let precision =
                integer.or_else(|| candidate.parse(text, &symbols).map(estimate_precision));
            match precision {
                Some(precision) => max_precision[idx] = max_precision[idx].max(precision),
                None => viable[idx] = false,
            }
        }
        if !viable.contains(&true) {
            return None;
        }
    }

    if null_samples == samples.len() {
        return None;
    }
    let first = viable.iter().position(|v| *v)?;
    Some(NumberGuess {
        format: NUMBER_FORMATS[first],
        precision: max_precision[first],
        symbols,
    })
}
