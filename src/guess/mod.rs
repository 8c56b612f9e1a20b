//! Field guessing: trim policy, then type, then ignore flag.
//!
//! Trimming runs first because it rewrites the samples the type guesser reads;
//! the ignore check runs last so it sees the trimmed text.

pub mod ignore;
pub mod precision;
pub mod trim;
pub mod types;

use log::debug;

use crate::{field::FieldDescriptor, symbols::NumberSymbols};

pub use ignore::guess_ignore;
pub use precision::estimate_precision;
pub use trim::guess_trim_type;
pub use types::{guess_date_format, guess_number_format, guess_type};

/// Runs the full guess over the samples already attached to `field`.
pub fn guess(field: &mut FieldDescriptor, symbols: &NumberSymbols) {
    guess_trim_type(field);
    guess_type(field, symbols);
    guess_ignore(field);
    debug!(
        "Guessed {field}: type={} format='{}' trim={} precision={} ignore={}",
        field.field_type, field.format, field.trim_policy, field.precision, field.ignore
    );
}

/// Attaches `samples` to `field`, guesses it and hands the descriptor back.
pub fn classify(
    mut field: FieldDescriptor,
    samples: Vec<Option<String>>,
    symbols: &NumberSymbols,
) -> FieldDescriptor {
    field.set_samples(samples);
    guess(&mut field, symbols);
    field
}
