mod common;

use common::samples;
use field_guesser::{
    FieldDescriptor, FieldType, NumberSymbols, TrimPolicy,
    guess::{self, classify},
};
use proptest::prelude::*;

fn classify_with(values: &[&str], symbols: &NumberSymbols) -> FieldDescriptor {
    classify(FieldDescriptor::new("f", 0, -1), samples(values), symbols)
}

fn classify_point(values: &[&str]) -> FieldDescriptor {
    classify_with(values, &NumberSymbols::point())
}

#[test]
fn dates_win_over_numbers() {
    let field = classify_point(&["20240105", "19991231"]);
    assert_eq!(field.field_type, FieldType::Date);
    assert_eq!(field.format, "yyyyMMdd");
    assert_eq!(field.precision, -1);
}

#[test]
fn date_with_padding_is_trimmed_first() {
    let field = classify_point(&[" 2024-01-05", " 2024-02-20"]);
    assert_eq!(field.trim_policy, TrimPolicy::LEFT);
    assert_eq!(field.field_type, FieldType::Date);
    assert_eq!(field.format, "yyyy-MM-dd");
}

#[test]
fn numbers_report_separators_and_precision() {
    let field = classify_point(&["174.50", "1,204.75", "3"]);
    assert_eq!(field.field_type, FieldType::Number);
    assert_eq!(field.decimal_symbol, ".");
    assert_eq!(field.group_symbol, ",");
    assert_eq!(field.precision, 2);

    let field = classify_point(&["174,50", "1.204,75"]);
    assert_eq!(field.decimal_symbol, ",");
    assert_eq!(field.group_symbol, ".");
    assert_eq!(field.precision, 2);
}

#[test]
fn precision_counts_digits_above_the_floor() {
    let field = classify_point(&["4.35"]);
    assert_eq!(field.field_type, FieldType::Number);
    assert_eq!(field.precision, 3);

    let field = classify_point(&["4.25", "0.5"]);
    assert_eq!(field.precision, 2);
}

#[test]
fn timestamps_with_dash_dates_keep_the_date_format() {
    let field = classify_point(&["2024-01-05 10:00:00", "2024-02-20 23:59:59"]);
    assert_eq!(field.field_type, FieldType::Date);
    assert_eq!(field.format, "yyyy-MM-dd");
    assert_eq!(field.precision, -1);
}

#[test]
fn integers_follow_the_baseline_locale() {
    let field = classify_with(&["12", "-7"], &NumberSymbols::comma());
    assert_eq!(field.field_type, FieldType::Number);
    assert_eq!(field.precision, 0);
    assert_eq!(field.decimal_symbol, ",");
    assert_eq!(field.group_symbol, ".");
}

#[test]
fn text_falls_back_to_string() {
    let field = classify_point(&["12", "n/a", "7"]);
    assert_eq!(field.field_type, FieldType::String);
    assert!(field.format.is_empty());
    assert_eq!(field.precision, -1);
    assert!(!field.ignore);
}

#[test]
fn null_markers_are_skipped_when_typing() {
    let mut field = FieldDescriptor::new("f", 0, -1);
    field.null_string = "NULL".to_string();
    let field = classify(field, samples(&["null", "2024-01-05"]), &NumberSymbols::point());
    assert_eq!(field.field_type, FieldType::Date);
    assert!(!field.ignore);
}

#[test]
fn null_only_field_is_ignored_string() {
    let mut field = FieldDescriptor::new("f", 0, -1);
    field.null_string = "NULL".to_string();
    let field = classify(field, samples(&["NULL", "null"]), &NumberSymbols::point());
    assert_eq!(field.field_type, FieldType::String);
    assert!(field.ignore);
}

#[test]
fn whitespace_only_field_is_ignored() {
    let field = classify_point(&["   ", "  "]);
    assert_eq!(field.trim_policy, TrimPolicy::BOTH);
    assert_eq!(field.field_type, FieldType::String);
    assert!(field.ignore);
}

#[test]
fn guessing_without_samples_only_resets_type() {
    let mut field = FieldDescriptor::new("f", 0, -1);
    field.field_type = FieldType::Number;
    guess::guess(&mut field, &NumberSymbols::point());
    assert_eq!(field.field_type, FieldType::String);
    assert_eq!(field.trim_policy, TrimPolicy::NONE);
    assert!(!field.ignore);
}

#[test]
fn guessing_twice_is_stable() {
    let mut field = classify_point(&["  1,5", " 2,25"]);
    let first = field.clone();
    guess::guess(&mut field, &NumberSymbols::point());
    assert_eq!(field, first);
    assert_eq!(field.trim_policy, TrimPolicy::LEFT);
    assert_eq!(field.decimal_symbol, ",");
}

proptest! {
    #[test]
    fn guessing_is_idempotent_for_any_samples(
        values in prop::collection::vec(prop::option::of("[ 0-9.,eE/:-]{0,12}|NULL|[a-z]{1,4}"), 0..8),
        comma in any::<bool>(),
    ) {
        let symbols = if comma { NumberSymbols::comma() } else { NumberSymbols::point() };
        let mut field = FieldDescriptor::new("p", 0, -1);
        field.null_string = "null".to_string();
        field.set_samples(values);
        guess::guess(&mut field, &symbols);
        let first = field.clone();
        guess::guess(&mut field, &symbols);
        prop_assert_eq!(field, first);
    }
}
