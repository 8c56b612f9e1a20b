use std::fmt::Write as _;

use itertools::Itertools;

use crate::field::FieldDescriptor;

const LAYOUT_HEADERS: &[&str] = &[
    "name", "position", "length", "type", "format", "precision", "decimal", "group", "trim",
    "ignore",
];

/// Renders descriptors as an aligned plain-text table, one row per field.
pub fn render_layout(fields: &[FieldDescriptor]) -> String {
    let rows = fields.iter().map(layout_row).collect::<Vec<_>>();
    render_table(LAYOUT_HEADERS, &rows)
}

pub fn print_layout(fields: &[FieldDescriptor]) {
    print!("{}", render_layout(fields));
}

fn layout_row(field: &FieldDescriptor) -> Vec<String> {
    vec![
        field.name.clone(),
        field.position.to_string(),
        field.length.to_string(),
        field.type_desc().to_string(),
        field.format.clone(),
        field.precision.to_string(),
        field.decimal_symbol.clone(),
        field.group_symbol.clone(),
        field.trim_policy.describe().to_string(),
        (if field.ignore { "Y" } else { "N" }).to_string(),
    ]
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| cell_width(h)).collect::<Vec<_>>();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell_width(cell));
        }
    }

    let mut output = String::new();
    let _ = writeln!(output, "{}", format_line(headers.iter().copied(), &widths));
    let rule = widths.iter().map(|w| "-".repeat((*w).max(3))).collect::<Vec<_>>();
    let _ = writeln!(output, "{}", format_line(rule.iter().map(String::as_str), &widths));
    for row in rows {
        let _ = writeln!(output, "{}", format_line(row.iter().map(String::as_str), &widths));
    }
    output
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let cell = printable(cell);
            let padding = width.saturating_sub(cell_width(&cell));
            format!("{cell}{}", " ".repeat(padding))
        })
        .join("  ");
    line.trim_end().to_string()
}

fn cell_width(value: &str) -> usize {
    value.chars().count()
}

fn printable(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}
