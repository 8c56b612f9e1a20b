use anyhow::{Context, Result, ensure};
use log::info;

use crate::{
    cli::GuessArgs,
    field::FieldDescriptor,
    guess, io_utils,
    layout::{Layout, LayoutKind},
    printable_delimiter,
    sampling::{self, FixedWidthSpec, SampleOptions, SampledColumns},
    symbols::NumberSymbols,
    table,
};

pub fn execute(args: &GuessArgs) -> Result<()> {
    let symbols = NumberSymbols::new(args.decimal_symbol, args.group_symbol);
    ensure!(
        symbols.is_valid(),
        "Decimal and group symbols must differ and must not be digits ({symbols})"
    );
    let options = SampleOptions {
        sample_rows: args.sample_rows,
        has_headers: !args.no_header,
        encoding: io_utils::resolve_encoding(args.input_encoding.as_deref())?,
    };

    let (kind, sampled, positions) = if args.fixed_width {
        let specs = args
            .fields
            .iter()
            .map(|raw| FixedWidthSpec::parse(raw))
            .collect::<Result<Vec<_>>>()?;
        info!(
            "Sampling {} fixed-width field(s) from {:?}",
            specs.len(),
            args.input
        );
        let sampled = sampling::sample_fixed_width(&args.input, &specs, &options)
            .with_context(|| format!("Sampling {:?}", args.input))?;
        let positions = specs
            .iter()
            .map(|spec| (spec.position, spec.length))
            .collect::<Vec<_>>();
        (LayoutKind::FixedWidth, sampled, positions)
    } else {
        let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
        info!(
            "Sampling '{}' with delimiter '{}'",
            args.input.display(),
            printable_delimiter(delimiter)
        );
        let sampled = sampling::sample_delimited(&args.input, delimiter, &options)
            .with_context(|| format!("Sampling {:?}", args.input))?;
        let positions = (0..sampled.names.len())
            .map(|idx| (i32::try_from(idx).unwrap_or(i32::MAX), -1))
            .collect::<Vec<_>>();
        let kind = LayoutKind::Delimited {
            delimiter: delimiter as char,
        };
        (kind, sampled, positions)
    };

    info!(
        "Sampled {} row(s) across {} field(s)",
        sampled.rows_read,
        sampled.names.len()
    );
    if sampled.decode_errors > 0 {
        info!(
            "{} value(s) could not be decoded and were sampled as missing",
            sampled.decode_errors
        );
    }
    let fields = guess_fields(sampled, &positions, &args.null_string, &symbols);
    let layout = Layout::new(kind, options.has_headers, fields);

    match &args.output {
        Some(path) => {
            layout
                .save(path)
                .with_context(|| format!("Writing layout to {path:?}"))?;
            info!(
                "Guessed layout for {} field(s) written to {:?}",
                layout.fields.len(),
                path
            );
        }
        None => table::print_layout(&layout.fields),
    }
    Ok(())
}

/// Builds one descriptor per sampled column and guesses it.
pub fn guess_fields(
    sampled: SampledColumns,
    positions: &[(i32, i32)],
    null_string: &str,
    symbols: &NumberSymbols,
) -> Vec<FieldDescriptor> {
    sampled
        .into_fields()
        .zip(positions)
        .map(|((name, samples), (position, length))| {
            let mut descriptor = FieldDescriptor::new(name, *position, *length);
            descriptor.null_string = null_string.to_string();
            let mut field = guess::classify(descriptor, samples, symbols);
            field.clear_samples();
            field
        })
        .collect()
}
