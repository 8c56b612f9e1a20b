use anyhow::{Context, Result};
use log::info;

use crate::{cli::ShowArgs, layout::Layout, table};

pub fn execute(args: &ShowArgs) -> Result<()> {
    let layout = Layout::load(&args.layout)
        .with_context(|| format!("Loading layout from {:?}", args.layout))?;
    table::print_layout(&layout.fields);
    info!(
        "Displayed {} field(s) from {:?}",
        layout.fields.len(),
        args.layout
    );
    Ok(())
}
