use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use tabgrade_grade::validate_row;
use tabgrade_rows::layout_rows;

use crate::loader::{load_submission, load_table};
use crate::print_json;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// TOML table description.
    #[arg(long)]
    pub table: PathBuf,
    /// JSON object of cell name to submitted string.
    #[arg(long)]
    pub submission: PathBuf,
}

pub fn run(args: &ValidateArgs) -> Result<(), Box<dyn Error>> {
    let table = load_table(&args.table)?;
    let submissions = load_submission(&args.submission)?;
    let layout = layout_rows(&table.spec, &table.config)?;
    let raw: Vec<Option<String>> = layout
        .iter()
        .map(|row| submissions.get(&row.cell_name).cloned())
        .collect();

    let validation = validate_row(&raw, &table.config);
    let errors: BTreeMap<&str, _> = validation
        .format_errors()
        .map(|(row, err)| (layout[row].cell_name.as_str(), err))
        .collect();
    print_json(&errors)
}
