use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use tabgrade_grade::{assess, check_reference_answers, GradeReport};
use tabgrade_rows::layout_rows;

use crate::loader::{load_submission, load_table};
use crate::{print_json, write_json};

#[derive(Args, Debug)]
pub struct GradeArgs {
    /// TOML table description.
    #[arg(long)]
    pub table: PathBuf,
    /// JSON object of cell name to submitted string.
    #[arg(long)]
    pub submission: PathBuf,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GradeArgs) -> Result<(), Box<dyn Error>> {
    let table = load_table(&args.table)?;
    let submissions = load_submission(&args.submission)?;
    let layout = layout_rows(&table.spec, &table.config)?;
    let correct: Vec<String> = layout.into_iter().map(|row| row.correct).collect();
    check_reference_answers(&correct, &table.config)?;

    let assessment = assess(&correct, &submissions, &table.config);
    let report = GradeReport::new(assessment, &table.config)?;
    match &args.out {
        Some(path) => write_json(path, &report),
        None => print_json(&report),
    }
}
