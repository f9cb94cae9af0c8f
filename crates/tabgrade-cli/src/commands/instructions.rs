use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use tabgrade_grade::grading_text;

use crate::loader::load_table;

#[derive(Args, Debug)]
pub struct InstructionsArgs {
    /// TOML table description.
    #[arg(long)]
    pub table: PathBuf,
}

pub fn run(args: &InstructionsArgs) -> Result<(), Box<dyn Error>> {
    let table = load_table(&args.table)?;
    println!("{}", grading_text(&table.config));
    Ok(())
}
