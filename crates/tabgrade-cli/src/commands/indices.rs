use std::error::Error;

use clap::Args;
use tabgrade_core::{Base, IndexSpec};
use tabgrade_rows::expand_indices;

#[derive(Args, Debug)]
pub struct IndicesArgs {
    /// First index value, in the index base.
    #[arg(long)]
    pub start: String,
    /// Number of rows to label.
    #[arg(long)]
    pub rows: usize,
    /// Index base: dec, hex or bin.
    #[arg(long)]
    pub base: Option<Base>,
    /// Prefix for every label; defaults to the base prefix.
    #[arg(long)]
    pub prefix: Option<String>,
    /// Zero-padded digit count.
    #[arg(long)]
    pub width: Option<usize>,
}

pub fn run(args: &IndicesArgs) -> Result<(), Box<dyn Error>> {
    let spec = IndexSpec {
        base: args.base,
        prefix: args.prefix.clone(),
        fixed_width: args.width,
        ..IndexSpec::starting_at(args.start.as_str())
    };
    for label in expand_indices(&spec, args.rows, "indices")? {
        println!("{label}");
    }
    Ok(())
}
