use std::error::Error;
use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};
use serde::Serialize;

use commands::{
    grade::{self, GradeArgs},
    indices::{self, IndicesArgs},
    instructions::{self, InstructionsArgs},
    validate::{self, ValidateArgs},
};

mod commands;
mod loader;

#[derive(Parser, Debug)]
#[command(name = "tabgrade", about = "Grade numeric answer tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and grade a submission, emitting a JSON report.
    Grade(GradeArgs),
    /// Validate a submission and print the per-cell format errors.
    Validate(ValidateArgs),
    /// Print the index column labels for a start value.
    Indices(IndicesArgs),
    /// Print the answer format and grading policy of a table.
    Instructions(InstructionsArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Grade(args) => grade::run(&args),
        Command::Validate(args) => validate::run(&args),
        Command::Indices(args) => indices::run(&args),
        Command::Instructions(args) => instructions::run(&args),
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
