//! CLI entrypoint for `csv2json`.
//!
//! Takes exactly three positional arguments: the input CSV file, the
//! output JSON file, and the integer group tag applied to every record.
//! Any argument mismatch prints the usage line and returns normally; a
//! group value that is not an integer fails the run.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, error};

use blockprep::convert::convert_file;

#[derive(Parser, Debug)]
#[command(
    name = "csv2json",
    version,
    about = "Convert a CSV of named host lists into a JSON blocklist dataset"
)]
struct Args {
    /// Path to the input CSV file
    input_csv_file: PathBuf,

    /// Path to the output JSON file
    output_json_file: PathBuf,

    /// Integer group tag applied to every record
    group: String,
}

const USAGE: &str = "Usage: csv2json <input_csv_file> <output_json_file> <group>";

fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}

fn run(args: &Args) -> Result<()> {
    let group: i64 = args
        .group
        .parse()
        .with_context(|| format!("group must be an integer, got '{}'", args.group))?;
    convert_file(&args.input_csv_file, &args.output_json_file, group)?;
    println!(
        "JSON file '{}' has been created.",
        args.output_json_file.display()
    );
    Ok(())
}

fn main() {
    init_logger();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            println!("{USAGE}");
            return;
        }
    };
    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
