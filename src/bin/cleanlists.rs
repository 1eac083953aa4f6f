//! CLI entrypoint for `cleanlists`.
//!
//! Takes no arguments: prompts for a directory path on standard input,
//! then rewrites every regular file in that directory in place (prefix
//! strip, trim, dedup). Destructive, no backups.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use log::{LevelFilter, error};

use blockprep::clean::{clean_file, cleanable_files};

fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}

/// Ask for the directory to clean. Only the line terminator is stripped
/// from the reply.
fn prompt_directory() -> Result<PathBuf> {
    print!("Enter the directory path: ");
    io::stdout().flush().context("flush prompt")?;
    let mut reply = String::new();
    io::stdin()
        .lock()
        .read_line(&mut reply)
        .context("read directory path")?;
    Ok(PathBuf::from(reply.trim_end_matches(['\r', '\n'])))
}

fn run() -> Result<()> {
    let dir = prompt_directory()?;
    for path in cleanable_files(&dir)? {
        clean_file(&path)?;
        println!("Processed file: {}", path.display());
    }
    println!("{}", "Processing complete.".bold().green());
    Ok(())
}

fn main() {
    init_logger();
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
