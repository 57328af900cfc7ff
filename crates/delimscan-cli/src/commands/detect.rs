//! Detect command - print the delimiter of a data file.

use std::path::PathBuf;

use colored::Colorize;

use super::build_finder;
use crate::cli::{escape, DetectOptions};

pub fn run(
    file: PathBuf,
    options: DetectOptions,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut finder = build_finder(&file, &options)?;

    match finder.find() {
        Ok(delimiter) => {
            if verbose {
                println!(
                    "{} {}",
                    "Delimiter for".cyan().bold(),
                    file.display().to_string().white()
                );
            }
            println!("{}", escape(delimiter));
            Ok(())
        }
        Err(e) if e.is_undetermined() => {
            Err(format!("cannot determine delimiter for {}: {}", file.display(), e).into())
        }
        Err(e) => Err(e.into()),
    }
}
