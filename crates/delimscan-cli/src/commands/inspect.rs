//! Inspect command - show the consistency ranking for a data file.

use std::path::PathBuf;

use colored::Colorize;
use delimscan::ScanReport;

use super::build_finder;
use crate::cli::{escape, DetectOptions};

pub fn run(
    file: PathBuf,
    options: DetectOptions,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let finder = build_finder(&file, &options)?;
    let report = finder.scan()?;
    let verdict = report.resolve();

    if json_output {
        let output = serde_json::json!({
            "file": file.display().to_string(),
            "candidates": finder.candidates(),
            "config": finder.config(),
            "report": &report,
            "delimiter": verdict.as_ref().ok(),
            "error": verdict.as_ref().err().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Delimiter scan for".cyan().bold(),
        file.display().to_string().white()
    );
    if verbose {
        let candidates: Vec<String> = finder.candidates().iter().map(escape).collect();
        println!("Candidates: {}", candidates.join(" "));
        println!(
            "Quote: {}  Absence: {:?}  Min lines: {}",
            finder.config().quote,
            finder.config().absence,
            finder.config().min_lines
        );
    }
    println!();
    print_ranking(&report);
    println!();

    match verdict {
        Ok(delimiter) => println!("Delimiter: {}", escape(delimiter).green().bold()),
        Err(e) => println!("{} {}", "Undetermined:".yellow().bold(), e),
    }

    Ok(())
}

fn print_ranking(report: &ScanReport) {
    println!(
        "Lines scanned: {}{}",
        report.lines_scanned.to_string().white().bold(),
        if report.stopped_early { " (stopped early)" } else { "" }
    );

    if report.ranking.is_empty() {
        println!("  {}", "no consistent candidates".dimmed());
        return;
    }

    println!("{}", "Consistent candidates:".yellow().bold());
    for entry in &report.ranking {
        println!("  {:10} {} per line", escape(entry.delimiter), entry.count);
    }
}
