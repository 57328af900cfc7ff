//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use delimscan::{AbsencePolicy, FinderConfig};

/// delimscan: detect the field delimiter of a character-separated file
#[derive(Parser)]
#[command(name = "delimscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the detected delimiter
    Detect {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        options: DetectOptions,
    },

    /// Show the consistency ranking behind a detection
    Inspect {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        options: DetectOptions,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by all detection commands.
#[derive(Args, Debug, Clone)]
pub struct DetectOptions {
    /// Additional candidate delimiter (repeatable; use "\t" for tab)
    #[arg(short, long = "candidate", value_name = "CHAR")]
    pub candidates: Vec<String>,

    /// Treatment of candidates missing from a line
    #[arg(long, default_value = "lenient")]
    pub absence: AbsenceChoice,

    /// Lines to read before a result is accepted
    #[arg(long, default_value = "1")]
    pub min_lines: usize,

    /// Maximum lines to read
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Quote character
    #[arg(long, default_value = "\"")]
    pub quote: char,
}

impl DetectOptions {
    pub fn finder_config(&self) -> FinderConfig {
        FinderConfig {
            quote: self.quote,
            absence: self.absence.into(),
            min_lines: self.min_lines,
            max_lines: self.max_lines,
        }
    }

    /// Candidate values with `\t` unescaped.
    pub fn candidate_values(&self) -> impl Iterator<Item = String> + '_ {
        self.candidates.iter().map(|c| unescape(c))
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AbsenceChoice {
    /// Absence keeps a candidate's count
    Lenient,
    /// Absence eliminates a candidate
    Strict,
}

impl From<AbsenceChoice> for AbsencePolicy {
    fn from(choice: AbsenceChoice) -> Self {
        match choice {
            AbsenceChoice::Lenient => AbsencePolicy::Lenient,
            AbsenceChoice::Strict => AbsencePolicy::Strict,
        }
    }
}

fn unescape(value: &str) -> String {
    match value {
        "\\t" | "tab" => "\t".to_string(),
        _ => value.to_string(),
    }
}

/// Printable form of a delimiter.
pub fn escape(delimiter: char) -> String {
    match delimiter {
        '\t' => "\\t".to_string(),
        ' ' => "<space>".to_string(),
        c => c.to_string(),
    }
}
