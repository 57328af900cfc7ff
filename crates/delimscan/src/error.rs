//! Error types for delimiter detection.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for delimscan operations.
#[derive(Debug, Error)]
pub enum DelimscanError {
    /// A candidate delimiter was not exactly one character.
    #[error("The delimiter \"{0}\" is not a single character")]
    InvalidDelimiter(String),

    /// Two or more candidates share the highest consistent count.
    #[error("Ambiguous delimiter: {} each occur {count} time(s) per line", format_candidates(.candidates))]
    AmbiguousDelimiter { candidates: Vec<char>, count: usize },

    /// No candidate survived the scan.
    #[error("No delimiter found: no candidate occurs consistently")]
    NoDelimiter,

    /// The scan ended before the configured minimum number of lines.
    #[error("Insufficient data: {lines} line(s) read, at least {required} required")]
    InsufficientData { lines: usize, required: usize },

    /// The input file does not exist.
    #[error("The file '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// The input file exists but cannot be opened for reading.
    #[error("The file '{}' is not readable: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error reading from a line source.
    #[error("IO error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DelimscanError {
    /// Whether the data left the delimiter undetermined (a tie, or no
    /// surviving candidate), as opposed to a usage or IO failure.
    pub fn is_undetermined(&self) -> bool {
        matches!(self, Self::AmbiguousDelimiter { .. } | Self::NoDelimiter)
    }
}

fn format_candidates(candidates: &[char]) -> String {
    candidates
        .iter()
        .map(|c| format!("{:?}", c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for delimscan operations.
pub type Result<T> = std::result::Result<T, DelimscanError>;
