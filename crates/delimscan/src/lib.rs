//! delimscan: field delimiter inference for character-separated data files.
//!
//! Given a line source and a set of candidate characters, delimscan decides
//! which candidate separates the fields by checking which one occurs with
//! the same frequency on every line. Occurrences inside double-quoted
//! regions are ignored.
//!
//! # Core Principles
//!
//! - **Consistency over volume**: a delimiter must hold a stable per-line count
//! - **No guessing**: equally plausible candidates are reported as ambiguous
//! - **Streaming**: lines are read once, front to back, and scanning stops as
//!   soon as a single candidate is left
//!
//! # Example
//!
//! ```
//! use delimscan::{DelimiterFinder, TextSource};
//!
//! let source = TextSource::new("id;name;age\n1;Alice;30\n2;Bob;25\n");
//! let mut finder = DelimiterFinder::new(source);
//!
//! assert_eq!(finder.find().unwrap(), ';');
//! ```

pub mod candidates;
pub mod detect;
pub mod error;
pub mod input;

pub use candidates::CandidateSet;
pub use detect::{
    AbsencePolicy, CandidateCount, ConsistencyTable, DelimiterFinder, FinderConfig, LineCounts,
    ScanReport,
};
pub use error::{DelimscanError, Result};
pub use input::{FileSource, LineSource, TextSource};
