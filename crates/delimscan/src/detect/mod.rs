//! Delimiter detection by per-line frequency consistency.

mod finder;
mod scanner;
mod table;

pub use finder::{DelimiterFinder, FinderConfig, ScanReport};
pub use scanner::LineCounts;
pub use table::{AbsencePolicy, CandidateCount, ConsistencyTable};
