//! CLI command implementations.

pub mod detect;
pub mod inspect;

use std::path::Path;

use delimscan::{DelimiterFinder, FileSource};

use crate::cli::DetectOptions;

/// Open `file` and build a finder with the requested candidates.
pub fn build_finder(
    file: &Path,
    options: &DetectOptions,
) -> Result<DelimiterFinder<FileSource>, delimscan::DelimscanError> {
    let source = FileSource::open(file)?;
    let mut finder = DelimiterFinder::with_config(source, options.finder_config());

    for candidate in options.candidate_values() {
        finder.add_candidate(&candidate)?;
    }

    Ok(finder)
}
