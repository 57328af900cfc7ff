//! Line sources feeding the delimiter scan.

mod file;
mod source;

pub use file::FileSource;
pub use source::{LineSource, Lines, TextSource};
