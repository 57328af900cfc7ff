//! Line source abstraction and the in-memory source.

use crate::error::Result;

/// A forward-only pass over the lines of a source.
pub type Lines<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

/// Supplies the lines of an already validated, readable input.
///
/// Every call to [`lines`](LineSource::lines) starts a fresh pass from the
/// first line. Yielded lines keep their trailing terminator when the data
/// has one. Any resource held for the pass (such as a file handle) belongs
/// to the returned iterator and is released when the iterator is dropped.
pub trait LineSource {
    /// Start a new pass over the lines.
    fn lines(&self) -> Result<Lines<'_>>;

    /// Human-readable name of the source, used in logs.
    fn describe(&self) -> String {
        "<lines>".to_string()
    }
}

impl<S: LineSource + ?Sized> LineSource for &S {
    fn lines(&self) -> Result<Lines<'_>> {
        (**self).lines()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Lines held in memory.
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    lines: Vec<String>,
}

impl TextSource {
    /// Split text into lines, keeping each `\n` terminator.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            lines: text
                .as_ref()
                .split_inclusive('\n')
                .map(str::to_string)
                .collect(),
        }
    }

    /// Use pre-split lines as given.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for TextSource {
    fn lines(&self) -> Result<Lines<'_>> {
        Ok(Box::new(self.lines.iter().cloned().map(Ok)))
    }

    fn describe(&self) -> String {
        format!("<memory: {} lines>", self.lines.len())
    }
}
