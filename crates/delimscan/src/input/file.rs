//! File-backed line source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{DelimscanError, Result};
use super::source::{LineSource, Lines};

/// Reads lines from a file on disk.
///
/// The path is validated once in [`FileSource::open`]. Each pass opens its
/// own handle, which is closed when the pass ends or is abandoned.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Validate that `path` is an existing, readable file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(DelimscanError::FileNotFound(path.to_path_buf()));
        }

        File::open(path).map_err(|e| DelimscanError::FileUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn lines(&self) -> Result<Lines<'_>> {
        let file = File::open(&self.path).map_err(|e| DelimscanError::FileUnreadable {
            path: self.path.clone(),
            source: e,
        })?;
        trace!(path = %self.path.display(), "opened line source");

        Ok(Box::new(FileLines {
            reader: Some(BufReader::new(file)),
            path: &self.path,
        }))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Iterator over the lines of an open file. The reader is dropped on EOF or
/// the first read error.
struct FileLines<'a> {
    reader: Option<BufReader<File>>,
    path: &'a Path,
}

impl Iterator for FileLines<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        let mut line = String::new();

        match reader.read_line(&mut line) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => Some(Ok(line)),
            Err(e) => {
                self.reader = None;
                Some(Err(DelimscanError::Io {
                    path: self.path.to_path_buf(),
                    source: e,
                }))
            }
        }
    }
}
