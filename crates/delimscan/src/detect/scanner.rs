//! Per-line counting of unquoted candidate occurrences.

use indexmap::IndexMap;

use crate::candidates::CandidateSet;

/// Unquoted occurrences of each candidate within one line.
///
/// Only candidates that occur at least once are present, in candidate-set
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCounts {
    counts: IndexMap<char, usize>,
}

impl LineCounts {
    /// Count candidates in `line`, ignoring its final character and anything
    /// between an odd and the following even `quote`.
    ///
    /// Quote state always starts closed, so a quoted field spanning several
    /// lines is not recognized.
    pub fn scan(line: &str, candidates: &CandidateSet, quote: char) -> Self {
        let body = match line.char_indices().next_back() {
            Some((last, _)) => &line[..last],
            None => line,
        };

        let mut tally = vec![0usize; candidates.len()];
        let mut quoted = false;

        for ch in body.chars() {
            if ch == quote {
                quoted = !quoted;
            } else if !quoted {
                if let Some(index) = candidates.index_of(ch) {
                    tally[index] += 1;
                }
            }
        }

        let counts = candidates
            .iter()
            .zip(tally)
            .filter(|&(_, count)| count > 0)
            .collect();

        Self { counts }
    }

    pub fn get(&self, ch: char) -> Option<usize> {
        self.counts.get(&ch).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&ch, &count)| (ch, count))
    }
}
