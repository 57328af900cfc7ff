//! The running consistency table and its per-line update rule.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::scanner::LineCounts;

/// How a candidate that does not occur on a later line is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsencePolicy {
    /// Absence leaves the running count untouched.
    #[default]
    Lenient,
    /// Absence counts as zero occurrences and eliminates the candidate.
    Strict,
}

/// A candidate and the count it has held on every line so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCount {
    pub delimiter: char,
    pub count: usize,
}

/// Per-candidate counts that have held identically across the lines seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyTable {
    counts: IndexMap<char, usize>,
}

impl ConsistencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one line into the table.
    ///
    /// An empty table takes the line's counts as they are. Otherwise a
    /// candidate survives only if the line repeats its count exactly, or if
    /// the line lacks it and `policy` is [`AbsencePolicy::Lenient`].
    /// Candidates first seen after the table was seeded are never added.
    pub fn update(&mut self, line: &LineCounts, policy: AbsencePolicy) {
        if self.counts.is_empty() {
            self.counts = line.iter().collect();
            return;
        }

        self.counts.retain(|&ch, count| match line.get(ch) {
            Some(seen) => seen == *count,
            None => policy == AbsencePolicy::Lenient,
        });
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

    /// Entries sorted by count, highest first. Equal counts keep candidate
    /// order.
    pub fn ranking(&self) -> Vec<CandidateCount> {
        let mut ranking: Vec<CandidateCount> = self
            .counts
            .iter()
            .map(|(&delimiter, &count)| CandidateCount { delimiter, count })
            .collect();
        ranking.sort_by(|a, b| b.count.cmp(&a.count));
        ranking
    }
}
