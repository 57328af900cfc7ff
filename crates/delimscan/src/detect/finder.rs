//! The delimiter finder: drives the scan over a line source and resolves
//! the result.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::candidates::CandidateSet;
use crate::error::{DelimscanError, Result};
use crate::input::LineSource;
use super::scanner::LineCounts;
use super::table::{AbsencePolicy, CandidateCount, ConsistencyTable};

/// Finder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Character that opens and closes quoted regions.
    pub quote: char,
    /// Treatment of candidates missing from a later line.
    pub absence: AbsencePolicy,
    /// Lines that must be read before the scan may stop early or succeed.
    pub min_lines: usize,
    /// Maximum lines to read (None = all).
    pub max_lines: Option<usize>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            quote: '"',
            absence: AbsencePolicy::Lenient,
            min_lines: 1,
            max_lines: None,
        }
    }
}

/// Outcome of one scan, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Surviving candidates, highest count first.
    pub ranking: Vec<CandidateCount>,
    /// Number of lines read.
    pub lines_scanned: usize,
    /// Whether scanning stopped through early termination or the line
    /// limit rather than the end of the source.
    pub stopped_early: bool,
}

impl ScanReport {
    /// Pick the delimiter: the top candidate, provided no other candidate
    /// shares its count.
    pub fn resolve(&self) -> Result<char> {
        match self.ranking.as_slice() {
            [] => Err(DelimscanError::NoDelimiter),
            [only] => Ok(only.delimiter),
            [top, next, ..] if top.count > next.count => Ok(top.delimiter),
            [top, ..] => Err(DelimscanError::AmbiguousDelimiter {
                candidates: self
                    .ranking
                    .iter()
                    .take_while(|c| c.count == top.count)
                    .map(|c| c.delimiter)
                    .collect(),
                count: top.count,
            }),
        }
    }
}

/// Determines which candidate character delimits the fields of a source.
///
/// The first successful [`find`](Self::find) is cached; a tie is not, so a
/// caller may adjust the candidates and try again.
pub struct DelimiterFinder<S> {
    source: S,
    candidates: CandidateSet,
    config: FinderConfig,
    matched: Option<char>,
}

impl<S: LineSource> DelimiterFinder<S> {
    /// Create a finder with the default candidates and configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, FinderConfig::default())
    }

    /// Create a finder with custom configuration.
    pub fn with_config(source: S, config: FinderConfig) -> Self {
        Self {
            source,
            candidates: CandidateSet::new(),
            config,
            matched: None,
        }
    }

    /// Replace the candidate set.
    pub fn with_candidates(mut self, candidates: CandidateSet) -> Self {
        self.candidates = candidates;
        self.matched = None;
        self
    }

    /// Register another candidate delimiter.
    ///
    /// Fails with [`DelimscanError::InvalidDelimiter`] unless `value` is a
    /// single character. A newly added candidate discards any cached match.
    pub fn add_candidate(&mut self, value: &str) -> Result<()> {
        if self.candidates.add(value)? {
            self.matched = None;
        }
        Ok(())
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The cached match, if [`find`](Self::find) has succeeded.
    pub fn cached(&self) -> Option<char> {
        self.matched
    }

    pub fn clear_cache(&mut self) {
        self.matched = None;
    }

    /// Return the cached delimiter, or detect and cache it.
    pub fn find(&mut self) -> Result<char> {
        if let Some(delimiter) = self.matched {
            debug!(delimiter = ?delimiter, "using cached delimiter");
            return Ok(delimiter);
        }

        let delimiter = self.detect()?;
        self.matched = Some(delimiter);
        Ok(delimiter)
    }

    /// Scan the source and resolve a single delimiter.
    pub fn detect(&self) -> Result<char> {
        self.scan()?.resolve()
    }

    /// Scan the source without resolving the result.
    pub fn scan(&self) -> Result<ScanReport> {
        debug!(
            source = %self.source.describe(),
            candidates = ?self.candidates.iter().collect::<Vec<_>>(),
            absence = ?self.config.absence,
            "scanning for delimiter"
        );

        let mut table = ConsistencyTable::new();
        let mut lines_scanned = 0;
        let mut stopped_early = false;
        let mut exhausted = false;
        let limit = self.config.max_lines.unwrap_or(usize::MAX);

        for line in self.source.lines()?.take(limit) {
            let line = line?;
            let counts = LineCounts::scan(&line, &self.candidates, self.config.quote);
            lines_scanned += 1;

            let seeding = table.is_empty();
            table.update(&counts, self.config.absence);
            trace!(line = lines_scanned, counts = ?counts, table = ?table, "line scanned");

            if seeding {
                continue;
            }

            // Nothing can come back once every candidate is gone.
            if table.is_empty() {
                debug!(lines = lines_scanned, "every candidate eliminated");
                stopped_early = true;
                exhausted = true;
                break;
            }

            if table.len() < 2 && lines_scanned >= self.config.min_lines {
                debug!(lines = lines_scanned, remaining = table.len(), "stopping early");
                stopped_early = true;
                break;
            }
        }

        if lines_scanned >= limit {
            debug!(lines = lines_scanned, "line limit reached");
            stopped_early = true;
        }

        if !exhausted && lines_scanned < self.config.min_lines {
            return Err(DelimscanError::InsufficientData {
                lines: lines_scanned,
                required: self.config.min_lines,
            });
        }

        let report = ScanReport {
            ranking: table.ranking(),
            lines_scanned,
            stopped_early,
        };
        debug!(lines = report.lines_scanned, ranking = ?report.ranking, "scan complete");

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::input::{Lines, TextSource};

    /// Counts passes and lines pulled from the wrapped source.
    struct CountingSource {
        inner: TextSource,
        passes: Cell<usize>,
        lines_read: std::rc::Rc<Cell<usize>>,
    }

    impl CountingSource {
        fn new(lines: &[&str]) -> Self {
            Self {
                inner: TextSource::from_lines(lines.iter().copied()),
                passes: Cell::new(0),
                lines_read: Default::default(),
            }
        }
    }

    impl LineSource for CountingSource {
        fn lines(&self) -> Result<Lines<'_>> {
            self.passes.set(self.passes.get() + 1);
            let counter = self.lines_read.clone();
            Ok(Box::new(self.inner.lines()?.inspect(move |_| {
                counter.set(counter.get() + 1);
            })))
        }
    }

    fn finder(lines: &[&str]) -> DelimiterFinder<TextSource> {
        DelimiterFinder::new(TextSource::from_lines(lines.iter().copied()))
    }

    #[test]
    fn test_detect_comma() {
        let finder = finder(&["a,b,c\n", "d,e,f\n", "g,h,i\n"]);
        let report = finder.scan().unwrap();
        assert_eq!(report.ranking, vec![CandidateCount { delimiter: ',', count: 2 }]);
        assert_eq!(finder.detect().unwrap(), ',');
    }

    #[test]
    fn test_detect_semicolon() {
        let finder = finder(&["a;b\n", "c;d\n"]);
        assert_eq!(finder.detect().unwrap(), ';');
    }

    #[test]
    fn test_equal_counts_are_ambiguous() {
        let finder = finder(&["a,b;c\n", "d,e;f\n"]);
        let err = finder.detect().unwrap_err();
        match err {
            DelimscanError::AmbiguousDelimiter { candidates, count } => {
                assert_eq!(candidates, vec![',', ';']);
                assert_eq!(count, 1);
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn test_higher_consistent_count_wins() {
        let finder = finder(&["a,b,c;d;e;f\n", "g,h,i;j;k;l\n"]);
        assert_eq!(finder.detect().unwrap(), ';');
    }

    #[test]
    fn test_quoted_delimiters_ignored() {
        let finder = finder(&["\"x;y\",b,c\n", "d,\"e;f;g\",h\n"]);
        assert_eq!(finder.detect().unwrap(), ',');
    }

    #[test]
    fn test_single_line_uses_first_line_counts() {
        assert_eq!(finder(&["a,b;c;d\n"]).detect().unwrap(), ';');
        assert!(finder(&["a,b;c\n"]).detect().unwrap_err().is_undetermined());
    }

    #[test]
    fn test_no_candidates_present() {
        let err = finder(&["abc\n", "def\n"]).detect().unwrap_err();
        assert!(matches!(err, DelimscanError::NoDelimiter));
    }

    #[test]
    fn test_empty_source_is_insufficient() {
        let err = finder(&[]).detect().unwrap_err();
        assert!(matches!(
            err,
            DelimscanError::InsufficientData { lines: 0, required: 1 }
        ));
    }

    #[test]
    fn test_lenient_absence_can_leave_tie() {
        // ';' vanishes on line 2 but keeps its count under the lenient rule
        let finder = finder(&["a,b;c\n", "d,e\n", "f,g;h\n"]);
        assert!(finder.detect().unwrap_err().is_undetermined());
    }

    #[test]
    fn test_strict_absence_resolves() {
        let config = FinderConfig {
            absence: AbsencePolicy::Strict,
            ..Default::default()
        };
        let finder = DelimiterFinder::with_config(
            TextSource::from_lines(["a,b;c\n", "d,e\n", "f,g;h\n"]),
            config,
        );
        assert_eq!(finder.detect().unwrap(), ',');
    }

    #[test]
    fn test_early_termination_stops_reading() {
        let source = CountingSource::new(&["a,b;c\n", "d,e,f;g\n", "h;i\n", "j;k\n"]);
        let finder = DelimiterFinder::new(&source);

        let report = finder.scan().unwrap();

        assert!(report.stopped_early);
        assert_eq!(report.lines_scanned, 2);
        assert_eq!(source.lines_read.get(), 2);
        assert_eq!(report.resolve().unwrap(), ';');
    }

    #[test]
    fn test_min_lines_defers_early_termination() {
        let config = FinderConfig {
            min_lines: 3,
            ..Default::default()
        };
        let finder = DelimiterFinder::with_config(
            TextSource::from_lines(["a,b;c\n", "d,e,f;g\n", "h;i\n", "j;k\n"]),
            config,
        );

        let report = finder.scan().unwrap();
        assert_eq!(report.lines_scanned, 3);
        assert!(report.stopped_early);
    }

    #[test]
    fn test_min_lines_not_met() {
        let config = FinderConfig {
            min_lines: 2,
            ..Default::default()
        };
        let finder = DelimiterFinder::with_config(TextSource::from_lines(["a,b\n"]), config);
        assert!(matches!(
            finder.detect().unwrap_err(),
            DelimscanError::InsufficientData { lines: 1, required: 2 }
        ));
    }

    #[test]
    fn test_max_lines_limits_scan() {
        let config = FinderConfig {
            max_lines: Some(2),
            ..Default::default()
        };
        let lines = ["a,b;c\n", "d,e;f\n", "g,h,i;j\n", "k,l;m\n"];
        let source = CountingSource::new(&lines);
        let limited = DelimiterFinder::with_config(&source, config);

        let report = limited.scan().unwrap();
        assert_eq!(report.lines_scanned, 2);
        assert_eq!(source.lines_read.get(), 2);
        assert!(report.stopped_early);
        assert!(report.resolve().unwrap_err().is_undetermined());

        // the third line would have settled it
        assert_eq!(finder(&lines).detect().unwrap(), ';');
    }

    #[test]
    fn test_max_lines_below_min_lines_is_insufficient() {
        let config = FinderConfig {
            min_lines: 5,
            max_lines: Some(2),
            ..Default::default()
        };
        let lines = ["a,b\n"; 6];
        let finder = DelimiterFinder::with_config(TextSource::from_lines(lines), config);

        assert!(matches!(
            finder.detect().unwrap_err(),
            DelimscanError::InsufficientData { lines: 2, required: 5 }
        ));
    }

    #[test]
    fn test_eliminated_candidates_stop_before_min_lines() {
        let config = FinderConfig {
            min_lines: 4,
            ..Default::default()
        };
        let source = CountingSource::new(&["a,b\n", "c,d,e\n", "f,g\n", "h,i\n"]);
        let finder = DelimiterFinder::with_config(&source, config);

        assert!(matches!(finder.detect().unwrap_err(), DelimscanError::NoDelimiter));
        assert_eq!(source.lines_read.get(), 2);
    }

    #[test]
    fn test_find_caches_result() {
        let source = CountingSource::new(&["a,b,c\n", "d,e,f\n"]);
        let mut finder = DelimiterFinder::new(&source);

        assert_eq!(finder.find().unwrap(), ',');
        assert_eq!(finder.find().unwrap(), ',');
        assert_eq!(source.passes.get(), 1);
        assert_eq!(finder.cached(), Some(','));
    }

    #[test]
    fn test_find_does_not_cache_ties() {
        let source = CountingSource::new(&["a,b;c\n", "d,e;f\n"]);
        let mut finder = DelimiterFinder::new(&source);

        assert!(finder.find().is_err());
        assert!(finder.find().is_err());
        assert_eq!(source.passes.get(), 2);
        assert_eq!(finder.cached(), None);
    }

    #[test]
    fn test_new_candidate_invalidates_cache() {
        let source = CountingSource::new(&["a|b|c,d\n", "e|f|g,h\n"]);
        let mut finder = DelimiterFinder::new(&source);

        assert_eq!(finder.find().unwrap(), ',');
        finder.add_candidate(",").unwrap();
        assert_eq!(finder.cached(), Some(','));

        finder.add_candidate("|").unwrap();
        assert_eq!(finder.cached(), None);
        assert_eq!(finder.find().unwrap(), '|');
        assert_eq!(source.passes.get(), 2);
    }

    #[test]
    fn test_add_candidate_rejects_multi_char() {
        let mut finder = finder(&["a,b\n"]);
        assert!(matches!(
            finder.add_candidate("ab"),
            Err(DelimscanError::InvalidDelimiter(_))
        ));
        assert_eq!(finder.candidates().len(), 2);
    }

    #[test]
    fn test_with_candidates_tab() {
        let finder = finder(&["a\tb\tc\n", "d\te\tf\n"])
            .with_candidates(CandidateSet::from_chars(['\t', ',']));
        assert_eq!(finder.detect().unwrap(), '\t');
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: FinderConfig = serde_json::from_str(r#"{"absence": "strict"}"#).unwrap();
        assert_eq!(config.absence, AbsencePolicy::Strict);
        assert_eq!(config.quote, '"');
        assert_eq!(config.min_lines, 1);
    }
}
