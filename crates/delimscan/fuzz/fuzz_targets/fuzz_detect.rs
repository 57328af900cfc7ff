//! Fuzz target for delimiter detection.
//!
//! This fuzzer tests that the finder:
//! 1. Never panics on arbitrary text, including multi-byte characters
//! 2. Handles arbitrary candidate and quote characters
//! 3. Agrees between `find` and `detect`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use delimscan::{AbsencePolicy, CandidateSet, DelimiterFinder, FinderConfig, TextSource};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    candidates: Vec<char>,
    quote: char,
    strict: bool,
}

fuzz_target!(|input: Input| {
    // Only process reasonable-sized inputs to avoid slow runs
    if input.text.len() > 100_000 || input.candidates.len() > 32 {
        return;
    }

    let config = FinderConfig {
        quote: input.quote,
        absence: if input.strict { AbsencePolicy::Strict } else { AbsencePolicy::Lenient },
        ..Default::default()
    };
    let mut finder = DelimiterFinder::with_config(TextSource::new(&input.text), config)
        .with_candidates(CandidateSet::from_chars(input.candidates));

    let detected = finder.detect().ok();
    assert_eq!(finder.find().ok(), detected);
});
