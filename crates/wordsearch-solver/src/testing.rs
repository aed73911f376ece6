//! Test utilities for searches.
//!
//! This module provides [`PuzzleTester`], a harness for checking which words a
//! search finds and where.
//!
//! # Example
//!
//! ```ignore
//! PuzzleTester::from_str("abc\ndef\nghi")
//!     .search(["adg", "zzz"])
//!     .assert_found("adg", [(0, 0), (0, 1), (0, 2)])
//!     .assert_missing("zzz");
//! ```

use wordsearch_core::{Position, parse_letter_grid};

use crate::{SearchOptions, SearchReport, WordMatcher, WordSet};

/// A test harness for searches.
///
/// All methods return `self`, enabling fluent method chaining.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct PuzzleTester {
    matcher: WordMatcher,
    options: SearchOptions,
    report: SearchReport,
}

impl PuzzleTester {
    /// Creates a tester from puzzle text.
    ///
    /// # Panics
    ///
    /// Panics if the puzzle cannot be prepared for searching.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self {
            matcher: WordMatcher::new(parse_letter_grid(s)).unwrap(),
            options: SearchOptions::default(),
            report: SearchReport::default(),
        }
    }

    /// Sets the options used by [`PuzzleTester::search`].
    #[must_use]
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Searches for `words`, replacing the previous report.
    ///
    /// # Panics
    ///
    /// Panics if the search fails.
    #[track_caller]
    pub fn search<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter().collect::<WordSet>();
        self.report = self.matcher.find_all(&words, &self.options).unwrap();
        self
    }

    /// Asserts that `word` was found at exactly the cells `expected`, in order.
    #[track_caller]
    pub fn assert_found<I, P>(self, word: &str, expected: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let expected = expected.into_iter().map(Into::into).collect::<Vec<_>>();
        let occurrences = self.report.occurrences(word).collect::<Vec<_>>();
        assert!(
            occurrences
                .iter()
                .any(|result| result.positions() == expected.as_slice()),
            "Expected {word:?} at {expected:?}, but found it at {occurrences:?}"
        );
        self
    }

    /// Asserts that `word` was searched for and reported as a miss.
    #[track_caller]
    pub fn assert_missing(self, word: &str) -> Self {
        assert!(
            self.report.misses().iter().any(|miss| miss.word == word),
            "Expected {word:?} to be missing, but misses are {:?}",
            self.report.misses()
        );
        assert_eq!(
            self.report.occurrences(word).count(),
            0,
            "Missing word {word:?} also has occurrences"
        );
        self
    }

    /// Asserts how many occurrences of `word` were reported.
    #[track_caller]
    pub fn assert_occurrences(self, word: &str, expected: usize) -> Self {
        let actual = self.report.occurrences(word).count();
        assert_eq!(
            actual, expected,
            "Expected {expected} occurrences of {word:?}, found {actual}"
        );
        self
    }

    /// Asserts the number of distinct coordinate sequences found.
    #[track_caller]
    pub fn assert_match_count(self, expected: usize) -> Self {
        let actual = self.report.matches().len();
        assert_eq!(
            actual, expected,
            "Expected {expected} distinct matches, found {actual}"
        );
        self
    }
}
