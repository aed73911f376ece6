//! Search results and diagnostics.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
};

use wordsearch_core::{Orientation, Position};

/// The cells spelling one found word, in reading order.
///
/// Positions refer to the original, untransformed puzzle grid. Displayed as
/// `[(x0, y0), (x1, y1), ...]`.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Position;
/// use wordsearch_solver::MatchResult;
///
/// let result = MatchResult::new(vec![Position::new(0, 0), Position::new(0, 1)]);
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.to_string(), "[(0, 0), (0, 1)]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MatchResult {
    positions: Vec<Position>,
}

impl MatchResult {
    /// Wraps a coordinate sequence.
    #[must_use]
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Returns the positions in reading order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the first and last cells, if any.
    #[must_use]
    pub fn endpoints(&self) -> Option<(Position, Position)> {
        Some((*self.positions.first()?, *self.positions.last()?))
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pos) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            Display::fmt(pos, f)?;
        }
        write!(f, "]")
    }
}

/// A confirmed occurrence of a searched word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FoundWord {
    /// The word as searched.
    pub word: String,
    /// Where the word lies in the puzzle.
    pub result: MatchResult,
    /// The view in which the word was read left to right.
    pub orientation: Orientation,
}

/// Why a word is missing from the search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MissReason {
    /// No view contains the word.
    NotFound,
    /// The word matched inside some views but the cells behind every hit
    /// did not spell it in the puzzle.
    Unconfirmed {
        /// Number of rejected hits.
        hits: usize,
    },
}

/// A word that a search could not locate.
///
/// This is a diagnostic; it never aborts the search of the remaining words.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display("{word} is not found")]
pub struct LookupMiss {
    /// The word as searched.
    pub word: String,
    /// Why it is missing.
    pub reason: MissReason,
}

/// Everything a search produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchReport {
    found: Vec<FoundWord>,
    misses: Vec<LookupMiss>,
}

impl SearchReport {
    pub(crate) fn push_found(&mut self, found: FoundWord) {
        self.found.push(found);
    }

    pub(crate) fn push_miss(&mut self, miss: LookupMiss) {
        self.misses.push(miss);
    }

    /// Returns the confirmed occurrences in search order.
    #[must_use]
    pub fn found(&self) -> &[FoundWord] {
        &self.found
    }

    /// Returns the words that could not be located.
    #[must_use]
    pub fn misses(&self) -> &[LookupMiss] {
        &self.misses
    }

    /// Returns the distinct coordinate sequences of all found words.
    #[must_use]
    pub fn matches(&self) -> BTreeSet<MatchResult> {
        self.found.iter().map(|found| found.result.clone()).collect()
    }

    /// Returns the occurrences of `word`.
    pub fn occurrences<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a MatchResult> + 'a {
        self.found
            .iter()
            .filter(move |found| found.word == word)
            .map(|found| &found.result)
    }

    /// Returns `true` if no word was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}
