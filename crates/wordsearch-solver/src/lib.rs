//! Word search over the possibility space of a puzzle.
//!
//! This crate finds words in a puzzle built by `wordsearch-core` and reports
//! where they lie in the original grid.
//!
//! # Overview
//!
//! - [`WordSet`] parses word lists.
//! - [`WordMatcher`] caches both possibility spaces of a puzzle and searches
//!   them, confirming every hit against the untransformed grid.
//! - [`SearchReport`] collects the [`FoundWord`]s and the [`LookupMiss`]
//!   diagnostics of one search.
//! - [`leftover_letters`] reads the cells no found word covers.
//! - [`WordSearch`] ties a puzzle, its word list, and its last report together.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::parse_letter_grid;
//! use wordsearch_solver::{SearchOptions, WordSearch, WordSet};
//!
//! let mut puzzle = WordSearch::new(parse_letter_grid("cat\nxox\nxxw"))?;
//! let words: WordSet = "cat,cow,dog".parse().unwrap();
//! let report = puzzle.find_all(Some(&words), &SearchOptions::default())?;
//!
//! assert_eq!(report.found().len(), 2);
//! assert_eq!(report.misses()[0].to_string(), "dog is not found");
//! # Ok::<(), wordsearch_solver::SolverError>(())
//! ```

pub use self::{
    error::SolverError,
    leftover::{leftover_letters, leftover_positions},
    matcher::{WordMatcher, find_all, locate_word, word_at},
    options::{MatchPolicy, SearchOptions},
    puzzle::WordSearch,
    report::{FoundWord, LookupMiss, MatchResult, MissReason, SearchReport},
    word_set::WordSet,
};

mod error;
mod leftover;
mod matcher;
mod options;
mod puzzle;
mod report;
mod word_set;

#[cfg(test)]
mod testing;
