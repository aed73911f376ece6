//! Word lists to search for.
//!
//! A word list is plain text. Each non-blank line is split on the first
//! delimiter it contains, checked in the order space, comma, semicolon.
//! Delimiters are not combined: a line containing a space is split on spaces
//! only, even if it also contains commas.
//!
//! # Examples
//!
//! ```
//! use wordsearch_solver::WordSet;
//!
//! let words = WordSet::parse("foo bar\nbaz,qux\n\n a,b c \nlast;one\n");
//! assert_eq!(words.len(), 8);
//! assert!(words.contains("a,b"));
//! assert!(words.contains("c"));
//! assert!(!words.contains("a"));
//! ```

use std::{collections::BTreeSet, convert::Infallible, fs, path::Path, str::FromStr};

use crate::SolverError;

const DELIMITERS: [char; 3] = [' ', ',', ';'];

/// A deduplicated set of words.
///
/// Words are kept exactly as given apart from trimming; the grid is lowercase,
/// so callers should lowercase their words (see [`WordSet::to_lowercase`]).
/// Iteration order is sorted, which keeps search reports deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    /// Creates an empty word set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::WordListNotFound`] if `path` does not exist and
    /// [`SolverError::WordListIo`] if it cannot be read as UTF-8 text.
    pub fn load<P>(path: P) -> Result<Self, SolverError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SolverError::WordListNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|source| SolverError::WordListIo {
            path: path.to_path_buf(),
            source,
        })?;
        let words = Self::parse(&text);
        log::debug!("parsed {} words from {}", words.len(), path.display());
        Ok(words)
    }

    /// Parses word list text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.lines().flat_map(split_line).collect()
    }

    /// Adds a word, trimming surrounding whitespace.
    ///
    /// Returns `false` if the word was empty after trimming or already present.
    pub fn insert<S>(&mut self, word: S) -> bool
    where
        S: AsRef<str>,
    {
        let word = word.as_ref().trim();
        !word.is_empty() && self.words.insert(word.to_owned())
    }

    /// Returns `true` if the set contains `word`.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns an iterator over the words in sorted order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Returns a copy with every word lowercased.
    #[must_use]
    pub fn to_lowercase(&self) -> Self {
        self.iter().map(str::to_lowercase).collect()
    }
}

/// Splits one line into tokens by the first delimiter it contains.
fn split_line(line: &str) -> Vec<&str> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }
    match DELIMITERS.into_iter().find(|&delimiter| line.contains(delimiter)) {
        Some(delimiter) => line
            .split(delimiter)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect(),
        None => vec![line],
    }
}

impl FromStr for WordSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<S> FromIterator<S> for WordSet
where
    S: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut words = Self::new();
        words.extend(iter);
        words
    }
}

impl<S> Extend<S> for WordSet
where
    S: AsRef<str>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S>,
    {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::collections::btree_set::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter().map(String::as_str as fn(&String) -> &str)
    }
}
