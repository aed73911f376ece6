//! Locating words in the possibility space.
//!
//! The letter grid and the coordinate grid are expanded into possibility
//! spaces with the same pipeline, so row `i` of the letter space and row `i`
//! of the coordinate space describe the same cells. A word found at columns
//! `start..end` of a letter row is resolved by slicing the same columns of the
//! coordinate row, then confirmed by reading those positions back from the
//! untransformed letter grid.

use std::{collections::BTreeSet, ops::Range, time::Instant};

use wordsearch_core::{CoordinateGrid, LetterGrid, Position, PossibilitySpace, coordinate_grid};

use crate::{
    FoundWord, LookupMiss, MatchPolicy, MatchResult, MissReason, SearchOptions, SearchReport,
    SolverError, WordSet,
};

/// Resolves a span of a possibility-space row to puzzle coordinates.
///
/// Returns `None` if the row or span lies outside the space, or if any cell in
/// the span is padding with no source position.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Position, PossibilitySpace, coordinate_grid, parse_letter_grid};
/// use wordsearch_solver::locate_word;
///
/// let letters = parse_letter_grid("ab\ncd");
/// let coordinates = PossibilitySpace::build(&coordinate_grid(&letters))?;
///
/// // Row 1 of the unrotated view is "cd"
/// let result = locate_word(&coordinates, 1, 0..2).unwrap();
/// assert_eq!(result.positions(), &[Position::new(0, 1), Position::new(1, 1)]);
///
/// assert!(locate_word(&coordinates, 1, 1..3).is_none());
/// # Ok::<(), wordsearch_core::GridError>(())
/// ```
#[must_use]
pub fn locate_word(
    coordinates: &PossibilitySpace<Option<Position>>,
    row: usize,
    span: Range<usize>,
) -> Option<MatchResult> {
    if row >= coordinates.height() {
        return None;
    }
    let cells = coordinates.row(row).get(span)?;
    let positions = cells.iter().copied().collect::<Option<Vec<_>>>()?;
    Some(MatchResult::new(positions))
}

/// Reads the letters at `positions` from the puzzle grid.
///
/// Returns `None` if any position lies outside the grid.
#[must_use]
pub fn word_at(grid: &LetterGrid, positions: &[Position]) -> Option<String> {
    positions.iter().map(|&pos| grid.get(pos).copied()).collect()
}

/// Searches one puzzle for words across all eight orientations.
///
/// Both possibility spaces are built once on construction and reused by every
/// search.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Position, parse_letter_grid};
/// use wordsearch_solver::{SearchOptions, WordMatcher, WordSet};
///
/// let matcher = WordMatcher::new(parse_letter_grid("abc\ndef\nghi"))?;
/// let words = WordSet::from_iter(["adg", "zzz"]);
/// let report = matcher.find_all(&words, &SearchOptions::default())?;
///
/// let found = &report.found()[0];
/// assert_eq!(found.word, "adg");
/// assert_eq!(
///     found.result.positions(),
///     &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
/// );
/// assert_eq!(report.misses()[0].word, "zzz");
/// # Ok::<(), wordsearch_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WordMatcher {
    grid: LetterGrid,
    coordinates: CoordinateGrid,
    letter_space: PossibilitySpace<char>,
    coordinate_space: PossibilitySpace<Option<Position>>,
}

impl WordMatcher {
    /// Builds a matcher for `grid` and its coordinate grid.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if `grid` is not square.
    pub fn new(grid: LetterGrid) -> Result<Self, SolverError> {
        let coordinates = coordinate_grid(&grid);
        Self::with_coordinates(grid, coordinates)
    }

    /// Builds a matcher from a letter grid and a caller-supplied coordinate grid.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::MisalignedGrids`] if the grids differ in shape,
    /// and [`SolverError::Grid`] if they are not square.
    pub fn with_coordinates(
        grid: LetterGrid,
        coordinates: CoordinateGrid,
    ) -> Result<Self, SolverError> {
        if (grid.width(), grid.height()) != (coordinates.width(), coordinates.height()) {
            return Err(SolverError::MisalignedGrids {
                letters_width: grid.width(),
                letters_height: grid.height(),
                coordinates_width: coordinates.width(),
                coordinates_height: coordinates.height(),
            });
        }
        let letter_space = PossibilitySpace::build(&grid)?;
        let coordinate_space = PossibilitySpace::build(&coordinates)?;
        Ok(Self {
            grid,
            coordinates,
            letter_space,
            coordinate_space,
        })
    }

    /// Returns the puzzle grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the coordinate grid.
    #[must_use]
    pub fn coordinates(&self) -> &CoordinateGrid {
        &self.coordinates
    }

    /// Returns the letter possibility space.
    #[must_use]
    pub fn letter_space(&self) -> &PossibilitySpace<char> {
        &self.letter_space
    }

    /// Returns the coordinate possibility space.
    #[must_use]
    pub fn coordinate_space(&self) -> &PossibilitySpace<Option<Position>> {
        &self.coordinate_space
    }

    /// Resolves `span` of letter-space row `row` to puzzle coordinates.
    ///
    /// See [`locate_word`].
    #[must_use]
    pub fn locate_word(&self, row: usize, span: Range<usize>) -> Option<MatchResult> {
        locate_word(&self.coordinate_space, row, span)
    }

    /// Searches for every word of `words`.
    ///
    /// Empty words and words shorter than the minimum length are skipped
    /// without a diagnostic. Every other word either contributes at least one
    /// [`FoundWord`] or exactly one [`LookupMiss`].
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DeadlineExceeded`] if the deadline of `options`
    /// passes before all words are searched.
    pub fn find_all(
        &self,
        words: &WordSet,
        options: &SearchOptions,
    ) -> Result<SearchReport, SolverError> {
        let mut report = SearchReport::default();
        let total = words.len();

        for (searched, word) in words.iter().enumerate() {
            if options.deadline().is_some_and(|deadline| Instant::now() >= deadline) {
                return Err(SolverError::DeadlineExceeded { searched, total });
            }

            let letters = word.chars().collect::<Vec<_>>();
            if letters.is_empty() || letters.len() < options.min_length() {
                log::trace!("skipping {word:?}: shorter than {}", options.min_length());
                continue;
            }

            let (found, hits) = self.search_word(word, &letters, options.policy());
            if found.is_empty() {
                log::warn!("{word} is not found");
                let reason = if hits == 0 {
                    MissReason::NotFound
                } else {
                    MissReason::Unconfirmed { hits }
                };
                report.push_miss(LookupMiss {
                    word: word.to_owned(),
                    reason,
                });
            }
            for found in found {
                report.push_found(found);
            }
        }

        log::debug!(
            "found {} of {} words ({} misses)",
            report.found().len(),
            total,
            report.misses().len()
        );
        Ok(report)
    }

    /// Returns the confirmed occurrences of `word` and the number of substring
    /// hits examined.
    fn search_word(
        &self,
        word: &str,
        letters: &[char],
        policy: MatchPolicy,
    ) -> (Vec<FoundWord>, usize) {
        let mut found = Vec::new();
        let mut seen = BTreeSet::new();
        let mut hits = 0;

        for (row_index, row) in self.letter_space.rows().enumerate() {
            let Some(orientation) = self.letter_space.orientation_of_row(row_index) else {
                continue;
            };
            let mut from = 0;
            while let Some(start) = find_in_row(row, letters, from) {
                hits += 1;
                let span = start..start + letters.len();
                match self.confirm(word, row_index, span) {
                    Some(result) => {
                        log::trace!("{word} found in row {row_index} at column {start}");
                        if seen.insert(result.clone()) {
                            found.push(FoundWord {
                                word: word.to_owned(),
                                result,
                                orientation,
                            });
                        }
                        if policy == MatchPolicy::FirstOccurrence {
                            return (found, hits);
                        }
                    }
                    None => {
                        log::trace!("{word} in row {row_index} at column {start} not confirmed");
                    }
                }
                if policy == MatchPolicy::FirstOccurrence {
                    break;
                }
                from = start + 1;
            }
        }
        (found, hits)
    }

    /// Resolves a hit and checks that the puzzle spells `word` at its cells.
    fn confirm(&self, word: &str, row: usize, span: Range<usize>) -> Option<MatchResult> {
        let result = self.locate_word(row, span)?;
        (word_at(&self.grid, result.positions())? == word).then_some(result)
    }
}

/// Returns the column of the leftmost occurrence of `word` in `row` at or
/// after column `from`.
fn find_in_row(row: &[char], word: &[char], from: usize) -> Option<usize> {
    if word.is_empty() {
        return None;
    }
    row.get(from..)?
        .windows(word.len())
        .position(|window| window == word)
        .map(|offset| from + offset)
}

/// Searches `grid` for `words`, building both possibility spaces first.
///
/// This is a one-shot form of [`WordMatcher::find_all`].
///
/// # Errors
///
/// Returns [`SolverError::MisalignedGrids`] or [`SolverError::Grid`] if the
/// grids are unusable, and [`SolverError::DeadlineExceeded`] if the deadline
/// passes.
pub fn find_all(
    grid: &LetterGrid,
    coordinates: &CoordinateGrid,
    words: &WordSet,
    options: &SearchOptions,
) -> Result<SearchReport, SolverError> {
    WordMatcher::with_coordinates(grid.clone(), coordinates.clone())?.find_all(words, options)
}
