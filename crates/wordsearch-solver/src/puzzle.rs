use std::path::Path;

use wordsearch_core::{CoordinateGrid, LetterGrid, Position, load_letter_grid};

use crate::{
    MatchResult, SearchOptions, SearchReport, SolverError, WordMatcher, WordSet, leftover_letters,
    leftover_positions, word_at,
};

/// A loaded puzzle, its optional word list, and the result of the last search.
///
/// The possibility spaces of the puzzle are built once when the puzzle is
/// loaded and reused by every search.
///
/// # Examples
///
/// ```
/// use wordsearch_core::parse_letter_grid;
/// use wordsearch_solver::{SearchOptions, WordSearch, WordSet};
///
/// let mut puzzle = WordSearch::new(parse_letter_grid("hix\nyoz\nabc"))?
///     .with_word_set(WordSet::from_iter(["hi", "abc"]));
///
/// let report = puzzle.find_all(None, &SearchOptions::default())?;
/// assert_eq!(report.found().len(), 2);
/// assert_eq!(puzzle.leftover_letters()?, "xyoz");
/// # Ok::<(), wordsearch_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WordSearch {
    matcher: WordMatcher,
    word_set: Option<WordSet>,
    report: Option<SearchReport>,
}

impl WordSearch {
    /// Prepares `grid` for searching.
    ///
    /// No search runs yet. The first [`WordSearch::find_all`] or leftover
    /// query runs one.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if `grid` is not square.
    pub fn new(grid: LetterGrid) -> Result<Self, SolverError> {
        Ok(Self {
            matcher: WordMatcher::new(grid)?,
            word_set: None,
            report: None,
        })
    }

    /// Loads a puzzle file. Like [`WordSearch::new`], this does not search.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if the file is missing or unreadable.
    pub fn open<P>(puzzle: P) -> Result<Self, SolverError>
    where
        P: AsRef<Path>,
    {
        Self::new(load_letter_grid(puzzle)?)
    }

    /// Loads a word list file as the default word set for searches.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::WordListNotFound`] or [`SolverError::WordListIo`]
    /// if the file cannot be read.
    pub fn load_word_list<P>(&mut self, path: P) -> Result<&WordSet, SolverError>
    where
        P: AsRef<Path>,
    {
        let words = WordSet::load(path)?;
        self.report = None;
        Ok(self.word_set.insert(words))
    }

    /// Sets the default word set for searches.
    #[must_use]
    pub fn with_word_set(mut self, words: WordSet) -> Self {
        self.word_set = Some(words);
        self.report = None;
        self
    }

    /// Returns the puzzle grid.
    #[must_use]
    #[inline]
    pub fn grid(&self) -> &LetterGrid {
        self.matcher.grid()
    }

    /// Returns the coordinate grid.
    #[must_use]
    #[inline]
    pub fn coordinates(&self) -> &CoordinateGrid {
        self.matcher.coordinates()
    }

    /// Returns the default word set, if one was loaded.
    #[must_use]
    #[inline]
    pub fn word_set(&self) -> Option<&WordSet> {
        self.word_set.as_ref()
    }

    /// Returns the matcher holding the cached possibility spaces.
    #[must_use]
    #[inline]
    pub fn matcher(&self) -> &WordMatcher {
        &self.matcher
    }

    /// Returns the report of the last search, if any.
    #[must_use]
    #[inline]
    pub fn report(&self) -> Option<&SearchReport> {
        self.report.as_ref()
    }

    /// Searches for `words`, or for the default word set if `words` is `None`.
    ///
    /// The report is kept and used by the leftover queries.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::MissingWordSet`] if `words` is `None` and no
    /// default word set was loaded, and [`SolverError::DeadlineExceeded`] if
    /// the deadline of `options` passes.
    pub fn find_all(
        &mut self,
        words: Option<&WordSet>,
        options: &SearchOptions,
    ) -> Result<&SearchReport, SolverError> {
        let words = words
            .or(self.word_set.as_ref())
            .ok_or(SolverError::MissingWordSet)?;
        let report = self.matcher.find_all(words, options)?;
        Ok(self.report.insert(report))
    }

    /// Runs a search of the default word set with default options if no
    /// search has run yet.
    fn ensure_solved(&mut self) -> Result<(), SolverError> {
        if self.report.is_none() {
            self.find_all(None, &SearchOptions::default())?;
        }
        Ok(())
    }

    fn found_results(&self) -> impl Iterator<Item = &MatchResult> {
        self.report
            .iter()
            .flat_map(SearchReport::found)
            .map(|found| &found.result)
    }

    /// Returns the cells not covered by any found word, in row-major order.
    ///
    /// # Errors
    ///
    /// Fails like [`WordSearch::find_all`] if no search has run yet.
    pub fn leftover_positions(&mut self) -> Result<Vec<Position>, SolverError> {
        self.ensure_solved()?;
        Ok(leftover_positions(self.grid(), self.found_results()))
    }

    /// Returns the letters not covered by any found word, blanks removed.
    ///
    /// # Errors
    ///
    /// Fails like [`WordSearch::find_all`] if no search has run yet.
    pub fn leftover_letters(&mut self) -> Result<String, SolverError> {
        self.ensure_solved()?;
        Ok(leftover_letters(self.grid(), self.found_results()))
    }

    /// Reads the letters at `positions`.
    ///
    /// See [`word_at`].
    #[must_use]
    pub fn word_at(&self, positions: &[Position]) -> Option<String> {
        word_at(self.grid(), positions)
    }
}

#[cfg(test)]
mod tests {
    use wordsearch_core::parse_letter_grid;

    use super::*;

    fn puzzle() -> WordSearch {
        WordSearch::new(parse_letter_grid("hix\nyoz\nabc")).unwrap()
    }

    #[test]
    fn test_missing_word_set() {
        let mut puzzle = puzzle();
        let err = puzzle.find_all(None, &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, SolverError::MissingWordSet));
        assert!(puzzle.report().is_none());

        let err = puzzle.leftover_letters().unwrap_err();
        assert!(matches!(err, SolverError::MissingWordSet));
    }

    #[test]
    fn test_explicit_words_override_default_set() {
        let mut puzzle = puzzle().with_word_set(WordSet::from_iter(["hi"]));
        let explicit = WordSet::from_iter(["abc"]);
        let report = puzzle.find_all(Some(&explicit), &SearchOptions::default()).unwrap();
        assert_eq!(report.found().len(), 1);
        assert_eq!(report.found()[0].word, "abc");
        assert_eq!(puzzle.leftover_letters().unwrap(), "hixyoz");
    }

    #[test]
    fn test_leftover_triggers_search() {
        let mut puzzle = puzzle().with_word_set(WordSet::from_iter(["hi", "abc", "nope"]));
        assert!(puzzle.report().is_none());
        assert_eq!(puzzle.leftover_letters().unwrap(), "xyoz");
        assert_eq!(puzzle.report().unwrap().misses().len(), 1);
        assert_eq!(
            puzzle.leftover_positions().unwrap(),
            [
                Position::new(2, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(2, 1)
            ]
        );
    }

    #[test]
    fn test_word_at() {
        let puzzle = puzzle();
        let column = [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)];
        assert_eq!(puzzle.word_at(&column).as_deref(), Some("iob"));
        assert_eq!(puzzle.word_at(&[Position::new(3, 0)]), None);
    }

    #[test]
    fn test_open_missing_puzzle() {
        let err = WordSearch::open("/not/a/path.txt").unwrap_err();
        assert!(matches!(
            err,
            SolverError::Grid(wordsearch_core::GridError::NotFound { .. })
        ));
    }
}
