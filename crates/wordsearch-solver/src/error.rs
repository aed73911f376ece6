use std::{io, path::PathBuf};

use wordsearch_core::GridError;

/// Errors that abort a solver operation.
///
/// Words that cannot be located are not errors; they are reported as
/// [`LookupMiss`](crate::LookupMiss) entries of the search report.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// Loading or transforming the puzzle grid failed.
    #[display("{_0}")]
    Grid(#[from] GridError),
    /// The word list path does not reference an existing file.
    #[display("word list file not found: {}", path.display())]
    WordListNotFound {
        /// The path that was requested.
        path: PathBuf,
    },
    /// The word list file exists but could not be read.
    #[display("failed to read word list file {}: {source}", path.display())]
    WordListIo {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A search was requested with neither a loaded nor an explicit word set.
    #[display("no word set available: load a word list or pass words to search for")]
    MissingWordSet,
    /// The letter and coordinate grids do not have the same shape.
    #[display(
        "coordinate grid is {coordinates_width}x{coordinates_height}, letter grid is {letters_width}x{letters_height}"
    )]
    MisalignedGrids {
        /// Columns of the letter grid.
        letters_width: usize,
        /// Rows of the letter grid.
        letters_height: usize,
        /// Columns of the coordinate grid.
        coordinates_width: usize,
        /// Rows of the coordinate grid.
        coordinates_height: usize,
    },
    /// The search deadline passed before every word was searched.
    #[display("search deadline exceeded after {searched} of {total} words")]
    DeadlineExceeded {
        /// Number of words searched before the deadline.
        searched: usize,
        /// Number of words requested.
        total: usize,
    },
}
