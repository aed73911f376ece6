use std::{io, path::PathBuf};

/// Errors raised while loading or reshaping grids.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The puzzle path does not reference an existing regular file.
    #[display("puzzle file not found: {}", path.display())]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },
    /// The puzzle file exists but could not be read.
    #[display("failed to read puzzle file {}: {source}", path.display())]
    Io {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A grid expected to be square is not.
    #[display("grid must be square, got {width}x{height}")]
    NotSquare {
        /// Number of columns.
        width: usize,
        /// Number of rows.
        height: usize,
    },
    /// A row has a different number of cells than the rows before it.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the preceding rows.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A flat cell buffer does not match the requested dimensions.
    #[display("{width}x{height} grid needs {} cells, got {found}", width * height)]
    CellCount {
        /// Number of columns.
        width: usize,
        /// Number of rows.
        height: usize,
        /// Number of cells supplied.
        found: usize,
    },
}
