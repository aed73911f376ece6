//! Grid transforms for word-search puzzles.
//!
//! This crate builds the letter grid of a puzzle and the coordinate grid that
//! runs parallel to it, and derives the views in which every reading direction
//! of the puzzle becomes a left-to-right row.
//!
//! # Overview
//!
//! 1. **Grids** - [`Grid`] is an immutable row-major table addressed by
//!    [`Position`] (`(column, row)`). Cell types implement [`Blank`] so that
//!    transforms can pad ragged rows.
//! 2. **Loading** - [`load_letter_grid`] and [`parse_letter_grid`] produce a
//!    square [`LetterGrid`]; [`coordinate_grid`] produces the co-indexed
//!    [`CoordinateGrid`].
//! 3. **Views** - [`rotate`] turns a grid by quarter turns,
//!    [`diagonal_project`] lays its diagonals out as rows, and [`Orientation`]
//!    names the eight combinations.
//! 4. **Possibility space** - [`PossibilitySpace`] stacks all eight views of a
//!    square grid into one table.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Orientation, PossibilitySpace, parse_letter_grid};
//!
//! let letters = parse_letter_grid("cat\nxox\nxxw");
//! let space = PossibilitySpace::build(&letters)?;
//!
//! // "cow" runs down the main diagonal
//! let row = space
//!     .rows()
//!     .position(|row| row.iter().collect::<String>().contains("cow"))
//!     .unwrap();
//! assert_eq!(space.orientation_of_row(row), Some(Orientation::Diagonal0));
//! # Ok::<(), wordsearch_core::GridError>(())
//! ```

pub use self::{
    diagonal::diagonal_project,
    error::GridError,
    grid::{Blank, Grid},
    loader::{CoordinateGrid, LetterGrid, coordinate_grid, load_letter_grid, parse_letter_grid},
    orientation::{Orientation, rotate},
    position::Position,
    possibility::PossibilitySpace,
};

mod diagonal;
mod error;
mod grid;
mod loader;
mod orientation;
mod position;
mod possibility;
