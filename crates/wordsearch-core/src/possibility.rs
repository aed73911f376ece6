//! The combined table of all eight orientation views.
//!
//! A [`PossibilitySpace`] stacks the views of a square grid in the order of
//! [`Orientation::ALL`]. Row indices run contiguously across the whole stack.
//!
//! Building one space from a letter grid and another from its coordinate grid
//! gives two tables of identical shape in which the same `(column, row)`
//! addresses a letter and the original position of that letter. Matches found
//! in the letter space are translated back to the puzzle through this
//! alignment, never by inverting the rotation arithmetic.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Position, PossibilitySpace, coordinate_grid, parse_letter_grid};
//!
//! let letters = parse_letter_grid("abc\ndef\nghi");
//! let coordinates = coordinate_grid(&letters);
//!
//! let letter_space = PossibilitySpace::build(&letters)?;
//! let coordinate_space = PossibilitySpace::build(&coordinates)?;
//! assert_eq!(letter_space.height(), 12 * 3 - 4);
//! assert_eq!(coordinate_space.height(), letter_space.height());
//!
//! // The row holding "adg" in the letter space names the left column
//! let row = letter_space
//!     .rows()
//!     .position(|row| row == ['a', 'd', 'g'])
//!     .unwrap();
//! assert_eq!(
//!     coordinate_space.row(row),
//!     &[
//!         Some(Position::new(0, 0)),
//!         Some(Position::new(0, 1)),
//!         Some(Position::new(0, 2)),
//!     ]
//! );
//! # Ok::<(), wordsearch_core::GridError>(())
//! ```

use std::ops::Range;

use crate::{Blank, Grid, GridError, Orientation};

/// All eight orientation views of a square grid stacked into one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PossibilitySpace<T> {
    table: Grid<T>,
    segments: [Range<usize>; 8],
}

impl<T> PossibilitySpace<T>
where
    T: Blank,
{
    /// Builds the possibility space of `grid`.
    ///
    /// The space of an `n x n` grid has `12n - 4` rows (none for an empty
    /// grid) and `n` columns.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotSquare`] if `grid` is not square.
    pub fn build(grid: &Grid<T>) -> Result<Self, GridError> {
        if !grid.is_square() {
            return Err(GridError::NotSquare {
                width: grid.width(),
                height: grid.height(),
            });
        }

        let views = orientation_views(grid);
        let mut segments: [Range<usize>; 8] = Default::default();
        let mut start = 0;
        for (segment, view) in segments.iter_mut().zip(&views) {
            *segment = start..start + view.height();
            start = segment.end;
        }
        let table = Grid::stack(views)?;
        log::debug!(
            "built possibility space of {} rows from {}x{} grid",
            table.height(),
            grid.width(),
            grid.height()
        );
        Ok(Self { table, segments })
    }
}

#[cfg(not(feature = "parallel"))]
fn orientation_views<T>(grid: &Grid<T>) -> Vec<Grid<T>>
where
    T: Blank,
{
    Orientation::ALL
        .iter()
        .map(|orientation| orientation.apply(grid))
        .collect()
}

#[cfg(feature = "parallel")]
fn orientation_views<T>(grid: &Grid<T>) -> Vec<Grid<T>>
where
    T: Blank,
{
    use rayon::prelude::*;

    // `collect` into a Vec keeps the input order.
    Orientation::ALL
        .par_iter()
        .map(|orientation| orientation.apply(grid))
        .collect()
}

impl<T> PossibilitySpace<T> {
    /// Returns the stacked table.
    #[must_use]
    #[inline]
    pub fn table(&self) -> &Grid<T> {
        &self.table
    }

    /// Returns the total number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.table.height()
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.table.width()
    }

    /// Returns row `index` of the stacked table.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`PossibilitySpace::height`].
    #[must_use]
    pub fn row(&self, index: usize) -> &[T] {
        self.table.row(index)
    }

    /// Returns an iterator over all rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.table.rows()
    }

    /// Returns the range of rows produced by `orientation`.
    #[must_use]
    pub fn segment(&self, orientation: Orientation) -> Range<usize> {
        self.segments[orientation as usize].clone()
    }

    /// Returns the orientation whose view contains row `index`.
    #[must_use]
    pub fn orientation_of_row(&self, index: usize) -> Option<Orientation> {
        Orientation::ALL
            .into_iter()
            .zip(&self.segments)
            .find_map(|(orientation, range)| range.contains(&index).then_some(orientation))
    }
}
