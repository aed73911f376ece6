//! Rectangular cell tables.
//!
//! [`Grid`] is the value type every transform in this crate consumes and
//! produces. A loaded puzzle is always square; the diagonal projection and the
//! combined possibility space are taller than they are wide.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::{GridError, Position};

/// A cell value that has a designated blank.
///
/// Transforms that produce ragged rows pad them with [`Blank::blank`]. For
/// letters this is a single space; for coordinates it is `None`, so padding
/// never fabricates a source position.
pub trait Blank: Clone + Send + Sync {
    /// Returns the blank value.
    fn blank() -> Self;

    /// Returns `true` if this value is blank.
    fn is_blank(&self) -> bool;
}

impl Blank for char {
    #[inline]
    fn blank() -> Self {
        ' '
    }

    #[inline]
    fn is_blank(&self) -> bool {
        self.is_whitespace()
    }
}

impl Blank for Option<Position> {
    #[inline]
    fn blank() -> Self {
        None
    }

    #[inline]
    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

/// An immutable, row-major table of cells.
///
/// Cells are addressed by [`Position`], i.e. `(column, row)`.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Grid, Position};
///
/// let grid = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']])?;
/// assert!(grid.is_square());
/// assert_eq!(grid[Position::new(1, 0)], 'b');
/// assert_eq!(grid.row(1), &['c', 'd']);
/// # Ok::<(), wordsearch_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCount`] if `cells` does not hold exactly
    /// `width * height` values.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if cells.len() != width * height {
            return Err(GridError::CellCount {
                width,
                height,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid by evaluating `f` at every position in row-major order.
    #[must_use]
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Position::new(x, y)))
            .map(&mut f)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Stacks grids of equal width on top of each other, in order.
    ///
    /// Row indices of the result are contiguous across all parts.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] for the first row of the first part
    /// whose width differs from the first part's.
    pub fn stack<I>(parts: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Grid<T>>,
    {
        let mut parts = parts.into_iter();
        let Some(first) = parts.next() else {
            return Ok(Self {
                width: 0,
                height: 0,
                cells: Vec::new(),
            });
        };
        let Grid {
            width,
            mut height,
            mut cells,
        } = first;
        for part in parts {
            if part.width != width {
                return Err(GridError::RaggedRow {
                    row: height,
                    expected: width,
                    found: part.width,
                });
            }
            height += part.height;
            cells.extend(part.cells);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the grid has as many rows as columns.
    #[must_use]
    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Returns the cell at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        if self.contains(pos) {
            self.cells.get(pos.y() * self.width + pos.x())
        } else {
            None
        }
    }

    /// Returns row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not less than [`Grid::height`].
    #[must_use]
    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row {y} out of range for height {}", self.height);
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.height).map(|y| self.row(y))
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Returns the cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        assert!(
            self.contains(pos),
            "position {pos} out of range for {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[pos.y() * self.width + pos.x()]
    }
}

impl Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for ch in row {
                Display::fmt(ch, f)?;
            }
        }
        Ok(())
    }
}
