use crate::{Blank, Grid, Position};

/// Projects the diagonals of `grid` onto rows.
///
/// Row `i` of the result holds the diagonal at offset `k = i - (height - 1)`:
/// for `k >= 0` the cells `(r + k, r)`, for `k < 0` the cells `(r, r - k)`,
/// in increasing `r`. Row 0 therefore starts at the bottom-left corner and the
/// last row at the top-right corner. Rows shorter than the longest diagonal
/// are padded on the right with [`Blank::blank`].
///
/// An `n x n` grid yields `2n - 1` rows of width `n`.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Grid, diagonal_project};
///
/// let grid = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']])?;
/// let diagonals = diagonal_project(&grid);
/// assert_eq!(diagonals.height(), 3);
/// assert_eq!(diagonals.row(0), &['c', ' ']);
/// assert_eq!(diagonals.row(1), &['a', 'd']);
/// assert_eq!(diagonals.row(2), &['b', ' ']);
/// # Ok::<(), wordsearch_core::GridError>(())
/// ```
#[must_use]
pub fn diagonal_project<T>(grid: &Grid<T>) -> Grid<T>
where
    T: Blank,
{
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Grid::from_fn(0, 0, |_| T::blank());
    }

    let rows = width + height - 1;
    let row_width = width.min(height);
    Grid::from_fn(row_width, rows, |pos| {
        let r = pos.x();
        let source = match pos.y().checked_sub(height - 1) {
            Some(k) => Position::new(r + k, r),
            None => Position::new(r, r + (height - 1 - pos.y())),
        };
        grid.get(source).cloned().unwrap_or_else(T::blank)
    })
}
