//! Quarter-turn rotations and the eight orientation views.

use std::fmt::{self, Display};

use crate::{Blank, Grid, Position, diagonal::diagonal_project};

/// Rotates `grid` counter-clockwise by `times` quarter turns.
///
/// `times <= 0` returns an unchanged copy; only positive counts rotate.
/// Four quarter turns are the identity. After one turn the top-right cell
/// becomes the top-left cell.
///
/// Letter and coordinate grids must go through this same function so that the
/// cell at any position of a rotated coordinate grid names the source of the
/// cell at that position of the rotated letter grid.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Grid, rotate};
///
/// let grid = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']])?;
/// let turned = rotate(&grid, 1);
/// assert_eq!(turned.row(0), &['b', 'd']);
/// assert_eq!(turned.row(1), &['a', 'c']);
/// assert_eq!(rotate(&grid, 4), grid);
/// assert_eq!(rotate(&grid, -1), grid);
/// # Ok::<(), wordsearch_core::GridError>(())
/// ```
#[must_use]
pub fn rotate<T>(grid: &Grid<T>, times: i32) -> Grid<T>
where
    T: Clone,
{
    if times <= 0 {
        return grid.clone();
    }
    let mut rotated = grid.clone();
    for _ in 0..times % 4 {
        rotated = quarter_turn(&rotated);
    }
    rotated
}

fn quarter_turn<T>(grid: &Grid<T>) -> Grid<T>
where
    T: Clone,
{
    let (width, height) = (grid.width(), grid.height());
    // Output row `y` is input column `width - 1 - y` read top to bottom.
    Grid::from_fn(height, width, |pos| {
        grid[Position::new(width - 1 - pos.y(), pos.x())].clone()
    })
}

/// One of the eight views of a grid searched for words.
///
/// The straight views are quarter-turn rotations. Each diagonal view is the
/// [`diagonal_project`] of the straight view with the same angle. Reading the
/// rows of all eight views left to right covers every line of the grid in
/// both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// The grid as loaded.
    Straight0,
    /// One counter-clockwise quarter turn.
    Straight90,
    /// Two quarter turns.
    Straight180,
    /// Three counter-clockwise quarter turns.
    Straight270,
    /// Diagonal projection of [`Orientation::Straight0`].
    Diagonal0,
    /// Diagonal projection of [`Orientation::Straight90`].
    Diagonal90,
    /// Diagonal projection of [`Orientation::Straight180`].
    Diagonal180,
    /// Diagonal projection of [`Orientation::Straight270`].
    Diagonal270,
}

impl Orientation {
    /// All orientations in possibility-space order.
    pub const ALL: [Self; 8] = [
        Self::Straight0,
        Self::Straight90,
        Self::Straight180,
        Self::Straight270,
        Self::Diagonal0,
        Self::Diagonal90,
        Self::Diagonal180,
        Self::Diagonal270,
    ];

    /// Returns the number of counter-clockwise quarter turns applied.
    #[must_use]
    pub const fn quarter_turns(self) -> i32 {
        match self {
            Self::Straight0 | Self::Diagonal0 => 0,
            Self::Straight90 | Self::Diagonal90 => 1,
            Self::Straight180 | Self::Diagonal180 => 2,
            Self::Straight270 | Self::Diagonal270 => 3,
        }
    }

    /// Returns `true` for the four diagonal projections.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::Diagonal0 | Self::Diagonal90 | Self::Diagonal180 | Self::Diagonal270
        )
    }

    /// Returns the number of rows this view has for an `n x n` grid.
    #[must_use]
    pub const fn row_count(self, n: usize) -> usize {
        if self.is_diagonal() {
            (2 * n).saturating_sub(1)
        } else {
            n
        }
    }

    /// Produces this view of `grid`.
    #[must_use]
    pub fn apply<T>(self, grid: &Grid<T>) -> Grid<T>
    where
        T: Blank,
    {
        let rotated = rotate(grid, self.quarter_turns());
        if self.is_diagonal() {
            diagonal_project(&rotated)
        } else {
            rotated
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = self.quarter_turns() * 90;
        if self.is_diagonal() {
            write!(f, "diagonal {degrees}°")
        } else {
            write!(f, "{degrees}°")
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::parse_letter_grid;

    const PUZZLE: &str = "abcdefghijklm+\n\
                          qhorizontalaan\n\
                          bierxazghrycko\n\
                          wegiocgolfpijp\n\
                          jgoogleotestmq\n\
                          programtnwgror\n\
                          yahooiiomayews\n\
                          tqazwsxfpolvet\n\
                          hkedclekuekcxu\n\
                          oogbaledvlelev\n\
                          netjesbehtjoew\n\
                          dnesnemafpaczx\n\
                          lkjemnbuonifty\n\
                          -nothingfeorez";

    #[test]
    fn test_corner_mapping() {
        let grid = parse_letter_grid(PUZZLE);
        let top_right = grid[Position::new(13, 0)];
        let bottom_left = grid[Position::new(0, 13)];
        assert_eq!(top_right, '+');
        assert_eq!(bottom_left, '-');

        let deg0 = rotate(&grid, 0);
        assert_eq!(deg0, grid);

        let deg90 = rotate(&grid, 1);
        assert_eq!(deg90[Position::new(0, 0)], top_right);
        assert_eq!(deg90[Position::new(13, 13)], bottom_left);

        let deg180 = rotate(&grid, 2);
        assert_eq!(deg180[Position::new(0, 13)], top_right);
        assert_eq!(deg180[Position::new(13, 0)], bottom_left);

        let deg270 = rotate(&grid, 3);
        assert_eq!(deg270[Position::new(13, 13)], top_right);
        assert_eq!(deg270[Position::new(0, 0)], bottom_left);

        assert_eq!(rotate(&grid, 4), grid);
    }

    #[test]
    fn test_negative_times_is_identity() {
        let grid = parse_letter_grid("ab\ncd");
        assert_eq!(rotate(&grid, -3), grid);
    }

    #[test]
    fn test_rectangular_quarter_turn() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let turned = rotate(&grid, 1);
        assert_eq!((turned.width(), turned.height()), (2, 3));
        assert_eq!(turned.row(0), &[3, 6]);
        assert_eq!(turned.row(2), &[1, 4]);
    }

    #[test]
    fn test_orientation_row_counts() {
        let grid = parse_letter_grid(PUZZLE);
        for orientation in Orientation::ALL {
            let view = orientation.apply(&grid);
            assert_eq!(view.height(), orientation.row_count(14), "{orientation}");
            assert_eq!(view.width(), 14, "{orientation}");
        }
        assert_eq!(Orientation::Diagonal0.row_count(0), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Orientation::Straight180.to_string(), "180°");
        assert_eq!(Orientation::Diagonal270.to_string(), "diagonal 270°");
    }

    fn square_grid() -> impl Strategy<Value = Grid<char>> {
        (0usize..9).prop_flat_map(|n| {
            prop::collection::vec(prop::char::range('a', 'z'), n * n)
                .prop_map(move |cells| Grid::from_vec(n, n, cells).unwrap())
        })
    }

    proptest! {
        #[test]
        fn rotation_has_order_four(grid in square_grid()) {
            let mut turned = grid.clone();
            for _ in 0..4 {
                turned = rotate(&turned, 1);
            }
            prop_assert_eq!(&turned, &grid);
            prop_assert_eq!(&rotate(&grid, 4), &grid);
            prop_assert_eq!(&rotate(&grid, 0), &grid);
        }

        #[test]
        fn rotation_composes(grid in square_grid(), a in 0i32..4, b in 0i32..4) {
            let stepwise = rotate(&rotate(&grid, a), b);
            prop_assert_eq!(stepwise, rotate(&grid, a + b));
        }
    }
}
