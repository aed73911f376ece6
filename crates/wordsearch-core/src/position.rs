//! Grid position type.

use std::fmt::{self, Display};

/// A cell position in a grid, addressed as `(column, row)`.
///
/// `x` is the horizontal offset within a puzzle line and `y` is the line number.
/// This is the pairing reported in match results, so `(0, 2)` is the first
/// character of the third line.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Position;
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.x(), 3);
/// assert_eq!(pos.y(), 1);
/// assert_eq!(pos.to_string(), "(3, 1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a new position from a column and a row.
    #[must_use]
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    #[inline]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row.
    #[must_use]
    #[inline]
    pub const fn y(self) -> usize {
        self.y
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_conversions() {
        let pos = Position::from((4, 6));
        assert_eq!(pos, Position::new(4, 6));

        let (x, y) = pos.into();
        assert_eq!((x, y), (4, 6));
    }

    #[test]
    fn test_ordering_is_column_major() {
        // Derived ordering compares x before y
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }
}
