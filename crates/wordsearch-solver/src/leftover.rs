//! Letters not covered by any found word.
//!
//! Word-search puzzles often hide a message in the cells that no listed word
//! uses. Reading those cells row by row, left to right, reveals it.

use std::collections::BTreeSet;

use wordsearch_core::{LetterGrid, Position};

use crate::MatchResult;

/// Returns every position of `grid` not covered by `matches`.
///
/// Positions are ordered by row, then by column.
#[must_use]
pub fn leftover_positions<'a, I>(grid: &LetterGrid, matches: I) -> Vec<Position>
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    let used = matches
        .into_iter()
        .flat_map(MatchResult::positions)
        .copied()
        .collect::<BTreeSet<_>>();
    grid.positions().filter(|pos| !used.contains(pos)).collect()
}

/// Concatenates the letters at the leftover positions, dropping blank cells.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Position, parse_letter_grid};
/// use wordsearch_solver::{MatchResult, leftover_letters};
///
/// let grid = parse_letter_grid("hix\nyoz\nabc");
/// let hi = MatchResult::new(vec![Position::new(0, 0), Position::new(1, 0)]);
/// let abc = MatchResult::new((0..3).map(|x| Position::new(x, 2)).collect());
/// assert_eq!(leftover_letters(&grid, [&hi, &abc]), "xyoz");
/// ```
#[must_use]
pub fn leftover_letters<'a, I>(grid: &LetterGrid, matches: I) -> String
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    leftover_positions(grid, matches)
        .into_iter()
        .map(|pos| grid[pos])
        .filter(|&letter| letter != ' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wordsearch_core::{Grid, parse_letter_grid};

    use super::*;

    #[test]
    fn test_no_matches_leaves_everything() {
        let grid = parse_letter_grid("ab\ncd");
        let none: [&MatchResult; 0] = [];
        assert_eq!(leftover_positions(&grid, none).len(), 4);
        assert_eq!(leftover_letters(&grid, none), "abcd");
    }

    #[test]
    fn test_blank_cells_are_dropped() {
        // The short second line is padded with blanks
        let grid = parse_letter_grid("abc\nd\nefg");
        let none: [&MatchResult; 0] = [];
        assert_eq!(leftover_positions(&grid, none).len(), 9);
        assert_eq!(leftover_letters(&grid, none), "abcdefg");
    }

    #[test]
    fn test_overlapping_matches() {
        let grid = parse_letter_grid("abc\ndef\nghi");
        let row = MatchResult::new((0..3).map(|x| Position::new(x, 0)).collect());
        let column = MatchResult::new((0..3).map(|y| Position::new(0, y)).collect());
        assert_eq!(leftover_letters(&grid, [&row, &column]), "efhi");
    }

    proptest! {
        #[test]
        fn leftovers_and_matches_partition_grid(
            n in 1usize..8,
            picks in prop::collection::vec((0usize..8, 0usize..8), 0..20),
        ) {
            let grid = Grid::from_fn(n, n, |_| 'x');
            let matches = picks
                .chunks(3)
                .map(|chunk| {
                    MatchResult::new(
                        chunk
                            .iter()
                            .map(|&(x, y)| Position::new(x % n, y % n))
                            .collect(),
                    )
                })
                .collect::<Vec<_>>();
            let used = matches
                .iter()
                .flat_map(MatchResult::positions)
                .copied()
                .collect::<BTreeSet<_>>();
            let leftover = leftover_positions(&grid, &matches);

            prop_assert_eq!(leftover.len() + used.len(), n * n);
            prop_assert!(leftover.iter().all(|pos| !used.contains(pos)));
            prop_assert!(leftover.windows(2).all(|pair| (pair[0].y(), pair[0].x()) < (pair[1].y(), pair[1].x())));
        }
    }
}
