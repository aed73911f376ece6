use std::collections::BTreeSet;

use wordsearch_core::{LetterGrid, Position};
use wordsearch_solver::MatchResult;

/// Renders `grid` one row per line, with every cell covered by a match in
/// uppercase.
pub(crate) fn highlight(grid: &LetterGrid, matches: &BTreeSet<MatchResult>) -> String {
    let covered = matches
        .iter()
        .flat_map(MatchResult::positions)
        .copied()
        .collect::<BTreeSet<_>>();

    let mut out = String::with_capacity(grid.height() * (grid.width() * 2 + 1));
    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        for (x, &letter) in row.iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            if covered.contains(&Position::new(x, y)) {
                out.extend(letter.to_uppercase());
            } else {
                out.push(letter);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use wordsearch_core::parse_letter_grid;

    use super::*;

    #[test]
    fn test_highlight() {
        let grid = parse_letter_grid("abc\ndef\nghi");
        let column = MatchResult::new((0..3).map(|y| Position::new(0, y)).collect());
        let matches = BTreeSet::from([column]);
        assert_eq!(highlight(&grid, &matches), "A b c\nD e f\nG h i");
    }

    #[test]
    fn test_highlight_without_matches() {
        let grid = parse_letter_grid("ab\ncd");
        assert_eq!(highlight(&grid, &BTreeSet::new()), "a b\nc d");
    }
}
