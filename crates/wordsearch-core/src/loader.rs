//! Building the letter grid and its parallel coordinate grid.
//!
//! A puzzle file holds one puzzle row per line. Lines may differ in length and
//! leading or interior spaces are significant, so the text is padded into an
//! `N x N` grid where `N` is the larger of the longest line and the number of
//! lines.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Position, coordinate_grid, parse_letter_grid};
//!
//! let letters = parse_letter_grid("AbC\nd f");
//! assert_eq!(letters.width(), 3);
//! assert_eq!(letters.height(), 3);
//! assert_eq!(letters[Position::new(0, 0)], 'a');
//! assert_eq!(letters[Position::new(1, 1)], ' ');
//! assert_eq!(letters[Position::new(2, 2)], ' ');
//!
//! let coordinates = coordinate_grid(&letters);
//! assert_eq!(coordinates[Position::new(2, 1)], Some(Position::new(2, 1)));
//! ```

use std::{convert::Infallible, fs, path::Path, str::FromStr};

use crate::{Blank as _, Grid, GridError, Position};

/// A square grid of lowercase letters; blank cells hold a single space.
pub type LetterGrid = Grid<char>;

/// A grid whose cell at `(x, y)` holds `Some((x, y))`.
///
/// Transforms pad ragged rows with `None`, which marks a cell with no
/// source position.
pub type CoordinateGrid = Grid<Option<Position>>;

/// Reads a puzzle file into a square [`LetterGrid`].
///
/// # Errors
///
/// Returns [`GridError::NotFound`] if `path` is not an existing regular file,
/// and [`GridError::Io`] if it cannot be read as UTF-8 text.
pub fn load_letter_grid<P>(path: P) -> Result<LetterGrid, GridError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.is_file() {
        return Err(GridError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_letter_grid(&text);
    log::debug!(
        "loaded {}x{} puzzle grid from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// Parses puzzle text into a square [`LetterGrid`].
///
/// Line terminators are removed but lines are not trimmed. Every character is
/// lowercased; whitespace characters and cells past the end of a short line
/// become a single space.
///
/// Each cell holds exactly one `char`. A character whose lowercase form is
/// several characters keeps only the first of them, so `'İ'` becomes `'i'`
/// and the grid stays aligned with the columns of the text.
#[must_use]
pub fn parse_letter_grid(text: &str) -> LetterGrid {
    let lines = text.lines().map(|line| line.chars().collect::<Vec<_>>()).collect::<Vec<_>>();
    let width = lines.iter().map(Vec::len).max().unwrap_or(0);
    let size = width.max(lines.len());

    Grid::from_fn(size, size, |pos| {
        lines
            .get(pos.y())
            .and_then(|line| line.get(pos.x()))
            .map_or_else(char::blank, |&ch| normalize(ch))
    })
}

impl FromStr for LetterGrid {
    type Err = Infallible;

    /// Parses puzzle text with the rules of [`parse_letter_grid`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_letter_grid(s))
    }
}

fn normalize(ch: char) -> char {
    if ch.is_blank() {
        return char::blank();
    }
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Builds the coordinate grid co-indexed with `grid`.
///
/// The result has the same shape, and the cell at `(x, y)` holds
/// `Some(Position::new(x, y))`.
#[must_use]
pub fn coordinate_grid<T>(grid: &Grid<T>) -> CoordinateGrid {
    Grid::from_fn(grid.width(), grid.height(), Some)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

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
    fn test_parse_square_puzzle() {
        let grid = parse_letter_grid(PUZZLE);
        assert_eq!(grid.width(), 14);
        assert_eq!(grid.height(), 14);

        for (line, row) in PUZZLE.lines().zip(grid.rows()) {
            assert_eq!(line.chars().collect::<Vec<_>>(), row);
        }
        assert_eq!(grid[Position::new(13, 0)], '+');
        assert_eq!(grid[Position::new(0, 13)], '-');
    }

    #[test]
    fn test_parse_pads_to_square() {
        // Wider than tall: extra rows are blank
        let grid = parse_letter_grid("abcd\nef");
        assert_eq!((grid.width(), grid.height()), (4, 4));
        assert_eq!(grid.row(1), &['e', 'f', ' ', ' ']);
        assert!(grid.row(3).iter().all(|&ch| ch == ' '));

        // Taller than wide: extra columns are blank
        let grid = parse_letter_grid("a\nb\nc");
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.row(2), &['c', ' ', ' ']);
    }

    #[test]
    fn test_parse_keeps_leading_spaces_and_lowercases() {
        let grid = parse_letter_grid(" AB\n\tcD");
        assert_eq!(grid.row(0), &[' ', 'a', 'b']);
        assert_eq!(grid.row(1), &[' ', 'c', 'd']);
    }

    #[test]
    fn test_multi_char_lowercase_keeps_one_cell() {
        // 'İ' lowercases to "i\u{307}"; the cell keeps the base letter only
        let grid = parse_letter_grid("İx\nab");
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.row(0), &['i', 'x']);
    }

    #[test]
    fn test_from_str_matches_parse() {
        let grid: LetterGrid = "Ab\ncd".parse().unwrap();
        assert_eq!(grid, parse_letter_grid("ab\ncd"));
    }

    #[test]
    fn test_parse_empty_text() {
        let grid = parse_letter_grid("");
        assert!(grid.is_empty());
        assert!(grid.is_square());
    }

    #[test]
    fn test_coordinate_grid_pairs_column_and_row() {
        let grid = parse_letter_grid(PUZZLE);
        let coordinates = coordinate_grid(&grid);
        assert_eq!(coordinates.width(), 14);
        assert_eq!(coordinates.height(), 14);
        for pos in grid.positions() {
            assert_eq!(coordinates[pos], Some(pos));
        }
        assert_eq!(coordinates.row(6)[4], Some(Position::new(4, 6)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_letter_grid("/not/a/path.txt").unwrap_err();
        assert!(matches!(err, GridError::NotFound { .. }));
    }

    #[test]
    fn test_load_directory_is_not_found() {
        let err = load_letter_grid(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, GridError::NotFound { path } if path == std::env::temp_dir()));
    }

    #[test]
    fn test_load_file() {
        let path: PathBuf =
            std::env::temp_dir().join(format!("wordsearch-core-load-{}.txt", std::process::id()));
        fs::write(&path, "ab\ncd\n").unwrap();
        let grid = load_letter_grid(&path);
        fs::remove_file(&path).unwrap();

        let grid = grid.unwrap();
        assert_eq!(grid.to_string(), "ab\ncd");
    }
}
