use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid contents are not square ({cells} cells)")]
    NotSquare { cells: usize },
    #[error("grid contents have {cells} cells, expected {width}x{height}")]
    WrongDimensions {
        cells: usize,
        width: usize,
        height: usize,
    },
    #[error("grid contents must be ASCII")]
    NotAscii,
}

/// A crossword structure stored row-major: `'*'` cells are blocked,
/// everything else is open. Contents are ASCII, so cells can be addressed
/// by byte.
#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Grid {
    pub(crate) contents: String,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl Grid {
    /// Builds a square grid, ignoring newlines in `contents`.
    pub fn square(contents: String) -> Result<Grid, GridError> {
        let without_newlines: String = contents.chars().filter(|c| *c != '\n').collect();
        if !without_newlines.is_ascii() {
            return Err(GridError::NotAscii);
        }

        let width = (without_newlines.len() as f64).sqrt() as usize;
        if width == 0 || width * width != without_newlines.len() {
            return Err(GridError::NotSquare {
                cells: without_newlines.len(),
            });
        }
        Ok(Grid {
            contents: without_newlines,
            width,
            height: width,
        })
    }

    /// Builds a `width` x `height` grid, ignoring newlines in `contents`.
    pub fn rectangle(contents: String, width: usize, height: usize) -> Result<Grid, GridError> {
        let without_newlines: String = contents.chars().filter(|c| *c != '\n').collect();
        if !without_newlines.is_ascii() {
            return Err(GridError::NotAscii);
        }

        if width == 0 || height == 0 || width * height != without_newlines.len() {
            return Err(GridError::WrongDimensions {
                cells: without_newlines.len(),
                width,
                height,
            });
        }
        Ok(Grid {
            contents: without_newlines,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at (row, col) can hold a letter.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.contents.as_bytes()[row * self.width + col] != b'*'
    }
}

/// Reading direction of a slot. `Across` sorts before `Down`, which fixes
/// the relative order of two slots starting on the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(
                    f,
                    "{}",
                    self.contents.as_bytes()[row * self.width + col] as char
                )?;
                if col != self.width - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;

            if row != self.height - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, GridError};

    #[test]
    fn square_works() {
        let result = Grid::square(String::from(
            "
*_*
___
*_*
",
        ));

        assert!(result.is_ok());

        let grid = result.unwrap();
        assert_eq!(String::from("*_*___*_*"), grid.contents);
        assert_eq!(3, grid.width());
        assert_eq!(3, grid.height());
    }

    #[test]
    fn square_rejects_other_shapes() {
        assert_eq!(
            Grid::square(String::from("********")),
            Err(GridError::NotSquare { cells: 8 })
        );
        assert_eq!(
            Grid::square(String::from("")),
            Err(GridError::NotSquare { cells: 0 })
        );
    }

    #[test]
    fn rectangle_works() {
        let grid = Grid::rectangle(String::from("______"), 3, 2).unwrap();
        assert_eq!(3, grid.width());
        assert_eq!(2, grid.height());

        assert_eq!(
            Grid::rectangle(String::from("______"), 4, 2),
            Err(GridError::WrongDimensions {
                cells: 6,
                width: 4,
                height: 2
            })
        );
        assert_eq!(
            Grid::rectangle(String::from(""), 0, 2),
            Err(GridError::WrongDimensions {
                cells: 0,
                width: 0,
                height: 2
            })
        );
    }

    #[test]
    fn non_ascii_contents_are_rejected() {
        assert_eq!(
            Grid::square(String::from("*é*_*é*_*")),
            Err(GridError::NotAscii)
        );
        assert_eq!(
            Grid::rectangle(String::from("é__"), 3, 1),
            Err(GridError::NotAscii)
        );
    }

    #[test]
    fn is_open_distinguishes_blocked_cells() {
        let grid = Grid::square(String::from("*_*___*_*")).unwrap();

        assert!(!grid.is_open(0, 0));
        assert!(grid.is_open(0, 1));
        assert!(grid.is_open(1, 0));
        assert!(grid.is_open(1, 2));
        assert!(!grid.is_open(2, 2));
    }

    #[test]
    fn display_separates_cells_and_rows() {
        let grid = Grid::square(String::from("ab*cd***_")).unwrap();

        assert_eq!("a b *\n\nc d *\n\n* * _\n", format!("{}", grid));
    }
}
