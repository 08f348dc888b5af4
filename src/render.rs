use crate::grid::Grid;
use crate::puzzle::Puzzle;
use crate::solver::Assignment;

/// Writes a complete assignment onto a copy of the puzzle's grid, one
/// letter per cell.
pub fn render(puzzle: &Puzzle, assignment: &Assignment) -> Grid {
    let grid = puzzle.grid();
    let mut bytes = grid.contents.clone().into_bytes();

    for (slot, word) in assignment {
        for (k, letter) in word.bytes().enumerate() {
            let (row, col) = slot.cell(k);
            bytes[row * grid.width() + col] = letter;
        }
    }

    Grid {
        contents: unsafe { String::from_utf8_unchecked(bytes) },
        ..*grid
    }
}
