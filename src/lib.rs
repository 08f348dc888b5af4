//! Fills crossword grids from a word list.
//!
//! A [`Grid`] holds the structure, [`parse_slots`] finds its word slots,
//! and a [`Puzzle`] records how the slots cross. The [`Solver`] narrows
//! each slot's candidate words by node and arc consistency, then runs a
//! heuristic backtracking search. [`render`] writes a finished assignment
//! back onto the grid.

pub mod grid;
pub mod parse;
pub mod puzzle;
pub mod render;
pub mod solver;
pub mod wordlist;

pub use grid::{Direction, Grid, GridError};
pub use parse::{parse_slots, Slot, MIN_SLOT_LENGTH};
pub use puzzle::Puzzle;
pub use render::render;
pub use solver::{solve, Assignment, Solver};
pub use wordlist::{Wordlist, WordlistError};

#[cfg(test)]
mod tests {
    use crate::{render, solve, Grid, Puzzle, Wordlist};

    #[test]
    fn grid_to_filled_grid() {
        let grid = Grid::square(String::from(
            "
___
**_
**_
",
        ))
        .unwrap();
        let wordlist = Wordlist::from_text("cat\ntar\ntax");

        let puzzle = Puzzle::new(grid);
        let solution = solve(&puzzle, &wordlist).unwrap();

        assert_eq!(
            "C A T\n\n* * A\n\n* * R\n",
            format!("{}", render(&puzzle, &solution))
        );
    }

    #[test]
    fn ring_of_blocked_cells_fills() {
        let grid = Grid::square(String::from(
            "
____
_**_
_**_
____
",
        ))
        .unwrap();
        let wordlist = Wordlist::from_text("trap\npans\nsods\ntoss");

        let puzzle = Puzzle::new(grid);
        let solution = solve(&puzzle, &wordlist).expect("the ring should fill");

        assert_eq!(4, solution.len());
        for slot in puzzle.variables() {
            let word = &solution[slot];
            assert_eq!(slot.length, word.len());
            for neighbor in puzzle.neighbors(*slot) {
                let (ix, iy) = puzzle.overlap(*slot, *neighbor).unwrap();
                assert_eq!(word.as_bytes()[ix], solution[neighbor].as_bytes()[iy]);
            }
        }
    }
}
