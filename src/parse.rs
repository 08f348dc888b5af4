use crate::grid::{Direction, Grid};

/// Shortest run of open cells that counts as a slot. A lone open cell
/// belongs to the crossing run only.
pub const MIN_SLOT_LENGTH: usize = 2;

/// A maximal run of open cells in one direction: the unit a word is
/// assigned to. Ordering is (row, col, direction, length), which gives the
/// solver a stable iteration order over slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    /// Coordinate of this slot's k-th cell.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }
}

/// Extracts every slot from `grid`: maximal horizontal and vertical runs of
/// open cells at least `MIN_SLOT_LENGTH` long, sorted.
pub fn parse_slots(grid: &Grid) -> Vec<Slot> {
    let mut result = vec![];

    for row in 0..grid.height() {
        let mut run_start = None;
        // the col == width sentinel closes a run ending at the edge
        for col in 0..=grid.width() {
            let open = col < grid.width() && grid.is_open(row, col);
            match (open, run_start) {
                (true, None) => run_start = Some(col),
                (false, Some(start)) => {
                    let length = col - start;
                    if length >= MIN_SLOT_LENGTH {
                        result.push(Slot {
                            row,
                            col: start,
                            direction: Direction::Across,
                            length,
                        });
                    }
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    for col in 0..grid.width() {
        let mut run_start = None;
        for row in 0..=grid.height() {
            let open = row < grid.height() && grid.is_open(row, col);
            match (open, run_start) {
                (true, None) => run_start = Some(row),
                (false, Some(start)) => {
                    let length = row - start;
                    if length >= MIN_SLOT_LENGTH {
                        result.push(Slot {
                            row: start,
                            col,
                            direction: Direction::Down,
                            length,
                        });
                    }
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    result.sort();
    result
}
