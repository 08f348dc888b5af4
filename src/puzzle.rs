use rustc_hash::FxHashMap;

use crate::grid::{Direction, Grid};
use crate::parse::{parse_slots, Slot};

/// A grid plus its slots and the crossing structure between them.
/// Immutable once built; the solver only queries it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    slots: Vec<Slot>,
    overlaps: FxHashMap<(Slot, Slot), (usize, usize)>,
    neighbors: FxHashMap<Slot, Vec<Slot>>,
}

impl Puzzle {
    pub fn new(grid: Grid) -> Puzzle {
        let slots = parse_slots(&grid);

        // index every covered cell so crossings can be found by lookup
        let mut cell_lookup: FxHashMap<(Direction, usize, usize), Slot> = FxHashMap::default();
        for slot in &slots {
            for k in 0..slot.length {
                let (row, col) = slot.cell(k);
                cell_lookup.insert((slot.direction, row, col), *slot);
            }
        }

        let mut overlaps = FxHashMap::default();
        let mut neighbors: FxHashMap<Slot, Vec<Slot>> = FxHashMap::default();

        for x in &slots {
            let crossing = match x.direction {
                Direction::Across => Direction::Down,
                Direction::Down => Direction::Across,
            };
            for ix in 0..x.length {
                let (row, col) = x.cell(ix);
                if let Some(y) = cell_lookup.get(&(crossing, row, col)) {
                    let iy = match y.direction {
                        Direction::Across => col - y.col,
                        Direction::Down => row - y.row,
                    };
                    overlaps.insert((*x, *y), (ix, iy));
                    neighbors.entry(*x).or_default().push(*y);
                }
            }
        }

        // a pair of slots crosses in at most one cell, so the lists hold no
        // duplicates; sort them for stable iteration
        for list in neighbors.values_mut() {
            list.sort();
        }

        Puzzle {
            grid,
            slots,
            overlaps,
            neighbors,
        }
    }

    /// Every slot of the puzzle, sorted.
    pub fn variables(&self) -> &[Slot] {
        &self.slots
    }

    /// Slots crossing `slot`, sorted. Empty for an isolated slot.
    pub fn neighbors(&self, slot: Slot) -> &[Slot] {
        self.neighbors.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The shared cell of two crossing slots, as an index into each slot's
    /// word. `None` when the slots do not cross.
    pub fn overlap(&self, a: Slot, b: Slot) -> Option<(usize, usize)> {
        self.overlaps.get(&(a, b)).copied()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
