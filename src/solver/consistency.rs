use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashSet;

use crate::parse::Slot;

use super::Solver;

impl Solver<'_> {
    /// Drops every candidate whose length does not match its slot.
    pub fn enforce_node_consistency(&mut self) {
        for (slot, domain) in self.domains.iter_mut() {
            domain.retain(|word| word.len() == slot.length);
        }
    }

    /// Makes `x` arc consistent with `y`: drops the words of `x` that no
    /// word of `y` agrees with at the crossing. Returns whether the domain
    /// of `x` shrank. Non-crossing pairs are left alone.
    pub fn revise(&mut self, x: Slot, y: Slot) -> bool {
        let (ix, iy) = match self.puzzle.overlap(x, y) {
            Some(overlap) => overlap,
            None => return false,
        };

        let supported: FxHashSet<u8> = self.domains[&y]
            .iter()
            .map(|word| word.as_bytes()[iy])
            .collect();

        let domain = self.domains.get_mut(&x).unwrap();
        let before = domain.len();
        domain.retain(|word| supported.contains(&word.as_bytes()[ix]));
        domain.len() != before
    }

    /// AC-3 over every crossing of the puzzle, with a FIFO worklist.
    /// Returns false as soon as a revision empties a domain, or if any
    /// domain was already empty when the worklist ran dry.
    pub fn ac3(&mut self) -> bool {
        let mut queue: VecDeque<(Slot, Slot)> = VecDeque::new();
        for x in self.puzzle.variables() {
            for y in self.puzzle.neighbors(*x) {
                queue.push_back((*x, *y));
            }
        }

        while let Some((x, y)) = queue.pop_front() {
            if self.revise(x, y) {
                if self.domains[&x].is_empty() {
                    debug!("nothing fits {:?} once revised against {:?}", x, y);
                    return false;
                }
                for z in self.puzzle.neighbors(x) {
                    if *z != y {
                        queue.push_back((*z, x));
                    }
                }
            }
        }

        // a slot without neighbors is never revised, but node consistency
        // may still have emptied it
        self.domains.values().all(|domain| !domain.is_empty())
    }
}
