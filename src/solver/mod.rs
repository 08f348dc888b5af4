mod consistency;
mod search;

use std::time::Instant;

use log::info;
use rustc_hash::FxHashMap;

use crate::parse::Slot;
use crate::puzzle::Puzzle;
use crate::wordlist::Wordlist;

/// A mapping from slot to the word written into it.
pub type Assignment = FxHashMap<Slot, String>;

/// Constraint-propagating backtracking solver.
///
/// Each slot carries a domain of candidate words, seeded from the full
/// vocabulary and narrowed by node and arc consistency before the search
/// runs. Domains stay sorted, so equal inputs always solve identically.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    domains: FxHashMap<Slot, Vec<String>>,
    nodes: u64,
}

impl<'a> Solver<'a> {
    pub fn new(puzzle: &'a Puzzle, wordlist: &Wordlist) -> Solver<'a> {
        let domains = puzzle
            .variables()
            .iter()
            .map(|slot| (*slot, wordlist.words().to_vec()))
            .collect();

        Solver {
            puzzle,
            domains,
            nodes: 0,
        }
    }

    /// The candidate words currently left for `slot`.
    pub fn domain(&self, slot: Slot) -> &[String] {
        self.domains.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Narrows every domain by node and arc consistency, then searches for
    /// a complete consistent assignment. `None` means the puzzle has no
    /// solution under this vocabulary.
    pub fn solve(&mut self) -> Option<Assignment> {
        let start = Instant::now();
        self.nodes = 0;

        self.enforce_node_consistency();
        if !self.ac3() {
            info!(
                "propagation emptied a domain after {:?}, no fill exists",
                start.elapsed()
            );
            return None;
        }

        let mut assignment = Assignment::default();
        let result = self.backtrack(&mut assignment);
        match &result {
            Some(_) => info!(
                "filled {} slots in {:?} over {} search nodes",
                self.puzzle.variables().len(),
                start.elapsed(),
                self.nodes
            ),
            None => info!(
                "exhausted the search after {:?} and {} nodes",
                start.elapsed(),
                self.nodes
            ),
        }
        result
    }
}

/// One-shot convenience over [`Solver::solve`].
pub fn solve(puzzle: &Puzzle, wordlist: &Wordlist) -> Option<Assignment> {
    Solver::new(puzzle, wordlist).solve()
}
