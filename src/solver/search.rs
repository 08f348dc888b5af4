use std::cmp::Reverse;

use log::debug;
use rustc_hash::FxHashSet;

use crate::parse::Slot;

use super::{Assignment, Solver};

impl Solver<'_> {
    /// True once every slot has a word.
    pub(crate) fn assignment_complete(&self, assignment: &Assignment) -> bool {
        self.puzzle
            .variables()
            .iter()
            .all(|slot| assignment.contains_key(slot))
    }

    /// A partial assignment is consistent when its words are distinct, fit
    /// their slots, and agree letterwise on every filled crossing.
    pub(crate) fn consistent(&self, assignment: &Assignment) -> bool {
        let mut seen = FxHashSet::default();
        for (slot, word) in assignment {
            if word.len() != slot.length || !seen.insert(word) {
                return false;
            }
        }

        for (slot, word) in assignment {
            for neighbor in self.puzzle.neighbors(*slot) {
                if let Some(partner) = assignment.get(neighbor) {
                    let (ix, iy) = self.puzzle.overlap(*slot, *neighbor).unwrap();
                    if word.as_bytes()[ix] != partner.as_bytes()[iy] {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Most constrained slot first: smallest domain, then most neighbors,
    /// then slot order.
    pub(crate) fn select_unassigned_variable(&self, assignment: &Assignment) -> Slot {
        self.puzzle
            .variables()
            .iter()
            .copied()
            .filter(|slot| !assignment.contains_key(slot))
            .min_by_key(|&slot| {
                (
                    self.domains[&slot].len(),
                    Reverse(self.puzzle.neighbors(slot).len()),
                    slot,
                )
            })
            .unwrap()
    }

    /// Least constraining value first: candidates ordered by how many
    /// options they would knock out of unassigned neighboring domains,
    /// alphabetical among equals. Ranked against the live domains on
    /// every call.
    pub(crate) fn order_domain_values(&self, slot: Slot, assignment: &Assignment) -> Vec<String> {
        let neighbors: Vec<Slot> = self
            .puzzle
            .neighbors(slot)
            .iter()
            .copied()
            .filter(|neighbor| !assignment.contains_key(neighbor))
            .collect();

        let mut ranked: Vec<(usize, String)> = self.domains[&slot]
            .iter()
            .map(|word| {
                let eliminated = neighbors
                    .iter()
                    .map(|&neighbor| {
                        let (ix, iy) = self.puzzle.overlap(slot, neighbor).unwrap();
                        self.domains[&neighbor]
                            .iter()
                            .filter(|partner| partner.as_bytes()[iy] != word.as_bytes()[ix])
                            .count()
                    })
                    .sum::<usize>();
                (eliminated, word.clone())
            })
            .collect();

        ranked.sort();
        ranked.into_iter().map(|(_, word)| word).collect()
    }

    /// Depth-first search over the narrowed domains. The one assignment
    /// map is mutated in place: insert before recursing, remove when the
    /// branch dies.
    pub(super) fn backtrack(&mut self, assignment: &mut Assignment) -> Option<Assignment> {
        self.nodes += 1;
        if self.nodes % 10_000 == 0 {
            debug!(
                "{} nodes searched, {} slots assigned",
                self.nodes,
                assignment.len()
            );
        }

        if self.assignment_complete(assignment) {
            return Some(assignment.clone());
        }

        let slot = self.select_unassigned_variable(assignment);
        for word in self.order_domain_values(slot, assignment) {
            assignment.insert(slot, word);
            if self.consistent(assignment) {
                if let Some(solution) = self.backtrack(assignment) {
                    return Some(solution);
                }
            }
            assignment.remove(&slot);
        }

        None
    }
}
