//! Lazy generation of pickup/delivery action orderings.
//!
//! For `n` packages there are `2n` actions (one pickup and one delivery per
//! package). [`all_orderings`] enumerates every permutation of those actions;
//! [`feasible_orderings`] enumerates only the order-feasible ones directly by
//! backtracking, skipping the factorial blow-up of generate-then-filter while
//! covering the same effective search space.

use serde::{Deserialize, Serialize};

/// Whether a step collects or delivers its package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Collect the package at its pickup location.
    Pickup,
    /// Drop the package at its delivery location.
    Delivery,
}

/// One action in a candidate ordering, referring to a package by its index in
/// the input list.
///
/// Pairing pickups to deliveries by index keeps equal-valued packages
/// distinct, so each delivery always matches its own pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Index of the package in the input list.
    pub package: usize,
    /// Pickup or delivery.
    pub kind: StepKind,
}

impl Step {
    /// A pickup step for the package at `index`.
    pub fn pickup(index: usize) -> Self {
        Self {
            package: index,
            kind: StepKind::Pickup,
        }
    }

    /// A delivery step for the package at `index`.
    pub fn delivery(index: usize) -> Self {
        Self {
            package: index,
            kind: StepKind::Delivery,
        }
    }
}

/// The `2n` actions for `n` packages in canonical order:
/// `[Pickup(0), Delivery(0), Pickup(1), Delivery(1), ...]`.
pub fn base_steps(num_packages: usize) -> Vec<Step> {
    let mut steps = Vec::with_capacity(num_packages * 2);
    for i in 0..num_packages {
        steps.push(Step::pickup(i));
        steps.push(Step::delivery(i));
    }
    steps
}

/// Lazy iterator over every permutation of `0..len`, using Heap's algorithm.
///
/// Yields `len!` index vectors; a length of zero yields the single empty
/// permutation. Permutations are produced by single in-place swaps, so each
/// `next` call is O(1) apart from cloning the output.
pub struct Permutations {
    items: Vec<usize>,
    counters: Vec<usize>,
    depth: usize,
    started: bool,
}

impl Permutations {
    /// Creates a permutation iterator over `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            items: (0..len).collect(),
            counters: vec![0; len],
            depth: 1,
            started: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }
        while self.depth < self.items.len() {
            if self.counters[self.depth] < self.depth {
                let other = if self.depth % 2 == 0 {
                    0
                } else {
                    self.counters[self.depth]
                };
                self.items.swap(other, self.depth);
                self.counters[self.depth] += 1;
                self.depth = 1;
                return Some(self.items.clone());
            }
            self.counters[self.depth] = 0;
            self.depth += 1;
        }
        None
    }
}

/// Every ordering of the `2n` actions for `n` packages, lazily, without any
/// feasibility filtering.
///
/// # Examples
///
/// ```
/// use van_routing::sequence::all_orderings;
///
/// // one package: [pick, drop] and [drop, pick]
/// assert_eq!(all_orderings(1).count(), 2);
/// // empty package set: the single trivial ordering
/// assert_eq!(all_orderings(0).count(), 1);
/// ```
pub fn all_orderings(num_packages: usize) -> impl Iterator<Item = Vec<Step>> {
    let steps = base_steps(num_packages);
    Permutations::new(steps.len()).map(move |perm| perm.iter().map(|&i| steps[i]).collect())
}

/// Lazy backtracking iterator over exactly the order-feasible orderings.
///
/// Extends a partial ordering one step at a time, only ever appending a
/// pickup for a package not yet picked or a delivery for a package picked but
/// not yet dropped, and backtracks when a branch is exhausted. Orderings come
/// out in lexicographic order over the canonical action order of
/// [`base_steps`]; this enumeration order is stable and part of the
/// optimizer's tie-breaking contract.
///
/// Capacity is not consulted here; that is the evaluator's concern.
pub struct FeasibleOrderings {
    num_actions: usize,
    sequence: Vec<Step>,
    picked: Vec<bool>,
    dropped: Vec<bool>,
    // Next action code (package * 2 + kind) to try at each depth.
    next_choice: Vec<usize>,
    exhausted: bool,
}

impl FeasibleOrderings {
    fn new(num_packages: usize) -> Self {
        let num_actions = num_packages * 2;
        Self {
            num_actions,
            sequence: Vec::with_capacity(num_actions),
            picked: vec![false; num_packages],
            dropped: vec![false; num_packages],
            next_choice: vec![0; num_actions + 1],
            exhausted: false,
        }
    }

    fn decode(code: usize) -> Step {
        if code % 2 == 0 {
            Step::pickup(code / 2)
        } else {
            Step::delivery(code / 2)
        }
    }

    fn can_apply(&self, step: Step) -> bool {
        match step.kind {
            StepKind::Pickup => !self.picked[step.package],
            StepKind::Delivery => self.picked[step.package] && !self.dropped[step.package],
        }
    }

    fn apply(&mut self, step: Step) {
        match step.kind {
            StepKind::Pickup => self.picked[step.package] = true,
            StepKind::Delivery => self.dropped[step.package] = true,
        }
        self.sequence.push(step);
    }

    /// Undoes the last step; returns `false` when the sequence is empty.
    fn retreat(&mut self) -> bool {
        match self.sequence.pop() {
            Some(step) => {
                match step.kind {
                    StepKind::Pickup => self.picked[step.package] = false,
                    StepKind::Delivery => self.dropped[step.package] = false,
                }
                true
            }
            None => false,
        }
    }
}

impl Iterator for FeasibleOrderings {
    type Item = Vec<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        loop {
            if self.sequence.len() == self.num_actions {
                let complete = self.sequence.clone();
                if !self.retreat() {
                    self.exhausted = true;
                }
                return Some(complete);
            }
            let depth = self.sequence.len();
            let mut code = self.next_choice[depth];
            let mut extended = false;
            while code < self.num_actions {
                let step = Self::decode(code);
                if self.can_apply(step) {
                    self.next_choice[depth] = code + 1;
                    self.next_choice[depth + 1] = 0;
                    self.apply(step);
                    extended = true;
                    break;
                }
                code += 1;
            }
            if !extended && !self.retreat() {
                self.exhausted = true;
                return None;
            }
        }
    }
}

/// Exactly the order-feasible orderings for `n` packages, lazily.
///
/// # Examples
///
/// ```
/// use van_routing::sequence::feasible_orderings;
///
/// // (2n)! / 2^n orderings keep every pickup ahead of its delivery
/// assert_eq!(feasible_orderings(2).count(), 6);
/// ```
pub fn feasible_orderings(num_packages: usize) -> FeasibleOrderings {
    FeasibleOrderings::new(num_packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::is_order_feasible;
    use std::collections::HashSet;

    #[test]
    fn test_base_steps() {
        let steps = base_steps(2);
        assert_eq!(
            steps,
            vec![
                Step::pickup(0),
                Step::delivery(0),
                Step::pickup(1),
                Step::delivery(1),
            ]
        );
    }

    #[test]
    fn test_permutations_counts() {
        assert_eq!(Permutations::new(0).count(), 1);
        assert_eq!(Permutations::new(1).count(), 1);
        assert_eq!(Permutations::new(3).count(), 6);
        assert_eq!(Permutations::new(4).count(), 24);
    }

    #[test]
    fn test_permutations_distinct() {
        let seen: HashSet<Vec<usize>> = Permutations::new(4).collect();
        assert_eq!(seen.len(), 24);
        for perm in &seen {
            let mut sorted = perm.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_all_orderings_empty() {
        let all: Vec<_> = all_orderings(0).collect();
        assert_eq!(all, vec![Vec::new()]);
    }

    #[test]
    fn test_all_orderings_count() {
        // 2 packages: 4! = 24 action permutations
        assert_eq!(all_orderings(2).count(), 24);
    }

    #[test]
    fn test_feasible_orderings_counts() {
        assert_eq!(feasible_orderings(0).count(), 1);
        assert_eq!(feasible_orderings(1).count(), 1);
        assert_eq!(feasible_orderings(2).count(), 6);
        assert_eq!(feasible_orderings(3).count(), 90);
    }

    #[test]
    fn test_feasible_orderings_lexicographic_first() {
        // first ordering follows the canonical action order
        let first = feasible_orderings(2).next().unwrap();
        assert_eq!(first, base_steps(2));
    }

    #[test]
    fn test_feasible_matches_filtered_permutations() {
        for n in 0..=3 {
            let direct: HashSet<Vec<Step>> = feasible_orderings(n).collect();
            let filtered: HashSet<Vec<Step>> = all_orderings(n)
                .filter(|seq| is_order_feasible(seq, n))
                .collect();
            assert_eq!(direct, filtered);
        }
    }

    #[test]
    fn test_feasible_orderings_all_valid() {
        for seq in feasible_orderings(3) {
            assert!(is_order_feasible(&seq, 3));
            assert_eq!(seq.len(), 6);
        }
    }
}
