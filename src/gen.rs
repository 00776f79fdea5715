use std::collections::HashSet;

use crate::canon::{Canonicalizer, HashValue};
use crate::state::{CheckSet, State};
use crate::topology::Topology;

////////////////////////////////////////////////////////////////////////////////

/// Strategy producing the successors of one state under a per-turn check
/// budget. The engine treats it as opaque; [`CheckSearch`] is the reference
/// implementation.
pub trait NeighborFn: Fn(&State, usize) -> Vec<State> + Send + Sync {}

impl<F> NeighborFn for F where F: Fn(&State, usize) -> Vec<State> + Send + Sync {}

////////////////////////////////////////////////////////////////////////////////

/// Recursive search over the check-subsets worth spending a turn on.
///
/// Enumerating every subset of up to `budget` nodes is hopeless on larger
/// boards. The only subsets that change the next frontier are exact
/// predecessor sets of some node, so the recursion extends the running
/// check-set by one such set at a time, as long as the budget covers it. A
/// per-recursion-point set of subset fingerprints keeps two insertion
/// orders of the same checks from being explored twice.
pub struct CheckSearch<'a> {
    topology: &'a Topology,
    canon: &'a Canonicalizer,
}

impl<'a> CheckSearch<'a> {
    pub fn new(topology: &'a Topology, canon: &'a Canonicalizer) -> Self {
        Self { topology, canon }
    }

    /// All canonically distinct successors of `state`. With a zero budget
    /// this degenerates to plain propagation.
    ///
    /// # Panics
    ///
    /// Panics when handed a terminal state: expanding one would corrupt the
    /// solution bookkeeping upstream.
    pub fn successors(&self, state: &State, budget: usize) -> Vec<State> {
        assert!(!state.is_terminal(), "expanding a terminal state");

        let mut leaves = Vec::new();
        self.descend(state, budget, CheckSet::new(), &mut leaves);

        let mut seen = HashSet::new();
        leaves.retain(|leaf| seen.insert(self.canon.hash(leaf)));
        leaves
    }

    fn descend(&self, state: &State, checks_left: usize, made: CheckSet, out: &mut Vec<State>) {
        if checks_left > 0 {
            let removal = state.how_to_remove(self.topology, &made);
            let mut tried: HashSet<HashValue> = HashSet::new();
            let mut extended = false;
            for sources in &removal {
                // the predecessor sets exclude checked nodes, so the whole
                // set still has to fit in the remaining budget
                let need = sources.len();
                if need == 0 || need > checks_left {
                    continue;
                }
                let mut next = made.clone();
                next.extend(sources.iter().copied());
                if !tried.insert(self.canon.subset_hash(&next)) {
                    continue;
                }
                extended = true;
                self.descend(state, checks_left - need, next, out);
            }
            if extended {
                return;
            }
        }
        out.push(state.propagate_with_checks(self.topology, made));
    }
}

////////////////////////////////////////////////////////////////////////////////
