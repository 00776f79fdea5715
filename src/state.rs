use std::collections::BTreeSet;
use std::fmt::{Debug, Display};

use crate::topology::Topology;

////////////////////////////////////////////////////////////////////////////////

/// Nodes inspected on one turn.
pub type CheckSet = BTreeSet<usize>;

////////////////////////////////////////////////////////////////////////////////

/// One knowledge state of the hunt. `occupancy[i]` stays true while the fox
/// could still be at node `i`; `history` records the checks spent so far,
/// one set per turn. States are value objects: every operation produces a
/// new state and history grows by exactly one check-set per turn.
#[derive(Clone)]
pub struct State {
    occupancy: Vec<bool>,
    history: Vec<CheckSet>,
}

/// History does not matter for equality, only for reconstructing the
/// winning check sequence.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.occupancy == other.occupancy
    }
}

impl Eq for State {}

impl State {
    /// The base state: the fox can be anywhere, nothing spent yet.
    pub fn full(nodes: usize) -> Self {
        Self {
            occupancy: vec![true; nodes],
            history: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_occupancy(occupancy: Vec<bool>) -> Self {
        Self {
            occupancy,
            history: Vec::new(),
        }
    }

    pub fn occupancy(&self) -> &[bool] {
        &self.occupancy
    }

    pub fn history(&self) -> &[CheckSet] {
        &self.history
    }

    /// Turns already played.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Number of nodes the fox could still be at.
    pub fn possible(&self) -> usize {
        self.occupancy.iter().filter(|&&occupied| occupied).count()
    }

    /// The fox is caught once no node is possible any more.
    pub fn is_terminal(&self) -> bool {
        !self.occupancy.iter().any(|&occupied| occupied)
    }

    /// Advances the fox along every edge out of every possible node.
    pub fn propagate(&self, topology: &Topology) -> State {
        let mut next = vec![false; self.occupancy.len()];
        for (node, &occupied) in self.occupancy.iter().enumerate() {
            if !occupied {
                continue;
            }
            for &to in topology.neighbors(node) {
                next[to] = true;
            }
        }
        State {
            occupancy: next,
            history: self.history.clone(),
        }
    }

    /// Advances the fox like [`State::propagate`], except that checked
    /// nodes have just been ruled out and do not spread anywhere. The
    /// check-set is appended to the history of the result.
    pub fn propagate_with_checks(&self, topology: &Topology, checks: CheckSet) -> State {
        let mut next = vec![false; self.occupancy.len()];
        for (node, &occupied) in self.occupancy.iter().enumerate() {
            if !occupied || checks.contains(&node) {
                continue;
            }
            for &to in topology.neighbors(node) {
                next[to] = true;
            }
        }
        let mut history = self.history.clone();
        history.push(checks);
        State {
            occupancy: next,
            history,
        }
    }

    /// For every node, the possible unchecked nodes that can reach it on
    /// the next turn. Checking all of them keeps the fox out of that node;
    /// an empty set means the node is unreachable already.
    pub fn how_to_remove(&self, topology: &Topology, checks: &CheckSet) -> Vec<CheckSet> {
        let mut removal = vec![CheckSet::new(); self.occupancy.len()];
        for (node, &occupied) in self.occupancy.iter().enumerate() {
            if !occupied || checks.contains(&node) {
                continue;
            }
            for &to in topology.neighbors(node) {
                removal[to].insert(node);
            }
        }
        removal
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &occupied in self.occupancy.iter() {
            write!(f, "{}", if occupied { '#' } else { '.' })?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("occupancy", &format!("{}", self))
            .field("history", &self.history)
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////
