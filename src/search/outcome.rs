use std::fmt::Display;

use crate::state::{CheckSet, State};

use super::log::SearchLog;

////////////////////////////////////////////////////////////////////////////////

/// Result of one run. Exhausting the state space without a win is a normal
/// outcome, not an error.
#[derive(Clone, Debug)]
pub enum Outcome {
    Solved(Solution),
    Exhausted,
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            Outcome::Exhausted => None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// The terminal state reached first in breadth-first order; its history is
/// the winning check sequence and is minimal in turns.
#[derive(Clone, Debug)]
pub struct Solution {
    pub state: State,
    pub log: SearchLog,
}

impl Solution {
    pub fn turns(&self) -> usize {
        self.state.depth()
    }

    pub fn checks(&self) -> &[CheckSet] {
        self.state.history()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "caught in {} turns:", self.turns())?;
        for checks in self.checks() {
            let nodes: Vec<String> = checks.iter().map(|node| node.to_string()).collect();
            write!(f, " [{}]", nodes.join(", "))?;
        }
        Ok(())
    }
}
