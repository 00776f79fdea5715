mod linear;

use crate::state::State;
use crate::topology::Topology;

use super::outcome::Solution;

////////////////////////////////////////////////////////////////////////////////

/// Independent verification: replay the winning check sequence from the
/// full base state and demand that it actually empties the board.
pub(crate) fn replay(topology: &Topology, solution: &Solution) -> State {
    let mut state = State::full(topology.nodes());
    for checks in solution.checks() {
        state = state.propagate_with_checks(topology, checks.clone());
    }
    state
}
