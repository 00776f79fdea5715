use std::collections::HashSet;

use crate::canon::Canonicalizer;
use crate::gen::NeighborFn;
use crate::state::State;
use crate::topology::Topology;

use super::config::Config;
use super::context::SearchContext;
use super::error::SearchError;
use super::outcome::{Outcome, Solution};
use super::worker;

////////////////////////////////////////////////////////////////////////////////

/// Breadth-first frontier engine: a fixed pool of workers shares one queue,
/// deduplicates successors through the canonical hash set and stops once a
/// terminal state is recorded or the frontier runs dry.
pub struct Engine {
    topology: Topology,
    canon: Canonicalizer,
    config: Config,
}

impl Engine {
    /// Fails fast on a broken topology or an empty worker pool; nothing is
    /// spawned until the configuration is known to be sound.
    pub fn new(topology: Topology, config: Config) -> Result<Self, SearchError> {
        topology.validate()?;
        if config.workers == 0 {
            return Err(SearchError::NoWorkers);
        }
        let canon = Canonicalizer::new(&topology);
        Ok(Self {
            topology,
            canon,
            config,
        })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn canonicalizer(&self) -> &Canonicalizer {
        &self.canon
    }

    /// One full search from the all-true base state.
    pub fn solve(&self, gen: impl NeighborFn) -> Outcome {
        self.run(State::full(self.topology.nodes()), &gen)
    }

    /// One fully reset search per distinct configuration in the propagation
    /// cycle of the all-true state, keeping the shortest win. Boards whose
    /// "fox anywhere" start drifts through several equivalent shapes get
    /// each of them as a base case.
    pub fn solve_all(&self, gen: impl NeighborFn) -> Outcome {
        let mut best: Option<Solution> = None;
        for base in self.base_cycle() {
            if let Outcome::Solved(solution) = self.run(base, &gen) {
                let better = best
                    .as_ref()
                    .is_none_or(|current| solution.turns() < current.turns());
                if better {
                    best = Some(solution);
                }
            }
        }
        match best {
            Some(solution) => Outcome::Solved(solution),
            None => Outcome::Exhausted,
        }
    }

    fn base_cycle(&self) -> Vec<State> {
        let mut seen = HashSet::new();
        let mut bases = Vec::new();
        let mut state = State::full(self.topology.nodes());
        while !state.is_terminal() && seen.insert(self.canon.hash(&state)) {
            bases.push(state.clone());
            state = state.propagate(&self.topology);
        }
        bases
    }

    fn run(&self, base: State, gen: &impl NeighborFn) -> Outcome {
        let ctx = SearchContext::new();
        let hash = self.canon.hash(&base);
        ctx.seed(base, hash);

        std::thread::scope(|scope| {
            for _ in 0..self.config.workers {
                scope.spawn(|| worker::run(&ctx, &self.canon, gen, &self.config));
            }

            // blocks until the queue drains or a worker dies; either way
            // every worker gets exactly one stop message
            let _ = ctx.done_rx.recv();
            for _ in 0..self.config.workers {
                let _ = ctx.stop_tx.send(());
            }
        });

        let log = ctx.log();
        match ctx.take_solution() {
            Some(state) => Outcome::Solved(Solution { state, log }),
            None => Outcome::Exhausted,
        }
    }
}
