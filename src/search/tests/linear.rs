use std::sync::{Arc, Mutex};

use crate::gen::CheckSearch;
use crate::search::config::{Config, ConfigBuilder};
use crate::search::engine::Engine;
use crate::search::outcome::Outcome;
use crate::topology::Topology;

use super::replay;

////////////////////////////////////////////////////////////////////////////////

#[test]
fn five_holes_one_check() {
    let engine = Engine::new(Topology::line(5), Config::new(1, 2)).unwrap();
    let gen = CheckSearch::new(engine.topology(), engine.canonicalizer());

    let outcome = engine.solve(|state, budget| gen.successors(state, budget));
    let solution = outcome.solution().expect("the five-hole puzzle is winnable");

    // the classic answer: six turns, one check per turn
    assert_eq!(solution.turns(), 6);
    for checks in solution.checks() {
        assert!(checks.len() <= 1);
    }
    assert!(replay(engine.topology(), solution).is_terminal());
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn five_holes_two_checks() {
    let engine = Engine::new(Topology::line(5), Config::new(2, 2)).unwrap();
    let gen = CheckSearch::new(engine.topology(), engine.canonicalizer());

    let outcome = engine.solve(|state, budget| gen.successors(state, budget));
    let solution = outcome.solution().unwrap();

    // checking {1, 3} twice in a row wins, and nothing shorter exists
    assert_eq!(solution.turns(), 2);
    assert!(replay(engine.topology(), solution).is_terminal());
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn depth_boundaries_are_observed_in_order() {
    let crossed = Arc::new(Mutex::new(Vec::new()));
    let sink = crossed.clone();
    let config = ConfigBuilder::new()
        .budget(1)
        .workers(4)
        .on_depth(move |report| sink.lock().unwrap().push(report.clone()))
        .build();

    let engine = Engine::new(Topology::line(5), config).unwrap();
    let gen = CheckSearch::new(engine.topology(), engine.canonicalizer());
    let outcome = engine.solve(|state, budget| gen.successors(state, budget));
    let solution = outcome.solution().unwrap();

    let crossed = crossed.lock().unwrap();
    assert!(!crossed.is_empty());
    for (expected, report) in crossed.iter().enumerate() {
        assert_eq!(report.depth, expected);
        assert!(report.expanded > 0);
    }

    // the run log carries the same boundaries
    assert_eq!(solution.log.depths.len(), crossed.len());
    assert!(solution.log.visited_unique > 0);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn cyclic_base_driver_matches_single_run_on_a_line() {
    // the all-true state of a line propagates onto itself, so the cycle
    // has a single base case and both entry points must agree
    let engine = Engine::new(Topology::line(5), Config::new(1, 2)).unwrap();
    let gen = CheckSearch::new(engine.topology(), engine.canonicalizer());

    let single = engine.solve(|state, budget| gen.successors(state, budget));
    let cyclic = engine.solve_all(|state, budget| gen.successors(state, budget));
    match (single, cyclic) {
        (Outcome::Solved(a), Outcome::Solved(b)) => assert_eq!(a.turns(), b.turns()),
        _ => panic!("both runs must find the win"),
    }
}
