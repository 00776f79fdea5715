use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::canon::HashValue;
use crate::state::State;

use super::depth::DepthTracker;
use super::log::{DepthReport, SearchLog};

////////////////////////////////////////////////////////////////////////////////

pub(crate) enum RunSignal {
    /// Outstanding work reached zero.
    Drained,
    /// A worker died mid-expansion.
    Aborted,
}

////////////////////////////////////////////////////////////////////////////////

/// Everything one run shares between the driver and its workers: the work
/// queue, the stop broadcast, the visited set, the solution slot and the
/// depth barrier. Owned by a single solve call and dropped with it, so
/// independent runs reset fully and can coexist.
pub(crate) struct SearchContext {
    pub queue_tx: Sender<State>,
    pub queue_rx: Receiver<State>,
    pub stop_tx: Sender<()>,
    pub stop_rx: Receiver<()>,
    pub done_tx: Sender<RunSignal>,
    pub done_rx: Receiver<RunSignal>,
    pub depth: DepthTracker,
    outstanding: AtomicUsize,
    solved: AtomicBool,
    visited: Mutex<HashSet<HashValue>>,
    solution: Mutex<Option<State>>,
    reports: Mutex<Vec<DepthReport>>,
}

impl SearchContext {
    pub fn new() -> Self {
        let (queue_tx, queue_rx) = unbounded();
        let (stop_tx, stop_rx) = unbounded();
        let (done_tx, done_rx) = unbounded();
        Self {
            queue_tx,
            queue_rx,
            stop_tx,
            stop_rx,
            done_tx,
            done_rx,
            depth: DepthTracker::new(),
            outstanding: AtomicUsize::new(0),
            solved: AtomicBool::new(false),
            visited: Mutex::new(HashSet::new()),
            solution: Mutex::new(None),
            reports: Mutex::new(Vec::new()),
        }
    }

    /// Seeds the run with its base state before any worker starts.
    pub fn seed(&self, base: State, hash: HashValue) {
        self.visited.lock().unwrap().insert(hash);
        self.outstanding.store(1, Ordering::Release);
        self.depth.register(base.depth());
        self.queue_tx.send(base).expect("queue closed before start");
    }

    pub fn solved(&self) -> bool {
        self.solved.load(Ordering::Acquire)
    }

    /// First writer wins; later terminal states are no-ops.
    pub fn record_solution(&self, state: State) {
        let mut slot = self.solution.lock().unwrap();
        if slot.is_none() {
            *slot = Some(state);
            self.solved.store(true, Ordering::Release);
        }
    }

    /// Atomically claims `hash`: true exactly once per canonical state.
    pub fn claim(&self, hash: HashValue) -> bool {
        self.visited.lock().unwrap().insert(hash)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.lock().unwrap().len()
    }

    /// Publishes one successor. The work unit is registered before the
    /// state becomes visible on the queue, so outstanding work can never
    /// drain to zero with an enqueue in flight.
    pub fn enqueue(&self, state: State) {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        self.depth.register(state.depth());
        let _ = self.queue_tx.send(state);
    }

    /// Retires the unit consumed for one dequeued state; the last one
    /// signals the driver.
    pub fn retire(&self) {
        if self.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            let _ = self.done_tx.send(RunSignal::Drained);
        }
    }

    pub fn push_report(&self, report: DepthReport) {
        self.reports.lock().unwrap().push(report);
    }

    pub fn log(&self) -> SearchLog {
        let mut depths = self.reports.lock().unwrap().clone();
        depths.sort_by_key(|report| report.depth);
        SearchLog {
            depths,
            visited_unique: self.visited_count(),
        }
    }

    pub fn take_solution(self) -> Option<State> {
        self.solution.into_inner().unwrap()
    }
}
