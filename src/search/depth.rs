use std::collections::BTreeMap;
use std::sync::{Condvar, Mutex};

////////////////////////////////////////////////////////////////////////////////

/// Per-depth in-flight accounting for the breadth-first barrier. A state
/// registers when it is enqueued and finishes once its expansion is fully
/// published; the boundary advances past a depth only after its count
/// drains to zero, so depth `d + 1` bookkeeping never begins while depth-`d`
/// work is still running.
///
/// Children are registered before their parent finishes, which is what
/// makes a drained count final: no new state at that depth can appear
/// afterwards.
pub(crate) struct DepthTracker {
    inner: Mutex<Levels>,
    boundary_moved: Condvar,
}

#[derive(Default)]
struct Levels {
    in_flight: BTreeMap<usize, usize>,
    registered: BTreeMap<usize, usize>,

    /// Every depth below this has fully drained.
    boundary: usize,

    /// A worker died; nobody may block on the barrier any more.
    aborted: bool,
}

impl DepthTracker {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Levels::default()),
            boundary_moved: Condvar::new(),
        }
    }

    pub fn register(&self, depth: usize) {
        let mut levels = self.inner.lock().unwrap();
        *levels.in_flight.entry(depth).or_default() += 1;
        *levels.registered.entry(depth).or_default() += 1;
    }

    /// Marks one depth-`depth` state fully processed and returns the
    /// `(depth, expanded)` boundaries this call crossed, in order.
    pub fn finish(&self, depth: usize) -> Vec<(usize, usize)> {
        let mut levels = self.inner.lock().unwrap();

        let remaining = levels
            .in_flight
            .get_mut(&depth)
            .expect("finish without register");
        *remaining -= 1;
        if *remaining == 0 {
            levels.in_flight.remove(&depth);
        }

        // the boundary may advance up to the shallowest depth still in
        // flight, or past everything ever registered once nothing is
        let limit = match levels.in_flight.keys().next() {
            Some(&shallowest) => shallowest,
            None => levels
                .registered
                .keys()
                .next_back()
                .map_or(levels.boundary, |&deepest| deepest + 1),
        };

        let mut crossed = Vec::new();
        while levels.boundary < limit {
            let done = levels.boundary;
            let expanded = levels.registered.remove(&done).unwrap_or(0);
            crossed.push((done, expanded));
            levels.boundary += 1;
        }
        if !crossed.is_empty() {
            self.boundary_moved.notify_all();
        }
        crossed
    }

    /// Blocks until every state shallower than `depth` has finished, or
    /// the barrier is torn down by an abort.
    pub fn wait_for(&self, depth: usize) {
        let mut levels = self.inner.lock().unwrap();
        while !levels.aborted && levels.boundary < depth {
            levels = self.boundary_moved.wait(levels).unwrap();
        }
    }

    /// A dying worker will never finish its state; release everyone still
    /// waiting on it so the run can tear down.
    pub fn abort(&self) {
        self.inner.lock().unwrap().aborted = true;
        self.boundary_moved.notify_all();
    }
}

////////////////////////////////////////////////////////////////////////////////
