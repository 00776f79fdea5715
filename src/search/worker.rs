use crossbeam_channel::select;

use crate::canon::Canonicalizer;
use crate::gen::NeighborFn;
use crate::state::State;

use super::config::Config;
use super::context::{RunSignal, SearchContext};
use super::log::DepthReport;

////////////////////////////////////////////////////////////////////////////////

/// Keeps the driver from blocking forever when a worker dies mid-expansion:
/// the panic reaches the driver as an abort signal and propagates once the
/// run is torn down.
struct AbortGuard<'a>(&'a SearchContext);

impl Drop for AbortGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.depth.abort();
            let _ = self.0.done_tx.send(RunSignal::Aborted);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// One worker: pull a state, expand it, publish the successors, until the
/// driver broadcasts stop.
pub(crate) fn run(
    ctx: &SearchContext,
    canon: &Canonicalizer,
    gen: &impl NeighborFn,
    cfg: &Config,
) {
    let _guard = AbortGuard(ctx);
    loop {
        select! {
            recv(ctx.queue_rx) -> state => {
                let Ok(state) = state else { break };
                expand(ctx, canon, gen, cfg, state);
            }
            recv(ctx.stop_rx) -> _ => break,
        }
    }
}

fn expand(
    ctx: &SearchContext,
    canon: &Canonicalizer,
    gen: &impl NeighborFn,
    cfg: &Config,
    state: State,
) {
    let depth = state.depth();
    ctx.depth.wait_for(depth);

    // in-flight states still drain after a win, but generate nothing new
    if !ctx.solved() {
        publish(ctx, canon, gen(&state, cfg.budget));
    }

    for (done, expanded) in ctx.depth.finish(depth) {
        let report = DepthReport {
            depth: done,
            expanded,
            visited: ctx.visited_count(),
        };
        if let Some(observer) = &cfg.on_depth {
            observer(&report);
        }
        ctx.push_report(report);
    }

    ctx.retire();
}

fn publish(ctx: &SearchContext, canon: &Canonicalizer, candidates: Vec<State>) {
    for candidate in candidates {
        if candidate.is_terminal() {
            ctx.record_solution(candidate);
            continue;
        }
        if ctx.solved() {
            continue;
        }
        if ctx.claim(canon.hash(&candidate)) {
            ctx.enqueue(candidate);
        }
    }
}
