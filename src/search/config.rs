use std::sync::Arc;

use super::log::DepthReport;

////////////////////////////////////////////////////////////////////////////////

/// Callback fired once per fully drained breadth-first level.
pub type DepthObserver = Arc<dyn Fn(&DepthReport) + Send + Sync>;

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone)]
pub struct Config {
    /// Checks the searcher may spend each turn.
    pub budget: usize,

    /// Worker threads expanding the frontier. Must be positive.
    pub workers: usize,

    /// Observer for depth-boundary crossings.
    pub on_depth: Option<DepthObserver>,
}

impl Config {
    pub fn new(budget: usize, workers: usize) -> Self {
        ConfigBuilder::new().budget(budget).workers(workers).build()
    }
}

////////////////////////////////////////////////////////////////////////////////

pub struct ConfigBuilder {
    budget: usize,
    workers: usize,
    on_depth: Option<DepthObserver>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            budget: 1,
            workers: 1,
            on_depth: None,
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn on_depth(mut self, observer: impl Fn(&DepthReport) + Send + Sync + 'static) -> Self {
        self.on_depth = Some(Arc::new(observer));
        self
    }

    pub fn build(self) -> Config {
        Config {
            budget: self.budget,
            workers: self.workers,
            on_depth: self.on_depth,
        }
    }
}
