mod canon;
mod gen;
mod search;
mod state;
mod topology;

////////////////////////////////////////////////////////////////////////////////

pub use canon::{Canonicalizer, HashValue};

pub use gen::{CheckSearch, NeighborFn};

pub use search::{
    config::{Config as SearchConfig, ConfigBuilder as SearchConfigBuilder},
    engine::Engine,
    error::SearchError,
    log::{DepthReport, SearchLog},
    outcome::{Outcome, Solution},
};

pub use state::{CheckSet, State};

pub use topology::{Topology, TopologyError, MAX_NODES};
