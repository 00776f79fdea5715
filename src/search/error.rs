use thiserror::Error;

use crate::topology::TopologyError;

////////////////////////////////////////////////////////////////////////////////

/// Configuration problems caught before any worker starts. An exhausted
/// search is not an error; it is reported through
/// [`Outcome`](super::outcome::Outcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Topology(#[from] TopologyError),
    #[error("worker count must be positive")]
    NoWorkers,
}
