use serde::{Deserialize, Serialize};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

/// The board cannot hold more nodes than a hash has bits.
pub const MAX_NODES: usize = 128;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("topology has no nodes")]
    Empty,
    #[error("topology has {nodes} nodes, at most {MAX_NODES} are supported")]
    TooManyNodes { nodes: usize },
    #[error("node {node} connects to {to}, which is outside 0..{nodes}")]
    ConnectionOutOfRange {
        node: usize,
        to: usize,
        nodes: usize,
    },
    #[error("symmetry {index} is not a bijection over {nodes} nodes")]
    NotBijection { index: usize, nodes: usize },
    #[error("symmetry {index} maps edge {from}-{to} to a non-edge")]
    NotAutomorphism {
        index: usize,
        from: usize,
        to: usize,
    },
}

////////////////////////////////////////////////////////////////////////////////

/// A board for the hunt: adjacency over node indices plus the orderings of
/// the nodes which leave the structure unchanged. The symmetries drive
/// canonical hashing; every one of them must be an automorphism, which
/// [`Topology::validate`] enforces before a search is allowed to start.
///
/// Immutable once built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Topology {
    /// For each node, the nodes the fox can move to from it.
    pub connections: Vec<Vec<usize>>,

    /// Orderings of node indices under which the board maps onto itself.
    pub symmetries: Vec<Vec<usize>>,
}

impl Topology {
    pub fn new(
        connections: Vec<Vec<usize>>,
        symmetries: Vec<Vec<usize>>,
    ) -> Result<Self, TopologyError> {
        let topology = Self {
            connections,
            symmetries,
        };
        topology.validate()?;
        Ok(topology)
    }

    pub fn nodes(&self) -> usize {
        self.connections.len()
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.connections[node]
    }

    fn is_edge(&self, from: usize, to: usize) -> bool {
        self.connections[from].contains(&to)
    }

    pub fn validate(&self) -> Result<(), TopologyError> {
        let nodes = self.nodes();
        if nodes == 0 {
            return Err(TopologyError::Empty);
        }
        if nodes > MAX_NODES {
            return Err(TopologyError::TooManyNodes { nodes });
        }

        for (node, adjacent) in self.connections.iter().enumerate() {
            for &to in adjacent {
                if to >= nodes {
                    return Err(TopologyError::ConnectionOutOfRange { node, to, nodes });
                }
            }
        }

        for (index, ordering) in self.symmetries.iter().enumerate() {
            let mut seen = vec![false; nodes];
            if ordering.len() != nodes {
                return Err(TopologyError::NotBijection { index, nodes });
            }
            for &node in ordering {
                if node >= nodes || seen[node] {
                    return Err(TopologyError::NotBijection { index, nodes });
                }
                seen[node] = true;
            }

            // position of every node in the ordering
            let mut inverse = vec![0; nodes];
            for (position, &node) in ordering.iter().enumerate() {
                inverse[node] = position;
            }
            for (from, adjacent) in self.connections.iter().enumerate() {
                for &to in adjacent {
                    if !self.is_edge(inverse[from], inverse[to]) {
                        return Err(TopologyError::NotAutomorphism { index, from, to });
                    }
                }
            }
        }

        Ok(())
    }

    /// Linear chain `0-1-...-(n-1)` with the forward and reverse orderings
    /// as its symmetries. The classic five-hole puzzle is `line(5)`.
    pub fn line(n: usize) -> Self {
        let connections = (0..n)
            .map(|i| {
                let mut adjacent = Vec::new();
                if i > 0 {
                    adjacent.push(i - 1);
                }
                if i + 1 < n {
                    adjacent.push(i + 1);
                }
                adjacent
            })
            .collect();
        let forward = (0..n).collect();
        let backward = (0..n).rev().collect();
        Self {
            connections,
            symmetries: vec![forward, backward],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
