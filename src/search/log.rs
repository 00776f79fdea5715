use std::fmt::Display;

////////////////////////////////////////////////////////////////////////////////

/// Snapshot taken as the engine crosses a depth boundary: every state at
/// `depth` has finished and no deeper state has started bookkeeping.
#[derive(Clone, Debug)]
pub struct DepthReport {
    pub depth: usize,

    /// States consumed at this depth.
    pub expanded: usize,

    /// Size of the visited set at the moment of crossing.
    pub visited: usize,
}

impl Display for DepthReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "depth {}: expanded {}, visited {}",
            self.depth, self.expanded, self.visited
        )
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Per-run progress record, one entry per completed depth.
#[derive(Clone, Debug, Default)]
pub struct SearchLog {
    pub depths: Vec<DepthReport>,
    pub visited_unique: usize,
}

impl Display for SearchLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for report in self.depths.iter() {
            writeln!(f, "{}", report)?;
        }
        write!(f, "unique visited: {}", self.visited_unique)
    }
}
