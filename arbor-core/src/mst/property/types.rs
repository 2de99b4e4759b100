//! Fixture types shared by the MST property suites.

/// Shape and weight profile of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Weights drawn from a pool of one to three values.
    ManyIdentical,
    /// A random spanning tree plus a few extra edges, loops and duplicates.
    Sparse,
    /// Edge probability between 0.7 and 0.95 on a smaller node set.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
}

/// A generated edge expressed with node indices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct FixtureEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u64,
}

impl FixtureEdge {
    pub(super) const fn new(source: usize, target: usize, weight: u64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// Generated input for one property case.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes; node `i` is named `n{i}`.
    pub node_count: usize,
    /// Edges in input order.
    pub edges: Vec<FixtureEdge>,
    /// Profile used to generate the edges.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Summarises the fixture for failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.node_count,
            self.edges.len()
        )
    }
}
