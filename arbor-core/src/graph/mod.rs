//! Undirected weighted graph model shared by the MST engines.
//!
//! A [`Graph`] is built once per input from node names and named edge
//! triples. Names are mapped to dense `0..n` indices; each edge keeps the
//! index of its `from` name as [`Edge::source`] and of its `to` name as
//! [`Edge::target`], so the original names can be recovered verbatim through
//! [`Graph::node_name`]. The graph is immutable after construction and can be
//! shared by reference between engines.

use std::{borrow::Borrow, collections::HashMap, sync::Arc};

use crate::error::GraphError;

/// Non-negative integer edge weight.
pub type Weight = u64;

/// Unresolved description of one input graph, as produced by a document
/// provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphSpec {
    /// Caller-supplied graph identifier.
    pub id: i64,
    /// Node names in declaration order.
    pub nodes: Vec<String>,
    /// Edges referencing nodes by name.
    pub edges: Vec<EdgeSpec>,
}

/// A named edge triple prior to resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Name of the first endpoint.
    pub from: String,
    /// Name of the second endpoint.
    pub to: String,
    /// Raw weight; negative values are rejected when the graph is built.
    pub weight: i64,
}

impl EdgeSpec {
    /// Creates an edge triple.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::EdgeSpec;
    ///
    /// let edge = EdgeSpec::new("A", "B", 4);
    /// assert_eq!(edge.from, "A");
    /// assert_eq!(edge.weight, 4);
    /// ```
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// A resolved undirected edge between two node indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl Edge {
    pub(crate) const fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the index of the endpoint named first in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the index of the endpoint named second in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the endpoint opposite `node`.
    ///
    /// A self-loop returns `node` itself.
    #[must_use]
    pub const fn opposite(&self, node: usize) -> usize {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Immutable adjacency representation of one input graph.
///
/// # Examples
/// ```
/// use arbor_core::{EdgeSpec, Graph};
///
/// let graph = Graph::new(
///     ["A", "B", "C"],
///     [EdgeSpec::new("A", "B", 1), EdgeSpec::new("B", "C", 2)],
/// )?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.incident_edges(1).count(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    names: Vec<Arc<str>>,
    edges: Vec<Edge>,
    incidence: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a graph from node names and named edges.
    ///
    /// Edge order is preserved, and each node's incidence list records its
    /// edges in input order. A self-loop appears twice in its node's list.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNode`] when a name repeats,
    /// [`GraphError::UnknownNodeReference`] when an edge names a node that is
    /// not declared, [`GraphError::NegativeWeight`] when a weight is below
    /// zero, and [`GraphError::WeightOverflow`] when the weights sum past
    /// [`Weight::MAX`].
    pub fn new<N, E>(nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: Borrow<EdgeSpec>,
    {
        let names: Vec<Arc<str>> = nodes
            .into_iter()
            .map(|name| Arc::from(name.as_ref()))
            .collect();

        let mut index = HashMap::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            if index.insert(Arc::clone(name), position).is_some() {
                return Err(GraphError::DuplicateNode {
                    node: Arc::clone(name),
                });
            }
        }

        let mut resolved = Vec::new();
        let mut weight_sum: Weight = 0;
        let mut incidence = vec![Vec::new(); names.len()];
        for item in edges {
            let spec: &EdgeSpec = item.borrow();
            let source = resolve(&index, &spec.from)?;
            let target = resolve(&index, &spec.to)?;
            let weight =
                Weight::try_from(spec.weight).map_err(|_| GraphError::NegativeWeight {
                    from: Arc::from(spec.from.as_str()),
                    to: Arc::from(spec.to.as_str()),
                    weight: spec.weight,
                })?;
            // Every spanning total is bounded by this sum.
            weight_sum = weight_sum.checked_add(weight).ok_or_else(|| {
                GraphError::WeightOverflow {
                    from: Arc::from(spec.from.as_str()),
                    to: Arc::from(spec.to.as_str()),
                }
            })?;

            let edge_index = resolved.len();
            resolved.push(Edge::new(source, target, weight));
            if let Some(list) = incidence.get_mut(source) {
                list.push(edge_index);
            }
            if let Some(list) = incidence.get_mut(target) {
                list.push(edge_index);
            }
        }

        Ok(Self {
            names,
            edges: resolved,
            incidence,
        })
    }

    /// Builds a graph from an unresolved [`GraphSpec`].
    ///
    /// # Errors
    /// Propagates the failures documented on [`Graph::new`].
    pub fn from_spec(spec: &GraphSpec) -> Result<Self, GraphError> {
        Self::new(&spec.nodes, &spec.edges)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of edges, including self-loops and parallel edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the external name of `node`, if it exists.
    #[must_use]
    pub fn node_name(&self, node: usize) -> Option<&Arc<str>> {
        self.names.get(node)
    }

    /// Returns all node names in index order.
    #[must_use]
    pub fn node_names(&self) -> &[Arc<str>] {
        &self.names
    }

    /// Iterates over the edges incident to `node` in input order.
    ///
    /// Yields nothing for an out-of-range node.
    pub fn incident_edges(&self, node: usize) -> impl Iterator<Item = &Edge> {
        self.incidence
            .get(node)
            .into_iter()
            .flatten()
            .filter_map(|&edge| self.edges.get(edge))
    }
}

fn resolve(index: &HashMap<Arc<str>, usize>, name: &str) -> Result<usize, GraphError> {
    index
        .get(name)
        .copied()
        .ok_or_else(|| GraphError::UnknownNodeReference {
            node: Arc::from(name),
        })
}
