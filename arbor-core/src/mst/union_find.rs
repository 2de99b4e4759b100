//! Instrumented disjoint-set forest used by Kruskal's algorithm.
//!
//! `find` compresses paths iteratively: one pass walks to the root, a second
//! pass relinks every visited node directly to it. Each parent step costs one
//! operation and the compression write costs one more, so finding a root
//! costs 1 and finding a node at depth `d` costs `d + 1`. `union` costs one
//! operation on entry, its two finds, and one more when it links two sets.

use std::cmp::Ordering;

use crate::metrics::OperationCounter;

/// Disjoint-set forest with union by rank and path compression.
///
/// # Examples
/// ```
/// use arbor_core::{OperationCounter, UnionFind};
///
/// let mut counter = OperationCounter::new();
/// let mut sets = UnionFind::new(3);
/// assert!(sets.union(0, 1, &mut counter));
/// assert!(!sets.union(1, 0, &mut counter));
/// assert_eq!(sets.find(1, &mut counter), sets.find(0, &mut counter));
/// assert_eq!(sets.components(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl UnionFind {
    /// Creates `node_count` singleton sets.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            components: node_count,
        }
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the representative of `node`'s set, compressing the path.
    ///
    /// # Panics
    /// Panics if `node` is not below the node count given to [`Self::new`].
    pub fn find(&mut self, node: usize, counter: &mut OperationCounter) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
            counter.tick();
        }

        let mut current = node;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        counter.tick();

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without modifying the forest when both already share
    /// a root. On a rank tie the root of `left` becomes the parent.
    ///
    /// # Panics
    /// Panics if either node is not below the node count given to
    /// [`Self::new`].
    pub fn union(&mut self, left: usize, right: usize, counter: &mut OperationCounter) -> bool {
        counter.tick();
        let left_root = self.find(left, counter);
        let right_root = self.find(right, counter);
        if left_root == right_root {
            return false;
        }

        match self.rank[left_root].cmp(&self.rank[right_root]) {
            Ordering::Less => self.parent[left_root] = right_root,
            Ordering::Greater => self.parent[right_root] = left_root,
            Ordering::Equal => {
                self.parent[right_root] = left_root;
                self.rank[left_root] = self.rank[left_root].saturating_add(1);
            }
        }
        self.components -= 1;
        counter.tick();
        true
    }
}
