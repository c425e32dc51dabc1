// SPDX-License-Identifier: MIT OR Apache-2.0
//! Minimum Spanning Tree using Prim's algorithm.
//!
//! Grows one tree from a root by repeatedly annexing the cheapest frontier
//! edge that leads to a vertex outside the tree.

use std::{collections::HashMap, hash::Hash};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{AdjacencyTable, Frontier, GraphError, Neighbor, Result, Vertex, WeightedEdge};

/// Spanning tree grown from a single root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de> + Eq + Hash"))]
pub struct SpanningTree<V> {
    pub root: V,
    /// Parent vertex to the children annexed through it, in selection order.
    pub children: HashMap<V, Vec<Neighbor<V>>>,
    /// Tree edges in selection order.
    pub edges: Vec<WeightedEdge<V>>,
    pub total_weight: f64,
}

impl<V: Vertex> SpanningTree<V> {
    fn new(root: V) -> Self {
        Self {
            root,
            children: HashMap::new(),
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    fn annex(&mut self, parent: V, child: V, weight: f64) {
        self.children
            .entry(parent.clone())
            .or_default()
            .push(Neighbor {
                vertex: child.clone(),
                weight,
            });
        self.edges.push(WeightedEdge::new(parent, child, weight));
        self.total_weight += weight;
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of vertices spanned, root included.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.edges.len() + 1
    }

    /// Children annexed through `parent`; empty for leaves.
    #[must_use]
    pub fn children_of(&self, parent: &V) -> &[Neighbor<V>] {
        self.children.get(parent).map_or(&[][..], Vec::as_slice)
    }
}

/// Candidate edge leaving the tree. Copied out of the table, never a reference into it.
#[derive(Debug, Clone, Copy)]
struct PrimCandidate {
    parent: usize,
    child: usize,
}

impl<V: Vertex> AdjacencyTable<V> {
    /// Compute a minimum spanning tree rooted at `root` using Prim's algorithm.
    ///
    /// Among equal-weight candidates the one discovered first wins, so the
    /// result is deterministic for a fixed adjacency order.
    ///
    /// Time complexity: O(E log E).
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyGraph`] if the table has no vertices.
    /// - [`GraphError::VertexNotFound`] if `root` is not in the table.
    /// - [`GraphError::Unreachable`] if some vertex cannot be reached from `root`.
    #[instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn prim_mst(&self, root: &V) -> Result<SpanningTree<V>> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let root_slot = self
            .slot_of(root)
            .ok_or_else(|| GraphError::vertex_not_found(root))?;

        let total = self.vertex_count();
        let mut processed = vec![false; total];
        processed[root_slot] = true;
        let mut reached = 1;

        let mut tree = SpanningTree::new(root.clone());
        let mut frontier = Frontier::with_capacity(self.slot_neighbors(root_slot).len());
        self.push_prim_candidates(&mut frontier, root_slot, &processed);

        while reached < total {
            let Some((weight, candidate)) =
                frontier.pop_min_where(|c: &PrimCandidate| !processed[c.child])
            else {
                warn!(reached, total, "frontier exhausted before spanning every vertex");
                return Err(GraphError::Unreachable {
                    root: format!("{root:?}"),
                    reached,
                    total,
                });
            };

            tree.annex(
                self.vertex_at(candidate.parent).clone(),
                self.vertex_at(candidate.child).clone(),
                weight,
            );
            processed[candidate.child] = true;
            reached += 1;
            self.push_prim_candidates(&mut frontier, candidate.child, &processed);
        }

        debug!(
            edges = tree.edge_count(),
            total_weight = tree.total_weight,
            "prim spanning tree complete"
        );
        Ok(tree)
    }

    /// Prim's algorithm rooted at the first vertex in table order.
    ///
    /// # Errors
    ///
    /// Same as [`AdjacencyTable::prim_mst`].
    pub fn prim_mst_from_first(&self) -> Result<SpanningTree<V>> {
        let root = self.vertices().first().ok_or(GraphError::EmptyGraph)?;
        self.prim_mst(root)
    }

    fn push_prim_candidates(
        &self,
        frontier: &mut Frontier<PrimCandidate>,
        parent: usize,
        processed: &[bool],
    ) {
        frontier.insert_many(
            self.slot_neighbors(parent)
                .iter()
                .filter(|&&(child, _)| !processed[child])
                .map(|&(child, weight)| (weight, PrimCandidate { parent, child })),
        );
    }
}
