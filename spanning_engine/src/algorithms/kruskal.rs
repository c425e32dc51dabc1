// SPDX-License-Identifier: MIT OR Apache-2.0
//! Minimum Spanning Forest using Kruskal's algorithm.
//!
//! Both variants scan the whole edge set in ascending weight order (ties keep
//! table order) and accept an edge unless it would close a cycle. They differ
//! only in how the cycle is detected:
//! - [`AdjacencyTable::kruskal_naive`] walks the links of already accepted edges.
//! - [`AdjacencyTable::kruskal_union_find`] compares disjoint-set representatives.
//!
//! A symmetric table lists every undirected edge twice; the second copy is
//! rejected by the cycle check like any other redundant edge.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{AdjacencyTable, DisjointSet, Frontier, GraphError, Result, Vertex, WeightedEdge};

/// Configuration for the union-find variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KruskalConfig {
    /// Flatten parent chains during lookups.
    pub path_compression: bool,
    /// Stop scanning once `vertex_count - 1` edges are accepted.
    pub early_termination: bool,
}

impl Default for KruskalConfig {
    fn default() -> Self {
        Self {
            path_compression: false,
            early_termination: true,
        }
    }
}

impl KruskalConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn path_compression(mut self, enabled: bool) -> Self {
        self.path_compression = enabled;
        self
    }

    #[must_use]
    pub const fn early_termination(mut self, enabled: bool) -> Self {
        self.early_termination = enabled;
        self
    }
}

/// Accepted edges of a minimum spanning forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningForest<V> {
    /// Edges in acceptance (ascending weight) order.
    pub edges: Vec<WeightedEdge<V>>,
    pub total_weight: f64,
    pub vertex_count: usize,
    /// Number of trees (1 for connected graphs).
    pub tree_count: usize,
    /// Candidate edges popped from the queue before the run ended.
    pub edges_examined: usize,
}

impl<V> SpanningForest<V> {
    fn from_accepted(
        edges: Vec<WeightedEdge<V>>,
        vertex_count: usize,
        edges_examined: usize,
    ) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        let tree_count = vertex_count - edges.len();
        Self {
            edges,
            total_weight,
            vertex_count,
            tree_count,
            edges_examined,
        }
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub const fn is_spanning_tree(&self) -> bool {
        self.tree_count == 1
    }
}

/// Reachability walk over the links recorded for accepted edges.
struct AcceptedLinks {
    links: Vec<Vec<usize>>,
    /// Visit stamps, compared against `stamp` to avoid clearing between walks.
    seen: Vec<u32>,
    stamp: u32,
    stack: Vec<usize>,
}

impl AcceptedLinks {
    fn new(n: usize) -> Self {
        Self {
            links: vec![Vec::new(); n],
            seen: vec![0; n],
            stamp: 0,
            stack: Vec::new(),
        }
    }

    fn link(&mut self, a: usize, b: usize) {
        self.links[a].push(b);
        self.links[b].push(a);
    }

    fn connected(&mut self, from: usize, to: usize) -> bool {
        if from == to || self.links[from].contains(&to) {
            return true;
        }

        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            self.seen.fill(0);
            self.stamp = 1;
        }

        self.stack.clear();
        self.stack.push(from);
        self.seen[from] = self.stamp;
        while let Some(node) = self.stack.pop() {
            for &next in &self.links[node] {
                if next == to {
                    return true;
                }
                if self.seen[next] != self.stamp {
                    self.seen[next] = self.stamp;
                    self.stack.push(next);
                }
            }
        }
        false
    }
}

impl<V: Vertex> AdjacencyTable<V> {
    /// Kruskal's algorithm with cycle detection through the accepted-edge history.
    ///
    /// Each accepted edge records a mutual link between its endpoints; an edge
    /// is rejected when its endpoints are already joined by a chain of such
    /// links. Scans every edge.
    ///
    /// Time complexity: O(E log E + E * V).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] if the table has no vertices.
    #[instrument(skip(self), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn kruskal_naive(&self) -> Result<SpanningForest<V>> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut queue = self.edge_queue();
        let mut history = AcceptedLinks::new(self.vertex_count());
        let mut accepted = Vec::new();

        while let Some((weight, (from, to))) = queue.pop_min() {
            if history.connected(from, to) {
                continue;
            }
            history.link(from, to);
            accepted.push(self.edge_at(from, to, weight));
        }

        let forest =
            SpanningForest::from_accepted(accepted, self.vertex_count(), self.edge_count());
        debug!(
            accepted = forest.edge_count(),
            trees = forest.tree_count,
            total_weight = forest.total_weight,
            "kruskal history walk complete"
        );
        Ok(forest)
    }

    /// Kruskal's algorithm with a disjoint-set, default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] if the table has no vertices.
    pub fn kruskal_union_find(&self) -> Result<SpanningForest<V>> {
        self.kruskal_union_find_with_config(&KruskalConfig::default())
    }

    /// Kruskal's algorithm with a disjoint-set.
    ///
    /// Produces exactly `vertex_count - 1` edges for a connected graph.
    ///
    /// Time complexity: O(E log E).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] if the table has no vertices.
    #[instrument(skip(self, config), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn kruskal_union_find_with_config(
        &self,
        config: &KruskalConfig,
    ) -> Result<SpanningForest<V>> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let n = self.vertex_count();
        let mut queue = self.edge_queue();
        let mut sets = DisjointSet::new(n);
        let mut accepted = Vec::with_capacity(n - 1);
        let mut examined = 0;

        while let Some((weight, (from, to))) = queue.pop_min() {
            examined += 1;
            let (root_from, root_to) = if config.path_compression {
                (sets.find_compress(from), sets.find_compress(to))
            } else {
                (sets.find(from), sets.find(to))
            };
            if !sets.union_roots(root_from, root_to) {
                continue;
            }
            accepted.push(self.edge_at(from, to, weight));

            if config.early_termination && accepted.len() == n - 1 {
                debug!(skipped = queue.len(), "spanning tree complete, stopping early");
                break;
            }
        }

        let forest = SpanningForest::from_accepted(accepted, n, examined);
        debug_assert_eq!(forest.tree_count, sets.set_count());
        debug!(
            accepted = forest.edge_count(),
            trees = forest.tree_count,
            total_weight = forest.total_weight,
            "kruskal union-find complete"
        );
        Ok(forest)
    }

    /// Every stored edge, popped in ascending weight order.
    fn edge_queue(&self) -> Frontier<(usize, usize)> {
        self.slot_edges()
            .into_iter()
            .map(|(from, to, weight)| (weight, (from, to)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuildConfig;

    fn undirected(edges: &[(&'static str, &'static str, f64)]) -> AdjacencyTable<&'static str> {
        AdjacencyTable::from_edges_with_config(edges.iter().copied(), &BuildConfig::undirected())
            .unwrap()
    }

    fn textbook() -> AdjacencyTable<&'static str> {
        undirected(&[
            ("a", "b", 4.0),
            ("a", "h", 8.0),
            ("b", "c", 8.0),
            ("b", "h", 11.0),
            ("c", "d", 7.0),
            ("c", "f", 4.0),
            ("c", "i", 2.0),
            ("d", "e", 9.0),
            ("d", "f", 14.0),
            ("e", "f", 10.0),
            ("f", "g", 2.0),
            ("g", "h", 1.0),
            ("g", "i", 6.0),
            ("h", "i", 7.0),
        ])
    }

    #[test]
    fn test_union_find_triangle_rejects_cycle() {
        let table = undirected(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)]);
        let forest = table.kruskal_union_find().unwrap();

        assert_eq!(
            forest.edges,
            vec![
                WeightedEdge::new("A", "B", 1.0),
                WeightedEdge::new("B", "C", 2.0)
            ]
        );
        assert!((forest.total_weight - 3.0).abs() < f64::EPSILON);
        assert!(forest.is_spanning_tree());
    }

    #[test]
    fn test_naive_triangle_rejects_cycle_and_duplicates() {
        let table = undirected(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)]);
        let forest = table.kruskal_naive().unwrap();

        assert_eq!(forest.edge_count(), 2);
        assert!((forest.total_weight - 3.0).abs() < f64::EPSILON);
        assert_eq!(forest.tree_count, 1);
    }

    #[test]
    fn test_naive_rejects_cycle_closed_several_hops_away() {
        // A-B, C-D, B-C form a path; A-D would close a four-cycle.
        let table = undirected(&[
            ("A", "B", 1.0),
            ("C", "D", 2.0),
            ("B", "C", 3.0),
            ("A", "D", 4.0),
        ]);
        let forest = table.kruskal_naive().unwrap();

        assert_eq!(forest.edge_count(), 3);
        assert!((forest.total_weight - 6.0).abs() < f64::EPSILON);
        assert!(!forest.edges.iter().any(|e| e.weight > 3.0));
    }

    #[test]
    fn test_variants_agree_on_textbook_graph() {
        let table = textbook();
        let naive = table.kruskal_naive().unwrap();
        let union_find = table.kruskal_union_find().unwrap();

        assert_eq!(naive.edge_count(), 8);
        assert_eq!(union_find.edge_count(), 8);
        assert!((naive.total_weight - 37.0).abs() < f64::EPSILON);
        assert!((union_find.total_weight - 37.0).abs() < f64::EPSILON);
        assert_eq!(naive.edges, union_find.edges);
    }

    #[test]
    fn test_config_variants_produce_same_forest() {
        let table = textbook();
        let baseline = table.kruskal_union_find().unwrap();

        for config in [
            KruskalConfig::new().path_compression(true),
            KruskalConfig::new().early_termination(false),
            KruskalConfig::new()
                .path_compression(true)
                .early_termination(false),
        ] {
            let forest = table.kruskal_union_find_with_config(&config).unwrap();
            assert_eq!(forest.edges, baseline.edges);
            assert_eq!(forest.tree_count, baseline.tree_count);
            assert!((forest.total_weight - baseline.total_weight).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_early_termination_skips_remaining_edges() {
        // The spanning tree is complete after the two light edges; the heavy
        // edge must never be popped.
        let table = AdjacencyTable::from_edges([
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("A", "C", 100.0),
        ])
        .unwrap();

        let early = table.kruskal_union_find().unwrap();
        assert_eq!(early.edge_count(), 2);
        assert_eq!(early.edges_examined, 2);

        let full = table
            .kruskal_union_find_with_config(&KruskalConfig::new().early_termination(false))
            .unwrap();
        assert_eq!(full.edges, early.edges);
        assert_eq!(full.edges_examined, 3);

        let naive = table.kruskal_naive().unwrap();
        assert_eq!(naive.edges_examined, table.edge_count());
    }

    #[test]
    fn test_disconnected_graph_yields_forest() {
        let mut builder = AdjacencyTable::builder();
        builder.add_undirected_edge("A", "B", 1.0).unwrap();
        builder.add_undirected_edge("C", "D", 2.0).unwrap();
        builder.add_vertex("E");
        let table = builder.build();

        for forest in [
            table.kruskal_union_find().unwrap(),
            table.kruskal_naive().unwrap(),
        ] {
            assert_eq!(forest.edge_count(), 2);
            assert_eq!(forest.vertex_count, 5);
            assert_eq!(forest.tree_count, 3);
            assert!(!forest.is_spanning_tree());
        }
    }

    #[test]
    fn test_self_loops_never_accepted() {
        let table = AdjacencyTable::from_edges([("A", "A", 0.0), ("A", "B", 1.0)]).unwrap();
        let naive = table.kruskal_naive().unwrap();
        let union_find = table.kruskal_union_find().unwrap();

        assert_eq!(naive.edges, vec![WeightedEdge::new("A", "B", 1.0)]);
        assert_eq!(union_find.edges, naive.edges);
    }

    #[test]
    fn test_directed_input_is_treated_as_undirected() {
        let table = AdjacencyTable::from_edges([("A", "B", 1.0), ("C", "B", 1.0)]).unwrap();
        let forest = table.kruskal_union_find().unwrap();
        assert!(forest.is_spanning_tree());
    }

    #[test]
    fn test_single_vertex_and_empty_graph() {
        let mut builder = AdjacencyTable::builder();
        builder.add_vertex(7u32);
        let forest = builder.build().kruskal_union_find().unwrap();
        assert_eq!(forest.edge_count(), 0);
        assert!(forest.is_spanning_tree());

        let empty: AdjacencyTable<u32> = AdjacencyTable::builder().build();
        assert_eq!(empty.kruskal_naive().unwrap_err(), GraphError::EmptyGraph);
        assert_eq!(
            empty.kruskal_union_find().unwrap_err(),
            GraphError::EmptyGraph
        );
    }

    #[test]
    fn test_history_walk_stamp_reuse() {
        let mut links = AcceptedLinks::new(4);
        links.link(0, 1);
        links.link(2, 3);
        assert!(!links.connected(0, 3));
        assert!(!links.connected(1, 2));
        links.link(1, 2);
        assert!(links.connected(0, 3));
        assert!(links.connected(3, 0));
    }
}
