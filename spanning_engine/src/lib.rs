// SPDX-License-Identifier: MIT OR Apache-2.0
//! Greedy weighted-graph algorithms over an immutable adjacency table.
//!
//! An [`AdjacencyTable`] is built once from a flat `(from, to, weight)` edge
//! list and then handed, read-only, to any of the engines:
//!
//! - [`AdjacencyTable::prim_mst`] grows a minimum spanning tree from a root.
//! - [`AdjacencyTable::shortest_path`] and [`AdjacencyTable::shortest_paths`]
//!   run Dijkstra relaxation from a source.
//! - [`AdjacencyTable::kruskal_naive`] and [`AdjacencyTable::kruskal_union_find`]
//!   build a minimum spanning forest from the globally sorted edge set.
//!
//! ```
//! use spanning_engine::{AdjacencyTable, BuildConfig};
//!
//! let table = AdjacencyTable::from_edges_with_config(
//!     [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)],
//!     &BuildConfig::undirected(),
//! )
//! .unwrap();
//!
//! let forest = table.kruskal_union_find().unwrap();
//! assert_eq!(forest.edge_count(), 2);
//!
//! let route = table.shortest_path(&"A", &"C").unwrap();
//! assert_eq!(route.cost, 3.0);
//! ```

// Pedantic lint configuration for spanning_engine
#![allow(clippy::module_name_repetitions)] // GraphError, SpanningTree read better qualified
#![allow(clippy::cast_precision_loss)] // Acceptable for graph algorithm metrics

use std::{fmt::Debug, hash::Hash};

mod algorithms;
mod config;
mod disjoint_set;
pub mod edge_list;
mod error;
mod frontier;
mod table;


pub use algorithms::{
    CostRecord, CostTable, KruskalConfig, ShortestPathConfig, SpanningForest, SpanningTree,
};
pub use config::BuildConfig;
pub use disjoint_set::{DisjointSet, SetEntry};
pub use error::{GraphError, Result};
pub use frontier::Frontier;
pub use table::{AdjacencyTable, AdjacencyTableBuilder, Neighbor, WeightedEdge};

/// Identifier of a graph vertex.
///
/// Any cloneable, hashable type works: strings, string slices, integers.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}
