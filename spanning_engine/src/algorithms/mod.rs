// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph algorithms module.
//!
//! Every engine runs on a shared, read-only [`AdjacencyTable`](crate::AdjacencyTable)
//! and owns its per-run state (frontier, cost table, disjoint set):
//! - Minimum Spanning Tree (Prim's frontier expansion)
//! - Single-source shortest paths (Dijkstra relaxation)
//! - Minimum Spanning Forest (Kruskal, history-walk and union-find variants)

mod dijkstra;
mod kruskal;
mod prim;

pub use dijkstra::{CostRecord, CostTable, ShortestPathConfig};
pub use kruskal::{KruskalConfig, SpanningForest};
pub use prim::SpanningTree;
