// SPDX-License-Identifier: MIT OR Apache-2.0
//! Single-source shortest paths using Dijkstra relaxation.
//!
//! Every vertex starts at an infinite cost except the source. Whenever an
//! edge `(parent, child, weight)` is considered, the child's record is
//! overwritten if `cost(parent) + weight` is strictly cheaper, and its path
//! becomes the parent's path plus that edge. Vertices are finalized in order
//! of tentative cost, which is only correct for non-negative weights.

use std::{collections::HashMap, hash::Hash};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{AdjacencyTable, Frontier, GraphError, Result, Vertex, WeightedEdge};

/// Configuration for shortest-path runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestPathConfig {
    /// Fail with [`GraphError::Unreachable`] instead of returning an infinite cost.
    pub require_reachable: bool,
    /// Minimum number of sources before a batch runs on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            require_reachable: false,
            parallel_threshold: 8,
        }
    }
}

impl ShortestPathConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn require_reachable(mut self, require: bool) -> Self {
        self.require_reachable = require;
        self
    }

    #[must_use]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }
}

/// Best-known cost and path to one vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord<V> {
    pub cost: f64,
    pub path: Vec<WeightedEdge<V>>,
}

impl<V> CostRecord<V> {
    #[must_use]
    pub const fn unreachable() -> Self {
        Self {
            cost: f64::INFINITY,
            path: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }

    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.path.len()
    }
}

/// Cost record for every vertex of the table, relative to one source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de> + Eq + Hash"))]
pub struct CostTable<V> {
    pub source: V,
    records: HashMap<V, CostRecord<V>>,
}

impl<V: Vertex> CostTable<V> {
    #[must_use]
    pub fn get(&self, vertex: &V) -> Option<&CostRecord<V>> {
        self.records.get(vertex)
    }

    /// Cost to `vertex`; infinite when unreachable or unknown.
    #[must_use]
    pub fn cost_to(&self, vertex: &V) -> f64 {
        self.records.get(vertex).map_or(f64::INFINITY, |r| r.cost)
    }

    #[must_use]
    pub fn path_to(&self, vertex: &V) -> &[WeightedEdge<V>] {
        self.records
            .get(vertex)
            .map_or(&[][..], |r| r.path.as_slice())
    }

    /// Number of vertices with a finite cost, source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.records.values().filter(|r| r.is_reachable()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &CostRecord<V>)> {
        self.records.iter()
    }
}

/// Per-run relaxation state, indexed by table slot.
struct Relaxation {
    cost: Vec<f64>,
    /// Predecessor slot and the weight of the edge taken from it.
    via: Vec<Option<(usize, f64)>>,
}

impl Relaxation {
    fn reached(&self) -> usize {
        self.cost.iter().filter(|c| c.is_finite()).count()
    }
}

impl<V: Vertex> AdjacencyTable<V> {
    /// Cheapest cost and path from `source` to `target`.
    ///
    /// An unreachable target yields an infinite cost and an empty path.
    ///
    /// # Errors
    ///
    /// See [`AdjacencyTable::shortest_path_with_config`].
    pub fn shortest_path(&self, source: &V, target: &V) -> Result<CostRecord<V>> {
        self.shortest_path_with_config(source, target, &ShortestPathConfig::default())
    }

    /// Cheapest cost and path from `source` to `target`.
    ///
    /// Time complexity: O(E log E).
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyGraph`] if the table has no vertices.
    /// - [`GraphError::NegativeWeight`] if the table holds a negative weight.
    /// - [`GraphError::VertexNotFound`] if `source` or `target` is not in the table.
    /// - [`GraphError::CostOverflow`] if a path cost exceeds the `f64` range.
    /// - [`GraphError::Unreachable`] if `config.require_reachable` is set and
    ///   no path exists.
    #[instrument(skip(self, config), fields(vertices = self.vertex_count()))]
    pub fn shortest_path_with_config(
        &self,
        source: &V,
        target: &V,
        config: &ShortestPathConfig,
    ) -> Result<CostRecord<V>> {
        let source_slot = self.check_shortest_path_source(source)?;
        let target_slot = self
            .slot_of(target)
            .ok_or_else(|| GraphError::vertex_not_found(target))?;

        let relaxation = self.relax_from(source_slot)?;
        let record = self.cost_record(&relaxation, target_slot);

        if !record.is_reachable() && config.require_reachable {
            let reached = relaxation.reached();
            warn!(reached, "target not reachable from source");
            return Err(GraphError::Unreachable {
                root: format!("{source:?}"),
                reached,
                total: self.vertex_count(),
            });
        }

        debug!(cost = record.cost, hops = record.hop_count(), "shortest path resolved");
        Ok(record)
    }

    /// Cost table from `source` to every vertex.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyGraph`] if the table has no vertices.
    /// - [`GraphError::NegativeWeight`] if the table holds a negative weight.
    /// - [`GraphError::VertexNotFound`] if `source` is not in the table.
    /// - [`GraphError::CostOverflow`] if a path cost exceeds the `f64` range.
    #[instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn shortest_paths(&self, source: &V) -> Result<CostTable<V>> {
        let source_slot = self.check_shortest_path_source(source)?;
        let table = self.cost_table(source_slot)?;
        debug!(reachable = table.reachable_count(), "cost table complete");
        Ok(table)
    }

    /// Independent cost tables for several sources, in input order.
    ///
    /// Each run owns its own relaxation state; the adjacency table is only
    /// read. Batches of at least `config.parallel_threshold` sources run on
    /// the rayon pool.
    ///
    /// # Errors
    ///
    /// Fails before any run starts if the table is empty (even for an empty
    /// `sources` slice), holds a negative weight, or any source is missing.
    /// A run whose path cost overflows fails the batch with
    /// [`GraphError::CostOverflow`].
    #[instrument(skip(self, sources, config), fields(vertices = self.vertex_count(), sources = sources.len()))]
    pub fn shortest_paths_from(
        &self,
        sources: &[V],
        config: &ShortestPathConfig,
    ) -> Result<Vec<CostTable<V>>>
    where
        V: Send + Sync,
    {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let slots = sources
            .iter()
            .map(|source| self.check_shortest_path_source(source))
            .collect::<Result<Vec<_>>>()?;

        if slots.len() >= config.parallel_threshold {
            debug!("running shortest-path batch in parallel");
            slots.par_iter().map(|&slot| self.cost_table(slot)).collect()
        } else {
            slots.iter().map(|&slot| self.cost_table(slot)).collect()
        }
    }

    fn check_shortest_path_source(&self, source: &V) -> Result<usize> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        if self.has_negative_weight() {
            if let Some((from, to, weight)) =
                self.slot_edges().into_iter().find(|&(_, _, w)| w < 0.0)
            {
                return Err(GraphError::NegativeWeight {
                    from: format!("{:?}", self.vertex_at(from)),
                    to: format!("{:?}", self.vertex_at(to)),
                    weight,
                });
            }
        }
        self.slot_of(source)
            .ok_or_else(|| GraphError::vertex_not_found(source))
    }

    fn relax_from(&self, source: usize) -> Result<Relaxation> {
        let n = self.vertex_count();
        let mut cost = vec![f64::INFINITY; n];
        let mut via = vec![None; n];
        let mut processed = vec![false; n];

        cost[source] = 0.0;
        let mut frontier = Frontier::new();
        frontier.push(0.0, source);

        while let Some((_, current)) = frontier.pop_min_where(|&v: &usize| !processed[v]) {
            processed[current] = true;

            for &(child, weight) in self.slot_neighbors(current) {
                if processed[child] {
                    continue;
                }
                let candidate = cost[current] + weight;
                if candidate.is_infinite() {
                    warn!(cost = cost[current], weight, "path cost overflowed");
                    return Err(GraphError::CostOverflow {
                        vertex: format!("{:?}", self.vertex_at(child)),
                    });
                }
                if candidate < cost[child] {
                    cost[child] = candidate;
                    via[child] = Some((current, weight));
                    frontier.push(candidate, child);
                }
            }
        }

        Ok(Relaxation { cost, via })
    }

    fn cost_record(&self, relaxation: &Relaxation, target: usize) -> CostRecord<V> {
        let cost = relaxation.cost[target];
        if !cost.is_finite() {
            return CostRecord::unreachable();
        }

        let mut path = Vec::new();
        let mut node = target;
        while let Some((parent, weight)) = relaxation.via[node] {
            path.push(self.edge_at(parent, node, weight));
            node = parent;
        }
        path.reverse();

        CostRecord { cost, path }
    }

    fn cost_table(&self, source: usize) -> Result<CostTable<V>> {
        let relaxation = self.relax_from(source)?;
        let records = (0..self.vertex_count())
            .map(|slot| {
                (
                    self.vertex_at(slot).clone(),
                    self.cost_record(&relaxation, slot),
                )
            })
            .collect();
        Ok(CostTable {
            source: self.vertex_at(source).clone(),
            records,
        })
    }
}
