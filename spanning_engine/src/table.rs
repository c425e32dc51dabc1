// SPDX-License-Identifier: MIT OR Apache-2.0
//! Immutable adjacency table built once from a flat edge list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{BuildConfig, GraphError, Result, Vertex};

/// A weighted edge `(from, to, weight)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> WeightedEdge<V> {
    #[must_use]
    pub const fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

impl<V> From<(V, V, f64)> for WeightedEdge<V> {
    fn from((from, to, weight): (V, V, f64)) -> Self {
        Self { from, to, weight }
    }
}

/// One entry of a vertex's neighbor list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor<V> {
    pub vertex: V,
    pub weight: f64,
}

/// Vertex to neighbor-list mapping.
///
/// Vertices keep the order in which they were first seen, either as an
/// endpoint or through [`AdjacencyTableBuilder::add_vertex`]. Neighbor lists
/// keep input order. Nothing mutates the table after [`build`], so a shared
/// reference can be handed to any number of concurrent algorithm runs.
///
/// [`build`]: AdjacencyTableBuilder::build
#[derive(Debug, Clone)]
pub struct AdjacencyTable<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    neighbors: Vec<Vec<Neighbor<V>>>,
    /// Neighbor lists with targets resolved to slots.
    slots: Vec<Vec<(usize, f64)>>,
    edge_count: usize,
    has_negative_weight: bool,
}

impl<V: Vertex> AdjacencyTable<V> {
    #[must_use]
    pub fn builder() -> AdjacencyTableBuilder<V> {
        AdjacencyTableBuilder::new(BuildConfig::default())
    }

    /// Build a table from `(from, to, weight)` triples without symmetrizing.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedEdge`] for a non-finite or negative weight.
    pub fn from_edges<I, E>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<V>>,
    {
        Self::from_edges_with_config(edges, &BuildConfig::default())
    }

    /// Build a table from `(from, to, weight)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedEdge`] for a non-finite weight, or a
    /// negative one unless the config allows it.
    pub fn from_edges_with_config<I, E>(edges: I, config: &BuildConfig) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<V>>,
    {
        let mut builder = AdjacencyTableBuilder::new(*config);
        for edge in edges {
            let WeightedEdge { from, to, weight } = edge.into();
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored directed neighbor entries.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// All vertices in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Neighbor list of `vertex`; empty for vertices not in the table.
    #[must_use]
    pub fn neighbors(&self, vertex: &V) -> &[Neighbor<V>] {
        match self.index.get(vertex) {
            Some(&slot) => &self.neighbors[slot],
            None => &[],
        }
    }

    /// Every stored edge, grouped by source vertex in table order.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge<V>> + '_ {
        self.vertices
            .iter()
            .zip(&self.neighbors)
            .flat_map(|(from, list)| {
                list.iter()
                    .map(move |n| WeightedEdge::new(from.clone(), n.vertex.clone(), n.weight))
            })
    }

    #[must_use]
    pub const fn has_negative_weight(&self) -> bool {
        self.has_negative_weight
    }

    /// Sum of all stored edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.slots.iter().flatten().map(|&(_, w)| w).sum()
    }

    pub(crate) fn slot_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub(crate) fn vertex_at(&self, slot: usize) -> &V {
        &self.vertices[slot]
    }

    pub(crate) fn slot_neighbors(&self, slot: usize) -> &[(usize, f64)] {
        &self.slots[slot]
    }

    /// Every stored edge as `(from_slot, to_slot, weight)` in table order.
    pub(crate) fn slot_edges(&self) -> Vec<(usize, usize, f64)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (from, list) in self.slots.iter().enumerate() {
            edges.extend(list.iter().map(|&(to, w)| (from, to, w)));
        }
        edges
    }

    pub(crate) fn edge_at(&self, from: usize, to: usize, weight: f64) -> WeightedEdge<V> {
        WeightedEdge::new(self.vertex_at(from).clone(), self.vertex_at(to).clone(), weight)
    }
}

/// Incremental construction of an [`AdjacencyTable`].
#[derive(Debug, Clone)]
pub struct AdjacencyTableBuilder<V> {
    config: BuildConfig,
    table: AdjacencyTable<V>,
    /// Position of the next input edge, used in validation errors.
    next_input: usize,
}

impl<V: Vertex> AdjacencyTableBuilder<V> {
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            table: AdjacencyTable {
                vertices: Vec::new(),
                index: HashMap::new(),
                neighbors: Vec::new(),
                slots: Vec::new(),
                edge_count: 0,
                has_negative_weight: false,
            },
            next_input: 0,
        }
    }

    /// Register a vertex with no edges. A no-op if it already exists.
    pub fn add_vertex(&mut self, vertex: V) -> &mut Self {
        self.slot_for(vertex);
        self
    }

    /// Append `to` to `from`'s neighbor list, plus the reverse entry when the
    /// config symmetrizes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedEdge`] if the weight fails validation.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) -> Result<&mut Self> {
        self.validate(weight)?;
        if self.config.symmetrize && from != to {
            self.push(from.clone(), to.clone(), weight);
            self.push(to, from, weight);
        } else {
            self.push(from, to, weight);
        }
        Ok(self)
    }

    /// Store `a -> b` and `b -> a` regardless of the symmetrize setting.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedEdge`] if the weight fails validation.
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: f64) -> Result<&mut Self> {
        self.validate(weight)?;
        if a == b {
            self.push(a, b, weight);
        } else {
            self.push(a.clone(), b.clone(), weight);
            self.push(b, a, weight);
        }
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> AdjacencyTable<V> {
        self.table
    }

    fn validate(&mut self, weight: f64) -> Result<()> {
        let index = self.next_input;
        self.next_input += 1;
        if !weight.is_finite() {
            return Err(GraphError::MalformedEdge {
                index,
                reason: format!("weight {weight} is not finite"),
            });
        }
        if weight < 0.0 && !self.config.allow_negative_weights {
            return Err(GraphError::MalformedEdge {
                index,
                reason: format!("negative weight {weight}"),
            });
        }
        Ok(())
    }

    fn slot_for(&mut self, vertex: V) -> usize {
        if let Some(&slot) = self.table.index.get(&vertex) {
            return slot;
        }
        let slot = self.table.vertices.len();
        self.table.index.insert(vertex.clone(), slot);
        self.table.vertices.push(vertex);
        self.table.neighbors.push(Vec::new());
        self.table.slots.push(Vec::new());
        slot
    }

    fn push(&mut self, from: V, to: V, weight: f64) {
        let from_slot = self.slot_for(from);
        let to_slot = self.slot_for(to.clone());
        self.table.neighbors[from_slot].push(Neighbor { vertex: to, weight });
        self.table.slots[from_slot].push((to_slot, weight));
        self.table.edge_count += 1;
        if weight < 0.0 {
            self.table.has_negative_weight = true;
        }
    }
}
