// SPDX-License-Identifier: MIT OR Apache-2.0
//! Priority frontier of weighted candidates.
//!
//! Candidates pop in ascending weight order, using the IEEE total order of
//! `f64` so every weight has a place. Equal weights pop in insertion
//! order, which keeps every algorithm deterministic for a fixed adjacency
//! order. Candidates that became stale (their target was finalized) are
//! dropped either lazily through [`Frontier::pop_min_where`] or in one
//! rebuild pass through [`Frontier::retain`].

use std::{cmp::Ordering, collections::BinaryHeap};

#[derive(Debug)]
struct FrontierEntry<T> {
    weight: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-first queue of candidates keyed by weight.
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_seq: u64,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, weight: f64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            weight,
            seq,
            item,
        });
    }

    /// Insert a batch of candidates.
    pub fn insert_many<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = (f64, T)>,
    {
        let batch = batch.into_iter();
        self.heap.reserve(batch.size_hint().0);
        for (weight, item) in batch {
            self.push(weight, item);
        }
    }

    /// Remove and return the lowest-weight candidate.
    pub fn pop_min(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|e| (e.weight, e.item))
    }

    /// Pop the lowest-weight candidate for which `keep` holds, discarding
    /// every cheaper candidate that fails it.
    pub fn pop_min_where<F>(&mut self, mut keep: F) -> Option<(f64, T)>
    where
        F: FnMut(&T) -> bool,
    {
        while let Some(entry) = self.heap.pop() {
            if keep(&entry.item) {
                return Some((entry.weight, entry.item));
            }
        }
        None
    }

    /// Drop every candidate for which `keep` is false.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.heap.retain(|e| keep(&e.item));
    }

    #[must_use]
    pub fn peek_weight(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.weight)
    }
}

impl<T> FromIterator<(f64, T)> for Frontier<T> {
    fn from_iter<I: IntoIterator<Item = (f64, T)>>(iter: I) -> Self {
        let mut frontier = Self::new();
        frontier.insert_many(iter);
        frontier
    }
}
