// SPDX-License-Identifier: MIT OR Apache-2.0
//! Disjoint-set (union-find) over dense element indices.
//!
//! Union is by depth: the shallower tree goes under the deeper one, and on a
//! tie the first root goes under the second, whose depth then grows by one.
//! [`DisjointSet::find`] is a plain lookup that leaves the structure alone;
//! [`DisjointSet::find_compress`] also points every visited element straight
//! at its representative.

use serde::{Deserialize, Serialize};

/// Per-element link and depth heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetEntry {
    pub parent: usize,
    pub depth: u32,
}

/// Partition of `0..len` into disjoint sets.
///
/// Only constructible through [`DisjointSet::new`], so every parent chain
/// ends at a representative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisjointSet {
    entries: Vec<SetEntry>,
    set_count: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            entries: (0..n).map(|i| SetEntry { parent: i, depth: 0 }).collect(),
            set_count: n,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of disjoint sets.
    #[must_use]
    pub const fn set_count(&self) -> usize {
        self.set_count
    }

    #[must_use]
    pub fn entry(&self, x: usize) -> SetEntry {
        self.entries[x]
    }

    /// Representative of `x`'s set, without modifying any links.
    #[must_use]
    pub fn find(&self, x: usize) -> usize {
        let parent = self.entries[x].parent;
        if parent == x {
            x
        } else {
            self.find(parent)
        }
    }

    /// Representative of `x`'s set, flattening the walked chain.
    pub fn find_compress(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.entries[root].parent != root {
            root = self.entries[root].parent;
        }

        let mut node = x;
        while self.entries[node].parent != root {
            let next = self.entries[node].parent;
            self.entries[node].parent = root;
            node = next;
        }

        root
    }

    #[must_use]
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns false if they were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.union_roots(root_a, root_b)
    }

    /// Link two distinct representatives by depth.
    ///
    /// Returns false, leaving the sets untouched, unless both arguments are
    /// current representatives of different sets.
    pub(crate) fn union_roots(&mut self, root_a: usize, root_b: usize) -> bool {
        if root_a == root_b
            || self.entries[root_a].parent != root_a
            || self.entries[root_b].parent != root_b
        {
            return false;
        }

        let depth_a = self.entries[root_a].depth;
        let depth_b = self.entries[root_b].depth;

        match depth_a.cmp(&depth_b) {
            std::cmp::Ordering::Less => {
                self.entries[root_a].parent = root_b;
            },
            std::cmp::Ordering::Greater => {
                self.entries[root_b].parent = root_a;
            },
            std::cmp::Ordering::Equal => {
                self.entries[root_a].parent = root_b;
                self.entries[root_b].depth = depth_b + 1;
            },
        }
        self.set_count -= 1;
        true
    }
}
