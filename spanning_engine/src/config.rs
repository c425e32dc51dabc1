// SPDX-License-Identifier: MIT OR Apache-2.0
//! Configuration for adjacency table construction.

/// Controls how an [`AdjacencyTable`](crate::AdjacencyTable) is built from an edge list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Accept edges with negative weights. Shortest-path runs still reject them.
    pub allow_negative_weights: bool,
    /// Store the reverse of every input edge as well.
    pub symmetrize: bool,
}

impl BuildConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for undirected input given as one triple per edge.
    #[must_use]
    pub fn undirected() -> Self {
        Self::default().symmetrize(true)
    }

    #[must_use]
    pub const fn allow_negative_weights(mut self, allow: bool) -> Self {
        self.allow_negative_weights = allow;
        self
    }

    #[must_use]
    pub const fn symmetrize(mut self, symmetrize: bool) -> Self {
        self.symmetrize = symmetrize;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_directed_and_non_negative() {
        let config = BuildConfig::default();
        assert!(!config.allow_negative_weights);
        assert!(!config.symmetrize);
        assert_eq!(config, BuildConfig::new());
    }

    #[test]
    fn test_builder_setters() {
        let config = BuildConfig::new()
            .allow_negative_weights(true)
            .symmetrize(true);
        assert!(config.allow_negative_weights);
        assert!(config.symmetrize);
        assert!(BuildConfig::undirected().symmetrize);
    }
}
