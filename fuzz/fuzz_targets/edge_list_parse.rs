// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz target for the JSON edge-list reader.
//!
//! Arbitrary text must either parse into a table or fail with a typed error.

use libfuzzer_sys::fuzz_target;
use spanning_engine::{edge_list::parse_edge_list, AdjacencyTable, BuildConfig, GraphError};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match parse_edge_list(text) {
        Ok(edges) => {
            let count = edges.len();
            match AdjacencyTable::from_edges_with_config(edges, &BuildConfig::undirected()) {
                Ok(table) => assert!(table.vertex_count() <= count * 2),
                Err(GraphError::MalformedEdge { index, .. }) => assert!(index < count),
                Err(other) => panic!("unexpected build error: {other}"),
            }
        },
        Err(GraphError::InvalidEdgeList(_) | GraphError::MalformedEdge { .. }) => {},
        Err(other) => panic!("unexpected parse error: {other}"),
    }
});
