// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz target running every engine over one arbitrary table.
//!
//! Checks that Prim and both Kruskal variants agree on the spanning weight,
//! that forests are acyclic, and that Dijkstra costs cannot be relaxed further.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spanning_engine::{AdjacencyTable, AdjacencyTableBuilder, BuildConfig, DisjointSet, GraphError};

#[derive(Arbitrary, Debug)]
struct FuzzEdge {
    from: u8,
    to: u8,
    weight: u16,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    symmetrize: bool,
    isolated: Vec<u8>,
    edges: Vec<FuzzEdge>,
    source: u8,
}

fuzz_target!(|input: FuzzInput| {
    if input.edges.len() > 300 || input.isolated.len() > 16 {
        return;
    }

    let config = BuildConfig::new().symmetrize(input.symmetrize);
    let mut builder = AdjacencyTableBuilder::new(config);
    for edge in &input.edges {
        // Integer weights keep sums exact.
        builder
            .add_edge(edge.from % 64, edge.to % 64, f64::from(edge.weight % 1000))
            .unwrap();
    }
    for &vertex in &input.isolated {
        builder.add_vertex(vertex % 64);
    }
    let table: AdjacencyTable<u8> = builder.build();

    let naive = table.kruskal_naive();
    let union_find = table.kruskal_union_find();
    if table.is_empty() {
        assert_eq!(naive.unwrap_err(), GraphError::EmptyGraph);
        assert_eq!(union_find.unwrap_err(), GraphError::EmptyGraph);
        return;
    }
    let naive = naive.unwrap();
    let union_find = union_find.unwrap();

    assert_eq!(naive.edges, union_find.edges);
    assert_eq!(
        union_find.edge_count() + union_find.tree_count,
        table.vertex_count()
    );

    let mut sets = DisjointSet::new(table.vertex_count());
    let slot = |v: &u8| table.vertices().iter().position(|x| x == v).unwrap();
    for edge in &union_find.edges {
        assert!(sets.union(slot(&edge.from), slot(&edge.to)));
    }

    // Prim over a symmetric table spans exactly when Kruskal finds one tree.
    let root = table.vertices()[usize::from(input.source) % table.vertex_count()];
    match table.prim_mst(&root) {
        Ok(tree) => {
            assert_eq!(tree.edge_count() + 1, table.vertex_count());
            if input.symmetrize {
                assert_eq!(tree.total_weight, union_find.total_weight);
            }
        },
        Err(GraphError::Unreachable { reached, total, .. }) => {
            assert!(reached < total);
            if input.symmetrize {
                assert!(!union_find.is_spanning_tree());
            }
        },
        Err(other) => panic!("unexpected prim error: {other}"),
    }

    let costs = table.shortest_paths(&root).unwrap();
    assert_eq!(costs.cost_to(&root), 0.0);
    for edge in table.edges() {
        assert!(costs.cost_to(&edge.to) <= costs.cost_to(&edge.from) + edge.weight);
    }
    for (vertex, record) in costs.iter() {
        let sum: f64 = record.path.iter().map(|hop| hop.weight).sum();
        if record.is_reachable() {
            assert_eq!(sum, record.cost);
            assert_eq!(record.path.last().map_or(root, |hop| hop.to), *vertex);
        } else {
            assert!(record.path.is_empty());
        }
    }
});
