// SPDX-License-Identifier: MIT OR Apache-2.0
//! JSON edge-list reader.
//!
//! The document is a top-level array whose entries are either
//! `[from, to, weight]` triples or `{"from": .., "to": .., "weight": ..}`
//! records. Vertex labels may be strings or integers; integers become their
//! decimal string. Once the document parses as JSON, every entry is checked
//! on its own so a bad entry is reported with its position. Text that is not
//! valid JSON has no entry positions; that includes numbers outside the `f64`
//! range such as `1e400`, which the JSON parser itself refuses.

use serde::Deserialize;
use serde_json::Value;

use crate::{AdjacencyTable, BuildConfig, GraphError, Result, WeightedEdge};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawVertex {
    Label(String),
    Id(i64),
}

impl From<RawVertex> for String {
    fn from(raw: RawVertex) -> Self {
        match raw {
            RawVertex::Label(label) => label,
            RawVertex::Id(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEdge {
    Triple(RawVertex, RawVertex, f64),
    Record {
        from: RawVertex,
        to: RawVertex,
        weight: f64,
    },
}

impl From<RawEdge> for WeightedEdge<String> {
    fn from(raw: RawEdge) -> Self {
        match raw {
            RawEdge::Triple(from, to, weight) | RawEdge::Record { from, to, weight } => {
                Self::new(from.into(), to.into(), weight)
            },
        }
    }
}

/// Parse a JSON edge list.
///
/// # Errors
///
/// - [`GraphError::InvalidEdgeList`] if the text is not JSON or not an array.
///   A number too large for `f64` anywhere in the document lands here, not
///   in [`GraphError::MalformedEdge`].
/// - [`GraphError::MalformedEdge`] for an entry with a missing endpoint or a
///   non-numeric weight.
pub fn parse_edge_list(json: &str) -> Result<Vec<WeightedEdge<String>>> {
    let Value::Array(entries) = serde_json::from_str::<Value>(json)? else {
        return Err(GraphError::InvalidEdgeList(
            "expected a top-level array of edges".to_string(),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            RawEdge::deserialize(entry)
                .map(WeightedEdge::from)
                .map_err(|e| GraphError::MalformedEdge {
                    index,
                    reason: e.to_string(),
                })
        })
        .collect()
}

impl AdjacencyTable<String> {
    /// Parse a JSON edge list and build a table from it.
    ///
    /// # Errors
    ///
    /// Any error of [`parse_edge_list`], plus weight validation failures from
    /// table construction.
    pub fn from_json(json: &str, config: &BuildConfig) -> Result<Self> {
        let edges = parse_edge_list(json)?;
        Self::from_edges_with_config(edges, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triples() {
        let edges = parse_edge_list(r#"[["A", "B", 1], ["B", "C", 2.5]]"#).unwrap();
        assert_eq!(
            edges,
            vec![
                WeightedEdge::new("A".to_string(), "B".to_string(), 1.0),
                WeightedEdge::new("B".to_string(), "C".to_string(), 2.5),
            ]
        );
    }

    #[test]
    fn test_parse_records_and_integer_labels() {
        let edges =
            parse_edge_list(r#"[{"from": 1, "to": 2, "weight": 3}, [2, "x", 0.5]]"#).unwrap();
        assert_eq!(
            edges[0],
            WeightedEdge::new("1".to_string(), "2".to_string(), 3.0)
        );
        assert_eq!(
            edges[1],
            WeightedEdge::new("2".to_string(), "x".to_string(), 0.5)
        );
    }

    #[test]
    fn test_malformed_entries_report_index() {
        let missing_weight = parse_edge_list(r#"[["A", "B", 1], ["B", "C"]]"#);
        assert!(matches!(
            missing_weight,
            Err(GraphError::MalformedEdge { index: 1, .. })
        ));

        let text_weight = parse_edge_list(r#"[["A", "B", "heavy"]]"#);
        assert!(matches!(
            text_weight,
            Err(GraphError::MalformedEdge { index: 0, .. })
        ));

        let missing_endpoint = parse_edge_list(r#"[{"from": "A", "weight": 1}]"#);
        assert!(matches!(
            missing_endpoint,
            Err(GraphError::MalformedEdge { index: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            parse_edge_list("not json"),
            Err(GraphError::InvalidEdgeList(_))
        ));
        assert!(matches!(
            parse_edge_list(r#"{"edges": []}"#),
            Err(GraphError::InvalidEdgeList(_))
        ));
        assert!(parse_edge_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_weight_fails_whole_document() {
        let result = parse_edge_list(r#"[["A", "B", 1], ["B", "C", 1e400]]"#);
        assert!(matches!(result, Err(GraphError::InvalidEdgeList(_))));
    }

    #[test]
    fn test_from_json_builds_table() {
        let table = AdjacencyTable::<String>::from_json(
            r#"[["A", "B", 1], ["B", "C", 2], ["A", "C", 3]]"#,
            &BuildConfig::undirected(),
        )
        .unwrap();
        assert_eq!(table.vertex_count(), 3);
        assert_eq!(table.edge_count(), 6);

        let negative = AdjacencyTable::<String>::from_json(r#"[["A", "B", -2]]"#, &BuildConfig::default());
        assert!(matches!(
            negative,
            Err(GraphError::MalformedEdge { index: 0, .. })
        ));
    }
}
