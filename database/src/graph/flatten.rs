use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// One endpoint of a traversal triple, reduced to the properties the
/// flattener cares about.
#[derive(Debug, Clone, Default)]
pub struct GraphEndpoint {
    pub name: Option<String>,
    pub value: Option<String>,
    pub labels: Vec<String>,
}

impl GraphEndpoint {
    /// Node identity: a non-empty `name` property, falling back to a
    /// non-empty `value`. `None` means the endpoint cannot be
    /// rendered and its triple must be skipped.
    fn identity(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.value.as_deref().filter(|s| !s.is_empty()))
    }

    fn primary_label(&self) -> String {
        self.labels.first().cloned().unwrap_or_default()
    }
}

/// One (source)-[relationship]->(target) match from the traversal.
#[derive(Debug, Clone)]
pub struct Triple {
    pub source: GraphEndpoint,
    pub rel_type: String,
    pub target: GraphEndpoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub label: String,
}

/// Renderable view of a traversal: unique nodes in first-encounter
/// order, unique edges in arbitrary order.
#[derive(Debug, Clone, Serialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Collapse traversal triples into a deduplicated node and edge set.
///
/// A triple where either endpoint has no identity contributes nothing
/// at all. A node revisited later keeps its position but takes the
/// later triple's label. Structurally identical edges collapse to one
/// no matter how often the traversal revisits them.
pub fn flatten_triples(triples: &[Triple]) -> GraphView {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut nodes: Vec<GraphNode> = Vec::new();
    let mut edges: HashSet<(String, String, String)> = HashSet::new();

    for triple in triples {
        let (Some(source_id), Some(target_id)) = (triple.source.identity(), triple.target.identity())
        else {
            continue;
        };

        record_node(&mut index, &mut nodes, source_id, triple.source.primary_label());
        record_node(&mut index, &mut nodes, target_id, triple.target.primary_label());
        edges.insert((
            source_id.to_string(),
            target_id.to_string(),
            triple.rel_type.clone(),
        ));
    }

    GraphView {
        nodes,
        edges: edges
            .into_iter()
            .map(|(source, target, label)| GraphEdge { source, target, label })
            .collect(),
    }
}

fn record_node(
    index: &mut HashMap<String, usize>,
    nodes: &mut Vec<GraphNode>,
    id: &str,
    label: String,
) {
    match index.get(id) {
        Some(&slot) => nodes[slot].node_type = label,
        None => {
            index.insert(id.to_string(), nodes.len());
            nodes.push(GraphNode {
                id: id.to_string(),
                node_type: label,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(name: Option<&str>, value: Option<&str>, label: &str) -> GraphEndpoint {
        GraphEndpoint {
            name: name.map(str::to_string),
            value: value.map(str::to_string),
            labels: vec![label.to_string()],
        }
    }

    fn triple(source: GraphEndpoint, rel: &str, target: GraphEndpoint) -> Triple {
        Triple {
            source,
            rel_type: rel.to_string(),
            target,
        }
    }

    #[test]
    fn repeated_edges_collapse_to_one() {
        let triples = vec![
            triple(endpoint(Some("a"), None, "Cafe"), "SELLS", endpoint(Some("b"), None, "Menu")),
            triple(endpoint(Some("a"), None, "Cafe"), "SELLS", endpoint(Some("b"), None, "Menu")),
        ];

        let view = flatten_triples(&triples);
        assert_eq!(view.nodes.len(), 2);
        assert_eq!(view.edges.len(), 1);
        assert_eq!(view.edges[0].label, "SELLS");
    }

    #[test]
    fn triple_with_unidentifiable_endpoint_is_skipped_entirely() {
        let triples = vec![
            triple(endpoint(Some("a"), None, "Cafe"), "SELLS", endpoint(None, None, "Menu")),
        ];

        let view = flatten_triples(&triples);
        assert!(view.nodes.is_empty());
        assert!(view.edges.is_empty());
    }

    #[test]
    fn empty_name_falls_back_to_value() {
        let triples = vec![triple(
            endpoint(Some(""), Some("fallback"), "Keyword"),
            "RELATES",
            endpoint(Some("b"), None, "Menu"),
        )];

        let view = flatten_triples(&triples);
        assert_eq!(view.nodes[0].id, "fallback");
    }

    #[test]
    fn later_triple_overwrites_node_type_but_keeps_position() {
        let triples = vec![
            triple(endpoint(Some("a"), None, "Cafe"), "SELLS", endpoint(Some("b"), None, "Menu")),
            triple(endpoint(Some("c"), None, "District"), "HAS", endpoint(Some("a"), None, "Keyword")),
        ];

        let view = flatten_triples(&triples);
        let ids: Vec<&str> = view.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(view.nodes[0].node_type, "Keyword");
    }

    #[test]
    fn flattening_is_idempotent_over_the_same_traversal() {
        let triples = vec![
            triple(endpoint(Some("a"), None, "Cafe"), "SELLS", endpoint(Some("b"), None, "Menu")),
            triple(endpoint(Some("b"), None, "Menu"), "POPULAR_IN", endpoint(Some("c"), None, "District")),
            triple(endpoint(Some("a"), None, "Cafe"), "SELLS", endpoint(Some("b"), None, "Menu")),
        ];

        let first = flatten_triples(&triples);
        let second = flatten_triples(&triples);

        let edge_set = |view: &GraphView| view.edges.iter().cloned().collect::<std::collections::HashSet<_>>();
        let id_set = |view: &GraphView| {
            view.nodes.iter().map(|n| n.id.clone()).collect::<std::collections::HashSet<_>>()
        };

        assert_eq!(edge_set(&first), edge_set(&second));
        assert_eq!(id_set(&first), id_set(&second));
    }

    #[test]
    fn node_without_labels_gets_empty_type() {
        let mut source = endpoint(Some("a"), None, "Cafe");
        source.labels.clear();
        let triples = vec![triple(source, "SELLS", endpoint(Some("b"), None, "Menu"))];

        let view = flatten_triples(&triples);
        assert_eq!(view.nodes[0].node_type, "");
    }
}
