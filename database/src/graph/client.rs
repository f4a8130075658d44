use anyhow::{anyhow, Context, Result};
use neo4rs::{query, ConfigBuilder, Graph, Node, Relation};

use super::{flatten_triples, GraphEndpoint, GraphView, Triple};

/// Fixed bounded traversal behind `/graph?all=true`. Row order is
/// whatever the database assigns.
const FULL_GRAPH_CYPHER: &str = "MATCH (n)-[r]->(m) RETURN n, r, m LIMIT 600";

/// Connection handle to the knowledge graph. Works with both local
/// Neo4j (`bolt://`) and AuraDB (`neo4j+s://`) URIs.
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self> {
        let config = ConfigBuilder::default()
            .uri(uri)
            .user(user)
            .password(password)
            .db("neo4j")
            .build()
            .map_err(|e| anyhow!("Failed to build Neo4j config: {}", e))?;

        let graph = Graph::connect(config)
            .await
            .context("Failed to connect to Neo4j")?;

        // Round-trip once so a bad endpoint surfaces at startup
        // instead of on the first /graph request.
        let mut result = graph
            .execute(query("RETURN 1 AS test"))
            .await
            .context("Neo4j connection test failed")?;
        let _ = result
            .next()
            .await
            .context("Neo4j connection test failed")?;

        Ok(Self { graph })
    }

    /// Run the bounded full traversal and flatten it for rendering.
    pub async fn full_graph(&self) -> Result<GraphView> {
        let mut result = self
            .graph
            .execute(query(FULL_GRAPH_CYPHER))
            .await
            .context("Failed to run graph traversal")?;

        let mut triples = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .context("Failed to read traversal row")?
        {
            let source: Node = row.get("n").context("Traversal row missing source node")?;
            let rel: Relation = row.get("r").context("Traversal row missing relationship")?;
            let target: Node = row.get("m").context("Traversal row missing target node")?;

            triples.push(Triple {
                source: endpoint_from(&source),
                rel_type: rel.typ().to_string(),
                target: endpoint_from(&target),
            });
        }

        Ok(flatten_triples(&triples))
    }
}

fn endpoint_from(node: &Node) -> GraphEndpoint {
    GraphEndpoint {
        name: node.get::<String>("name").ok(),
        value: node.get::<String>("value").ok(),
        labels: node.labels().into_iter().map(String::from).collect(),
    }
}
