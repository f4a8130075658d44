mod client;
mod flatten;

pub use client::GraphClient;
pub use flatten::{flatten_triples, GraphEdge, GraphEndpoint, GraphNode, GraphView, Triple};
