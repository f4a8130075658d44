use std::sync::Arc;

use seoulcafe_database::graph::GraphClient;
use seoulcafe_database::repositories::{AnswerRepository, SalesRepository};

/// Shared application state. Repositories hold their own connection
/// pools; the graph client is absent when Neo4j is not configured.
#[derive(Clone)]
pub struct AppState {
    pub answers: AnswerRepository,
    pub sales: SalesRepository,
    pub graph: Option<Arc<GraphClient>>,
}
