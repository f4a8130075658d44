// Database access layer for the cafe analytics backend.
// Typed projections and repositories over the two Postgres stores,
// plus the Neo4j knowledge-graph client and flattener.

pub mod graph;
pub mod models;
pub mod repositories;

// Re-export commonly used items
pub use sqlx;

use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Open a connection pool against one of the backing Postgres stores.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}
