use std::env;

const DEFAULT_ORIGIN: &str = "https://capstone-app-mu.vercel.app";

/// Runtime configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Answer store (keyword recommendation DB).
    pub database_url: String,
    /// Sales/analytics store, populated by the external pipeline.
    pub sales_database_url: String,
    pub neo4j_uri: Option<String>,
    pub neo4j_user: String,
    pub neo4j_password: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Read configuration from the environment. Both Postgres
    /// connection strings are mandatory; the process must not come up
    /// without them.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            sales_database_url: env::var("SALES_DATABASE_URL")
                .expect("SALES_DATABASE_URL must be set"),
            neo4j_uri: env::var("NEO4J_URI").ok().filter(|v| !v.trim().is_empty()),
            neo4j_user: env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".to_string()),
            neo4j_password: env::var("NEO4J_PASSWORD").unwrap_or_else(|_| "password".to_string()),
            allowed_origins: parse_origins(env::var("ALLOWED_ORIGINS").ok()),
        }
    }
}

fn parse_origins(raw: Option<String>) -> Vec<String> {
    raw.unwrap_or_else(|| DEFAULT_ORIGIN.to_string())
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
