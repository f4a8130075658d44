mod config;
mod errors;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use seoulcafe_database::graph::GraphClient;
use seoulcafe_database::repositories::{AnswerRepository, SalesRepository};

use config::Config;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Connecting to answer store...");
    let answers_pool = seoulcafe_database::connect_pool(&config.database_url, 5)
        .await
        .expect("Failed to connect to answer store");

    tracing::info!("Connecting to sales analytics store...");
    let sales_pool = seoulcafe_database::connect_pool(&config.sales_database_url, 5)
        .await
        .expect("Failed to connect to sales analytics store");

    let graph = match config.neo4j_uri.as_deref() {
        Some(uri) => {
            tracing::info!("Connecting to Neo4j at {}...", uri);
            match GraphClient::connect(uri, &config.neo4j_user, &config.neo4j_password).await {
                Ok(client) => {
                    tracing::info!("Neo4j connection established");
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::error!("Failed to connect to Neo4j: {}", e);
                    tracing::warn!("/graph will answer with a configuration error");
                    None
                }
            }
        }
        None => {
            tracing::warn!("NEO4J_URI not set; /graph will answer with a configuration error");
            None
        }
    };

    let state = AppState {
        answers: AnswerRepository::new(answers_pool),
        sales: SalesRepository::new(sales_pool),
        graph,
    };

    let allowed_origins = config.allowed_origins.clone();
    let port = config.port;
    tracing::info!("Starting on port {}", port);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(routes::configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
