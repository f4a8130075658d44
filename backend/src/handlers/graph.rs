use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use seoulcafe_database::graph::GraphView;

use crate::errors::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GraphParams {
    pub keyword: Option<String>,
    #[serde(default)]
    pub all: bool,
}

/// The three shapes `/graph` can answer with, all HTTP 200. The
/// keyword-scoped traversal is deliberately a placeholder until its
/// query is designed.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GraphResponse {
    Graph(GraphView),
    NotImplemented { message: String },
    MissingParameter { error: String },
}

/// Which traversal a request selects: the `all` flag wins, then a
/// non-empty keyword, otherwise the request is incomplete.
enum TraversalMode {
    Full,
    Keyword(String),
    Missing,
}

fn select_mode(all: bool, keyword: Option<&str>) -> TraversalMode {
    if all {
        TraversalMode::Full
    } else {
        match keyword.filter(|k| !k.is_empty()) {
            Some(keyword) => TraversalMode::Keyword(keyword.to_string()),
            None => TraversalMode::Missing,
        }
    }
}

pub async fn get_graph(
    state: web::Data<AppState>,
    params: web::Query<GraphParams>,
) -> ApiResult<HttpResponse> {
    let Some(client) = state.graph.as_ref() else {
        return Ok(HttpResponse::Ok().json(serde_json::json!({
            "error": "graph database is not configured"
        })));
    };

    let response = match select_mode(params.all, params.keyword.as_deref()) {
        TraversalMode::Full => {
            let view = client
                .full_graph()
                .await
                .map_err(|e| ApiError::Neo4j(e.to_string()))?;
            GraphResponse::Graph(view)
        }
        TraversalMode::Keyword(keyword) => GraphResponse::NotImplemented {
            message: format!("graph for keyword '{}' is not implemented yet", keyword),
        },
        TraversalMode::Missing => GraphResponse::MissingParameter {
            error: "keyword or all parameter is required".to_string(),
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use actix_web::{test as actix_test, App};
    use seoulcafe_database::graph::{GraphEdge, GraphNode};
    use seoulcafe_database::repositories::{AnswerRepository, SalesRepository};
    use seoulcafe_database::sqlx::postgres::PgPoolOptions;

    use super::*;

    // Lazy pools never touch the network, so the handler can be
    // driven without a live database.
    fn state_without_graph() -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/unused")
            .unwrap();

        AppState {
            answers: AnswerRepository::new(pool.clone()),
            sales: SalesRepository::new(pool),
            graph: None,
        }
    }

    #[actix_web::test]
    async fn unconfigured_graph_answers_with_error_payload() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state_without_graph()))
                .route("/graph", web::get().to(get_graph)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/graph?all=true").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "graph database is not configured");
    }

    #[test]
    fn all_flag_wins_over_keyword() {
        assert!(matches!(select_mode(true, Some("coffee")), TraversalMode::Full));
    }

    #[test]
    fn empty_keyword_counts_as_missing() {
        assert!(matches!(select_mode(false, Some("")), TraversalMode::Missing));
        assert!(matches!(select_mode(false, None), TraversalMode::Missing));
    }

    #[test]
    fn keyword_selects_the_scoped_traversal() {
        assert!(matches!(
            select_mode(false, Some("coffee")),
            TraversalMode::Keyword(k) if k == "coffee"
        ));
    }

    #[test]
    fn the_three_response_shapes_are_distinguishable() {
        let graph = serde_json::to_value(GraphResponse::Graph(GraphView {
            nodes: vec![GraphNode {
                id: "a".to_string(),
                node_type: "Cafe".to_string(),
            }],
            edges: vec![GraphEdge {
                source: "a".to_string(),
                target: "b".to_string(),
                label: "SELLS".to_string(),
            }],
        }))
        .unwrap();
        assert!(graph.get("nodes").is_some() && graph.get("edges").is_some());
        assert_eq!(graph["nodes"][0]["type"], "Cafe");

        let placeholder = serde_json::to_value(GraphResponse::NotImplemented {
            message: "graph for keyword 'x' is not implemented yet".to_string(),
        })
        .unwrap();
        assert!(placeholder.get("message").is_some());
        assert!(placeholder.get("nodes").is_none());

        let missing = serde_json::to_value(GraphResponse::MissingParameter {
            error: "keyword or all parameter is required".to_string(),
        })
        .unwrap();
        assert!(missing.get("error").is_some());
    }
}
