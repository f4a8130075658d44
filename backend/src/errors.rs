use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Unexpected failures: these propagate to the caller as a server
/// fault. Expected absence of data (unknown district, missing graph
/// parameter) is not an error at this level; those answer 200 with a
/// structured payload.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Graph database error: {0}")]
    Neo4j(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
