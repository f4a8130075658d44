use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Keyword search over stored answers: case-insensitive substring
/// match on the question, at most five rows, ascending id. No match
/// is an empty list, not an error.
pub async fn search_answers(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> ApiResult<HttpResponse> {
    let records = state
        .answers
        .search(&params.query)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    Ok(HttpResponse::Ok().json(records))
}
