use actix_web::{web, HttpResponse};
use serde::Serialize;

use seoulcafe_database::models::SaveRecord;

use crate::errors::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub count: usize,
}

/// Replace the whole answer store with the posted batch. Destructive
/// by contract: only the latest batch survives.
pub async fn save_answers(
    state: web::Data<AppState>,
    batch: web::Json<Vec<SaveRecord>>,
) -> ApiResult<HttpResponse> {
    let batch = batch.into_inner();
    let count = state
        .answers
        .replace_all(&batch)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    tracing::info!("answer store replaced with {} records", count);

    Ok(HttpResponse::Ok().json(SaveResponse {
        status: "success",
        count,
    }))
}
