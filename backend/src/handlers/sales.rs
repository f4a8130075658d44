use actix_web::{web, HttpResponse};
use serde::Serialize;

use seoulcafe_database::models::truncate_average;

use crate::errors::{ApiError, ApiResult};
use crate::state::AppState;

/// Response body for `/sales/monthly_avg/{district}`.
#[derive(Debug, Serialize)]
pub struct MonthlyAvg {
    pub district: String,
    pub average: i64,
}

/// An unknown district is expected absence of data, answered with
/// HTTP 200 and a message embedding the exact requested name.
fn district_not_found(district: &str) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "error": format!("no data for district '{}'", district)
    }))
}

pub async fn sales_summary(
    state: web::Data<AppState>,
    district: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let district = district.into_inner();
    let row = state
        .sales
        .summary(&district)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    Ok(match row {
        Some(row) => HttpResponse::Ok().json(row),
        None => district_not_found(&district),
    })
}

pub async fn monthly_avg(
    state: web::Data<AppState>,
    district: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let district = district.into_inner();
    let row = state
        .sales
        .monthly_avg(&district)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    Ok(match row {
        Some(row) => HttpResponse::Ok().json(MonthlyAvg {
            district: row.district,
            average: truncate_average(row.monthly_avg_per_cafe),
        }),
        None => district_not_found(&district),
    })
}

pub async fn cafe_ratio(
    state: web::Data<AppState>,
    district: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let district = district.into_inner();
    let row = state
        .sales
        .cafe_ratio(&district)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    Ok(match row {
        Some(row) => HttpResponse::Ok().json(row),
        None => district_not_found(&district),
    })
}

pub async fn menu_price_stats(
    state: web::Data<AppState>,
    district: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let district = district.into_inner();
    let rows = state
        .sales
        .menu_price_stats(&district)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    Ok(if rows.is_empty() {
        district_not_found(&district)
    } else {
        HttpResponse::Ok().json(rows)
    })
}

pub async fn popular_menu(
    state: web::Data<AppState>,
    district: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let district = district.into_inner();
    let rows = state
        .sales
        .popular_menu(&district)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    Ok(if rows.is_empty() {
        district_not_found(&district)
    } else {
        HttpResponse::Ok().json(rows)
    })
}

pub async fn cafe_count(
    state: web::Data<AppState>,
    district: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let district = district.into_inner();
    let row = state
        .sales
        .cafe_count(&district)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    Ok(match row {
        Some(row) => HttpResponse::Ok().json(row),
        None => district_not_found(&district),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[actix_web::test]
    async fn not_found_payload_embeds_the_requested_name() {
        let resp = district_not_found("은평구");
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("은평구"));
    }

    #[test]
    fn monthly_avg_body_shape() {
        let body = serde_json::to_value(MonthlyAvg {
            district: "강남구".to_string(),
            average: 123456,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "district": "강남구", "average": 123456 })
        );
    }
}
