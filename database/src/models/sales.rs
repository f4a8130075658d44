use serde::Serialize;
use sqlx::FromRow;

// Typed projections of the read-only analytics tables. The external
// schema uses Korean column names keyed by district (자치구); queries
// alias them to these field names and cast numerics to float8.

/// Full per-district row from `seoul_sales_summary`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SalesSummaryRow {
    pub district: String,
    pub cafe_count: i64,
    pub monthly_total: f64,
    pub monthly_avg_per_cafe: f64,
}

/// Narrowed two-column projection behind `/sales/monthly_avg`.
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyAvgRow {
    pub district: String,
    pub monthly_avg_per_cafe: f64,
}

/// Per-district row from `district_cafe_ratio`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CafeRatioRow {
    pub district: String,
    pub cafe_count: i64,
    pub store_count: i64,
    pub cafe_ratio: f64,
}

/// One menu row from `menu_price_stats`; districts span several rows.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MenuPriceRow {
    pub district: String,
    pub menu: String,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

/// One ranked menu row from `popular_menu`; districts span several rows.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PopularMenuRow {
    pub district: String,
    pub menu: String,
    pub rank: i64,
    pub order_count: i64,
}

/// Per-district row from `district_cafe_count`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CafeCountRow {
    pub district: String,
    pub cafe_count: i64,
}

/// Coerce a stored average to an integer the way the frontend expects:
/// truncated toward zero, never rounded.
pub fn truncate_average(raw: f64) -> i64 {
    raw.trunc() as i64
}
