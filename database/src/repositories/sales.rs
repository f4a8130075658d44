use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::sales::{
    CafeCountRow, CafeRatioRow, MenuPriceRow, MonthlyAvgRow, PopularMenuRow, SalesSummaryRow,
};

/// Read-only access to the district analytics store. The tables are
/// owned and populated by an external pipeline; each lookup is one
/// exact match on the district-name column.
#[derive(Clone)]
pub struct SalesRepository {
    pool: PgPool,
}

impl SalesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn summary(&self, district: &str) -> Result<Option<SalesSummaryRow>> {
        let row = sqlx::query_as::<_, SalesSummaryRow>(
            r#"
            SELECT "자치구" AS district,
                   "카페_수" AS cafe_count,
                   "월_총_매출"::float8 AS monthly_total,
                   "카페당_월_평균_매출"::float8 AS monthly_avg_per_cafe
            FROM seoul_sales_summary
            WHERE "자치구" = $1
            "#,
        )
        .bind(district)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load sales summary")?;

        Ok(row)
    }

    pub async fn monthly_avg(&self, district: &str) -> Result<Option<MonthlyAvgRow>> {
        let row = sqlx::query_as::<_, MonthlyAvgRow>(
            r#"
            SELECT "자치구" AS district,
                   "카페당_월_평균_매출"::float8 AS monthly_avg_per_cafe
            FROM seoul_sales_summary
            WHERE "자치구" = $1
            "#,
        )
        .bind(district)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load monthly average")?;

        Ok(row)
    }

    pub async fn cafe_ratio(&self, district: &str) -> Result<Option<CafeRatioRow>> {
        let row = sqlx::query_as::<_, CafeRatioRow>(
            r#"
            SELECT "자치구" AS district,
                   "카페_수" AS cafe_count,
                   "전체_점포_수" AS store_count,
                   "카페_비율"::float8 AS cafe_ratio
            FROM district_cafe_ratio
            WHERE "자치구" = $1
            "#,
        )
        .bind(district)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load cafe ratio")?;

        Ok(row)
    }

    pub async fn menu_price_stats(&self, district: &str) -> Result<Vec<MenuPriceRow>> {
        let rows = sqlx::query_as::<_, MenuPriceRow>(
            r#"
            SELECT "자치구" AS district,
                   "메뉴" AS menu,
                   "평균_가격"::float8 AS avg_price,
                   "최저_가격"::float8 AS min_price,
                   "최고_가격"::float8 AS max_price
            FROM menu_price_stats
            WHERE "자치구" = $1
            "#,
        )
        .bind(district)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load menu price stats")?;

        Ok(rows)
    }

    pub async fn popular_menu(&self, district: &str) -> Result<Vec<PopularMenuRow>> {
        let rows = sqlx::query_as::<_, PopularMenuRow>(
            r#"
            SELECT "자치구" AS district,
                   "메뉴" AS menu,
                   "순위" AS rank,
                   "판매량" AS order_count
            FROM popular_menu
            WHERE "자치구" = $1
            ORDER BY "순위"
            "#,
        )
        .bind(district)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load popular menu")?;

        Ok(rows)
    }

    pub async fn cafe_count(&self, district: &str) -> Result<Option<CafeCountRow>> {
        let row = sqlx::query_as::<_, CafeCountRow>(
            r#"
            SELECT "자치구" AS district,
                   "카페_수" AS cafe_count
            FROM district_cafe_count
            WHERE "자치구" = $1
            "#,
        )
        .bind(district)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load cafe count")?;

        Ok(row)
    }
}
