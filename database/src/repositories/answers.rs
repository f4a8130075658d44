use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{normalize_recommendations, AnswerRecord, SaveRecord};

/// At most this many rows come back from a keyword search.
const SEARCH_LIMIT: i64 = 5;

const CREATE_ANSWERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS graphrag_answers (
    id serial PRIMARY KEY,
    question text,
    recommendations jsonb,
    keywords text[]
)
"#;

/// Read/write access to the answer store.
#[derive(Clone)]
pub struct AnswerRepository {
    pool: PgPool,
}

impl AnswerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive substring search over stored questions,
    /// ordered by ascending id. An empty result is a normal outcome.
    pub async fn search(&self, term: &str) -> Result<Vec<AnswerRecord>> {
        let pattern = format!("%{}%", term);

        let records = sqlx::query_as::<_, AnswerRecord>(
            r#"
            SELECT question, recommendations, keywords
            FROM graphrag_answers
            WHERE question ILIKE $1
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await
        .context("Failed to search answers")?;

        Ok(records)
    }

    /// Replace the table contents wholesale with the given batch.
    ///
    /// One transaction: ensure the table exists, truncate it with a
    /// fresh identity sequence, insert each record in input order. A
    /// failed load rolls back and cannot leave the table absent or
    /// half-replaced. Returns the number of input records processed.
    pub async fn replace_all(&self, batch: &[SaveRecord]) -> Result<usize> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin bulk load transaction")?;

        sqlx::query(CREATE_ANSWERS_TABLE)
            .execute(&mut *tx)
            .await
            .context("Failed to ensure answers table")?;

        sqlx::query("TRUNCATE graphrag_answers RESTART IDENTITY")
            .execute(&mut *tx)
            .await
            .context("Failed to truncate answers table")?;

        for record in batch {
            let recommendations = normalize_recommendations(&record.answer);

            sqlx::query(
                r#"
                INSERT INTO graphrag_answers (question, recommendations, keywords)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&record.question)
            .bind(&recommendations)
            .bind(&record.keywords)
            .execute(&mut *tx)
            .await
            .context("Failed to insert answer record")?;
        }

        tx.commit().await.context("Failed to commit bulk load")?;

        Ok(batch.len())
    }
}
