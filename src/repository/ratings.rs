//! Ratings repository, parameterized by the polymorphic owner reference

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{RateableRef, Rating},
};

#[derive(Clone)]
pub struct RatingsRepository {
    pool: Pool<Sqlite>,
}

impl RatingsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Create a rating under the given owner
    pub async fn create(&self, owner: RateableRef, value: i64) -> AppResult<Rating> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (value, rateable_id, rateable_type, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(value)
        .bind(owner.id)
        .bind(owner.kind.as_str())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a rating scoped to its owner. A rating id belonging to a
    /// different owner is treated as absent.
    pub async fn delete(&self, owner: RateableRef, rating_id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM ratings WHERE id = ? AND rateable_type = ? AND rateable_id = ?",
        )
        .bind(rating_id)
        .bind(owner.kind.as_str())
        .bind(owner.id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Rating {} not found for {} {}",
                rating_id,
                owner.kind.as_str(),
                owner.id
            )));
        }
        Ok(())
    }
}
