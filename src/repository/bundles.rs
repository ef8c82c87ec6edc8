//! Bundles repository

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{Bundle, NewBundle},
};

#[derive(Clone)]
pub struct BundlesRepository {
    pool: Pool<Sqlite>,
}

impl BundlesRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all bundles
    pub async fn list(&self) -> AppResult<Vec<Bundle>> {
        let rows = sqlx::query_as::<_, Bundle>("SELECT * FROM bundles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get bundle by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Bundle> {
        sqlx::query_as::<_, Bundle>("SELECT * FROM bundles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bundle {} not found", id)))
    }

    /// Create a bundle
    pub async fn create(&self, data: &NewBundle) -> AppResult<Bundle> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Bundle>(
            r#"
            INSERT INTO bundles (title, description, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a bundle
    pub async fn update(&self, id: i64, data: &NewBundle) -> AppResult<Bundle> {
        sqlx::query_as::<_, Bundle>(
            r#"
            UPDATE bundles
            SET title = ?, description = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bundle {} not found", id)))
    }

    /// Delete a bundle; its join rows go with it, the books stay
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM book_bundle WHERE bundle_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM bundles WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Bundle {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Attach a book to a bundle; attaching twice is a no-op
    pub async fn attach_book(&self, bundle_id: i64, book_id: i64) -> AppResult<()> {
        sqlx::query("INSERT OR IGNORE INTO book_bundle (book_id, bundle_id) VALUES (?, ?)")
            .bind(book_id)
            .bind(bundle_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Detach a book from a bundle; detaching an unattached pair is a no-op
    pub async fn detach_book(&self, bundle_id: i64, book_id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM book_bundle WHERE book_id = ? AND bundle_id = ?")
            .bind(book_id)
            .bind(bundle_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
