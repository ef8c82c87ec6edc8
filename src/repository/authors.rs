//! Authors repository

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{Author, NewAuthor, RateableKind},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Sqlite>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all authors
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Check whether an author exists
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    /// Create an author
    pub async fn create(&self, data: &NewAuthor) -> AppResult<Author> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name, biography, gender, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.biography)
        .bind(&data.gender)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an author (full replacement of fillable fields)
    pub async fn update(&self, id: i64, data: &NewAuthor) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors
            SET name = ?, biography = ?, gender = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.biography)
        .bind(&data.gender)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Delete an author, cascading to its books and all attached ratings.
    /// Runs in one transaction so a partial failure leaves no orphans.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM ratings WHERE rateable_type = ? \
             AND rateable_id IN (SELECT id FROM books WHERE author_id = ?)",
        )
        .bind(RateableKind::Book.as_str())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "DELETE FROM book_bundle WHERE book_id IN (SELECT id FROM books WHERE author_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM books WHERE author_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM ratings WHERE rateable_type = ? AND rateable_id = ?")
            .bind(RateableKind::Author.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
