//! Books repository

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{BookWithAuthor, NewBook, RateableKind},
};

const SELECT_WITH_AUTHOR: &str = "SELECT b.id, b.title, b.description, b.author_id, \
     a.name AS author, b.created_at, b.updated_at \
     FROM books b JOIN authors a ON a.id = b.author_id";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books with their author's name resolved
    pub async fn list(&self) -> AppResult<Vec<BookWithAuthor>> {
        let query = format!("{} ORDER BY b.id", SELECT_WITH_AUTHOR);
        let rows = sqlx::query_as::<_, BookWithAuthor>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<BookWithAuthor> {
        let query = format!("{} WHERE b.id = ?", SELECT_WITH_AUTHOR);
        sqlx::query_as::<_, BookWithAuthor>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Check whether a book exists
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    /// All books belonging to one author
    pub async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<BookWithAuthor>> {
        let query = format!("{} WHERE b.author_id = ? ORDER BY b.id", SELECT_WITH_AUTHOR);
        let rows = sqlx::query_as::<_, BookWithAuthor>(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// All books attached to one bundle
    pub async fn list_by_bundle(&self, bundle_id: i64) -> AppResult<Vec<BookWithAuthor>> {
        let query = format!(
            "{} JOIN book_bundle bb ON bb.book_id = b.id \
             WHERE bb.bundle_id = ? ORDER BY b.id",
            SELECT_WITH_AUTHOR
        );
        let rows = sqlx::query_as::<_, BookWithAuthor>(&query)
            .bind(bundle_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a book
    pub async fn create(&self, data: &NewBook) -> AppResult<BookWithAuthor> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, description, author_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.author_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        self.get_by_id(id).await
    }

    /// Update a book (full replacement of fillable fields)
    pub async fn update(&self, id: i64, data: &NewBook) -> AppResult<BookWithAuthor> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, description = ?, author_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.author_id)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        self.get_by_id(id).await
    }

    /// Delete a book, removing its ratings and bundle memberships with it
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM ratings WHERE rateable_type = ? AND rateable_id = ?")
            .bind(RateableKind::Book.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM book_bundle WHERE book_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
