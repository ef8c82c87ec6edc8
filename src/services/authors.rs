//! Authors service

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorPayload, Rateable, Rating, RatingPayload},
    repository::Repository,
    transform::{AuthorResource, IncludeSet},
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<AuthorResource>> {
        let authors = self.repository.authors.list().await?;
        Ok(authors.into_iter().map(AuthorResource::new).collect())
    }

    /// Get one author, loading relations the caller asked to include
    pub async fn get(&self, id: i64, includes: &IncludeSet) -> AppResult<AuthorResource> {
        let author = self.repository.authors.get_by_id(id).await?;
        if includes.contains("books") {
            let books = self.repository.books.list_by_author(id).await?;
            Ok(AuthorResource::with_books(author, books))
        } else {
            Ok(AuthorResource::new(author))
        }
    }

    pub async fn create(&self, payload: AuthorPayload) -> AppResult<Author> {
        let data = payload.validated().map_err(AppError::Validation)?;
        self.repository.authors.create(&data).await
    }

    /// Update an author. The existence check runs before validation so a
    /// missing id is a 404 regardless of body contents.
    pub async fn update(&self, id: i64, payload: AuthorPayload) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await?;
        let data = payload.validated().map_err(AppError::Validation)?;
        self.repository.authors.update(id, &data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }

    /// Create a rating scoped to an author
    pub async fn create_rating(&self, author_id: i64, payload: RatingPayload) -> AppResult<Rating> {
        let author = self.repository.authors.get_by_id(author_id).await?;
        let value = payload.validated().map_err(AppError::Validation)?;
        self.repository
            .ratings
            .create(author.rateable_ref(), value)
            .await
    }

    /// Delete a rating scoped to an author
    pub async fn delete_rating(&self, author_id: i64, rating_id: i64) -> AppResult<()> {
        let author = self.repository.authors.get_by_id(author_id).await?;
        self.repository
            .ratings
            .delete(author.rateable_ref(), rating_id)
            .await
    }
}
