//! Bundles service

use crate::{
    error::{AppError, AppResult},
    models::{Bundle, BundlePayload},
    repository::Repository,
    transform::{BundleResource, IncludeSet},
};

#[derive(Clone)]
pub struct BundlesService {
    repository: Repository,
}

impl BundlesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BundleResource>> {
        let bundles = self.repository.bundles.list().await?;
        Ok(bundles.into_iter().map(BundleResource::new).collect())
    }

    pub async fn get(&self, id: i64, includes: &IncludeSet) -> AppResult<BundleResource> {
        let bundle = self.repository.bundles.get_by_id(id).await?;
        if includes.contains("books") {
            let books = self.repository.books.list_by_bundle(id).await?;
            Ok(BundleResource::with_books(bundle, books))
        } else {
            Ok(BundleResource::new(bundle))
        }
    }

    pub async fn create(&self, payload: BundlePayload) -> AppResult<Bundle> {
        let data = payload.validated().map_err(AppError::Validation)?;
        self.repository.bundles.create(&data).await
    }

    pub async fn update(&self, id: i64, payload: BundlePayload) -> AppResult<Bundle> {
        self.repository.bundles.get_by_id(id).await?;
        let data = payload.validated().map_err(AppError::Validation)?;
        self.repository.bundles.update(id, &data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.bundles.delete(id).await
    }

    /// Attach a book; both sides must exist. Returns the bundle for the
    /// response envelope.
    pub async fn attach_book(&self, bundle_id: i64, book_id: i64) -> AppResult<BundleResource> {
        let bundle = self.repository.bundles.get_by_id(bundle_id).await?;
        if !self.repository.books.exists(book_id).await? {
            return Err(AppError::NotFound(format!("Book {} not found", book_id)));
        }
        self.repository.bundles.attach_book(bundle_id, book_id).await?;
        Ok(BundleResource::new(bundle))
    }

    /// Detach a book; the association goes, both records stay.
    pub async fn detach_book(&self, bundle_id: i64, book_id: i64) -> AppResult<()> {
        self.repository.bundles.get_by_id(bundle_id).await?;
        if !self.repository.books.exists(book_id).await? {
            return Err(AppError::NotFound(format!("Book {} not found", book_id)));
        }
        self.repository.bundles.detach_book(bundle_id, book_id).await
    }
}
