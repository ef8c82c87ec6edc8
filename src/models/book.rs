//! Book model and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::rating::{Rateable, RateableKind, RateableRef};

/// Book row joined with its author's name, the shape the API works with
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookWithAuthor {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author_id: i64,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rateable for BookWithAuthor {
    fn rateable_ref(&self) -> RateableRef {
        RateableRef::new(RateableKind::Book, self.id)
    }
}

/// Validated book fields ready for persistence
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub description: String,
    pub author_id: i64,
}

/// Validated update: author_id stays untouched when the body omits it
#[derive(Debug, Clone)]
pub struct BookChanges {
    pub title: String,
    pub description: String,
    pub author_id: Option<i64>,
}

/// Book create request body
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(
        required(message = "The title field is required."),
        length(max = 255, message = "The title may not be greater than 255 characters.")
    )]
    pub title: Option<String>,
    #[validate(required(message = "The description field is required."))]
    pub description: Option<String>,
    #[validate(required(message = "The author id field is required."))]
    pub author_id: Option<i64>,
}

impl CreateBook {
    pub fn validated(self) -> Result<NewBook, ValidationErrors> {
        let errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        match (self.title, self.description, self.author_id) {
            (Some(title), Some(description), Some(author_id)) if errors.is_empty() => Ok(NewBook {
                title,
                description,
                author_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Book update request body; any `id` key is ignored on deserialization
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(
        required(message = "The title field is required."),
        length(max = 255, message = "The title may not be greater than 255 characters.")
    )]
    pub title: Option<String>,
    #[validate(required(message = "The description field is required."))]
    pub description: Option<String>,
    pub author_id: Option<i64>,
}

impl UpdateBook {
    pub fn validated(self) -> Result<BookChanges, ValidationErrors> {
        let errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        match (self.title, self.description) {
            (Some(title), Some(description)) if errors.is_empty() => Ok(BookChanges {
                title,
                description,
                author_id: self.author_id,
            }),
            _ => Err(errors),
        }
    }
}
