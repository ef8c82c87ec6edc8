//! Bundle model and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Bundle row: a named collection of books
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Bundle {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated bundle fields ready for persistence
#[derive(Debug, Clone)]
pub struct NewBundle {
    pub title: String,
    pub description: String,
}

/// Bundle create/update request body
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct BundlePayload {
    #[validate(
        required(message = "The title field is required."),
        length(max = 255, message = "The title may not be greater than 255 characters.")
    )]
    pub title: Option<String>,
    #[validate(required(message = "The description field is required."))]
    pub description: Option<String>,
}

impl BundlePayload {
    pub fn validated(self) -> Result<NewBundle, ValidationErrors> {
        let errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        match (self.title, self.description) {
            (Some(title), Some(description)) if errors.is_empty() => {
                Ok(NewBundle { title, description })
            }
            _ => Err(errors),
        }
    }
}
