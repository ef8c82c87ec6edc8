//! Rating model and the polymorphic owner reference

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// The kinds of entities a rating can be attached to.
///
/// The string form is the discriminator stored in `ratings.rateable_type`;
/// queries always filter on discriminator and owner id together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateableKind {
    Author,
    Book,
}

impl RateableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RateableKind::Author => "author",
            RateableKind::Book => "book",
        }
    }
}

/// Reference to the polymorphic owner of a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateableRef {
    pub kind: RateableKind,
    pub id: i64,
}

impl RateableRef {
    pub fn new(kind: RateableKind, id: i64) -> Self {
        Self { kind, id }
    }
}

/// Capability granting an entity a polymorphic rating association
pub trait Rateable {
    fn rateable_ref(&self) -> RateableRef;
}

/// Rating row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rating {
    pub id: i64,
    pub value: i64,
    pub rateable_id: i64,
    pub rateable_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rating create request body
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct RatingPayload {
    #[validate(
        required(message = "The value field is required."),
        range(min = 1, max = 5, message = "The value must be between 1 and 5.")
    )]
    pub value: Option<i64>,
}

impl RatingPayload {
    pub fn validated(self) -> Result<i64, ValidationErrors> {
        match self.validate() {
            Ok(()) => match self.value {
                Some(value) => Ok(value),
                None => Err(ValidationErrors::new()),
            },
            Err(e) => Err(e),
        }
    }
}
