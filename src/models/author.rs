//! Author model and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use super::rating::{Rateable, RateableKind, RateableRef};

/// Full author row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub biography: String,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rateable for Author {
    fn rateable_ref(&self) -> RateableRef {
        RateableRef::new(RateableKind::Author, self.id)
    }
}

/// Validated author fields ready for persistence
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub biography: String,
    pub gender: String,
}

/// Author create/update request body. The same rules apply on both verbs.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct AuthorPayload {
    #[validate(
        required(message = "The name field is required."),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    pub name: Option<String>,
    #[validate(required(message = "The biography field is required."))]
    pub biography: Option<String>,
    #[validate(required(message = "The gender field is required."))]
    pub gender: Option<String>,
}

impl AuthorPayload {
    /// Validate the payload and unwrap it into persistable fields.
    ///
    /// A present-but-invalid gender yields exactly one error, keyed `gender`,
    /// with the dedicated format message.
    pub fn validated(self) -> Result<NewAuthor, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };

        if let Some(gender) = &self.gender {
            if gender != "male" && gender != "female" {
                let mut err = ValidationError::new("gender_format");
                err.message =
                    Some("Gender format is invalid: must equal 'male' or 'female'".into());
                errors.add("gender", err);
            }
        }

        match (self.name, self.biography, self.gender) {
            (Some(name), Some(biography), Some(gender)) if errors.is_empty() => Ok(NewAuthor {
                name,
                biography,
                gender,
            }),
            _ => Err(errors),
        }
    }
}
