//! Resource transformers: map entities to their external output shape
//!
//! Each transformer declares an explicit field mapping (internal column
//! names never leak) plus the set of relationship names eligible for
//! optional inclusion. Inclusion is driven by the caller's `?include=`
//! list, parsed into a validated [`IncludeSet`] before use.

pub mod author;
pub mod book;
pub mod bundle;
pub mod rating;

pub use author::{AuthorResource, AuthorTransformer};
pub use book::BookTransformer;
pub use bundle::{BundleResource, BundleTransformer};
pub use rating::RatingTransformer;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Declarative mapping from an entity to its serializable output fields
pub trait Transformer {
    type Model;

    fn transform(&self, model: &Self::Model) -> Map<String, Value>;
}

/// Timestamps render as ISO-8601 with offset, e.g. `2016-10-17T14:14:31+00:00`
pub(crate) fn iso8601(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Validated set of relationship names requested for inclusion.
///
/// Unknown names are rejected outright rather than silently ignored.
#[derive(Debug, Default)]
pub struct IncludeSet(Vec<String>);

impl IncludeSet {
    pub fn parse(raw: Option<&str>, allowed: &[&str]) -> Result<Self, AppError> {
        let mut names: Vec<String> = Vec::new();
        if let Some(raw) = raw {
            for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                if !allowed.contains(&name) {
                    return Err(AppError::BadRequest(format!(
                        "Unknown include '{}'",
                        name
                    )));
                }
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(Self(names))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_allowed_names() {
        let set = IncludeSet::parse(Some("books"), &["books"]).unwrap();
        assert!(set.contains("books"));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = IncludeSet::parse(Some("publisher"), &["books"]).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn parse_handles_empty_and_duplicate_segments() {
        let set = IncludeSet::parse(Some("books,,books, "), &["books"]).unwrap();
        assert!(set.contains("books"));
        assert!(!set.contains("ratings"));
    }

    #[test]
    fn no_include_parameter_means_empty_set() {
        let set = IncludeSet::parse(None, &["books"]).unwrap();
        assert!(!set.contains("books"));
    }
}
