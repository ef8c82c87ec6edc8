//! Rating transformer

use serde_json::{json, Map, Value};

use super::{iso8601, Transformer};
use crate::models::Rating;

/// Maps a rating to its output shape; the owner reference stays internal.
pub struct RatingTransformer;

impl Transformer for RatingTransformer {
    type Model = Rating;

    fn transform(&self, rating: &Rating) -> Map<String, Value> {
        let mut out = Map::new();
        out.insert("id".to_string(), json!(rating.id));
        out.insert("value".to_string(), json!(rating.value));
        out.insert("created".to_string(), json!(iso8601(&rating.created_at)));
        out.insert("updated".to_string(), json!(iso8601(&rating.updated_at)));
        out
    }
}
