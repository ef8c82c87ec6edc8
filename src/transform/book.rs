//! Book transformer

use serde_json::{json, Map, Value};

use super::{iso8601, Transformer};
use crate::models::BookWithAuthor;

/// Maps a book to its output shape; the author appears by name, never by id.
pub struct BookTransformer;

impl Transformer for BookTransformer {
    type Model = BookWithAuthor;

    fn transform(&self, book: &BookWithAuthor) -> Map<String, Value> {
        let mut out = Map::new();
        out.insert("id".to_string(), json!(book.id));
        out.insert("title".to_string(), json!(book.title));
        out.insert("description".to_string(), json!(book.description));
        out.insert("author".to_string(), json!(book.author));
        out.insert("created".to_string(), json!(iso8601(&book.created_at)));
        out.insert("updated".to_string(), json!(iso8601(&book.updated_at)));
        out
    }
}
