//! Bundle transformer

use serde_json::{json, Map, Value};

use super::{book::BookTransformer, iso8601, Transformer};
use crate::models::{BookWithAuthor, Bundle};
use crate::response::{DataArraySerializer, SerializerStrategy};

/// A bundle plus its optionally-loaded books
pub struct BundleResource {
    pub bundle: Bundle,
    pub books: Option<Vec<BookWithAuthor>>,
}

impl BundleResource {
    pub fn new(bundle: Bundle) -> Self {
        Self {
            bundle,
            books: None,
        }
    }

    pub fn with_books(bundle: Bundle, books: Vec<BookWithAuthor>) -> Self {
        Self {
            bundle,
            books: Some(books),
        }
    }
}

pub struct BundleTransformer;

impl BundleTransformer {
    pub const INCLUDES: &'static [&'static str] = &["books"];
}

impl Transformer for BundleTransformer {
    type Model = BundleResource;

    fn transform(&self, resource: &BundleResource) -> Map<String, Value> {
        let bundle = &resource.bundle;
        let mut out = Map::new();
        out.insert("id".to_string(), json!(bundle.id));
        out.insert("title".to_string(), json!(bundle.title));
        out.insert("description".to_string(), json!(bundle.description));
        out.insert("created".to_string(), json!(iso8601(&bundle.created_at)));
        out.insert("updated".to_string(), json!(iso8601(&bundle.updated_at)));

        if let Some(books) = &resource.books {
            let nested = DataArraySerializer
                .collection(books.iter().map(|b| BookTransformer.transform(b)).collect());
            out.insert("books".to_string(), nested);
        }

        out
    }
}
