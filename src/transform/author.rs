//! Author transformer

use serde_json::{json, Map, Value};

use super::{book::BookTransformer, iso8601, Transformer};
use crate::models::{Author, BookWithAuthor};
use crate::response::{DataArraySerializer, SerializerStrategy};

/// An author plus its optionally-loaded relations.
///
/// `books` is `None` when the relation was not requested; the output then
/// omits the key entirely rather than nulling it.
pub struct AuthorResource {
    pub author: Author,
    pub books: Option<Vec<BookWithAuthor>>,
}

impl AuthorResource {
    pub fn new(author: Author) -> Self {
        Self {
            author,
            books: None,
        }
    }

    pub fn with_books(author: Author, books: Vec<BookWithAuthor>) -> Self {
        Self {
            author,
            books: Some(books),
        }
    }
}

pub struct AuthorTransformer;

impl AuthorTransformer {
    /// Relationship names eligible for `?include=`
    pub const INCLUDES: &'static [&'static str] = &["books"];
}

impl Transformer for AuthorTransformer {
    type Model = AuthorResource;

    fn transform(&self, resource: &AuthorResource) -> Map<String, Value> {
        let author = &resource.author;
        let mut out = Map::new();
        out.insert("id".to_string(), json!(author.id));
        out.insert("name".to_string(), json!(author.name));
        out.insert("gender".to_string(), json!(author.gender));
        out.insert("biography".to_string(), json!(author.biography));
        out.insert("created".to_string(), json!(iso8601(&author.created_at)));
        out.insert("updated".to_string(), json!(iso8601(&author.updated_at)));

        if let Some(books) = &resource.books {
            let nested = DataArraySerializer
                .collection(books.iter().map(|b| BookTransformer.transform(b)).collect());
            out.insert("books".to_string(), nested);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn author() -> Author {
        let ts = Utc.with_ymd_and_hms(2016, 10, 17, 14, 14, 31).unwrap();
        Author {
            id: 1,
            name: "H. G. Wells".to_string(),
            biography: "Prolific Science-Fiction Writer".to_string(),
            gender: "male".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn unrequested_books_are_omitted_not_nulled() {
        let out = AuthorTransformer.transform(&AuthorResource::new(author()));
        assert!(!out.contains_key("books"));
        assert_eq!(out["name"], json!("H. G. Wells"));
    }

    #[test]
    fn included_books_nest_under_their_own_data_key() {
        let ts = Utc.with_ymd_and_hms(2016, 10, 17, 14, 14, 31).unwrap();
        let book = BookWithAuthor {
            id: 9,
            title: "The Time Machine".to_string(),
            description: "A scientist travels far into the future".to_string(),
            author_id: 1,
            author: "H. G. Wells".to_string(),
            created_at: ts,
            updated_at: ts,
        };
        let out = AuthorTransformer.transform(&AuthorResource::with_books(author(), vec![book]));
        assert_eq!(out["books"]["data"][0]["title"], json!("The Time Machine"));
    }
}
