//! Response formatting: transformed entities wrapped in the API envelope

use serde_json::{json, Map, Value};

use crate::transform::Transformer;

/// Strategy controlling the envelope shape.
///
/// A single strategy is configured once on the shared [`ResponseFormatter`]
/// so every endpoint produces structurally consistent envelopes.
pub trait SerializerStrategy {
    fn item(&self, data: Map<String, Value>) -> Value;
    fn collection(&self, data: Vec<Map<String, Value>>) -> Value;
}

/// Default strategy: everything nests under a `data` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataArraySerializer;

impl SerializerStrategy for DataArraySerializer {
    fn item(&self, data: Map<String, Value>) -> Value {
        json!({ "data": data })
    }

    fn collection(&self, data: Vec<Map<String, Value>>) -> Value {
        json!({ "data": data })
    }
}

/// Wraps a transformer and an entity (or collection) into the final envelope.
#[derive(Debug, Clone, Default)]
pub struct ResponseFormatter<S: SerializerStrategy = DataArraySerializer> {
    serializer: S,
}

impl<S: SerializerStrategy> ResponseFormatter<S> {
    pub fn new(serializer: S) -> Self {
        Self { serializer }
    }

    /// `{"data": {...}}` for a single entity
    pub fn item<T: Transformer>(&self, model: &T::Model, transformer: &T) -> Value {
        self.serializer.item(transformer.transform(model))
    }

    /// `{"data": [...]}` for a homogeneous collection
    pub fn collection<T: Transformer>(&self, models: &[T::Model], transformer: &T) -> Value {
        self.serializer
            .collection(models.iter().map(|m| transformer.transform(m)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl Transformer for Noop {
        type Model = i64;

        fn transform(&self, model: &i64) -> Map<String, Value> {
            let mut out = Map::new();
            out.insert("id".to_string(), json!(model));
            out
        }
    }

    #[test]
    fn item_wraps_in_data_key() {
        let formatter: ResponseFormatter = ResponseFormatter::default();
        assert_eq!(formatter.item(&7, &Noop), json!({"data": {"id": 7}}));
    }

    #[test]
    fn collection_wraps_in_data_array() {
        let formatter: ResponseFormatter = ResponseFormatter::default();
        assert_eq!(
            formatter.collection(&[1, 2], &Noop),
            json!({"data": [{"id": 1}, {"id": 2}]})
        );
    }
}
