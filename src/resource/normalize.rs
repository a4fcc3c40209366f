//! Coercion of API responses into canonical list and singleton shapes.
//!
//! Endpoints disagree on envelopes: some return a bare value, others wrap
//! it in `data`, `items` or `item`. Nothing here fails; a shape that cannot
//! be understood yields an empty list or `None`.

use serde_json::Value;

use super::entity::Entity;

/// Envelope fields that may hold a list payload, in lookup order.
const LIST_ENVELOPES: [&str; 2] = ["data", "items"];
/// Envelope fields that may hold a single payload, in lookup order.
const SINGLE_ENVELOPES: [&str; 2] = ["data", "item"];

/// How a resource's GET response is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    /// A collection: every element of the list payload.
    #[default]
    List,
    /// A singleton resource: at most one entity.
    Single,
}

impl Shape {
    pub fn extract(self, response: &Value) -> Vec<Entity> {
        match self {
            Shape::List => normalize_list(response),
            Shape::Single => normalize_single(response).into_iter().collect(),
        }
    }
}

/// Extracts the entity sequence from a list response.
///
/// Accepts a bare array, `{"data": [...]}` or `{"items": [...]}`. Order is
/// preserved and every entity gets its canonical `id`.
pub fn normalize_list(response: &Value) -> Vec<Entity> {
    let items = match response {
        Value::Array(items) => Some(items),
        Value::Object(map) => LIST_ENVELOPES
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    };

    match items {
        Some(items) => items.iter().filter_map(to_entity).collect(),
        None => {
            tracing::debug!("Unrecognised list response shape, treating as empty");
            Vec::new()
        }
    }
}

/// Extracts a single entity from a singleton response.
///
/// Accepts a bare object, `{"data": obj}`, `{"item": obj}`, or any list
/// shape, in which case the first element is taken.
pub fn normalize_single(response: &Value) -> Option<Entity> {
    let item = match response {
        Value::Array(items) => items.first()?,
        Value::Object(map) => {
            let enveloped = SINGLE_ENVELOPES
                .iter()
                .chain(std::iter::once(&"items"))
                .find_map(|key| map.get(*key).filter(|v| !v.is_null()));

            match enveloped {
                Some(Value::Array(items)) => items.first()?,
                Some(value) => value,
                None => response,
            }
        }
        _ => return None,
    };
    to_entity(item)
}

fn to_entity(value: &Value) -> Option<Entity> {
    match Entity::from_value(value.clone()) {
        Some(entity) => Some(entity.with_canonical_id()),
        None => {
            tracing::debug!(value = %value, "Skipping non-object element");
            None
        }
    }
}
