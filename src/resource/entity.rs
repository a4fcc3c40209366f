use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical identifier field present on every normalized entity.
pub const ID_FIELD: &str = "id";
/// Alternative identifier field some endpoints use instead of `id`.
pub const LEGACY_ID_FIELD: &str = "_id";

/// A record type a [`ResourceManager`](super::ResourceManager) can hold.
///
/// Records are decoded from normalized entities, so a record sees the
/// canonical `id` field regardless of which field the server used.
pub trait Record: Clone + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Canonical identifier. Records without one cannot be updated or deleted.
    fn id(&self) -> Option<&str>;

    /// One-line description for listings.
    fn summary(&self) -> String;
}

/// Schema-less resource record: the raw field map returned by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Map<String, Value>);

impl Entity {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds an entity from a JSON object; any other value is rejected.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Sets `id` from `id`, falling back to `_id`. `null` counts as absent.
    ///
    /// Numeric identifiers become their decimal string so every id compares
    /// as a string. When neither field carries a value the `id` key is
    /// removed.
    pub(crate) fn with_canonical_id(mut self) -> Self {
        let id = [ID_FIELD, LEGACY_ID_FIELD]
            .iter()
            .find_map(|field| match self.0.get(*field) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(other) => Some(other.to_string()),
            });

        match id {
            Some(id) => {
                self.0.insert(ID_FIELD.to_string(), Value::String(id));
            }
            None => {
                self.0.remove(ID_FIELD);
            }
        }
        self
    }
}

impl Record for Entity {
    fn id(&self) -> Option<&str> {
        self.0
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    fn summary(&self) -> String {
        ["title", "name", "school", "company", "email"]
            .iter()
            .find_map(|field| self.0.get(*field).and_then(Value::as_str))
            .map(str::to_string)
            .or_else(|| self.id().map(str::to_string))
            .unwrap_or_else(|| "(untitled)".to_string())
    }
}
