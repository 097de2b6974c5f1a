use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key the document store assigns to every stored record.
pub const ID_FIELD: &str = "_id";

/// A schema-less document: any JSON object, stored and returned verbatim.
///
/// No keys are required and values are unconstrained. Only JSON objects
/// deserialize into an `Item`; arrays, scalars and `null` are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The item as returned to clients: identical, minus the store identifier.
    pub fn without_id(mut self) -> Self {
        self.0.remove(ID_FIELD);
        self
    }
}

impl From<Map<String, Value>> for Item {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
