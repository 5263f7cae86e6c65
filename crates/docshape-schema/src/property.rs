use crate::object::SchemaObject;
use serde::Serialize;
use serde_json::{Map, Value};

///
/// SchemaProperty
///
/// One named field in a schema document: the identifier under which the
/// value is stored plus its type constraint fragment.
///
/// Invariant: the identifier is never empty; the mapping layer validates
/// property names before any schema is derived from them.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaProperty {
    identifier: String,
    object: SchemaObject,
}

impl SchemaProperty {
    #[must_use]
    pub fn named(identifier: impl Into<String>, object: SchemaObject) -> Self {
        Self {
            identifier: identifier.into(),
            object,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub const fn object(&self) -> &SchemaObject {
        &self.object
    }

    /// Render as a single-entry `{identifier: fragment}` object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut doc = Map::new();
        doc.insert(self.identifier.clone(), self.object.to_json());

        Value::Object(doc)
    }
}
