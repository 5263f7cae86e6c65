use crate::property::SchemaProperty;
use serde::Serialize;
use serde_json::{Map, Value, json};

///
/// SchemaDocument
///
/// The terminal artifact: the full ordered property set of a root entity
/// plus the field identifiers that must be present in every valid stored
/// instance. Built once per derivation, immutable afterwards.
///
/// Invariant: every identifier in `required` also names a property in
/// `properties`. Required-set membership is a presence test only.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaDocument {
    properties: Vec<SchemaProperty>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    required: Vec<String>,
}

impl SchemaDocument {
    #[must_use]
    pub const fn builder() -> SchemaDocumentBuilder {
        SchemaDocumentBuilder {
            properties: Vec::new(),
            required: Vec::new(),
        }
    }

    #[must_use]
    pub fn properties(&self) -> &[SchemaProperty] {
        &self.properties
    }

    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    #[must_use]
    pub fn is_required(&self, identifier: &str) -> bool {
        self.required.iter().any(|name| name == identifier)
    }

    /// Render the full `$jsonSchema` envelope, properties in declaration
    /// order.
    #[must_use]
    pub fn to_document(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("bsonType".to_string(), json!("object"));

        if !self.required.is_empty() {
            schema.insert("required".to_string(), json!(self.required));
        }

        let mut properties = Map::new();
        for property in &self.properties {
            properties.insert(property.identifier().to_string(), property.object().to_json());
        }
        schema.insert("properties".to_string(), Value::Object(properties));

        json!({ "$jsonSchema": Value::Object(schema) })
    }
}

///
/// SchemaDocumentBuilder
///

#[derive(Debug)]
pub struct SchemaDocumentBuilder {
    properties: Vec<SchemaProperty>,
    required: Vec<String>,
}

impl SchemaDocumentBuilder {
    #[must_use]
    pub fn property(mut self, property: SchemaProperty) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn properties(mut self, properties: impl IntoIterator<Item = SchemaProperty>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Mark a field identifier as required. Duplicate names collapse; the
    /// required set is a presence test, not a sequence.
    #[must_use]
    pub fn required(mut self, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        if !self.required.contains(&identifier) {
            self.required.push(identifier);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> SchemaDocument {
        SchemaDocument {
            properties: self.properties,
            required: self.required,
        }
    }
}
