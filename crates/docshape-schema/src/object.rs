use crate::{
    property::SchemaProperty,
    types::{Literal, SchemaType},
};
use serde::Serialize;
use serde_json::{Map, Value, json};

///
/// SchemaObject
///
/// The type constraint fragment attached to one field: the accepted
/// representation types, an optional permitted-value set, an optional array
/// item type, and (for embedded objects only) a nested property set with its
/// own required list.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaObject {
    pub types: Vec<SchemaType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub possible_values: Vec<Literal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<SchemaProperty>>,
}

impl SchemaObject {
    #[must_use]
    pub fn of(ty: SchemaType) -> Self {
        Self {
            types: vec![ty],
            possible_values: Vec::new(),
            items: None,
            required: Vec::new(),
            properties: None,
        }
    }

    /// An unconstrained fragment, rendered as a generic object.
    #[must_use]
    pub fn untyped() -> Self {
        Self::of(SchemaType::Object)
    }

    #[must_use]
    pub fn with_possible_values(mut self, values: impl IntoIterator<Item = Literal>) -> Self {
        self.possible_values = values.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_items(mut self, items: SchemaType) -> Self {
        self.items = Some(items);
        self
    }

    /// Attach the nested property set; this is what marks the fragment as an
    /// embedded object.
    #[must_use]
    pub fn with_properties(mut self, properties: impl IntoIterator<Item = SchemaProperty>) -> Self {
        self.properties = Some(properties.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: impl IntoIterator<Item = String>) -> Self {
        self.required = required.into_iter().collect();
        self
    }

    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.properties.is_some()
    }

    /// Render as a `$jsonSchema` fragment.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut doc = Map::new();

        match self.types.as_slice() {
            [] => {}
            [ty] => {
                doc.insert("bsonType".to_string(), json!(ty.as_str()));
            }
            types => {
                let aliases: Vec<&str> = types.iter().map(|ty| ty.as_str()).collect();
                doc.insert("bsonType".to_string(), json!(aliases));
            }
        }

        if !self.possible_values.is_empty() {
            let values: Vec<Value> = self.possible_values.iter().map(Literal::to_json).collect();
            doc.insert("enum".to_string(), Value::Array(values));
        }

        if let Some(items) = self.items {
            doc.insert("items".to_string(), json!({ "bsonType": items.as_str() }));
        }

        if let Some(properties) = &self.properties {
            if !self.required.is_empty() {
                doc.insert("required".to_string(), json!(self.required));
            }

            let mut nested = Map::new();
            for property in properties {
                nested.insert(property.identifier().to_string(), property.object().to_json());
            }
            doc.insert("properties".to_string(), Value::Object(nested));
        }

        Value::Object(doc)
    }
}
