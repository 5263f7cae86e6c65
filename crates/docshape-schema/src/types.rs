use serde::Serialize;
use serde_json::{Number, Value, json};
use std::fmt;

///
/// SchemaType
///
/// Representation types a schema fragment may accept, named with the
/// document store's type aliases.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum SchemaType {
    #[serde(rename = "array")]
    Array,
    #[serde(rename = "binData")]
    Binary,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "decimal")]
    Decimal,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "int")]
    Int32,
    #[serde(rename = "long")]
    Int64,
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "object")]
    Object,
    #[serde(rename = "objectId")]
    ObjectId,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "timestamp")]
    Timestamp,
}

impl SchemaType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Binary => "binData",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::Null => "null",
            Self::Object => "object",
            Self::ObjectId => "objectId",
            Self::String => "string",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Literal
///
/// A scalar exactly as it appears in stored documents. Used for the
/// permitted-value sets of enumeration-backed fields; each literal knows
/// which representation type it implies.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
#[remain::sorted]
pub enum Literal {
    Bool(bool),
    Double(f64),
    Int64(i64),
    String(String),
}

impl Literal {
    #[must_use]
    pub const fn schema_type(&self) -> SchemaType {
        match self {
            Self::Bool(_) => SchemaType::Bool,
            Self::Double(_) => SchemaType::Double,
            Self::Int64(_) => SchemaType::Int64,
            Self::String(_) => SchemaType::String,
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(v) => json!(v),
            Self::Double(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
            Self::Int64(v) => json!(v),
            Self::String(v) => json!(v),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
