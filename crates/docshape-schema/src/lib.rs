//! Schema artifact model for docshape.
//!
//! ## Crate layout
//! - `types`: representation types and stored literals.
//! - `object`: the per-field type constraint fragment.
//! - `property`: a named schema property.
//! - `document`: the terminal validation document.
//!
//! Everything here is a plain value: documents are built once, never mutated
//! afterwards, and render to the store's `$jsonSchema` envelope via
//! [`SchemaDocument::to_document`].

pub mod document;
pub mod object;
pub mod property;
pub mod types;

#[cfg(test)]
mod tests;

pub use document::{SchemaDocument, SchemaDocumentBuilder};
pub use object::SchemaObject;
pub use property::SchemaProperty;
pub use types::{Literal, SchemaType};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        document::{SchemaDocument, SchemaDocumentBuilder},
        object::SchemaObject,
        property::SchemaProperty,
        types::{Literal, SchemaType},
    };
    pub use serde::Serialize;
}
