//! docshape — derive document-store validation schemas from entity mapping
//! metadata.
//!
//! ## Crate layout
//! - `mapping`: the persistent entity/property metadata model and the
//!   [`MappingContext`](mapping::MappingContext) collaborator contract.
//! - `convert`: the value-conversion collaborator contract deciding storage
//!   representations and serialized enum constants.
//! - `creator`: the schema creator, a pure recursive transformation from a
//!   registered entity type to a [`SchemaDocument`](schema::SchemaDocument).
//!
//! The derivation is purely functional: the creator holds shared references
//! to its collaborators, keeps all intermediate state on the stack, and may
//! be invoked concurrently without coordination.

pub use docshape_schema as schema;

pub mod convert;
pub mod creator;
pub mod mapping;

use crate::mapping::MappingError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        convert::{DefaultConverter, ValueConverter},
        creator::SchemaCreator,
        mapping::{
            EntityCatalog, EntityId, EnumRef, MappingContext, MappingError, PersistentEntity,
            PersistentProperty, TypeRef,
        },
        schema::{Literal, SchemaDocument, SchemaObject, SchemaProperty, SchemaType},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    MappingError(#[from] MappingError),
}
