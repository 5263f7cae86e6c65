//! Persistent entity metadata: what the mapping layer knows about a domain
//! type before any schema is derived from it.

mod catalog;
mod entity;
mod property;
mod types;


pub use catalog::EntityCatalog;
pub use entity::PersistentEntity;
pub use property::PersistentProperty;
pub use types::{EntityId, EnumRef, TypeRef};

use thiserror::Error as ThisError;

///
/// MappingContext
///
/// The metadata provider collaborator: resolves a type reference to its
/// persistent entity description. Long-lived and externally owned; must be
/// safe for concurrent read-only use.
///

pub trait MappingContext {
    fn entity(&self, id: &EntityId) -> Option<&PersistentEntity>;
}

///
/// MappingError
///
/// Contract violations in provided metadata. These are propagated, never
/// patched over: malformed metadata means the provider is broken, not that
/// the derivation should guess.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum MappingError {
    #[error("entity '{entity}' declares more than one identifier property")]
    DuplicateIdentifier { entity: EntityId },

    #[error("entity '{entity}' declares property '{name}' more than once")]
    DuplicatePropertyName { entity: EntityId, name: String },

    #[error("entity '{entity}' declares a property with an empty name")]
    EmptyPropertyName { entity: EntityId },

    #[error("entity '{entity}' lists constructor argument '{name}' with no matching property")]
    UnknownConstructorArgument { entity: EntityId, name: String },

    #[error("no mapping metadata registered for type '{0}'")]
    UnresolvedType(EntityId),
}
