use crate::mapping::types::{EntityId, TypeRef};
use serde::Serialize;

///
/// PersistentProperty
/// Mapping metadata for one named, typed member of an entity.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PersistentProperty {
    /// Declared name on the domain type.
    pub name: String,

    /// Storage field name when remapped; `None` means the declared name is
    /// used as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    /// Declared in-memory type.
    pub ty: TypeRef,

    /// Storage-side type per mapping metadata. Defaults to `ty`; differs
    /// when a conversion intercepts the value on write.
    pub field_ty: TypeRef,

    /// Explicitly marked as allowed to be absent.
    pub nullable: bool,

    /// Declared as a non-nullable primitive; such properties can never be
    /// absent from a stored document.
    pub primitive: bool,

    /// Excluded from persistence entirely.
    pub transient: bool,

    /// Designated identifier of its entity.
    pub id: bool,

    /// Explicit identifier storage type metadata, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_ty: Option<TypeRef>,
}

impl PersistentProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            field_name: None,
            field_ty: ty.clone(),
            ty,
            nullable: false,
            primitive: false,
            transient: false,
            id: false,
            id_ty: None,
        }
    }

    #[must_use]
    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }

    #[must_use]
    pub fn with_field_ty(mut self, field_ty: TypeRef) -> Self {
        self.field_ty = field_ty;
        self
    }

    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub const fn primitive(mut self) -> Self {
        self.primitive = true;
        self
    }

    #[must_use]
    pub const fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    #[must_use]
    pub const fn id(mut self) -> Self {
        self.id = true;
        self
    }

    #[must_use]
    pub fn with_id_ty(mut self, id_ty: TypeRef) -> Self {
        self.id_ty = Some(id_ty);
        self
    }

    /// Resolve the field name used in stored documents.
    #[must_use]
    pub fn resolved_field_name(&self) -> &str {
        self.field_name.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub const fn entity_id(&self) -> Option<&EntityId> {
        self.ty.entity_id()
    }

    #[must_use]
    pub const fn is_entity(&self) -> bool {
        self.ty.entity_id().is_some()
    }

    #[must_use]
    pub const fn is_collection_like(&self) -> bool {
        self.ty.is_collection_like()
    }

    #[must_use]
    pub const fn is_map_like(&self) -> bool {
        self.ty.is_map_like()
    }
}
