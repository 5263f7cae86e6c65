use derive_more::{Display, FromStr};
use docshape_schema::SchemaType;
use serde::Serialize;

///
/// EntityId
///
/// Stable identifier for a domain type within the mapping layer, usually its
/// fully-qualified type path.
///

#[derive(Clone, Debug, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

///
/// EnumRef
///
/// An enumeration type with its ordered constant names. Constants travel
/// with the reference so the resolver can enumerate them without another
/// metadata round-trip.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct EnumRef {
    pub path: String,
    pub constants: Vec<String>,
}

impl EnumRef {
    pub fn new<S: Into<String>>(
        path: impl Into<String>,
        constants: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            path: path.into(),
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }
}

///
/// TypeRef
///
/// Closed classification of a declared or storage-side type. This is a lossy
/// projection: the mapping layer only needs enough shape to pick a schema
/// representation and to know where to recurse.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum TypeRef {
    /// No specific constraint; renders as a generic object.
    Any,
    Array(Box<TypeRef>),
    Binary,
    Bool,
    Date,
    Decimal,
    Double,
    /// A nested domain type persisted as a sub-document.
    Entity(EntityId),
    Enum(EnumRef),
    Int32,
    Int64,
    /// Key-value mapping; contents are not individually schema-typed.
    Map,
    ObjectId,
    String,
    Timestamp,
}

impl TypeRef {
    pub fn entity(path: impl Into<String>) -> Self {
        Self::Entity(EntityId::new(path))
    }

    pub fn array(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    #[must_use]
    pub const fn entity_id(&self) -> Option<&EntityId> {
        match self {
            Self::Entity(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_enum(&self) -> Option<&EnumRef> {
        match self {
            Self::Enum(en) => Some(en),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_collection_like(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[must_use]
    pub const fn is_map_like(&self) -> bool {
        matches!(self, Self::Map)
    }

    /// The representation type this classification renders as.
    #[must_use]
    pub const fn schema_type(&self) -> SchemaType {
        match self {
            Self::Any | Self::Entity(_) | Self::Map => SchemaType::Object,
            Self::Array(_) => SchemaType::Array,
            Self::Binary => SchemaType::Binary,
            Self::Bool => SchemaType::Bool,
            Self::Date => SchemaType::Date,
            Self::Decimal => SchemaType::Decimal,
            Self::Double => SchemaType::Double,
            Self::Enum(_) => SchemaType::String,
            Self::Int32 => SchemaType::Int32,
            Self::Int64 => SchemaType::Int64,
            Self::ObjectId => SchemaType::ObjectId,
            Self::String => SchemaType::String,
            Self::Timestamp => SchemaType::Timestamp,
        }
    }
}
