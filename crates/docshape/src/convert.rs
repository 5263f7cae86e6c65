//! Value-conversion collaborator contract.
//!
//! The converter decides how a declared type is represented once written to
//! the store, and how individual enumeration constants serialize. It is
//! externally owned, read-only, and injected into the creator alongside the
//! mapping context.

use crate::mapping::{EnumRef, TypeRef};
use docshape_schema::Literal;

///
/// ValueConverter
///

pub trait ValueConverter {
    /// The storage representation a value of `ty` collapses to on write.
    /// Defaults to the identity: the declared type nests or stores as-is.
    fn write_target(&self, ty: &TypeRef) -> TypeRef {
        ty.clone()
    }

    /// The serialized form of a single enumeration constant. Defaults to the
    /// constant's name as a string.
    fn stored_form(&self, enum_ref: &EnumRef, constant: &str) -> Literal {
        let _ = enum_ref;
        Literal::String(constant.to_string())
    }
}

///
/// DefaultConverter
/// Identity conversions throughout; enum constants store as name strings.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultConverter;

impl ValueConverter for DefaultConverter {}
