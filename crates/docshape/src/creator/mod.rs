//! Schema creation: the recursive, metadata-driven transformation from a
//! registered entity type to a validation schema document.
//!
//! The entity graph may contain back-edges (self- or mutually-referential
//! types). The descent carries an explicit ancestor path and stops when a
//! property recurs in its own path, so termination is structural rather than
//! depth- or time-bounded.


use crate::{
    Error,
    convert::ValueConverter,
    mapping::{EntityId, EnumRef, MappingContext, MappingError, PersistentEntity, PersistentProperty, TypeRef},
    schema::{Literal, SchemaDocument, SchemaObject, SchemaProperty, SchemaType},
};

///
/// SchemaCreator
///
/// Derives a [`SchemaDocument`] for a root entity type. Holds only shared
/// references to its collaborators; every invocation is independently
/// reentrant, with all intermediate state stack-local.
///

pub struct SchemaCreator<'a, M, C> {
    mapping: &'a M,
    converter: &'a C,
}

impl<'a, M, C> SchemaCreator<'a, M, C>
where
    M: MappingContext,
    C: ValueConverter,
{
    #[must_use]
    pub const fn new(mapping: &'a M, converter: &'a C) -> Self {
        Self { mapping, converter }
    }

    /// Derive the validation schema for `id`. Fails only when the mapping
    /// context cannot describe a type the derivation reaches.
    pub fn create_schema_for(&self, id: &EntityId) -> Result<SchemaDocument, Error> {
        let entity = self
            .mapping
            .entity(id)
            .ok_or_else(|| MappingError::UnresolvedType(id.clone()))?;

        let resolved = self.properties_for_entity(&[], entity)?;

        let mut builder = SchemaDocument::builder();
        for item in &resolved {
            if item.required {
                builder = builder.required(item.property.identifier());
            }
        }

        Ok(builder
            .properties(resolved.into_iter().map(|item| item.property))
            .build())
    }

    /// Resolve the property sequence of one entity, in declaration order.
    fn properties_for_entity(
        &self,
        path: &[PathSegment<'a>],
        entity: &'a PersistentEntity,
    ) -> Result<Vec<RequiredProperty>, Error> {
        let mut resolved = Vec::new();

        for property in entity.persistent_properties() {
            // cycle guard: a property recurring in its own ancestor path
            // stops the descent; a placeholder entry keeps the schema
            // syntactically complete
            if path.iter().any(|seg| seg.matches(&entity.id, property)) {
                if let Some(last) = path.last() {
                    resolved.push(RequiredProperty {
                        property: SchemaProperty::named(
                            last.property.resolved_field_name(),
                            SchemaObject::untyped(),
                        ),
                        required: false,
                    });
                }
                continue;
            }

            let mut current = path.to_vec();
            current.push(PathSegment {
                entity: &entity.id,
                property,
            });

            if let Some(item) = self.resolve_property(&current, entity)? {
                resolved.push(item);
            }
        }

        Ok(resolved)
    }

    /// Resolve the last path element against its declaring entity.
    fn resolve_property(
        &self,
        path: &[PathSegment<'a>],
        parent: &'a PersistentEntity,
    ) -> Result<Option<RequiredProperty>, Error> {
        let Some(segment) = path.last() else {
            return Ok(None);
        };
        let property = segment.property;

        // required-ness is independent of the type dispatch below
        let required = is_required(parent, property);

        let raw_target = raw_target_type(property);
        let target = self.converter.write_target(&raw_target);

        // a true sub-document: entity-typed with no conversion intercepting
        if property.is_entity() && raw_target == target {
            if let Some(entity_id) = raw_target.entity_id() {
                return self
                    .embedded_object_property(path, entity_id, property, required)
                    .map(Some);
            }
        }

        let field_name = property.resolved_field_name();

        let item = if property.is_collection_like() {
            let object = match &target {
                TypeRef::Array(element) => {
                    SchemaObject::of(SchemaType::Array).with_items(element.schema_type())
                }
                other => SchemaObject::of(other.schema_type()),
            };

            RequiredProperty {
                property: SchemaProperty::named(field_name, object),
                required,
            }
        } else if property.is_map_like() {
            // map contents are not individually schema-typed
            RequiredProperty {
                property: SchemaProperty::named(field_name, SchemaObject::of(SchemaType::Object)),
                required,
            }
        } else if let Some(enum_ref) = target.as_enum() {
            self.enum_property(field_name, enum_ref, target.schema_type(), required)
        } else {
            RequiredProperty {
                property: SchemaProperty::named(field_name, SchemaObject::of(target.schema_type())),
                required,
            }
        };

        Ok(Some(item))
    }

    /// Recurse into a nested entity, aggregating its own required list onto
    /// the wrapping object fragment.
    fn embedded_object_property(
        &self,
        path: &[PathSegment<'a>],
        entity_id: &EntityId,
        property: &PersistentProperty,
        required: bool,
    ) -> Result<RequiredProperty, Error> {
        let entity = self
            .mapping
            .entity(entity_id)
            .ok_or_else(|| MappingError::UnresolvedType(entity_id.clone()))?;

        let nested = self.properties_for_entity(path, entity)?;

        let required_names: Vec<String> = nested
            .iter()
            .filter(|item| item.required)
            .map(|item| item.property.identifier().to_string())
            .collect();

        let object = SchemaObject::of(SchemaType::Object)
            .with_required(required_names)
            .with_properties(nested.into_iter().map(|item| item.property));

        Ok(RequiredProperty {
            property: SchemaProperty::named(property.resolved_field_name(), object),
            required,
        })
    }

    /// Permitted values are every constant run through the converter; the
    /// declared type is inferred from the first converted value, keeping the
    /// raw enum representation when the enumeration has no constants.
    fn enum_property(
        &self,
        field_name: &str,
        enum_ref: &EnumRef,
        fallback: SchemaType,
        required: bool,
    ) -> RequiredProperty {
        let values: Vec<Literal> = enum_ref
            .constants
            .iter()
            .map(|constant| self.converter.stored_form(enum_ref, constant))
            .collect();

        let ty = values.first().map_or(fallback, Literal::schema_type);

        RequiredProperty {
            property: SchemaProperty::named(
                field_name,
                SchemaObject::of(ty).with_possible_values(values),
            ),
            required,
        }
    }
}

///
/// PathSegment
///
/// One step of the ancestor path: the property visited and the entity that
/// declares it. Cycle detection compares descriptor identity, never types,
/// so two sibling properties of the same type are not a cycle.
///

#[derive(Clone, Copy, Debug)]
struct PathSegment<'a> {
    entity: &'a EntityId,
    property: &'a PersistentProperty,
}

impl PathSegment<'_> {
    fn matches(&self, entity: &EntityId, property: &PersistentProperty) -> bool {
        self.entity == entity && self.property.name == property.name
    }
}

///
/// RequiredProperty
///
/// A schema property tagged with its presence requirement. The tag is
/// consumed during document assembly and never reaches the rendered form.
///

#[derive(Clone, Debug)]
struct RequiredProperty {
    property: SchemaProperty,
    required: bool,
}

/// A property must be present when it is bound through the constructor and
/// not marked nullable, or when its declared type is a non-nullable
/// primitive.
fn is_required(parent: &PersistentEntity, property: &PersistentProperty) -> bool {
    (parent.is_constructor_argument(property) && !property.nullable) || property.primitive
}

/// The property's natural storage type before value conversion, with the
/// identifier special case: explicit identifier metadata wins; an identifier
/// whose storage type differs from its in-memory type stays unconstrained
/// rather than guessing a representation.
fn raw_target_type(property: &PersistentProperty) -> TypeRef {
    if !property.id {
        return property.field_ty.clone();
    }

    if let Some(id_ty) = &property.id_ty {
        return id_ty.clone();
    }

    if property.field_ty == property.ty {
        property.field_ty.clone()
    } else {
        TypeRef::Any
    }
}
