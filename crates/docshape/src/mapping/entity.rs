use crate::mapping::{
    MappingError,
    property::PersistentProperty,
    types::EntityId,
};
use serde::Serialize;
use std::collections::BTreeSet;

///
/// PersistentEntity
/// Mapping metadata for one domain type persisted as a document.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PersistentEntity {
    pub id: EntityId,

    /// Property names bound through the constructor, in signature order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructor_args: Vec<String>,

    /// Declared properties in declaration order.
    pub properties: Vec<PersistentProperty>,
}

impl PersistentEntity {
    #[must_use]
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            constructor_args: Vec::new(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, property: PersistentProperty) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_constructor_args<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.constructor_args
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Iterate declared properties in declaration order, skipping transient
    /// ones.
    pub fn persistent_properties(&self) -> impl Iterator<Item = &PersistentProperty> {
        self.properties.iter().filter(|p| !p.transient)
    }

    #[must_use]
    pub fn is_constructor_argument(&self, property: &PersistentProperty) -> bool {
        self.constructor_args.iter().any(|name| *name == property.name)
    }

    #[must_use]
    pub fn id_property(&self) -> Option<&PersistentProperty> {
        self.properties.iter().find(|p| p.id)
    }

    /// Check internal consistency of the description. Violations are
    /// provider contract breaches and abort registration.
    pub fn validate(&self) -> Result<(), MappingError> {
        let mut seen = BTreeSet::new();
        let mut identifiers = 0usize;

        for property in &self.properties {
            if property.name.is_empty() {
                return Err(MappingError::EmptyPropertyName {
                    entity: self.id.clone(),
                });
            }
            if !seen.insert(property.name.as_str()) {
                return Err(MappingError::DuplicatePropertyName {
                    entity: self.id.clone(),
                    name: property.name.clone(),
                });
            }
            if property.id {
                identifiers += 1;
                if identifiers > 1 {
                    return Err(MappingError::DuplicateIdentifier {
                        entity: self.id.clone(),
                    });
                }
            }
        }

        for name in &self.constructor_args {
            if !seen.contains(name.as_str()) {
                return Err(MappingError::UnknownConstructorArgument {
                    entity: self.id.clone(),
                    name: name.clone(),
                });
            }
        }

        Ok(())
    }
}
