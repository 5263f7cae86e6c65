use crate::mapping::{
    MappingContext, MappingError, entity::PersistentEntity, types::EntityId,
};
use std::collections::BTreeMap;

///
/// EntityCatalog
///
/// In-memory mapping context: entity descriptions keyed by type identifier,
/// validated on registration. Registering the same identifier twice replaces
/// the earlier description.
///

#[derive(Clone, Debug, Default)]
pub struct EntityCatalog {
    entities: BTreeMap<EntityId, PersistentEntity>,
}

impl EntityCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entity: PersistentEntity) -> Result<(), MappingError> {
        entity.validate()?;
        self.entities.insert(entity.id.clone(), entity);

        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl MappingContext for EntityCatalog {
    fn entity(&self, id: &EntityId) -> Option<&PersistentEntity> {
        self.entities.get(id)
    }
}
