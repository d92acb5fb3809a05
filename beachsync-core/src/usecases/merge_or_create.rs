use super::UpsertError;
use crate::{
    entities::Entity,
    gateways::store::{EntityStore, Error as StoreError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Merged,
    Created,
}

/// Merges the entity into the store and creates it if it does not exist yet.
///
/// A merge that fails because the entity is missing is not an error,
/// every other failure is returned without retrying.
pub fn merge_or_create<S>(store: &S, entity: Entity) -> Result<Outcome, UpsertError>
where
    S: EntityStore + ?Sized,
{
    match store.merge_entity(&entity.id, &entity.fragment()) {
        Ok(()) => {
            log::debug!("Merged entity {}", entity.id);
            Ok(Outcome::Merged)
        }
        Err(StoreError::NotFound) => {
            let entity = entity.with_default_context();
            if let Err(source) = store.create_entity(&entity) {
                return Err(UpsertError::Create {
                    id: entity.id,
                    source,
                });
            }
            log::debug!("Created entity {}", entity.id);
            Ok(Outcome::Created)
        }
        Err(source) => Err(UpsertError::Merge {
            id: entity.id,
            source,
        }),
    }
}
