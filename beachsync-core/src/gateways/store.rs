use crate::entities::{Entity, Fragment};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested entity could not be found")]
    NotFound,
    #[error("The entity already exists")]
    AlreadyExists,
    #[error("The request was rejected: {0}")]
    BadRequest(String),
    #[error("Unexpected status code {status}: {message}")]
    Unexpected { status: u16, message: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// An entity store that supports NGSI-LD style merge and create.
pub trait EntityStore {
    /// Merges the fragment into the existing entity `id`.
    ///
    /// Fails with [`Error::NotFound`] if there is no such entity.
    fn merge_entity(&self, id: &str, fragment: &Fragment) -> Result<()>;

    /// Fails with [`Error::AlreadyExists`] if an entity with the same id exists.
    fn create_entity(&self, entity: &Entity) -> Result<()>;
}

impl<T> EntityStore for Box<T>
where
    T: EntityStore + ?Sized,
{
    fn merge_entity(&self, id: &str, fragment: &Fragment) -> Result<()> {
        (**self).merge_entity(id, fragment)
    }
    fn create_entity(&self, entity: &Entity) -> Result<()> {
        (**self).create_entity(entity)
    }
}
