// Low-level storage access traits.
// Use cases only read through `all_active_locations`
// when searching and never write during a search.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait LocationRepo {
    fn create_location(&self, location: Location) -> Result<()>;

    /// Loads a location regardless of its active flag.
    fn get_location(&self, id: &str) -> Result<Location>;

    /// Replaces the stored location with the same id.
    fn update_location(&self, location: &Location) -> Result<()>;

    /// Marks a location as inactive. The record is never deleted.
    fn deactivate_location(&self, id: &str, at: Timestamp) -> Result<()>;

    fn all_active_locations(&self) -> Result<Vec<Location>>;

    fn count_active_locations(&self) -> Result<usize> {
        Ok(self.all_active_locations()?.len())
    }
}
