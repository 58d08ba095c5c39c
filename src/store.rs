//! In-memory location storage seeded from a JSON file.

use crate::adapters::json;
use anyhow::anyhow;
use recymap_boundary::LocationConversionError;
use recymap_core::{
    entities::*,
    repositories::{Error as RepoError, LocationRepo, Result as RepoResult},
    usecases,
    util::validate::Validate,
};
use serde::Deserialize;
use std::{
    fs,
    path::Path,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid location #{index}: {source}")]
    Location {
        index: usize,
        source: LocationConversionError,
    },
    #[error("Rejected location #{index}: {source}")]
    Rejected {
        index: usize,
        source: usecases::Error,
    },
}

/// A seed file entry, either a complete location or one that
/// still needs an id and timestamps.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedEntry {
    Location(json::Location),
    New(json::NewLocation),
}

#[derive(Debug, Default)]
pub struct LocationStore {
    locations: RwLock<Vec<Location>>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        let entries: Vec<SeedEntry> = serde_json::from_str(json)?;
        let count = entries.len();
        let store = Self::new();
        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                SeedEntry::Location(location) => {
                    let location = Location::try_from(location)
                        .map_err(|source| SeedError::Location { index, source })?;
                    location.validate().map_err(|err| SeedError::Rejected {
                        index,
                        source: err.into(),
                    })?;
                    store
                        .create_location(location)
                        .map_err(|err| SeedError::Rejected {
                            index,
                            source: err.into(),
                        })?;
                }
                SeedEntry::New(new_location) => {
                    let new_location = json::from_json::new_location(new_location);
                    usecases::create_location(&store, new_location)
                        .map_err(|source| SeedError::Rejected { index, source })?;
                }
            }
        }
        log::debug!("Loaded {count} locations");
        Ok(store)
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, Vec<Location>>> {
        self.locations
            .read()
            .map_err(|_| RepoError::Other(anyhow!("Location store is poisoned")))
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, Vec<Location>>> {
        self.locations
            .write()
            .map_err(|_| RepoError::Other(anyhow!("Location store is poisoned")))
    }
}

impl LocationRepo for LocationStore {
    fn create_location(&self, location: Location) -> RepoResult<()> {
        let mut locations = self.write()?;
        if locations.iter().any(|l| l.id == location.id) {
            return Err(RepoError::AlreadyExists);
        }
        locations.push(location);
        Ok(())
    }

    fn get_location(&self, id: &str) -> RepoResult<Location> {
        self.read()?
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn update_location(&self, location: &Location) -> RepoResult<()> {
        let mut locations = self.write()?;
        let stored = locations
            .iter_mut()
            .find(|l| l.id == location.id)
            .ok_or(RepoError::NotFound)?;
        *stored = location.clone();
        Ok(())
    }

    fn deactivate_location(&self, id: &str, at: Timestamp) -> RepoResult<()> {
        let mut locations = self.write()?;
        let stored = locations
            .iter_mut()
            .find(|l| l.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        stored.deactivate(at);
        Ok(())
    }

    fn all_active_locations(&self) -> RepoResult<Vec<Location>> {
        Ok(self.read()?.iter().filter(|l| l.active).cloned().collect())
    }

    fn count_active_locations(&self) -> RepoResult<usize> {
        Ok(self.read()?.iter().filter(|l| l.active).count())
    }
}
