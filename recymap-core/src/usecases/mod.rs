mod batch_classify_and_search;
mod classify_and_search;
mod create_location;
mod error;
mod recommend_by_category;
mod search_nearby;
mod update_location;

#[cfg(test)]
pub mod tests;

pub use self::{
    batch_classify_and_search::*, classify_and_search::*, create_location::*, error::Error,
    recommend_by_category::*, search_nearby::*, update_location::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::classify::{ClassificationError, ClassificationGateway},
        repositories::{Error as RepoError, *},
        util::validate::{SearchArea, Validate},
    };
}
use self::prelude::*;

/// Loads an active location.
///
/// Deactivated locations are reported as missing.
pub fn get_location<R: LocationRepo>(repo: &R, id: &str) -> Result<Location> {
    let location = repo.get_location(id)?;
    if !location.active {
        return Err(RepoError::NotFound.into());
    }
    Ok(location)
}

pub fn deactivate_location<R: LocationRepo>(repo: &R, id: &str) -> Result<()> {
    let location = repo.get_location(id)?;
    if !location.active {
        log::debug!("Location {id} has already been deactivated");
    }
    repo.deactivate_location(location.id.as_str(), Timestamp::now())?;
    log::info!("Deactivated location {id}");
    Ok(())
}

/// All waste categories with their static information.
pub fn waste_category_infos() -> Vec<(WasteCategory, &'static WasteCategoryInfo)> {
    WasteCategory::ALL.into_iter().map(|c| (c, c.info())).collect()
}
