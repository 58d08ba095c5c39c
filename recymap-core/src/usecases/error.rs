use crate::{
    gateways::classify::ClassificationError,
    repositories,
    util::validate::{LocationInvalidation, SearchAreaInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Latitude must be within [-90, 90]")]
    InvalidLatitude,
    #[error("Longitude must be within [-180, 180]")]
    InvalidLongitude,
    #[error("Radius must be greater than 0 and at most 100 km")]
    InvalidRadius,
    #[error("Limit must be greater than 0 and at most 100")]
    InvalidLimit,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The name is invalid")]
    Name,
    #[error("The address is invalid")]
    Address,
    #[error("At least one waste category is required")]
    EmptyCategories,
    #[error("At most 10 items can be processed at once, got {0}")]
    BatchTooLarge(usize),
    #[error("Not an image: {0}")]
    NotAnImage(String),
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<SearchAreaInvalidation> for Error {
    fn from(err: SearchAreaInvalidation) -> Self {
        match err {
            SearchAreaInvalidation::Latitude => Self::InvalidLatitude,
            SearchAreaInvalidation::Longitude => Self::InvalidLongitude,
            SearchAreaInvalidation::Radius => Self::InvalidRadius,
        }
    }
}

impl From<LocationInvalidation> for Error {
    fn from(err: LocationInvalidation) -> Self {
        match err {
            LocationInvalidation::Name => Self::Name,
            LocationInvalidation::Address => Self::Address,
            LocationInvalidation::Position => Self::InvalidPosition,
            LocationInvalidation::EmptyCategories => Self::EmptyCategories,
        }
    }
}
