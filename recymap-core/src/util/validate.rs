use crate::entities::*;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub const MAX_RADIUS_KM: f64 = 100.0;
pub const MAX_LIMIT: usize = 100;

pub fn is_valid_lat(lat: f64) -> bool {
    (LatCoord::DEG_MIN..=LatCoord::DEG_MAX).contains(&lat)
}

pub fn is_valid_lng(lng: f64) -> bool {
    (LngCoord::DEG_MIN..=LngCoord::DEG_MAX).contains(&lng)
}

/// Strictly positive and not larger than [`MAX_RADIUS_KM`].
pub fn is_valid_radius(radius_km: f64) -> bool {
    radius_km > 0.0 && radius_km <= MAX_RADIUS_KM
}

pub const fn is_valid_limit(limit: usize) -> bool {
    limit > 0 && limit <= MAX_LIMIT
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Center and radius of a circular search area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchAreaInvalidation {
    #[error("Latitude out of range")]
    Latitude,
    #[error("Longitude out of range")]
    Longitude,
    #[error("Radius out of range")]
    Radius,
}

impl Validate for SearchArea {
    type Error = SearchAreaInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        // NaN fails all range checks
        if !is_valid_lat(self.lat) {
            return Err(Self::Error::Latitude);
        }
        if !is_valid_lng(self.lng) {
            return Err(Self::Error::Longitude);
        }
        if !is_valid_radius(self.radius_km) {
            return Err(Self::Error::Radius);
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocationInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("Invalid address")]
    Address,
    #[error("Invalid position")]
    Position,
    #[error("No waste categories")]
    EmptyCategories,
}

impl Validate for Location {
    type Error = LocationInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_blank(&self.name) {
            return Err(Self::Error::Name);
        }
        if is_blank(&self.address) {
            return Err(Self::Error::Address);
        }
        if !self.pos.is_valid() {
            return Err(Self::Error::Position);
        }
        if self.waste_categories.is_empty() {
            return Err(Self::Error::EmptyCategories);
        }
        Ok(())
    }
}
