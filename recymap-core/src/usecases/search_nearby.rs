use super::prelude::*;
use crate::{
    bbox::{self, InBBox},
    util::{
        filter::{self, FilterChain},
        sort::SortByDistance,
        validate::is_valid_limit,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub lat: f64,
    pub lng: f64,
    pub waste_type: Option<WasteCategory>,
    pub name: Option<String>,
    pub radius_km: f64,
    pub limit: usize,
}

impl SearchCriteria {
    pub fn new(area: SearchArea, limit: usize) -> Self {
        let SearchArea {
            lat,
            lng,
            radius_km,
        } = area;
        Self {
            lat,
            lng,
            waste_type: None,
            name: None,
            radius_km,
            limit,
        }
    }

    pub fn area(&self) -> SearchArea {
        SearchArea {
            lat: self.lat,
            lng: self.lng,
            radius_km: self.radius_km,
        }
    }

    /// All constraints on the attributes of a location.
    pub fn filter_chain(&self) -> FilterChain {
        FilterChain::new()
            .with(filter::active_only())
            .with_opt(self.waste_type.map(filter::by_waste_type))
            .with_opt(self.name.as_deref().map(filter::by_name))
    }
}

pub(crate) fn validate_request(area: SearchArea, limit: usize) -> Result<()> {
    area.validate()?;
    if !is_valid_limit(limit) {
        return Err(Error::InvalidLimit);
    }
    Ok(())
}

/// Finds the nearest matching locations within the radius.
///
/// The result is ordered by distance and contains at most
/// `criteria.limit` entries. No matches is not an error.
pub fn search_nearby<R: LocationRepo>(
    repo: &R,
    criteria: &SearchCriteria,
) -> Result<Vec<Candidate>> {
    validate_request(criteria.area(), criteria.limit)?;
    let center = MapPoint::try_from_lat_lng_deg(criteria.lat, criteria.lng)
        .ok_or(Error::InvalidPosition)?;
    let radius = Distance::from_km(criteria.radius_km);
    let bbox = bbox::bbox_around(center, radius);
    let filters = criteria.filter_chain();

    let locations = repo.all_active_locations()?;
    let total_count = locations.len();
    let mut candidates: Vec<_> = locations
        .into_iter()
        .filter(|l| l.in_bbox(&bbox))
        .filter(|l| filters.matches(l))
        .filter_map(|location| {
            let distance = MapPoint::distance(center, location.pos)?;
            (distance <= radius).then_some(Candidate { location, distance })
        })
        .collect();
    let match_count = candidates.len();
    candidates.sort_by_distance();
    candidates.truncate(criteria.limit);
    log::debug!(
        "Found {match_count} of {total_count} locations within {radius} around {center} (bbox: {bbox})"
    );
    Ok(candidates)
}
