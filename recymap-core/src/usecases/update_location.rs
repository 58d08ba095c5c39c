use super::{create_location::non_empty, prelude::*};

/// Changes to an existing location. Absent fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub address: Option<String>,
    /// Latitude and longitude in degrees.
    pub lat_lng: Option<(f64, f64)>,
    pub waste_categories: Option<Vec<WasteCategory>>,
    pub opening_hours: Option<String>,
    pub contact: Option<Contact>,
    pub description: Option<String>,
}

impl UpdateLocation {
    pub fn is_empty(&self) -> bool {
        let Self {
            name,
            address,
            lat_lng,
            waste_categories,
            opening_hours,
            contact,
            description,
        } = self;
        name.is_none()
            && address.is_none()
            && lat_lng.is_none()
            && waste_categories.is_none()
            && opening_hours.is_none()
            && contact.is_none()
            && description.is_none()
    }
}

pub fn update_location<R: LocationRepo>(
    repo: &R,
    id: &str,
    update: UpdateLocation,
) -> Result<Location> {
    let mut location = super::get_location(repo, id)?;
    if update.is_empty() {
        log::debug!("Nothing to update for location {id}");
        return Ok(location);
    }
    let UpdateLocation {
        name,
        address,
        lat_lng,
        waste_categories,
        opening_hours,
        contact,
        description,
    } = update;
    if let Some(name) = name {
        location.name = name.trim().to_owned();
    }
    if let Some(address) = address {
        location.address = address.trim().to_owned();
    }
    if let Some((lat, lng)) = lat_lng {
        location.pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    }
    if let Some(categories) = waste_categories {
        location.waste_categories = categories.into_iter().collect();
    }
    if opening_hours.is_some() {
        location.opening_hours = non_empty(opening_hours);
    }
    if let Some(contact) = contact {
        location.contact = Some(contact).filter(|c| !c.is_empty());
    }
    if description.is_some() {
        location.description = non_empty(description);
    }
    location.validate()?;
    location.touch(Timestamp::now());
    repo.update_location(&location)?;
    log::info!("Updated location {id}");
    Ok(location)
}
