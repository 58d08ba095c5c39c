use super::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub waste_categories: Vec<WasteCategory>,
    pub opening_hours: Option<String>,
    pub contact: Option<Contact>,
    pub description: Option<String>,
}

pub(crate) fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

pub fn create_location<R: LocationRepo>(repo: &R, new_location: NewLocation) -> Result<Location> {
    let NewLocation {
        name,
        address,
        lat,
        lng,
        waste_categories,
        opening_hours,
        contact,
        description,
    } = new_location;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    let now = Timestamp::now();
    let location = Location {
        id: Id::new(),
        name: name.trim().to_owned(),
        address: address.trim().to_owned(),
        pos,
        waste_categories: waste_categories.into_iter().collect(),
        opening_hours: non_empty(opening_hours),
        contact: contact.filter(|c| !c.is_empty()),
        description: non_empty(description),
        active: true,
        created_at: now,
        updated_at: now,
    };
    location.validate()?;
    repo.create_location(location.clone())?;
    log::info!("Created location {} ({})", location.id, location.name);
    Ok(location)
}
