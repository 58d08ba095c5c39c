use super::*;
use recymap_entities as e;
use thiserror::Error;

impl From<e::category::WasteCategory> for WasteCategory {
    fn from(from: e::category::WasteCategory) -> Self {
        use e::category::WasteCategory as C;
        match from {
            C::Glass => Self::Glass,
            C::Paper => Self::Paper,
            C::Plastic => Self::Plastic,
            C::Metal => Self::Metal,
            C::Trash => Self::Trash,
        }
    }
}

impl From<WasteCategory> for e::category::WasteCategory {
    fn from(from: WasteCategory) -> Self {
        use WasteCategory as C;
        match from {
            C::Glass => Self::Glass,
            C::Paper => Self::Paper,
            C::Plastic => Self::Plastic,
            C::Metal => Self::Metal,
            C::Trash => Self::Trash,
        }
    }
}

impl From<&e::category::WasteCategoryInfo> for WasteCategoryInfo {
    fn from(from: &e::category::WasteCategoryInfo) -> Self {
        let e::category::WasteCategoryInfo {
            name,
            description,
            handling,
            color,
        } = *from;
        Self {
            name: name.into(),
            description: description.into(),
            handling: handling.into(),
            color: color.into(),
        }
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::contact::Contact> for Contact {
    fn from(from: e::contact::Contact) -> Self {
        let e::contact::Contact { name, email, phone } = from;
        Self { name, email, phone }
    }
}

impl From<Contact> for e::contact::Contact {
    fn from(from: Contact) -> Self {
        let Contact { name, email, phone } = from;
        Self { name, email, phone }
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            name,
            address,
            pos,
            waste_categories,
            opening_hours,
            contact,
            description,
            active,
            created_at,
            updated_at,
        } = from;
        let Coordinate { lat, lng } = pos.into();
        Self {
            id: id.into(),
            name,
            address,
            lat,
            lng,
            waste_categories: waste_categories.into_iter().map(Into::into).collect(),
            opening_hours,
            contact: contact.map(Into::into),
            description,
            active,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocationConversionError {
    #[error("Missing id")]
    Id,
    #[error("Invalid position")]
    Position,
}

impl TryFrom<Location> for e::location::Location {
    type Error = LocationConversionError;
    fn try_from(from: Location) -> Result<Self, Self::Error> {
        let Location {
            id,
            name,
            address,
            lat,
            lng,
            waste_categories,
            opening_hours,
            contact,
            description,
            active,
            created_at,
            updated_at,
        } = from;
        let id = e::id::Id::from(id);
        if !id.is_valid() {
            return Err(LocationConversionError::Id);
        }
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(LocationConversionError::Position)?;
        Ok(Self {
            id,
            name,
            address,
            pos,
            waste_categories: waste_categories.into_iter().map(Into::into).collect(),
            opening_hours,
            contact: contact.map(Into::into),
            description,
            active,
            created_at: e::time::Timestamp::from_millis(created_at),
            updated_at: e::time::Timestamp::from_millis(updated_at),
        })
    }
}

impl From<e::location::Candidate> for NearbyLocation {
    fn from(from: e::location::Candidate) -> Self {
        let distance_km = from.distance_km();
        Self {
            location: from.location.into(),
            distance_km,
        }
    }
}

impl From<Vec<e::location::Candidate>> for NearbyLocations {
    fn from(from: Vec<e::location::Candidate>) -> Self {
        let locations: Vec<NearbyLocation> = from.into_iter().map(Into::into).collect();
        Self {
            count: locations.len(),
            locations,
        }
    }
}

impl From<e::classification::Classification> for Classification {
    fn from(from: e::classification::Classification) -> Self {
        let is_recyclable = from.is_recyclable();
        let e::classification::Classification {
            label,
            confidence,
            probabilities,
        } = from;
        Self {
            predicted_class: label.into(),
            confidence,
            is_recyclable,
            class_probabilities: probabilities
                .into_iter()
                .map(|(c, p)| (c.to_string(), p))
                .collect(),
        }
    }
}
