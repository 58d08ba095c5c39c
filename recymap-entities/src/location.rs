use std::collections::BTreeSet;

use crate::{category::*, contact::*, geo::*, id::*, time::*};

/// A recycling drop-off point.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub pos: MapPoint,
    /// Never empty for a stored location.
    pub waste_categories: BTreeSet<WasteCategory>,
    pub opening_hours: Option<String>,
    pub contact: Option<Contact>,
    pub description: Option<String>,
    /// Inactive locations are kept but never show up in search results.
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Location {
    pub fn accepts(&self, category: WasteCategory) -> bool {
        self.waste_categories.contains(&category)
    }

    /// Record a modification.
    pub fn touch(&mut self, at: Timestamp) {
        // Never move backwards, even if the clock does
        self.updated_at = self.updated_at.max(at);
    }

    pub fn deactivate(&mut self, at: Timestamp) {
        self.active = false;
        self.touch(at);
    }
}

/// A location annotated with its distance from a search center.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub location: Location,
    pub distance: Distance,
}

impl Candidate {
    /// Distance in kilometers, rounded for display.
    pub fn distance_km(&self) -> f64 {
        self.distance.to_km_rounded()
    }
}
