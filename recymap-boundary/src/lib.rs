use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    Glass,
    Paper,
    Plastic,
    Metal,
    Trash,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct WasteCategoryInfo {
    pub name: String,
    pub description: String,
    pub handling: String,
    pub color: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub waste_categories: Vec<WasteCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
    /// Unix timestamp in milliseconds
    pub updated_at: i64,
}

/// Fields of a [`Location`] that is not stored yet.
///
/// Unknown fields are rejected, so an incomplete [`Location`]
/// can never be mistaken for a new one.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(deny_unknown_fields)]
pub struct NewLocation {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub waste_categories: Vec<WasteCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A location together with its distance from the search center.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NearbyLocation {
    #[serde(flatten)]
    pub location: Location,
    /// Rounded to two decimal places.
    pub distance_km: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NearbyLocations {
    pub count: usize,
    pub locations: Vec<NearbyLocation>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SearchResult {
    pub user_location: Coordinate,
    pub radius_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_type: Option<WasteCategory>,
    pub nearby_locations: NearbyLocations,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CategoryRecommendation {
    pub waste_info: WasteCategoryInfo,
    pub locations: Vec<NearbyLocation>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Recommendation {
    pub user_location: Coordinate,
    pub recommendations: BTreeMap<String, CategoryRecommendation>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Classification {
    pub predicted_class: WasteCategory,
    pub confidence: f64,
    pub is_recyclable: bool,
    pub class_probabilities: BTreeMap<String, f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ClassifiedSearch {
    pub classification: Classification,
    pub waste_type_info: WasteCategoryInfo,
    pub nearby_locations: NearbyLocations,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchItemResult {
    Success {
        filename: String,
        #[serde(flatten)]
        result: ClassifiedSearch,
    },
    Failure {
        filename: String,
        error: String,
    },
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct BatchResult {
    pub total_files: usize,
    pub user_location: Coordinate,
    pub results: Vec<BatchItemResult>,
}
