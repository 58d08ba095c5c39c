pub use recymap_boundary::*;

use recymap_core::{entities as e, usecases, util::validate::SearchArea};
use std::collections::BTreeMap;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_location(from: NewLocation) -> usecases::NewLocation {
        let NewLocation {
            name,
            address,
            lat,
            lng,
            waste_categories,
            opening_hours,
            contact,
            description,
        } = from;
        usecases::NewLocation {
            name,
            address,
            lat,
            lng,
            waste_categories: waste_categories.into_iter().map(Into::into).collect(),
            opening_hours,
            contact: contact.map(Into::into),
            description,
        }
    }
}

fn user_location(area: SearchArea) -> Coordinate {
    let SearchArea { lat, lng, .. } = area;
    Coordinate { lat, lng }
}

pub fn search_result(
    criteria: &usecases::SearchCriteria,
    candidates: Vec<e::Candidate>,
) -> SearchResult {
    SearchResult {
        user_location: user_location(criteria.area()),
        radius_km: criteria.radius_km,
        waste_type: criteria.waste_type.map(Into::into),
        nearby_locations: candidates.into(),
    }
}

pub fn category_recommendation(from: usecases::CategoryRecommendation) -> CategoryRecommendation {
    let usecases::CategoryRecommendation { info, candidates } = from;
    let (locations, error) = match candidates {
        Ok(candidates) => (candidates.into_iter().map(Into::into).collect(), None),
        Err(err) => (vec![], Some(err.to_string())),
    };
    CategoryRecommendation {
        waste_info: info.into(),
        count: locations.len(),
        locations,
        error,
    }
}

pub fn recommendation(
    area: SearchArea,
    recommendation: usecases::CompositeRecommendation,
) -> Recommendation {
    Recommendation {
        user_location: user_location(area),
        recommendations: recommendation
            .into_iter()
            .map(|(category, entry)| (category.to_string(), category_recommendation(entry)))
            .collect(),
    }
}

pub fn classified_search(from: usecases::ClassifiedSearch) -> ClassifiedSearch {
    let usecases::ClassifiedSearch {
        classification,
        info,
        candidates,
    } = from;
    ClassifiedSearch {
        classification: classification.into(),
        waste_type_info: info.into(),
        nearby_locations: candidates.into(),
    }
}

pub fn batch_item_result(from: usecases::BatchItemResult) -> BatchItemResult {
    match from {
        usecases::BatchItemResult::Success { name, result } => BatchItemResult::Success {
            filename: name,
            result: classified_search(result),
        },
        usecases::BatchItemResult::Failure { name, error } => BatchItemResult::Failure {
            filename: name,
            error: error.to_string(),
        },
    }
}

pub fn batch_result(area: SearchArea, results: Vec<usecases::BatchItemResult>) -> BatchResult {
    BatchResult {
        total_files: results.len(),
        user_location: user_location(area),
        results: results.into_iter().map(batch_item_result).collect(),
    }
}

pub fn waste_category_infos(
    infos: Vec<(e::WasteCategory, &'static e::WasteCategoryInfo)>,
) -> BTreeMap<String, WasteCategoryInfo> {
    infos
        .into_iter()
        .map(|(category, info)| (category.to_string(), info.into()))
        .collect()
}
