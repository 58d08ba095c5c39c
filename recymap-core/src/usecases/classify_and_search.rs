use super::{prelude::*, search_nearby, search_nearby::validate_request, SearchCriteria};

/// Nearby locations for the classified kind of waste.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedSearch {
    pub classification: Classification,
    pub info: &'static WasteCategoryInfo,
    pub candidates: Vec<Candidate>,
}

/// Searches for locations that accept the classified waste.
pub fn search_for_classification<R: LocationRepo>(
    repo: &R,
    classification: Classification,
    area: SearchArea,
    limit: usize,
) -> Result<ClassifiedSearch> {
    let label = classification.label;
    let criteria = SearchCriteria {
        waste_type: Some(label),
        ..SearchCriteria::new(area, limit)
    };
    let candidates = search_nearby(repo, &criteria)?;
    Ok(ClassifiedSearch {
        classification,
        info: label.info(),
        candidates,
    })
}

/// Classifies an image and searches for matching locations.
///
/// The request is validated before the classifier is invoked.
/// If the classification fails no search is performed.
pub fn classify_and_search<R, C>(
    repo: &R,
    classifier: &C,
    image: &[u8],
    area: SearchArea,
    limit: usize,
) -> Result<ClassifiedSearch>
where
    R: LocationRepo,
    C: ClassificationGateway,
{
    validate_request(area, limit)?;
    let classification = classifier.classify(image)?;
    log::debug!(
        "Classified image as {} ({:.2})",
        classification.label,
        classification.confidence
    );
    search_for_classification(repo, classification, area, limit)
}
