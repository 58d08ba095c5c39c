use super::{
    classify_and_search::{search_for_classification, ClassifiedSearch},
    prelude::*,
    search_nearby::validate_request,
};

pub const MAX_BATCH_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    /// Identifies the item in the results, e.g. a file name.
    pub name: String,
    /// MIME type if known.
    pub content_type: Option<String>,
    pub image: Vec<u8>,
}

#[derive(Debug)]
pub enum BatchItemResult {
    Success {
        name: String,
        result: ClassifiedSearch,
    },
    Failure {
        name: String,
        error: Error,
    },
}

impl BatchItem {
    /// Fails if the item is known to be something other than an image.
    ///
    /// Items without a content type are accepted.
    pub fn ensure_image(&self) -> Result<()> {
        match &self.content_type {
            Some(content_type) if !is_image_content_type(content_type) => {
                Err(Error::NotAnImage(content_type.clone()))
            }
            _ => Ok(()),
        }
    }
}

impl BatchItemResult {
    pub fn name(&self) -> &str {
        match self {
            Self::Success { name, .. } | Self::Failure { name, .. } => name,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .trim_start()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Classifies all images and searches for matching locations.
///
/// The results are in the same order as the items. A failing item
/// is reported in its own result and does not affect the others.
pub fn batch_classify_and_search<R, C>(
    repo: &R,
    classifier: &C,
    items: &[BatchItem],
    area: SearchArea,
    limit: usize,
) -> Result<Vec<BatchItemResult>>
where
    R: LocationRepo,
    C: ClassificationGateway,
{
    if items.len() > MAX_BATCH_SIZE {
        return Err(Error::BatchTooLarge(items.len()));
    }
    validate_request(area, limit)?;
    let results: Vec<_> = items
        .iter()
        .map(
            |item| match classify_and_search_item(repo, classifier, item, area, limit) {
                Ok(result) => BatchItemResult::Success {
                    name: item.name.clone(),
                    result,
                },
                Err(error) => {
                    log::warn!("Failed to process batch item '{}': {error}", item.name);
                    BatchItemResult::Failure {
                        name: item.name.clone(),
                        error,
                    }
                }
            },
        )
        .collect();
    log::debug!(
        "Processed {} batch items, {} failed",
        results.len(),
        results.iter().filter(|r| !r.is_success()).count()
    );
    Ok(results)
}

fn classify_and_search_item<R, C>(
    repo: &R,
    classifier: &C,
    item: &BatchItem,
    area: SearchArea,
    limit: usize,
) -> Result<ClassifiedSearch>
where
    R: LocationRepo,
    C: ClassificationGateway,
{
    item.ensure_image()?;
    let classification = classifier.classify(&item.image)?;
    search_for_classification(repo, classification, area, limit)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{sample_locations, MockClassifier, MockDb};
    use super::*;

    const SEOUL: SearchArea = SearchArea {
        lat: 37.5665,
        lng: 126.9780,
        radius_km: 10.0,
    };

    fn item(name: &str, image: &str) -> BatchItem {
        BatchItem {
            name: name.into(),
            content_type: Some("image/jpeg".into()),
            image: image.as_bytes().to_vec(),
        }
    }

    fn names(results: &[BatchItemResult]) -> Vec<&str> {
        results.iter().map(BatchItemResult::name).collect()
    }

    #[test]
    fn one_failing_item_does_not_abort_the_batch() {
        let db = MockDb::default();
        db.locations.borrow_mut().extend(sample_locations());
        let classifier = MockClassifier::default();
        let items = vec![
            item("0.jpg", "glass"),
            item("1.jpg", "paper"),
            item("2.jpg", "plastic"),
            item("3.jpg", "unavailable"),
            item("4.jpg", "metal"),
        ];
        let results = batch_classify_and_search(&db, &classifier, &items, SEOUL, 5).unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(names(&results), vec!["0.jpg", "1.jpg", "2.jpg", "3.jpg", "4.jpg"]);
        for (i, r) in results.iter().enumerate() {
            assert_eq!(r.is_success(), i != 3);
        }
        assert!(matches!(
            &results[3],
            BatchItemResult::Failure {
                error: Error::Classification(ClassificationError::Unavailable(_)),
                ..
            }
        ));
        match &results[4] {
            BatchItemResult::Success { result, .. } => {
                assert_eq!(result.classification.label, WasteCategory::Metal);
                assert!(!result.candidates.is_empty());
                assert!(result.candidates.len() <= 5);
            }
            BatchItemResult::Failure { .. } => unreachable!(),
        }
        assert_eq!(classifier.calls.get(), 5);
    }

    #[test]
    fn failing_searches_are_isolated_too() {
        let db = MockDb::default();
        db.fail_reads.set(true);
        let classifier = MockClassifier::default();
        let items = vec![item("a", "glass"), item("b", "metal")];
        let results = batch_classify_and_search(&db, &classifier, &items, SEOUL, 5).unwrap();
        assert_eq!(names(&results), vec!["a", "b"]);
        assert!(results.iter().all(|r| matches!(
            r,
            BatchItemResult::Failure {
                error: Error::Repo(_),
                ..
            }
        )));
    }

    #[test]
    fn items_that_are_not_images_are_not_classified() {
        let db = MockDb::default();
        let classifier = MockClassifier::default();
        let mut text = item("notes.txt", "glass");
        text.content_type = Some("text/plain".into());
        let mut unknown = item("blob", "glass");
        unknown.content_type = None;
        let items = vec![text, unknown, item("photo.png", "glass")];
        let results = batch_classify_and_search(&db, &classifier, &items, SEOUL, 5).unwrap();
        assert!(matches!(
            &results[0],
            BatchItemResult::Failure {
                error: Error::NotAnImage(_),
                ..
            }
        ));
        assert!(results[1].is_success());
        assert!(results[2].is_success());
        assert_eq!(classifier.calls.get(), 2);
    }

    #[test]
    fn too_many_items() {
        let db = MockDb::default();
        let classifier = MockClassifier::default();
        let items: Vec<_> = (0..=MAX_BATCH_SIZE)
            .map(|i| item(&format!("{i}.jpg"), "glass"))
            .collect();
        assert!(matches!(
            batch_classify_and_search(&db, &classifier, &items, SEOUL, 5),
            Err(Error::BatchTooLarge(11))
        ));
        assert!(batch_classify_and_search(&db, &classifier, &items[..10], SEOUL, 5).is_ok());
    }

    #[test]
    fn empty_batch() {
        let db = MockDb::default();
        let classifier = MockClassifier::default();
        let results = batch_classify_and_search(&db, &classifier, &[], SEOUL, 5).unwrap();
        assert!(results.is_empty());
        assert!(matches!(
            batch_classify_and_search(&db, &classifier, &[], SEOUL, 0),
            Err(Error::InvalidLimit)
        ));
    }

    #[test]
    fn items_without_content_type_count_as_images() {
        let mut item = item("bottle", "glass");
        assert!(item.ensure_image().is_ok());
        item.content_type = None;
        assert!(item.ensure_image().is_ok());
        item.content_type = Some("text/plain".into());
        assert!(matches!(item.ensure_image(), Err(Error::NotAnImage(ct)) if ct == "text/plain"));
    }

    #[test]
    fn image_content_types() {
        assert!(is_image_content_type("image/jpeg"));
        assert!(is_image_content_type("IMAGE/PNG"));
        assert!(is_image_content_type(" image/webp"));
        assert!(!is_image_content_type("image"));
        assert!(!is_image_content_type("application/octet-stream"));
        assert!(!is_image_content_type(""));
    }
}
