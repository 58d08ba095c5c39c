use super::{prelude::*, search_nearby, SearchCriteria};
use std::collections::BTreeMap;

/// Maximum number of locations per category.
pub const CATEGORY_RECOMMENDATION_LIMIT: usize = 3;

#[derive(Debug)]
pub struct CategoryRecommendation {
    pub info: &'static WasteCategoryInfo,
    /// The nearest locations or the reason why the search failed.
    pub candidates: Result<Vec<Candidate>>,
}

impl CategoryRecommendation {
    pub fn count(&self) -> usize {
        self.candidates.as_ref().map(Vec::len).unwrap_or_default()
    }
}

/// One entry for each recyclable category, in display order.
pub type CompositeRecommendation = BTreeMap<WasteCategory, CategoryRecommendation>;

/// Nearest locations for every recyclable category.
///
/// A failing search only affects the entry of its own category.
pub fn recommend_by_category<R: LocationRepo>(
    repo: &R,
    area: SearchArea,
) -> Result<CompositeRecommendation> {
    area.validate()?;
    let recommendation = WasteCategory::RECYCLABLE
        .into_iter()
        .map(|category| {
            let criteria = SearchCriteria {
                waste_type: Some(category),
                ..SearchCriteria::new(area, CATEGORY_RECOMMENDATION_LIMIT)
            };
            let candidates = search_nearby(repo, &criteria);
            if let Err(err) = &candidates {
                log::warn!("Failed to search locations for {category}: {err}");
            }
            let entry = CategoryRecommendation {
                info: category.info(),
                candidates,
            };
            (category, entry)
        })
        .collect();
    Ok(recommendation)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{sample_locations, MockDb};
    use super::*;
    use crate::repositories;
    use recymap_entities::builders::*;
    use std::cell::Cell;

    fn area(lat: f64, lng: f64, radius_km: f64) -> SearchArea {
        SearchArea {
            lat,
            lng,
            radius_km,
        }
    }

    #[test]
    fn only_metal_nearby() {
        let db = MockDb::default();
        db.locations.borrow_mut().extend([
            Location::build()
                .id("metal")
                .lat_lng(10.0, 10.0)
                .categories(&[WasteCategory::Metal])
                .finish(),
            Location::build()
                .id("far-glass")
                .lat_lng(11.0, 10.0)
                .categories(&[WasteCategory::Glass])
                .finish(),
        ]);
        let rec = recommend_by_category(&db, area(10.0, 10.0, 5.0)).unwrap();
        assert_eq!(
            rec.keys().copied().collect::<Vec<_>>(),
            WasteCategory::RECYCLABLE
        );
        for (category, entry) in &rec {
            assert_eq!(entry.info, category.info());
            if *category == WasteCategory::Metal {
                assert_eq!(entry.count(), 1);
            } else {
                assert_eq!(entry.count(), 0);
                assert!(entry.candidates.as_ref().unwrap().is_empty());
            }
        }
    }

    #[test]
    fn at_most_three_per_category() {
        let db = MockDb::default();
        db.locations.borrow_mut().extend(sample_locations());
        let rec = recommend_by_category(&db, area(37.5665, 126.9780, 50.0)).unwrap();
        assert_eq!(rec.len(), 4);
        for (category, entry) in &rec {
            let candidates = entry.candidates.as_ref().unwrap();
            assert_eq!(candidates.len(), CATEGORY_RECOMMENDATION_LIMIT);
            assert!(candidates.iter().all(|c| c.location.accepts(*category)));
            assert!(candidates
                .windows(2)
                .all(|w| w[0].distance <= w[1].distance));
        }
        assert_eq!(db.read_count.get(), 4);
    }

    #[test]
    fn invalid_area_aborts_the_whole_request() {
        let db = MockDb::default();
        assert!(matches!(
            recommend_by_category(&db, area(0.0, 0.0, 0.0)),
            Err(Error::InvalidRadius)
        ));
        assert!(matches!(
            recommend_by_category(&db, area(-91.0, 0.0, 1.0)),
            Err(Error::InvalidLatitude)
        ));
        assert_eq!(db.read_count.get(), 0);
    }

    // Fails every second read
    #[derive(Default)]
    struct FlakyDb {
        db: MockDb,
        reads: Cell<usize>,
    }

    impl LocationRepo for FlakyDb {
        fn create_location(&self, location: Location) -> repositories::Result<()> {
            self.db.create_location(location)
        }
        fn get_location(&self, id: &str) -> repositories::Result<Location> {
            self.db.get_location(id)
        }
        fn update_location(&self, location: &Location) -> repositories::Result<()> {
            self.db.update_location(location)
        }
        fn deactivate_location(&self, id: &str, at: Timestamp) -> repositories::Result<()> {
            self.db.deactivate_location(id, at)
        }
        fn all_active_locations(&self) -> repositories::Result<Vec<Location>> {
            let reads = self.reads.get();
            self.reads.set(reads + 1);
            if reads % 2 == 1 {
                return Err(RepoError::Io(std::io::ErrorKind::TimedOut.into()));
            }
            self.db.all_active_locations()
        }
    }

    #[test]
    fn failing_categories_do_not_affect_the_others() {
        let db = FlakyDb::default();
        db.db.locations.borrow_mut().extend(sample_locations());
        let rec = recommend_by_category(&db, area(37.5665, 126.9780, 50.0)).unwrap();
        assert_eq!(rec.len(), 4);
        assert_eq!(rec[&WasteCategory::Glass].count(), 3);
        assert!(rec[&WasteCategory::Paper].candidates.is_err());
        assert_eq!(rec[&WasteCategory::Plastic].count(), 3);
        assert!(matches!(
            rec[&WasteCategory::Metal].candidates,
            Err(Error::Repo(RepoError::Io(_)))
        ));
        assert_eq!(rec[&WasteCategory::Metal].count(), 0);
    }
}
