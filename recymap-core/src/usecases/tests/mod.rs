use super::prelude::*;
use anyhow::anyhow;
use std::cell::{Cell, RefCell};


type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub locations: RefCell<Vec<Location>>,
    /// Let every read fail.
    pub fail_reads: Cell<bool>,
    /// Return inactive locations from `all_active_locations`.
    pub leak_inactive: Cell<bool>,
    pub read_count: Cell<usize>,
}

impl LocationRepo for MockDb {
    fn create_location(&self, location: Location) -> RepoResult<()> {
        if self
            .locations
            .borrow()
            .iter()
            .any(|l| l.id == location.id)
        {
            return Err(RepoError::AlreadyExists);
        }
        self.locations.borrow_mut().push(location);
        Ok(())
    }

    fn get_location(&self, id: &str) -> RepoResult<Location> {
        if self.fail_reads.get() {
            return Err(RepoError::Other(anyhow!("read failed")));
        }
        self.locations
            .borrow()
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn update_location(&self, location: &Location) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let stored = locations
            .iter_mut()
            .find(|l| l.id == location.id)
            .ok_or(RepoError::NotFound)?;
        *stored = location.clone();
        Ok(())
    }

    fn deactivate_location(&self, id: &str, at: Timestamp) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let stored = locations
            .iter_mut()
            .find(|l| l.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        stored.deactivate(at);
        Ok(())
    }

    fn all_active_locations(&self) -> RepoResult<Vec<Location>> {
        self.read_count.set(self.read_count.get() + 1);
        if self.fail_reads.get() {
            return Err(RepoError::Other(anyhow!("read failed")));
        }
        let leak_inactive = self.leak_inactive.get();
        Ok(self
            .locations
            .borrow()
            .iter()
            .filter(|l| leak_inactive || l.active)
            .cloned()
            .collect())
    }
}

/// Classifies the image bytes by interpreting them as a category key.
///
/// `b"unavailable"` and `b"blurry"` simulate an unreachable or a
/// refusing classifier, any other unknown content yields an
/// unknown label.
#[derive(Debug, Default)]
pub struct MockClassifier {
    pub calls: Cell<usize>,
}

impl ClassificationGateway for MockClassifier {
    fn classify(&self, image: &[u8]) -> std::result::Result<Classification, ClassificationError> {
        self.calls.set(self.calls.get() + 1);
        let key = String::from_utf8_lossy(image);
        match key.as_ref() {
            "unavailable" => Err(ClassificationError::Unavailable("connection refused".into())),
            "blurry" => Err(ClassificationError::Rejected("image too blurry".into())),
            key => key
                .parse::<WasteCategory>()
                .map(|label| Classification::new(label, 0.87))
                .map_err(|_| ClassificationError::UnknownLabel(key.to_string())),
        }
    }
}

fn sample_location(
    id: &str,
    name: &str,
    lat: f64,
    lng: f64,
    categories: &[WasteCategory],
    hours: &str,
) -> Location {
    use recymap_entities::builders::*;
    Location::build()
        .id(id)
        .name(name)
        .address("Seoul")
        .lat_lng(lat, lng)
        .categories(categories)
        .opening_hours(hours)
        .finish()
}

/// Drop-off points spread across Seoul.
pub fn sample_locations() -> Vec<Location> {
    use recymap_entities::category::WasteCategory::*;
    vec![
        sample_location(
            "gangnam",
            "Gangnam-gu recycling yard",
            37.5665,
            127.0780,
            &[Glass, Paper, Plastic, Metal],
            "24h",
        ),
        sample_location(
            "seocho",
            "Seocho-gu recycling center",
            37.4947,
            127.0276,
            &[Glass, Paper, Plastic],
            "09:00-18:00",
        ),
        sample_location(
            "songpa",
            "Songpa-gu waste drop-off",
            37.5145,
            127.1058,
            &[Metal, Plastic],
            "06:00-22:00",
        ),
        sample_location(
            "mapo",
            "Mapo-gu collection point",
            37.5563,
            126.9226,
            &[Glass, Paper, Plastic, Metal],
            "24h",
        ),
        sample_location(
            "yeongdeungpo",
            "Yeongdeungpo-gu recycling center",
            37.5219,
            126.9242,
            &[Paper, Plastic],
            "08:00-20:00",
        ),
        sample_location(
            "jongno",
            "Jongno-gu recycling yard",
            37.5735,
            126.9788,
            &[Glass, Metal],
            "24h",
        ),
        sample_location(
            "jung",
            "Jung-gu waste drop-off",
            37.5636,
            126.9826,
            &[Glass, Paper, Plastic, Metal],
            "06:00-24:00",
        ),
        sample_location(
            "dongdaemun",
            "Dongdaemun-gu recycling center",
            37.5895,
            127.0563,
            &[Paper, Plastic, Metal],
            "09:00-18:00",
        ),
    ]
}

#[test]
fn mock_classifier_reads_category_keys() {
    let classifier = MockClassifier::default();
    assert_eq!(
        classifier.classify(b"glass").unwrap().label,
        WasteCategory::Glass
    );
    assert!(matches!(
        classifier.classify(b"cardboard"),
        Err(ClassificationError::UnknownLabel(_))
    ));
    assert_eq!(classifier.calls.get(), 2);
}
