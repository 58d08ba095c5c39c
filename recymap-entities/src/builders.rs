pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::location_builder::*;

pub mod location_builder {

    use super::*;
    use crate::{category::*, contact::*, geo::*, id::*, location::*, time::*};
    use std::collections::BTreeSet;

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.location.address = address.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn categories(mut self, categories: &[WasteCategory]) -> Self {
            self.location.waste_categories = categories.iter().copied().collect();
            self
        }
        pub fn opening_hours(mut self, hours: &str) -> Self {
            self.location.opening_hours = Some(hours.into());
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.location.contact = Some(Contact {
                phone: Some(phone.into()),
                ..Default::default()
            });
            self
        }
        pub fn inactive(mut self) -> Self {
            self.location.active = false;
            self
        }
        pub fn updated_at(mut self, at: Timestamp) -> Self {
            self.location.updated_at = at;
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            let now = Timestamp::now();
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    name: "".into(),
                    address: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    waste_categories: BTreeSet::from([WasteCategory::Glass]),
                    opening_hours: None,
                    contact: None,
                    description: None,
                    active: true,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
