use std::{cmp::Ordering, fmt};

pub type RawCoord = i32;

// The smallest raw value is reserved as a marker for "no coordinate"
// so that the valid range is symmetric around zero.
const RAW_COORD_INVALID: RawCoord = RawCoord::MIN;
const RAW_COORD_MAX: RawCoord = RawCoord::MAX;
const RAW_COORD_MIN: RawCoord = -RAW_COORD_MAX;

macro_rules! fixed_point_coord {
    ($(#[$attr:meta])* $name:ident, $deg_max:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name(RawCoord);

        impl $name {
            pub const DEG_MAX: f64 = $deg_max;
            pub const DEG_MIN: f64 = -$deg_max;
            const RAW_PER_DEG: f64 = RAW_COORD_MAX as f64 / $deg_max;

            pub const fn max() -> Self {
                Self(RAW_COORD_MAX)
            }

            pub const fn min() -> Self {
                Self(RAW_COORD_MIN)
            }

            pub const fn to_raw(self) -> RawCoord {
                self.0
            }

            pub const fn from_raw(raw: RawCoord) -> Self {
                Self(raw)
            }

            pub const fn is_valid(self) -> bool {
                self.0 != RAW_COORD_INVALID
            }

            /// Degrees or NaN if invalid.
            pub fn to_deg(self) -> f64 {
                if !self.is_valid() {
                    return f64::NAN;
                }
                f64::from(self.0) / Self::RAW_PER_DEG
            }

            /// The caller must ensure that `deg` is in range.
            pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
                let deg = deg.into();
                debug_assert!((Self::DEG_MIN..=Self::DEG_MAX).contains(&deg));
                let raw = (deg * Self::RAW_PER_DEG).round() as RawCoord;
                Self(raw.max(RAW_COORD_MIN))
            }

            pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
                let deg = deg.into();
                (Self::DEG_MIN..=Self::DEG_MAX)
                    .contains(&deg)
                    .then(|| Self::from_deg(deg))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(RAW_COORD_INVALID)
            }
        }

        /// Invalid coordinates are incomparable.
        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                if self == other {
                    Some(Ordering::Equal)
                } else if self.is_valid() && other.is_valid() {
                    Some(self.0.cmp(&other.0))
                } else {
                    None
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.to_deg())
            }
        }
    };
}

fixed_point_coord!(
    /// Latitude in fixed-point representation.
    LatCoord,
    90.0
);

fixed_point_coord!(
    /// Longitude in fixed-point representation.
    LngCoord,
    180.0
);

/// A position on the map given by its fixed-point coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub const fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    /// The caller must ensure that both arguments are in range.
    pub fn from_lat_lng_deg(lat: impl Into<f64>, lng: impl Into<f64>) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg(lat: impl Into<f64>, lng: impl Into<f64>) -> Option<Self> {
        let lat = LatCoord::try_from_deg(lat)?;
        let lng = LngCoord::try_from_deg(lng)?;
        Some(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (lat, lng) = self.to_lat_lng_deg();
        write!(f, "{lat},{lng}")
    }
}

/// A distance on the surface of the earth.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_km(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_km(self) -> f64 {
        self.0
    }

    /// Kilometers rounded to two decimal places, intended for display only.
    pub fn to_km_rounded(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2} km", self.0)
    }
}

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Great-circle distance in kilometers between two points
/// given in degrees, using the haversine formula.
///
/// The function is total: it neither validates nor rejects
/// its arguments.
pub fn haversine_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).abs().to_radians();
    let dlng = (lng2 - lng1).abs().to_radians();
    let (lat1_rad, lat2_rad) = (lat1.to_radians(), lat2.to_radians());

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlng / 2.0).sin().powi(2);
    // Rounding may push `a` slightly above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

impl MapPoint {
    /// Calculate the great-circle distance on the surface of the earth.
    ///
    /// Returns `None` if one of the points is invalid.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }
        let (lat1, lng1) = p1.to_lat_lng_deg();
        let (lat2, lng2) = p2.to_lat_lng_deg();
        Some(Distance::from_km(haversine_distance_km(
            lat1, lng1, lat2, lng2,
        )))
    }
}

/// A rectangular area between a south-west and a north-east corner.
///
/// If the western edge is east of the eastern edge the box wraps
/// around the antimeridian.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    southwest: MapPoint,
    northeast: MapPoint,
}

impl MapBbox {
    pub const fn new(southwest: MapPoint, northeast: MapPoint) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.southwest
    }

    pub const fn northeast(&self) -> MapPoint {
        self.northeast
    }

    pub fn is_valid(&self) -> bool {
        self.southwest.is_valid()
            && self.northeast.is_valid()
            && self.southwest.lat() <= self.northeast.lat()
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.southwest.lng() > self.northeast.lng()
    }

    /// All edges are inclusive.
    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        debug_assert!(pt.is_valid());
        let (west, east) = (self.southwest.lng(), self.northeast.lng());
        let lat_ok = self.southwest.lat() <= pt.lat() && pt.lat() <= self.northeast.lat();
        let lng_ok = if self.crosses_antimeridian() {
            pt.lng() >= west || pt.lng() <= east
        } else {
            west <= pt.lng() && pt.lng() <= east
        };
        lat_ok && lng_ok
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.southwest, self.northeast)
    }
}
