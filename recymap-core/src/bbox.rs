use crate::entities::*;

/// Approximate length of one degree of latitude.
///
/// Slightly smaller than the actual ~111.195 km so that the
/// resulting boxes are never too narrow.
pub const KM_PER_LAT_DEG: f64 = 111.0;

/// Half the width of a box around a point at `lat_deg` in degrees
/// of longitude, or `None` if the box must span all longitudes.
///
/// Close to the poles the divisor `cos(lat)` approaches zero and the
/// span diverges. Such cases, as well as circles that enclose a pole,
/// are clamped to the full longitude range.
pub fn lng_span_deg(lat_deg: f64, radius: Distance) -> Option<f64> {
    let radius_km = radius.to_km();
    if lat_deg.abs() + radius_km / KM_PER_LAT_DEG >= LatCoord::DEG_MAX {
        return None;
    }
    let cos_lat = lat_deg.to_radians().cos().abs();
    let approx_span = radius_km / (KM_PER_LAT_DEG * cos_lat);
    // The linear approximation falls short of the spherical
    // half-width at high latitudes.
    let ratio = (radius_km / EARTH_RADIUS_KM).sin() / cos_lat;
    if !(ratio < 1.0) {
        return None;
    }
    let exact_span = ratio.asin().to_degrees();
    let span = approx_span.max(exact_span);
    if span.is_finite() && span < LngCoord::DEG_MAX {
        Some(span)
    } else {
        None
    }
}

/// Rectangular area that contains at least all points within
/// `radius` of `center`.
pub fn bbox_around(center: MapPoint, radius: Distance) -> MapBbox {
    debug_assert!(center.is_valid());
    debug_assert!(radius.is_valid());
    let (lat_deg, lng_deg) = center.to_lat_lng_deg();
    let lat_span = radius.to_km() / KM_PER_LAT_DEG;

    let south_lat = widen_lat(LatCoord::DEG_MIN.max(lat_deg - lat_span), -1);
    let north_lat = widen_lat(LatCoord::DEG_MAX.min(lat_deg + lat_span), 1);

    let (west_lng, east_lng) = match lng_span_deg(lat_deg, radius) {
        Some(lng_span) => {
            let mut west_lng_deg = lng_deg - lng_span;
            if west_lng_deg < LngCoord::DEG_MIN {
                // wrap around
                west_lng_deg += LngCoord::DEG_MAX - LngCoord::DEG_MIN;
            }
            let mut east_lng_deg = lng_deg + lng_span;
            if east_lng_deg > LngCoord::DEG_MAX {
                // wrap around
                east_lng_deg -= LngCoord::DEG_MAX - LngCoord::DEG_MIN;
            }
            (widen_lng(west_lng_deg, -1), widen_lng(east_lng_deg, 1))
        }
        None => {
            log::debug!(
                "Bounding box around {} with radius {} spans all longitudes",
                center,
                radius
            );
            (LngCoord::min(), LngCoord::max())
        }
    };

    let bbox = MapBbox::new(
        MapPoint::new(south_lat, west_lng),
        MapPoint::new(north_lat, east_lng),
    );
    debug_assert!(bbox.is_valid());
    bbox
}

// Move the edge outwards by one fixed-point step to compensate
// for rounding when converting from degrees.
fn widen_lat(deg: f64, step: i32) -> LatCoord {
    let raw = LatCoord::from_deg(deg).to_raw().saturating_add(step);
    LatCoord::from_raw(raw.clamp(LatCoord::min().to_raw(), LatCoord::max().to_raw()))
}

fn widen_lng(deg: f64, step: i32) -> LngCoord {
    let raw = LngCoord::from_deg(deg).to_raw().saturating_add(step);
    LngCoord::from_raw(raw.clamp(LngCoord::min().to_raw(), LngCoord::max().to_raw()))
}

pub trait InBBox {
    fn in_bbox(&self, bbox: &MapBbox) -> bool;
}

impl InBBox for Location {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        self.pos.is_valid() && bbox.contains_point(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use recymap_entities::builders::*;

    fn km(km: f64) -> Distance {
        Distance::from_km(km)
    }

    #[test]
    fn lat_span_is_radius_by_111() {
        let bbox = bbox_around(MapPoint::from_lat_lng_deg(10.0, 20.0), km(111.0));
        assert!((bbox.southwest().lat().to_deg() - 9.0).abs() < 1e-6);
        assert!((bbox.northeast().lat().to_deg() - 11.0).abs() < 1e-6);
    }

    #[test]
    fn lng_span_at_the_equator_equals_lat_span() {
        let span = lng_span_deg(0.0, km(55.5)).unwrap();
        assert!((span - 0.5).abs() < 1e-12);
    }

    #[test]
    fn lng_span_widens_towards_the_poles() {
        let r = km(10.0);
        let at_0 = lng_span_deg(0.0, r).unwrap();
        let at_45 = lng_span_deg(45.0, r).unwrap();
        let at_80 = lng_span_deg(-80.0, r).unwrap();
        assert!(at_0 < at_45);
        assert!(at_45 < at_80);
        assert!((at_45 - 10.0 / (111.0 * 45f64.to_radians().cos())).abs() < 1e-9);
    }

    #[test]
    fn degenerate_lng_span_near_the_poles() {
        assert_eq!(lng_span_deg(90.0, km(1.0)), None);
        assert_eq!(lng_span_deg(-90.0, km(1.0)), None);
        assert_eq!(lng_span_deg(89.999, km(1.0)), None);
        assert_eq!(lng_span_deg(89.9, km(100.0)), None);
        let bbox = bbox_around(MapPoint::from_lat_lng_deg(90.0, 0.0), km(1.0));
        assert!(bbox.is_valid());
        assert_eq!(bbox.southwest().lng(), LngCoord::min());
        assert_eq!(bbox.northeast().lng(), LngCoord::max());
        assert_eq!(bbox.northeast().lat(), LatCoord::max());
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(89.995, 179.0)));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(89.995, -179.0)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(89.9, 0.0)));
    }

    #[test]
    fn wrap_around_the_antimeridian() {
        let bbox = bbox_around(MapPoint::from_lat_lng_deg(0.0, 179.99), km(5.0));
        assert!(bbox.is_valid());
        assert!(bbox.southwest().lng() > bbox.northeast().lng());
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, 179.98)));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, -179.99)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, 0.0)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, -179.0)));

        let bbox = bbox_around(MapPoint::from_lat_lng_deg(0.0, -179.99), km(5.0));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, 179.99)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, 179.0)));
    }

    #[test]
    fn location_in_bbox() {
        let bbox = bbox_around(MapPoint::from_lat_lng_deg(37.5665, 127.0780), km(5.0));
        let near = Location::build().lat_lng(37.57, 127.08).finish();
        let far = Location::build().lat_lng(37.4947, 127.0276).finish();
        assert!(near.in_bbox(&bbox));
        assert!(!far.in_bbox(&bbox));
    }

    // Destination point given a start point, an initial bearing and
    // an angular distance on a sphere.
    fn destination(lat: f64, lng: f64, bearing: f64, angular: f64) -> (f64, f64) {
        let (lat1, lng1) = (lat.to_radians(), lng.to_radians());
        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos())
            .clamp(-1.0, 1.0)
            .asin();
        let lng2 = lng1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());
        let mut lng2 = lng2.to_degrees();
        while lng2 > 180.0 {
            lng2 -= 360.0;
        }
        while lng2 < -180.0 {
            lng2 += 360.0;
        }
        (lat2.to_degrees().clamp(-90.0, 90.0), lng2)
    }

    #[test]
    fn bbox_never_excludes_points_within_the_radius() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut checked = 0;
        for i in 0..20_000 {
            let center_lat = match i % 4 {
                0 => rng.gen_range(-89.99..=89.99),
                1 => rng.gen_range(75.0..=89.99),
                2 => rng.gen_range(-89.99..=-75.0),
                _ => rng.gen_range(-60.0..=60.0),
            };
            let center_lng = if i % 3 == 0 {
                rng.gen_range(179.0..=180.0) * if rng.gen() { 1.0 } else { -1.0 }
            } else {
                rng.gen_range(-180.0..=180.0)
            };
            let center = MapPoint::from_lat_lng_deg(center_lat, center_lng);
            let radius = km(rng.gen_range(0.0001..=100.0));
            let bbox = bbox_around(center, radius);

            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
            let fraction: f64 = if rng.gen() { 1.0 } else { rng.gen_range(0.0..=1.0) };
            let angular = radius.to_km() * fraction / EARTH_RADIUS_KM;
            let (lat, lng) = destination(center_lat, center_lng, bearing, angular);
            let pt = MapPoint::from_lat_lng_deg(lat, lng);

            if MapPoint::distance(center, pt).unwrap() <= radius {
                checked += 1;
                assert!(
                    bbox.contains_point(pt),
                    "{} within {} of {} but not in {}",
                    pt,
                    radius,
                    center,
                    bbox
                );
            }
        }
        assert!(checked > 10_000);
    }
}
