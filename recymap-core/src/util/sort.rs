use crate::entities::*;
use std::cmp::Ordering;

pub fn cmp_by_distance(a: &Candidate, b: &Candidate) -> Ordering {
    a.distance
        .to_km()
        .total_cmp(&b.distance.to_km())
        .then_with(|| a.location.id.cmp(&b.location.id))
}

pub trait SortByDistance {
    /// Nearest first. Equal distances are ordered by location id.
    fn sort_by_distance(&mut self);
}

impl SortByDistance for [Candidate] {
    fn sort_by_distance(&mut self) {
        self.sort_by(cmp_by_distance);
    }
}
