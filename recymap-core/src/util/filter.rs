use crate::entities::*;

/// A single constraint on a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFilter {
    ActiveOnly,
    WasteType(WasteCategory),
    /// Case-sensitive substring of the name.
    NameContains(String),
}

impl LocationFilter {
    pub fn matches(&self, location: &Location) -> bool {
        match self {
            Self::ActiveOnly => location.active,
            Self::WasteType(category) => location.accepts(*category),
            Self::NameContains(part) => location.name.contains(part.as_str()),
        }
    }
}

pub const fn active_only() -> LocationFilter {
    LocationFilter::ActiveOnly
}

pub const fn by_waste_type(category: WasteCategory) -> LocationFilter {
    LocationFilter::WasteType(category)
}

pub fn by_name(part: impl Into<String>) -> LocationFilter {
    LocationFilter::NameContains(part.into())
}

/// Conjunction of filters.
///
/// An empty chain matches every location. Chains are never
/// modified in place: adding a filter returns a new chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    filters: Vec<LocationFilter>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(&self, filter: LocationFilter) -> Self {
        let mut filters = self.filters.clone();
        filters.push(filter);
        Self { filters }
    }

    /// Adds the filter if present, otherwise returns an unchanged copy.
    #[must_use]
    pub fn with_opt(&self, filter: Option<LocationFilter>) -> Self {
        match filter {
            Some(filter) => self.with(filter),
            None => self.clone(),
        }
    }

    pub fn filters(&self) -> &[LocationFilter] {
        &self.filters
    }

    pub fn matches(&self, location: &Location) -> bool {
        self.filters.iter().all(|f| f.matches(location))
    }
}

impl FromIterator<LocationFilter> for FilterChain {
    fn from_iter<I: IntoIterator<Item = LocationFilter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}
