//! Case-insensitive text search over the catalog, plus the per-point hints a
//! globe renderer uses to colour and label search matches.

use serde::Serialize;

use crate::catalog::{Location, LocationId};

/// Point colour for locations matching a non-empty search.
pub const HIGHLIGHT_COLOR: &str = "#ff6b35";
/// Point colour for everything else.
pub const BASE_COLOR: &str = "#22c55e";

/// True when `query` is a case-insensitive substring of the location's name,
/// city or country. An empty query matches every location.
#[must_use]
pub fn matches_query(location: &Location, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_lowered(location, &needle)
}

fn matches_lowered(location: &Location, needle: &str) -> bool {
    location.name.to_lowercase().contains(needle)
        || location.city.to_lowercase().contains(needle)
        || location.country.to_lowercase().contains(needle)
}

/// Locations matching `query`, in catalog order.
#[must_use]
pub fn filter<'a>(locations: &'a [Location], query: &str) -> Vec<&'a Location> {
    let needle = query.to_lowercase();
    locations
        .iter()
        .filter(|location| matches_lowered(location, &needle))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointHint {
    pub id: LocationId,
    pub lat: f64,
    pub lng: f64,
    pub color: &'static str,
    pub title: String,
    pub subtitle: String,
    pub category: String,
}

/// One hint per location in the filtered set.
///
/// Points are highlighted only while a search is active; with an empty query
/// every point renders in the base colour.
#[must_use]
pub fn point_hints(locations: &[Location], query: &str) -> Vec<PointHint> {
    let searching = !query.is_empty();
    filter(locations, query)
        .into_iter()
        .map(|location| PointHint {
            id: location.id,
            lat: location.lat,
            lng: location.lng,
            color: if searching { HIGHLIGHT_COLOR } else { BASE_COLOR },
            title: location.name.clone(),
            subtitle: format!("{}, {}", location.city, location.country),
            category: location.category.to_string(),
        })
        .collect()
}
