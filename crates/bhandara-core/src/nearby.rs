//! "Nearby" suggestions: the closest catalog entries to the visitor, or a
//! fixed Mumbai-region default until a position is known.

use serde::Serialize;

use crate::catalog::Location;
use crate::geo::Coordinates;

pub const NEARBY_RADIUS_KM: f64 = 100.0;
pub const MAX_SUGGESTIONS: usize = 5;

/// City substrings used when no user position is available.
pub const FALLBACK_REGIONS: [&str; 5] = ["mumbai", "virar", "vasai", "palghar", "boisar"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NearbyMode {
    /// Ranked by distance from a known position.
    Nearby,
    /// Static regional default; no position yet.
    Fallback,
}

impl NearbyMode {
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            NearbyMode::Nearby => "Nearby Bhandaras",
            NearbyMode::Fallback => "Mumbai Area Bhandaras",
        }
    }

    /// Whether the UI should offer the visitor a "use my location" action.
    #[must_use]
    pub fn offers_location_request(self) -> bool {
        matches!(self, NearbyMode::Fallback)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedLocation<'a> {
    pub location: &'a Location,
    /// `None` in fallback mode.
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nearby<'a> {
    pub mode: NearbyMode,
    pub items: Vec<RankedLocation<'a>>,
}

/// Derive the suggestion list for an optional user position.
#[must_use]
pub fn rank(locations: &[Location], user: Option<Coordinates>) -> Nearby<'_> {
    match user {
        Some(position) => Nearby {
            mode: NearbyMode::Nearby,
            items: rank_by_distance(locations, position),
        },
        None => Nearby {
            mode: NearbyMode::Fallback,
            items: fallback_region(locations),
        },
    }
}

fn rank_by_distance(locations: &[Location], position: Coordinates) -> Vec<RankedLocation<'_>> {
    let mut ranked: Vec<(f64, &Location)> = locations
        .iter()
        .map(|location| (position.distance_to(&location.coordinates()), location))
        .filter(|(distance, _)| *distance <= NEARBY_RADIUS_KM)
        .collect();

    // sort_by is stable, so equal distances keep catalog order.
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(distance, location)| RankedLocation {
            location,
            distance_km: Some(distance),
        })
        .collect()
}

fn fallback_region(locations: &[Location]) -> Vec<RankedLocation<'_>> {
    locations
        .iter()
        .filter(|location| in_fallback_region(location))
        .take(MAX_SUGGESTIONS)
        .map(|location| RankedLocation {
            location,
            distance_km: None,
        })
        .collect()
}

fn in_fallback_region(location: &Location) -> bool {
    let city = location.city.to_lowercase();
    FALLBACK_REGIONS.iter().any(|region| city.contains(region))
}
