//! Great-circle distance on a spherical Earth.

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        distance_km(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Haversine distance in kilometers between two points.
///
/// Inputs are not range-checked; any finite values are accepted.
#[must_use]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUMBAI: (f64, f64) = (19.07, 72.87);
    const PUNE: (f64, f64) = (18.52, 73.85);
    const DELHI: (f64, f64) = (28.61, 77.20);

    #[test]
    fn identical_points_are_zero_apart() {
        assert!(distance_km(MUMBAI.0, MUMBAI.1, MUMBAI.0, MUMBAI.1).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = distance_km(MUMBAI.0, MUMBAI.1, DELHI.0, DELHI.1);
        let back = distance_km(DELHI.0, DELHI.1, MUMBAI.0, MUMBAI.1);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn mumbai_to_pune_is_beyond_one_hundred_km() {
        let d = distance_km(MUMBAI.0, MUMBAI.1, PUNE.0, PUNE.1);
        assert!(d > 100.0 && d < 130.0, "got {d}");
    }

    #[test]
    fn mumbai_to_delhi_is_roughly_1150_km() {
        let d = distance_km(MUMBAI.0, MUMBAI.1, DELHI.0, DELHI.1);
        assert!(d > 1100.0 && d < 1200.0, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn distance_to_matches_free_function() {
        let a = Coordinates::new(MUMBAI.0, MUMBAI.1);
        let b = Coordinates::new(DELHI.0, DELHI.1);
        assert!((a.distance_to(&b) - distance_km(MUMBAI.0, MUMBAI.1, DELHI.0, DELHI.1)).abs() < 1e-12);
    }
}
