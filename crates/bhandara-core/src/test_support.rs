use crate::catalog::{Catalog, Category, Location, LocationId};

pub(crate) fn location(id: u32, name: &str, city: &str, lat: f64, lng: f64) -> Location {
    Location {
        id: LocationId(id),
        name: name.to_string(),
        city: city.to_string(),
        country: "India".to_string(),
        lat,
        lng,
        timing: "Daily 12:00 PM - 3:00 PM".to_string(),
        description: format!("Free meals served at {name}"),
        category: Category::TempleBhandara,
    }
}

/// Mumbai, Delhi, Pune.
pub(crate) fn three_cities() -> Catalog {
    Catalog::new(vec![
        location(1, "Siddhivinayak Bhandara", "Mumbai", 19.07, 72.87),
        location(2, "Bangla Sahib Langar", "Delhi", 28.61, 77.20),
        location(3, "Dagdusheth Annadan", "Pune", 18.52, 73.85),
    ])
    .expect("valid fixture catalog")
}

/// Mumbai metropolitan region plus a few far-away entries.
pub(crate) fn mumbai_region() -> Catalog {
    Catalog::new(vec![
        location(1, "Golden Temple Langar", "Amritsar", 31.62, 74.88),
        location(2, "Siddhivinayak Bhandara", "Mumbai", 19.017, 72.830),
        location(3, "Virar Jivdani Bhandara", "Virar", 19.455, 72.811),
        location(4, "Vasai Fort Langar", "Vasai", 19.330, 72.815),
        location(5, "Haji Ali Dargah Langar", "Mumbai", 18.983, 72.809),
        location(6, "Palghar Community Kitchen", "Palghar", 19.697, 72.765),
        location(7, "Boisar Annakshetra", "Boisar", 19.803, 72.755),
        location(8, "Tirumala Annadanam", "Tirupati", 13.683, 79.347),
        location(9, "Navi Mumbai Seva", "Navi Mumbai", 19.033, 73.030),
    ])
    .expect("valid fixture catalog")
}
