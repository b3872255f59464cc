//! The static, read-only catalog of Bhandara locations.
//!
//! Loaded once at startup from a JSON or YAML file and shared behind an `Arc`
//! for the rest of the process. Nothing mutates a [`Location`] after load.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;
use crate::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Kind of food service offered. Unknown labels are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    TempleBhandara,
    GurudwaraLangar,
    DargahLangar,
    CommunityBhandara,
    TemplePrasadam,
    TempleAnnadanam,
    Other(String),
}

impl Category {
    /// Labels offered on the registration form, in display order.
    pub const KNOWN: [Category; 6] = [
        Category::TempleBhandara,
        Category::GurudwaraLangar,
        Category::DargahLangar,
        Category::CommunityBhandara,
        Category::TemplePrasadam,
        Category::TempleAnnadanam,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::TempleBhandara => "Temple Bhandara",
            Category::GurudwaraLangar => "Gurudwara Langar",
            Category::DargahLangar => "Dargah Langar",
            Category::CommunityBhandara => "Community Bhandara",
            Category::TemplePrasadam => "Temple Prasadam",
            Category::TempleAnnadanam => "Temple Annadanam",
            Category::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::KNOWN
            .into_iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(Category::Other(label))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub timing: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: Category,
}

impl Location {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Validated, ordered list of locations. Catalog order is the tie-break order
/// everywhere a stable ordering is needed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locations: Vec<Location>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Location>),
    Document { locations: Vec<Location> },
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] for blank names, duplicate ids, or
    /// coordinates outside the valid latitude/longitude ranges.
    pub fn new(locations: Vec<Location>) -> Result<Self, CatalogError> {
        validate_locations(&locations)?;
        Ok(Self { locations })
    }

    /// Parse a JSON catalog (a bare array or a `{"locations": [...]}` document).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] on malformed input, or a validation error.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.into_locations())
    }

    /// Parse a YAML catalog (a bare list or a `locations:` document).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Yaml`] on malformed input, or a validation error.
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::new(file.into_locations())
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl CatalogFile {
    fn into_locations(self) -> Vec<Location> {
        match self {
            CatalogFile::List(locations) | CatalogFile::Document { locations } => locations,
        }
    }
}

/// Load and validate the catalog file, choosing the parser by extension.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, has an unknown
/// extension, fails to parse, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => Catalog::from_json(&content),
        "yaml" | "yml" => Catalog::from_yaml(&content),
        other => Err(CatalogError::UnsupportedFormat(other.to_string())),
    }
}

fn validate_locations(locations: &[Location]) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::new();

    for location in locations {
        if location.name.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "location {} has an empty name",
                location.id
            )));
        }

        if !seen_ids.insert(location.id) {
            return Err(CatalogError::Validation(format!(
                "duplicate location id {} ('{}')",
                location.id, location.name
            )));
        }

        if !location.lat.is_finite() || !(-90.0..=90.0).contains(&location.lat) {
            return Err(CatalogError::Validation(format!(
                "location '{}' has latitude {} outside [-90, 90]",
                location.name, location.lat
            )));
        }

        if !location.lng.is_finite() || !(-180.0..=180.0).contains(&location.lng) {
            return Err(CatalogError::Validation(format!(
                "location '{}' has longitude {} outside [-180, 180]",
                location.name, location.lng
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
