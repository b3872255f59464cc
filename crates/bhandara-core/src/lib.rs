pub mod app_config;
pub mod catalog;
pub mod config;
pub mod geo;
pub mod nearby;
pub mod registration;
pub mod search;
pub mod session;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, Catalog, Category, Location, LocationId};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{distance_km, Coordinates};
pub use nearby::{rank, Nearby, NearbyMode, RankedLocation, MAX_SUGGESTIONS, NEARBY_RADIUS_KM};
pub use registration::{
    directions_url, MailDraft, RegistrationForm, CONFIRMATION_DISPLAY, SUBMIT_SETTLE_DELAY,
};
pub use search::{filter, matches_query, point_hints, PointHint};
pub use session::{Effect, RegisterStatus, Session, SessionEvent, SessionSnapshot};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported catalog format \"{0}\"; expected .json, .yaml or .yml")]
    UnsupportedFormat(String),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("registration is missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

#[cfg(test)]
pub(crate) mod test_support;
