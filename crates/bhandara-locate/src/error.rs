use thiserror::Error;

/// Errors from a position lookup. None of these are fatal to callers.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The service answered but refused to resolve a position.
    #[error("geolocation service declined: {0}")]
    Declined(String),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("geolocation returned out-of-range coordinates ({lat}, {lng})")]
    OutOfRange { lat: f64, lng: f64 },

    #[error("invalid geolocation URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("no location service available")]
    Unsupported,
}
