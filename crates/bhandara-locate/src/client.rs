//! HTTP client for IP-based geolocation.
//!
//! Speaks the ip-api.com JSON shape: a `status` of `"success"` with `lat` and
//! `lon`, or `"fail"` with a `message`. Use [`IpGeolocator::with_base_url`] to
//! point at a mock server in tests.

use std::time::Duration;

use bhandara_core::Coordinates;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::error::LocateError;
use crate::PositionSource;

pub const DEFAULT_BASE_URL: &str = "http://ip-api.com/json/";

/// Only the fields we read are requested.
const FIELDS: &str = "status,message,lat,lon,city,country";

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

pub struct IpGeolocator {
    client: Client,
    base_url: Url,
}

impl IpGeolocator {
    /// Creates a client pointed at the public ip-api.com endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, LocateError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::Http`] if the client cannot be built, or
    /// [`LocateError::InvalidUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LocateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| LocateError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Ask the service where the caller's public IP is.
    ///
    /// # Errors
    ///
    /// - [`LocateError::Http`] on network failure.
    /// - [`LocateError::UnexpectedStatus`] on a non-2xx response.
    /// - [`LocateError::Deserialize`] if the body is not the expected JSON.
    /// - [`LocateError::Declined`] if the service reports `"fail"`.
    /// - [`LocateError::OutOfRange`] if the coordinates are not on Earth.
    pub async fn lookup(&self) -> Result<Coordinates, LocateError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("fields", FIELDS);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(LocateError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let body: IpApiResponse =
            serde_json::from_slice(&bytes).map_err(|e| LocateError::Deserialize {
                context: "ip geolocation".to_string(),
                source: e,
            })?;

        parse_position(body)
    }
}

fn parse_position(body: IpApiResponse) -> Result<Coordinates, LocateError> {
    if body.status != "success" {
        return Err(LocateError::Declined(
            body.message.unwrap_or_else(|| body.status.clone()),
        ));
    }

    let (Some(lat), Some(lng)) = (body.lat, body.lon) else {
        return Err(LocateError::Declined(
            "response is missing lat/lon".to_string(),
        ));
    };

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(LocateError::OutOfRange { lat, lng });
    }

    tracing::debug!(
        lat,
        lng,
        city = body.city.as_deref().unwrap_or_default(),
        country = body.country.as_deref().unwrap_or_default(),
        "ip geolocation resolved"
    );

    Ok(Coordinates::new(lat, lng))
}

impl PositionSource for IpGeolocator {
    fn name(&self) -> &'static str {
        "ip-api"
    }

    async fn locate(&self) -> Result<Coordinates, LocateError> {
        self.lookup().await
    }
}
