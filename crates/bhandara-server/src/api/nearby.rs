use axum::{
    extract::{Query, State},
    Extension, Json,
};
use bhandara_core::{rank, Coordinates, NearbyMode};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::locations::LocationItem;
use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Default, Deserialize)]
pub(super) struct NearbyParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct NearbyItem {
    #[serde(flatten)]
    pub location: LocationItem,
    pub distance_km: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct NearbyData {
    pub mode: NearbyMode,
    pub heading: &'static str,
    pub offers_location_request: bool,
    pub items: Vec<NearbyItem>,
}

pub(super) async fn list_nearby(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<ApiResponse<NearbyData>>, ApiError> {
    let position = match parse_position(&params) {
        Ok(position) => position,
        Err(message) => return Err(ApiError::new(req_id.0, "validation_error", message)),
    };

    let nearby = rank(state.catalog.locations(), position);
    let data = NearbyData {
        mode: nearby.mode,
        heading: nearby.mode.heading(),
        offers_location_request: nearby.mode.offers_location_request(),
        items: nearby
            .items
            .into_iter()
            .map(|ranked| NearbyItem {
                location: LocationItem::from(ranked.location),
                distance_km: ranked.distance_km,
            })
            .collect(),
    };

    Ok(Json(ApiResponse::new(data, req_id.0)))
}

/// `lat` and `lng` must be supplied together; neither means "position unknown".
fn parse_position(params: &NearbyParams) -> Result<Option<Coordinates>, String> {
    match (params.lat.as_deref(), params.lng.as_deref()) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => {
            let lat = parse_coordinate("lat", lat, 90.0)?;
            let lng = parse_coordinate("lng", lng, 180.0)?;
            Ok(Some(Coordinates::new(lat, lng)))
        }
        _ => Err("lat and lng must be provided together".to_string()),
    }
}

fn parse_coordinate(name: &str, raw: &str, bound: f64) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{name} must be a number, got '{raw}'"))?;
    if !value.is_finite() || value.abs() > bound {
        return Err(format!("{name} must be between -{bound} and {bound}"));
    }
    Ok(value)
}
