use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use bhandara_core::{directions_url, filter, point_hints, Location, LocationId, PointHint};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub(super) struct LocationItem {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub timing: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: String,
}

impl From<&Location> for LocationItem {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.0,
            name: location.name.clone(),
            city: location.city.clone(),
            country: location.country.clone(),
            lat: location.lat,
            lng: location.lng,
            timing: location.timing.clone(),
            description: location.description.clone(),
            category: location.category.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct LocationDetail {
    #[serde(flatten)]
    pub location: LocationItem,
    pub directions_url: String,
}

pub(super) async fn list_locations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<Vec<LocationItem>>> {
    let data = filter(state.catalog.locations(), &params.q)
        .into_iter()
        .map(LocationItem::from)
        .collect();

    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn list_location_pins(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<Vec<PointHint>>> {
    let data = point_hints(state.catalog.locations(), &params.q);
    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn get_location(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<LocationDetail>>, ApiError> {
    let Ok(id) = raw_id.parse::<u32>() else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            format!("location id must be a non-negative integer, got '{raw_id}'"),
        ));
    };

    let Some(location) = state.catalog.get(LocationId(id)) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no location with id {id}"),
        ));
    };

    Ok(Json(ApiResponse::new(
        LocationDetail {
            location: LocationItem::from(location),
            directions_url: directions_url(location),
        },
        req_id.0,
    )))
}
