use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use bhandara_core::{Category, MailDraft, RegistrationForm};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct RegistrationDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub mailto_url: String,
}

impl From<MailDraft> for RegistrationDraft {
    fn from(draft: MailDraft) -> Self {
        let mailto_url = draft.mailto_url();
        Self {
            recipient: draft.recipient,
            subject: draft.subject,
            body: draft.body,
            mailto_url,
        }
    }
}

/// Turn a registration form into a mail draft for the caller's mail client.
///
/// Nothing is stored or sent server-side.
pub(super) async fn create_registration_draft(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<RegistrationForm>, JsonRejection>,
) -> Result<Json<ApiResponse<RegistrationDraft>>, ApiError> {
    let Json(form) = payload
        .map_err(|rejection| ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text()))?;

    let draft = MailDraft::compose(&form, &state.registration_recipient)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;
    tracing::info!(name = %form.name, city = %form.city, "registration draft composed");

    Ok(Json(ApiResponse::new(RegistrationDraft::from(draft), req_id.0)))
}

pub(super) async fn list_categories(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    let data = Category::KNOWN.iter().map(ToString::to_string).collect();
    Json(ApiResponse::new(data, req_id.0))
}
