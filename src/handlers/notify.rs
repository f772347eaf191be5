use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::error::LeadError;
use crate::middleware::auth::RequireKeyAuth;
use crate::router::AppState;
use crate::types::notify::{ConfirmationRequest, ConfirmationSent};

/// Standalone exposure of the confirmation notifier, for callers that
/// trigger it out-of-process. Same code path the submission handler fires
/// internally; requires the configured service key.
pub async fn send_confirmation_handler(
    State(state): State<AppState>,
    _auth: RequireKeyAuth,
    payload: Result<Json<ConfirmationRequest>, JsonRejection>,
) -> Result<Json<ConfirmationSent>, LeadError> {
    let Json(req) = payload.map_err(|rej| LeadError::Validation(rej.body_text()))?;
    req.validate()?;
    let fallback = state.notifier.send_confirmation(&req).await?;
    Ok(Json(ConfirmationSent {
        status: "sent",
        fallback,
    }))
}
