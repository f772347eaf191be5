use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{info, warn};
use validator::Validate;

use crate::db::models::NewLead;
use crate::error::LeadError;
use crate::router::AppState;
use crate::types::lead::{LeadAccepted, LeadSubmission};
use crate::types::notify::ConfirmationRequest;

/// Lead submission: validate, persist, then fire the confirmation notifier
/// as a detached task. Persistence failure aborts the flow; notifier failure
/// is logged and never surfaces to the client.
pub async fn submit_lead_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<LeadAccepted>), LeadError> {
    // Body rejections (malformed JSON, unknown industry) get the same
    // standardized error body as field validation, so the form JS can
    // always read error.message.
    let Json(submission) = payload.map_err(|rej| LeadError::Validation(rej.body_text()))?;
    let submission = submission.normalized();
    submission.validate()?;

    let lead = state.storage.insert(NewLead::from_submission(submission)).await?;
    info!(
        lead_id = %lead.id,
        industry = lead.industry.as_str(),
        session_id = lead.session_id.as_deref().unwrap_or("-"),
        "lead stored"
    );

    // Persist-then-notify: the insert has succeeded, so the response no
    // longer depends on anything below.
    let notifier = state.notifier.clone();
    let req = ConfirmationRequest::from(&lead);
    let lead_id = lead.id;
    tokio::spawn(async move {
        if let Err(e) = notifier.send_confirmation(&req).await {
            warn!(lead_id = %lead_id, error = %e, "confirmation email failed");
        }
    });

    Ok((
        StatusCode::CREATED,
        Json(LeadAccepted {
            id: lead.id,
            status: "accepted",
        }),
    ))
}
