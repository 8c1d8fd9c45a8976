use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::registration::submission::TeamSubmission;
use crate::domain::relay::relay_submission;

/// Relay a team registration to the spreadsheet
///
/// POST /form
///
/// Responds `200` once every row is appended and `500` on any failure,
/// including a body that is not a valid submission.
pub async fn submit_form(
    State(state): State<AppState>,
    payload: Result<Json<TeamSubmission>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(submission) = payload.map_err(|e| {
        tracing::error!(error = %e, "Rejected malformed registration");
        ApiError::internal_server_error("Internal Server Error")
    })?;

    tracing::info!(
        team = %submission.team,
        members = submission.members.len(),
        "Registration received"
    );

    relay_submission(state.sheets.as_ref(), &submission)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, team = %submission.team, "Failed to relay registration");
            ApiError::internal_server_error("Internal Server Error")
        })?;

    Ok(StatusCode::OK)
}
