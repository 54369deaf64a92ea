use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::profile::{build_profile, default_account_manager, nav_sections, CandidateProfileResponse};
use crate::resume::ParsedResume;
use crate::routes::resumes::find_by_public_id;
use crate::AppState;

/// Render the candidate profile view-model for a stored resume
#[utoipa::path(
    get,
    path = "/candidates/{public_id}",
    params(("public_id" = Uuid, Path, description = "Public id of the stored resume")),
    responses(
        (status = 200, description = "Display-ready candidate profile", body = CandidateProfileResponse),
        (status = 404, description = "No resume with this id")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
) -> Result<Json<CandidateProfileResponse>, AppError> {
    let record = find_by_public_id(&state, public_id).await?;
    let parsed: ParsedResume = serde_json::from_value(record.parsed).unwrap_or_default();

    Ok(Json(CandidateProfileResponse {
        candidate: build_profile(&parsed),
        account_manager: default_account_manager(),
        nav_sections: nav_sections(&parsed),
        timestamp: Utc::now(),
    }))
}
