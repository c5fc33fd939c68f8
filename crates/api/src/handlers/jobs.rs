//! Handlers for the job collection.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use devsite_core::error::CoreError;
use devsite_core::types::DbId;
use devsite_db::repositories::JobRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/jobs
///
/// List every job with its tags.
pub async fn list_jobs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let jobs = JobRepo::list(&state.pool).await?;
    tracing::debug!(count = jobs.len(), "Listed jobs");

    Ok(Json(jobs))
}

/// GET /api/jobs/{id}
///
/// Fetch one job. The id is taken as a raw string so a malformed value
/// produces our own 400 body rather than axum's path rejection.
pub async fn get_job(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_job_id(&raw_id)?;

    let job = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("job", id))?;

    Ok(Json(job))
}

fn parse_job_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("invalid job ID".into()))
}
