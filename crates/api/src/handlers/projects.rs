//! Handlers for the project collection.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use devsite_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/projects
///
/// List every project with its links and tags.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    tracing::debug!(count = projects.len(), "Listed projects");

    Ok(Json(projects))
}
