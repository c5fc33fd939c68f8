use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes mounted at `/projects`.
///
/// ```text
/// GET    /                  -> list_projects
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(projects::list_projects))
}
