use axum::routing::get;
use axum::Router;

use crate::handlers::db_status;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/db-status", get(db_status::db_status))
}
