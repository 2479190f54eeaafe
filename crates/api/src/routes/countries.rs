//! Route definitions for the `/countries` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::countries;
use crate::state::AppState;

/// Routes mounted at `/countries`.
///
/// ```text
/// GET    /search       -> search       (?q, ?limit)
/// GET    /resolve      -> resolve      (?name)
/// POST   /normalize    -> normalize
/// GET    /{code}       -> get_country
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(countries::search))
        .route("/resolve", get(countries::resolve))
        .route("/normalize", post(countries::normalize))
        .route("/{code}", get(countries::get_country))
}
