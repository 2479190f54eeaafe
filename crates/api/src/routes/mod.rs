pub mod countries;
pub mod forms;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /forms/{form_type}/rules                         built-in required fields (GET)
/// /forms/{form_type}/validate                      validation dry-run (POST)
///
/// /countries/search                                partial-name search (GET, ?q, limit)
/// /countries/resolve                               name or code to country (GET, ?name)
/// /countries/normalize                             rewrite country fields (POST)
/// /countries/{code}                                country by ISO code (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/forms", forms::router())
        .nest("/countries", countries::router())
}
