//! Route definitions for the `/forms` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// Routes mounted at `/forms`.
///
/// ```text
/// GET    /{form_type}/rules      -> list_rules
/// POST   /{form_type}/validate   -> validate_form   (dry-run)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{form_type}/rules", get(forms::list_rules))
        .route("/{form_type}/validate", post(forms::validate_form))
}
