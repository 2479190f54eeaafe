//! Handlers for the `/countries` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use shipdash_core::countries::lookup::CountrySummary;
use shipdash_core::countries::normalize::{
    default_country_paths, normalize_country_fields, NormalizedField,
};
use shipdash_core::error::CoreError;
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for partial-name search.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    /// Capped by the configured search limits.
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}

/// GET /api/v1/countries/search?q=X&limit=N
///
/// Countries whose name or any variant contains `q`, in table order.
/// A blank `q` returns an empty list. `limit` defaults to and is capped by
/// the server's search settings.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<CountrySummary>>>> {
    params.validate()?;
    let limit = state.config.search.resolve(params.limit)?;
    let results = state.countries.search_by_partial_name(&params.q, limit);
    tracing::debug!(query = %params.q, limit, matches = results.len(), "Country search");
    Ok(Json(DataResponse { data: results }))
}

/// Query parameters for name resolution.
#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    #[serde(default)]
    pub name: String,
}

/// GET /api/v1/countries/resolve?name=X
///
/// Resolve a code or any recognized name (English or Spanish) to its
/// country. Returns 404 when nothing matches.
pub async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> AppResult<Json<DataResponse<CountrySummary>>> {
    let country = state
        .countries
        .name_to_code(&params.name)
        .and_then(|code| state.countries.summary(code))
        .ok_or_else(|| CoreError::NotFound {
            entity: "Country",
            key: params.name.trim().to_string(),
        })?;
    Ok(Json(DataResponse { data: country }))
}

/// GET /api/v1/countries/{code}
///
/// Look up a country by ISO code (case-insensitive). Returns 404 if unknown.
pub async fn get_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<CountrySummary>>> {
    let country = state
        .countries
        .summary(&code)
        .ok_or(CoreError::NotFound {
            entity: "Country",
            key: code,
        })?;
    Ok(Json(DataResponse { data: country }))
}

/// Request body for the normalization endpoint.
#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub data: serde_json::Value,
    /// Paths to normalize; defaults to the address and line-item country
    /// fields.
    #[serde(default)]
    pub paths: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub form: serde_json::Value,
    pub normalized: Vec<NormalizedField>,
}

/// POST /api/v1/countries/normalize
///
/// Rewrite recognized country names in the submitted form data to ISO
/// codes and report what changed.
pub async fn normalize(
    State(state): State<AppState>,
    Json(body): Json<NormalizeRequest>,
) -> AppResult<Json<DataResponse<NormalizeResponse>>> {
    let NormalizeRequest { mut data, paths } = body;
    let paths = paths.unwrap_or_else(|| default_country_paths(&data));

    let normalized = normalize_country_fields(&state.countries, &mut data, &paths);
    tracing::debug!(
        paths = paths.len(),
        normalized = normalized.len(),
        "Normalized country fields"
    );

    Ok(Json(DataResponse {
        data: NormalizeResponse {
            form: data,
            normalized,
        },
    }))
}
