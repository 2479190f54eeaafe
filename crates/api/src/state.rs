use std::sync::Arc;

use shipdash_core::countries::lookup::CountryLookup;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the country table is read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Country table used for lookup, search and normalization.
    pub countries: Arc<CountryLookup>,
}
