//! Dashboard API settings, read once from the environment at startup.
//!
//! | Env Var                | Default                    |
//! |------------------------|----------------------------|
//! | `HOST`                 | `0.0.0.0`                  |
//! | `PORT`                 | `3000`                     |
//! | `CORS_ORIGINS`         | `http://localhost:5173`    |
//! | `REQUEST_TIMEOUT_SECS` | `30`                       |
//! | `SEARCH_DEFAULT_LIMIT` | `10`                       |
//! | `SEARCH_MAX_LIMIT`     | `250`                      |

use std::fmt::Display;
use std::str::FromStr;

use shipdash_core::countries::lookup::DEFAULT_SEARCH_LIMIT;
use shipdash_core::error::CoreError;

/// Largest `limit` a country search may ask for unless overridden.
pub const DEFAULT_SEARCH_MAX_LIMIT: usize = 250;

/// Result caps for `GET /countries/search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Used when the request omits `limit`.
    pub default: usize,
    /// Requests above this are rejected.
    pub max: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            default: DEFAULT_SEARCH_LIMIT,
            max: DEFAULT_SEARCH_MAX_LIMIT,
        }
    }
}

impl SearchLimits {
    /// The number of matches to return for a requested `limit`.
    pub fn resolve(&self, requested: Option<usize>) -> Result<usize, CoreError> {
        match requested {
            None => Ok(self.default),
            Some(limit) if limit > self.max => Err(CoreError::Validation(format!(
                "limit {limit} exceeds the maximum of {}",
                self.max
            ))),
            Some(limit) => Ok(limit),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Dashboard origins allowed to call the API.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub search: SearchLimits,
}

impl ServerConfig {
    /// Read settings from the process environment.
    ///
    /// Panics on values that do not parse, or on a search default outside
    /// `1..=SEARCH_MAX_LIMIT`; the server should not start misconfigured.
    pub fn from_env() -> Self {
        let search = SearchLimits {
            default: env_or("SEARCH_DEFAULT_LIMIT", DEFAULT_SEARCH_LIMIT),
            max: env_or("SEARCH_MAX_LIMIT", DEFAULT_SEARCH_MAX_LIMIT),
        };
        assert!(
            (1..=search.max).contains(&search.default),
            "SEARCH_DEFAULT_LIMIT ({}) must be between 1 and SEARCH_MAX_LIMIT ({})",
            search.default,
            search.max
        );

        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            cors_origins: split_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
            ),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            search,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key}='{raw}' is invalid: {e}")),
        Err(_) => default,
    }
}

/// Comma-separated origin list; blanks are dropped.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
