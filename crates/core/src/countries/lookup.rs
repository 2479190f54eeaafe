//! Bidirectional country code / name lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::data::BUILTIN_COUNTRIES;
use crate::error::CoreError;

/// Default number of matches returned by [`CountryLookup::search_by_partial_name`].
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

static BUILTIN: LazyLock<CountryLookup> =
    LazyLock::new(|| CountryLookup::from_builtin().expect("valid built-in country table"));

/// One country: ISO code plus its recognized names, canonical name first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub code: String,
    pub names: Vec<String>,
}

impl CountryRecord {
    pub fn new(code: &str, names: &[&str]) -> Self {
        Self {
            code: code.to_string(),
            names: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// The canonical English name.
    pub fn name(&self) -> &str {
        self.names.first().map_or("", String::as_str)
    }
}

/// A country as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
    pub alternative_names: Vec<String>,
}

impl From<&CountryRecord> for CountrySummary {
    fn from(record: &CountryRecord) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name().to_string(),
            alternative_names: record.names.clone(),
        }
    }
}

/// Immutable country table with code and lowercase-name indexes.
///
/// Build once and share; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct CountryLookup {
    records: Vec<CountryRecord>,
    by_code: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl CountryLookup {
    /// Build a lookup, enforcing that codes are unique two-letter uppercase
    /// codes, every record has a name, and no name maps to two codes.
    pub fn new(records: Vec<CountryRecord>) -> Result<Self, CoreError> {
        let mut by_code: HashMap<String, usize> = HashMap::with_capacity(records.len());
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            let well_formed = record.code.len() == 2
                && record.code.chars().all(|c| c.is_ascii_uppercase());
            if !well_formed {
                return Err(CoreError::InvalidTable(format!(
                    "'{}' is not a two-letter uppercase country code",
                    record.code
                )));
            }
            if by_code.insert(record.code.clone(), position).is_some() {
                return Err(CoreError::InvalidTable(format!(
                    "duplicate country code {}",
                    record.code
                )));
            }
            if record.names.is_empty() {
                return Err(CoreError::InvalidTable(format!(
                    "country {} has no names",
                    record.code
                )));
            }

            for name in &record.names {
                let key = name.trim().to_lowercase();
                if key.is_empty() {
                    return Err(CoreError::InvalidTable(format!(
                        "country {} has a blank name",
                        record.code
                    )));
                }
                if let Some(&owner) = by_name.get(&key) {
                    if owner != position {
                        return Err(CoreError::InvalidTable(format!(
                            "name '{name}' maps to both {} and {}",
                            records[owner].code, record.code
                        )));
                    }
                }
                by_name.insert(key, position);
            }
        }

        Ok(Self {
            records,
            by_code,
            by_name,
        })
    }

    /// Build an owned copy of the built-in table, for callers that keep
    /// their own handle (e.g. behind an `Arc`).
    pub fn from_builtin() -> Result<Self, CoreError> {
        let records = BUILTIN_COUNTRIES
            .iter()
            .map(|(code, names)| CountryRecord::new(code, names))
            .collect();
        Self::new(records)
    }

    /// The process-wide built-in table.
    pub fn builtin() -> &'static CountryLookup {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    /// Resolve free-form input to a code.
    ///
    /// Two-character input is treated as a code only and never falls
    /// through to name matching. Anything else is matched
    /// case-insensitively against every recognized name.
    pub fn name_to_code(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if input.chars().count() == 2 {
            return self.record_for_code(input).map(|record| record.code.as_str());
        }
        self.by_name
            .get(&input.to_lowercase())
            .map(|&position| self.records[position].code.as_str())
    }

    /// Canonical name for a code, case-insensitive.
    pub fn code_to_name(&self, code: &str) -> Option<&str> {
        self.record_for_code(code).map(CountryRecord::name)
    }

    /// Every recognized name for a code, canonical first, in table order.
    pub fn alternative_names(&self, code: &str) -> Option<&[String]> {
        self.record_for_code(code)
            .map(|record| record.names.as_slice())
    }

    pub fn is_valid_code(&self, code: &str) -> bool {
        self.record_for_code(code).is_some()
    }

    pub fn summary(&self, code: &str) -> Option<CountrySummary> {
        self.record_for_code(code).map(CountrySummary::from)
    }

    /// Countries with any name containing `partial` (case-insensitive), in
    /// table order, at most `limit` of them. Blank input matches nothing.
    pub fn search_by_partial_name(&self, partial: &str, limit: usize) -> Vec<CountrySummary> {
        let needle = partial.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|record| {
                record
                    .names
                    .iter()
                    .any(|name| name.to_lowercase().contains(&needle))
            })
            .take(limit)
            .map(CountrySummary::from)
            .collect()
    }

    fn record_for_code(&self, code: &str) -> Option<&CountryRecord> {
        self.by_code
            .get(&code.trim().to_ascii_uppercase())
            .map(|&position| &self.records[position])
    }
}
