//! Field-path parsing and resolution against nested form data.
//!
//! A field path is a dot-separated list of segments, each a key optionally
//! followed by one or more `[index]` groups: `origin.city`,
//! `items[0].unit_price`, `packages[1][0]`. Parsing produces typed
//! [`PathSegment`]s; resolution walks a [`serde_json::Value`] one segment at
//! a time and stops at the first missing container.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::CoreError;

/// One dot-separated segment: an optional key followed by zero or more
/// bracketed indices.
static SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\[\]]*)((?:\[\d+\])*)$").expect("valid regex"));

static INDEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("valid regex"));

/// A single step in a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// A parsed field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Parse a dot/bracket path into typed segments.
    ///
    /// Rejects empty paths, empty segments (`a..b`), unbalanced brackets and
    /// non-numeric indices.
    pub fn parse(path: &str) -> Result<Self, CoreError> {
        if path.trim().is_empty() {
            return Err(CoreError::Validation(
                "field path must not be empty".to_string(),
            ));
        }

        let mut segments = Vec::new();
        for raw in path.split('.') {
            let caps = SEGMENT_RE.captures(raw).ok_or_else(|| {
                CoreError::Validation(format!("malformed segment '{raw}' in field path '{path}'"))
            })?;
            let key = &caps[1];
            let indices = &caps[2];

            if key.is_empty() && indices.is_empty() {
                return Err(CoreError::Validation(format!(
                    "empty segment in field path '{path}'"
                )));
            }

            if !key.is_empty() {
                segments.push(PathSegment::Key(key.to_string()));
            }
            for index in INDEX_RE.captures_iter(indices) {
                let index = index[1].parse::<usize>().map_err(|_| {
                    CoreError::Validation(format!("index out of range in field path '{path}'"))
                })?;
                segments.push(PathSegment::Index(index));
            }
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Walk `root` along this path. Returns `None` as soon as an
    /// intermediate value lacks the next key or index.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| step(current, segment))
    }

    /// Mutable counterpart of [`FieldPath::resolve`].
    pub fn resolve_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| step_mut(current, segment))
    }
}

impl FromStr for FieldPath {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Resolve `path` inside `form`. Malformed paths resolve to `None`.
pub fn resolve_value<'a>(form: &'a Value, path: &str) -> Option<&'a Value> {
    FieldPath::parse(path).ok()?.resolve(form)
}

/// Mutable counterpart of [`resolve_value`].
pub fn resolve_value_mut<'a>(form: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    FieldPath::parse(path).ok()?.resolve_mut(form)
}

// Numeric keys address array elements and index segments address
// numeric object keys, so `items.0.name` and `items[0].name` agree.
fn step<'a>(current: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match (current, segment) {
        (Value::Object(map), PathSegment::Key(key)) => map.get(key),
        (Value::Object(map), PathSegment::Index(index)) => map.get(&index.to_string()),
        (Value::Array(items), PathSegment::Index(index)) => items.get(*index),
        (Value::Array(items), PathSegment::Key(key)) => {
            key.parse::<usize>().ok().and_then(|index| items.get(index))
        }
        _ => None,
    }
}

fn step_mut<'a>(current: &'a mut Value, segment: &PathSegment) -> Option<&'a mut Value> {
    match (current, segment) {
        (Value::Object(map), PathSegment::Key(key)) => map.get_mut(key),
        (Value::Object(map), PathSegment::Index(index)) => map.get_mut(&index.to_string()),
        (Value::Array(items), PathSegment::Index(index)) => items.get_mut(*index),
        (Value::Array(items), PathSegment::Key(key)) => key
            .parse::<usize>()
            .ok()
            .and_then(move |index| items.get_mut(index)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn parses_dotted_keys() {
        let path = FieldPath::parse("origin.city").unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("origin".to_string()),
                PathSegment::Key("city".to_string()),
            ]
        );
    }

    #[test]
    fn parses_indexed_segments() {
        let path = FieldPath::parse("items[0].unit_price").unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("items".to_string()),
                PathSegment::Index(0),
                PathSegment::Key("unit_price".to_string()),
            ]
        );
    }

    #[test]
    fn parses_consecutive_indices() {
        let path = FieldPath::parse("grid[2][3]").unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("grid".to_string()),
                PathSegment::Index(2),
                PathSegment::Index(3),
            ]
        );
    }

    #[test]
    fn rejects_malformed_paths() {
        assert_matches!(FieldPath::parse(""), Err(CoreError::Validation(_)));
        assert_matches!(FieldPath::parse("a..b"), Err(CoreError::Validation(_)));
        assert_matches!(FieldPath::parse("items[x]"), Err(CoreError::Validation(_)));
        assert_matches!(FieldPath::parse("items[0"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn display_round_trips() {
        for raw in ["weight", "origin.city", "items[1].commodity_code", "grid[2][3]"] {
            assert_eq!(FieldPath::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn resolves_nested_indexed_value() {
        let form = json!({"a": {"b": [{"c": 1}]}});
        assert_eq!(resolve_value(&form, "a.b[0].c"), Some(&json!(1)));
    }

    #[test]
    fn missing_intermediate_is_absent() {
        assert_eq!(resolve_value(&json!({}), "a.b"), None);
        assert_eq!(resolve_value(&json!({"a": null}), "a.b"), None);
        assert_eq!(resolve_value(&json!({"a": "text"}), "a.b"), None);
    }

    #[test]
    fn out_of_bounds_index_is_absent() {
        let form = json!({"items": [{"name": "mug"}]});
        assert_eq!(resolve_value(&form, "items[1].name"), None);
    }

    #[test]
    fn numeric_key_addresses_array_element() {
        let form = json!({"items": [{"name": "mug"}]});
        assert_eq!(resolve_value(&form, "items.0.name"), Some(&json!("mug")));
    }

    #[test]
    fn malformed_path_resolves_to_absent() {
        assert_eq!(resolve_value(&json!({"a": 1}), "a["), None);
    }

    #[test]
    fn resolve_mut_rewrites_in_place() {
        let mut form = json!({"origin": {"country": "mexico"}});
        if let Some(value) = resolve_value_mut(&mut form, "origin.country") {
            *value = json!("MX");
        }
        assert_eq!(form["origin"]["country"], "MX");
    }
}
