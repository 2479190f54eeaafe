//! Rewrites free-form country fields in form data to ISO codes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::lookup::CountryLookup;
use crate::validation::path::{resolve_value, resolve_value_mut};
use crate::validation::rules::LINE_ITEMS_PATH;

/// Country fields carried by the dashboard's address blocks.
pub const COUNTRY_FIELDS: &[&str] = &[
    "origin.country",
    "destination.country",
    "shipper.address.country",
    "recipient.address.country",
];

/// One field rewritten during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizedField {
    pub path: String,
    pub from: String,
    pub to: String,
}

/// The default paths to normalize for `form`: the address country fields
/// plus `manufacturer_country` on every line item present.
pub fn default_country_paths(form: &Value) -> Vec<String> {
    let mut paths: Vec<String> = COUNTRY_FIELDS.iter().map(|path| path.to_string()).collect();
    if let Some(Value::Array(items)) = resolve_value(form, LINE_ITEMS_PATH) {
        paths.extend(
            (0..items.len()).map(|index| format!("{LINE_ITEMS_PATH}[{index}].manufacturer_country")),
        );
    }
    paths
}

/// Replace each string value at `paths` with its country code when the
/// lookup recognizes it. Absent, non-string and unrecognized values are left
/// as they are; values already in canonical code form are not reported.
pub fn normalize_country_fields<S: AsRef<str>>(
    lookup: &CountryLookup,
    form: &mut Value,
    paths: &[S],
) -> Vec<NormalizedField> {
    let mut changed = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let Some(value) = resolve_value_mut(form, path) else {
            continue;
        };
        let Some(current) = value.as_str() else {
            continue;
        };
        let Some(code) = lookup.name_to_code(current) else {
            continue;
        };
        if code == current {
            continue;
        }

        changed.push(NormalizedField {
            path: path.to_string(),
            from: current.to_string(),
            to: code.to_string(),
        });
        *value = Value::String(code.to_string());
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rewrites_recognized_names() {
        let mut form = json!({
            "origin": {"country": "Estados Unidos"},
            "destination": {"country": "mx"},
        });

        let changed =
            normalize_country_fields(CountryLookup::builtin(), &mut form, COUNTRY_FIELDS);

        assert_eq!(form["origin"]["country"], "US");
        assert_eq!(form["destination"]["country"], "MX");
        assert_eq!(changed.len(), 2);
        assert_eq!(
            changed[0],
            NormalizedField {
                path: "origin.country".to_string(),
                from: "Estados Unidos".to_string(),
                to: "US".to_string(),
            }
        );
    }

    #[test]
    fn leaves_unrecognized_and_canonical_values() {
        let mut form = json!({
            "origin": {"country": "Atlantis"},
            "destination": {"country": "US"},
            "shipper": {"address": {"country": 42}},
        });
        let before = form.clone();

        let changed =
            normalize_country_fields(CountryLookup::builtin(), &mut form, COUNTRY_FIELDS);

        assert!(changed.is_empty());
        assert_eq!(form, before);
    }

    #[test]
    fn default_paths_cover_line_items() {
        let form = json!({"items": [{"manufacturer_country": "China"}, {}]});

        let paths = default_country_paths(&form);

        assert!(paths.contains(&"items[0].manufacturer_country".to_string()));
        assert!(paths.contains(&"items[1].manufacturer_country".to_string()));
        assert_eq!(paths.len(), COUNTRY_FIELDS.len() + 2);
    }

    #[test]
    fn normalizes_line_item_countries() {
        let mut form = json!({"items": [{"manufacturer_country": "China"}]});
        let paths = default_country_paths(&form);

        normalize_country_fields(CountryLookup::builtin(), &mut form, &paths);

        assert_eq!(form["items"][0]["manufacturer_country"], "CN");
    }
}
