//! Required-field and positivity evaluation over submitted form data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::path::resolve_value;
use super::rules::{
    merged_rules, FormType, RuleSet, LINE_ITEMS_PATH, LINE_ITEM_FIELDS, POSITIVE_LINE_ITEM_FIELDS,
    POSITIVE_MEASUREMENTS,
};

/// Aggregated result of evaluating a form against its rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Field path to error message. One message per path; a later check on
    /// the same path replaces an earlier one.
    pub errors: IndexMap<String, String>,
    /// Human-readable description of every failed check, in check order.
    pub missing_fields: Vec<String>,
}

/// Whether a value counts as not filled in.
///
/// Absent, `null`, whitespace-only strings, zero (and NaN) and empty arrays
/// are empty. Numeric zero is treated as missing even where zero could be a
/// legitimate value.
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |n| n == 0.0 || n.is_nan()),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Bool(_)) | Some(Value::Object(_)) => false,
    }
}

/// Numeric reading of a supplied value: numbers, and strings that parse as
/// numbers. Anything else is not subject to positivity checks.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Evaluate `form` against the rules for `form_type` merged with
/// `custom_rules`.
pub fn compute_validation(
    form: &Value,
    form_type: FormType,
    custom_rules: &RuleSet,
) -> ValidationReport {
    let rules = merged_rules(form_type, custom_rules);
    let mut collector = Collector::default();

    for (path, label) in &rules {
        if is_empty(resolve_value(form, path)) {
            collector.missing(path.clone(), label);
        }
    }

    if form_type.checks_positive_measurements() {
        for (path, fallback_label) in POSITIVE_MEASUREMENTS {
            let label = rules.get(*path).map_or(*fallback_label, String::as_str);
            if let Some(value) = resolve_value(form, path) {
                if is_non_positive(value) {
                    collector.not_positive(path.to_string(), label);
                }
            }
        }
    }

    if form_type.checks_line_items() {
        if let Some(Value::Array(items)) = resolve_value(form, LINE_ITEMS_PATH) {
            for (index, item) in items.iter().enumerate() {
                check_line_item(index, item, &mut collector);
            }
        }
    }

    collector.finish()
}

fn check_line_item(index: usize, item: &Value, collector: &mut Collector) {
    let position = index + 1;

    for (field, label) in LINE_ITEM_FIELDS {
        if is_empty(resolve_value(item, field)) {
            collector.missing(
                line_item_path(index, field),
                &format!("Item {position}: {label}"),
            );
        }
    }

    for field in POSITIVE_LINE_ITEM_FIELDS {
        let Some(value) = resolve_value(item, field) else {
            continue;
        };
        if is_non_positive(value) {
            let label = LINE_ITEM_FIELDS
                .iter()
                .find(|(name, _)| name == field)
                .map_or(*field, |(_, label)| *label);
            collector.not_positive(
                line_item_path(index, field),
                &format!("Item {position}: {label}"),
            );
        }
    }
}

fn line_item_path(index: usize, field: &str) -> String {
    format!("{LINE_ITEMS_PATH}[{index}].{field}")
}

fn is_non_positive(value: &Value) -> bool {
    !value.is_null() && numeric_value(value).is_some_and(|n| n <= 0.0)
}

#[derive(Default)]
struct Collector {
    errors: IndexMap<String, String>,
    missing_fields: Vec<String>,
}

impl Collector {
    fn missing(&mut self, path: String, label: &str) {
        self.errors.insert(path, format!("{label} is required"));
        self.missing_fields.push(label.to_string());
    }

    fn not_positive(&mut self, path: String, label: &str) {
        let message = format!("{label} must be greater than 0");
        self.missing_fields.push(message.clone());
        self.errors.insert(path, message);
    }

    fn finish(self) -> ValidationReport {
        ValidationReport {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            missing_fields: self.missing_fields,
        }
    }
}
