//! Per-form validation state.
//!
//! [`FormValidator`] owns one form's data snapshot and keeps its
//! [`ValidationReport`] current as the data or rules change. Errors stay
//! hidden until the first explicit [`FormValidator::validate`] call, so a
//! freshly opened form does not render every empty field as an error.

use serde_json::{Map, Value};

use super::evaluator::{compute_validation, ValidationReport};
use super::rules::{FormType, RuleSet};

#[derive(Debug, Clone)]
pub struct FormValidator {
    form_type: FormType,
    custom_rules: RuleSet,
    data: Value,
    report: ValidationReport,
    committed: bool,
}

impl FormValidator {
    /// Start with an empty form of the given type.
    pub fn new(form_type: FormType) -> Self {
        let data = Value::Object(Map::new());
        let custom_rules = RuleSet::new();
        let report = compute_validation(&data, form_type, &custom_rules);
        Self {
            form_type,
            custom_rules,
            data,
            report,
            committed: false,
        }
    }

    pub fn with_custom_rules(mut self, custom_rules: RuleSet) -> Self {
        self.set_custom_rules(custom_rules);
        self
    }

    pub fn form_type(&self) -> FormType {
        self.form_type
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn set_data(&mut self, data: Value) {
        self.data = data;
        self.recompute();
    }

    pub fn set_form_type(&mut self, form_type: FormType) {
        self.form_type = form_type;
        self.recompute();
    }

    pub fn set_custom_rules(&mut self, custom_rules: RuleSet) {
        self.custom_rules = custom_rules;
        self.recompute();
    }

    /// Recompute against the current data, make errors visible, and return
    /// overall validity. Calling it again without changes is a no-op.
    pub fn validate(&mut self) -> bool {
        self.recompute();
        self.committed = true;
        self.report.is_valid
    }

    /// Stop reporting errors until the next `validate()`. The form data and
    /// the computed report are kept.
    pub fn clear(&mut self) {
        self.committed = false;
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn is_valid(&self) -> bool {
        self.report.is_valid
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Missing-field descriptions to show: none until committed.
    pub fn missing_fields(&self) -> &[String] {
        if self.committed {
            self.report.missing_fields.as_slice()
        } else {
            &[]
        }
    }

    /// Errors the UI should render: none until committed.
    pub fn visible_errors(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.report
            .errors
            .iter()
            .filter(move |_| self.committed)
            .map(|(path, message)| (path.as_str(), message.as_str()))
    }

    pub fn has_error(&self, path: &str) -> bool {
        self.committed && self.report.errors.contains_key(path)
    }

    /// The visible error for `path`, or an empty string.
    pub fn error_message(&self, path: &str) -> &str {
        if !self.committed {
            return "";
        }
        self.report.errors.get(path).map_or("", String::as_str)
    }

    /// Style hook for an input bound to `path`: `base` alone, or `base`
    /// plus its `--error` modifier when the field has a visible error.
    pub fn css_state_for(&self, path: &str, base: &str) -> String {
        if self.has_error(path) {
            format!("{base} {base}--error")
        } else {
            base.to_string()
        }
    }

    fn recompute(&mut self) {
        self.report = compute_validation(&self.data, self.form_type, &self.custom_rules);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn errors_hidden_until_validate() {
        let validator = FormValidator::new(FormType::Tracking);

        assert!(!validator.is_valid());
        assert!(!validator.is_committed());
        assert!(!validator.has_error("tracking_number"));
        assert_eq!(validator.error_message("tracking_number"), "");
        assert_eq!(validator.visible_errors().count(), 0);
    }

    #[test]
    fn validate_commits_and_surfaces_errors() {
        let mut validator = FormValidator::new(FormType::Tracking);

        assert!(!validator.validate());
        assert!(validator.has_error("tracking_number"));
        assert_eq!(
            validator.error_message("tracking_number"),
            "Tracking number is required"
        );
        assert_eq!(
            validator.css_state_for("tracking_number", "input"),
            "input input--error"
        );
        assert_eq!(validator.css_state_for("carrier", "input"), "input");
    }

    #[test]
    fn validate_is_idempotent() {
        let mut validator = FormValidator::new(FormType::ProofOfDelivery);
        validator.set_data(json!({"tracking_number": "1Z999"}));

        let first = validator.validate();
        let errors_after_first = validator.report().errors.clone();
        let second = validator.validate();

        assert_eq!(first, second);
        assert_eq!(validator.report().errors, errors_after_first);
        assert!(validator.is_committed());
    }

    #[test]
    fn data_changes_recompute_report() {
        let mut validator = FormValidator::new(FormType::Tracking);
        validator.validate();
        assert!(validator.has_error("tracking_number"));

        validator.set_data(json!({"tracking_number": "1Z999"}));

        assert!(validator.is_valid());
        assert!(!validator.has_error("tracking_number"));
    }

    #[test]
    fn clear_hides_errors_but_keeps_data() {
        let mut validator = FormValidator::new(FormType::Tracking);
        validator.set_data(json!({"tracking_number": "  "}));
        validator.validate();

        validator.clear();

        assert!(!validator.is_committed());
        assert!(!validator.has_error("tracking_number"));
        assert_eq!(validator.error_message("tracking_number"), "");
        assert!(validator.missing_fields().is_empty());
        assert_eq!(validator.data(), &json!({"tracking_number": "  "}));

        assert!(!validator.validate());
        assert!(validator.has_error("tracking_number"));
    }

    #[test]
    fn report_stays_consistent_after_clear() {
        let mut validator = FormValidator::new(FormType::Tracking);
        validator.validate();

        validator.clear();

        let report = validator.report();
        assert!(!report.is_valid);
        assert_eq!(report.is_valid, report.errors.is_empty());
        assert_eq!(report.missing_fields, vec!["Tracking number"]);
        assert_eq!(validator.visible_errors().count(), 0);
    }

    #[test]
    fn rule_changes_recompute_report() {
        let mut custom = RuleSet::new();
        custom.insert("carrier".to_string(), "Carrier".to_string());
        let mut validator = FormValidator::new(FormType::Tracking).with_custom_rules(custom);
        validator.set_data(json!({"tracking_number": "1Z999"}));

        assert!(!validator.validate());
        assert_eq!(validator.error_message("carrier"), "Carrier is required");

        validator.set_custom_rules(RuleSet::new());
        assert!(validator.is_valid());

        validator.set_form_type(FormType::ProofOfDelivery);
        assert!(validator.has_error("ship_date"));
    }
}
