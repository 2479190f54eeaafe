//! Handlers for the `/forms` resource.
//!
//! Lists the built-in rule set for a form type and runs a validation
//! dry-run of submitted form data, optionally normalizing country fields
//! to ISO codes first.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use shipdash_core::countries::normalize::{
    default_country_paths, normalize_country_fields, NormalizedField,
};
use shipdash_core::validation::evaluator::ValidationReport;
use shipdash_core::validation::form::FormValidator;
use shipdash_core::validation::path::FieldPath;
use shipdash_core::validation::rules::{FormType, RuleSet};
use validator::{Validate, ValidationError};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One required field of a form type.
#[derive(Debug, Serialize)]
pub struct RuleEntry {
    pub path: &'static str,
    pub label: &'static str,
}

/// GET /api/v1/forms/{form_type}/rules
///
/// List the built-in required fields for a form type, in reporting order.
pub async fn list_rules(
    Path(form_type): Path<String>,
) -> AppResult<Json<DataResponse<Vec<RuleEntry>>>> {
    let form_type: FormType = form_type.parse()?;
    let rules = form_type
        .required_fields()
        .iter()
        .map(|&(path, label)| RuleEntry { path, label })
        .collect();
    Ok(Json(DataResponse { data: rules }))
}

/// Request body for the validation dry-run endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateRequest {
    pub data: serde_json::Value,
    /// Extra or relabelled required fields, keyed by field path.
    #[serde(default)]
    #[validate(custom(function = "validate_rule_paths"))]
    pub custom_rules: RuleSet,
    /// Rewrite recognized country names to ISO codes before validating.
    #[serde(default)]
    pub normalize_countries: bool,
}

fn validate_rule_paths(rules: &RuleSet) -> Result<(), ValidationError> {
    match rules.keys().find(|path| FieldPath::parse(path).is_err()) {
        Some(path) => {
            let mut error = ValidationError::new("field_path");
            error.message = Some(format!("malformed field path '{path}'").into());
            Err(error)
        }
        None => Ok(()),
    }
}

/// Validation outcome plus any country fields rewritten beforehand.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub form_type: FormType,
    #[serde(flatten)]
    pub report: ValidationReport,
    pub normalized: Vec<NormalizedField>,
    /// The form data as validated (after normalization).
    pub form: serde_json::Value,
}

/// POST /api/v1/forms/{form_type}/validate
///
/// Evaluate the form's required-field rules against the submitted data.
/// Always answers 200 with the report; an invalid form is not an HTTP error.
pub async fn validate_form(
    State(state): State<AppState>,
    Path(form_type): Path<String>,
    Json(body): Json<ValidateRequest>,
) -> AppResult<Json<DataResponse<ValidateResponse>>> {
    let form_type: FormType = form_type.parse()?;
    body.validate()?;

    let ValidateRequest {
        mut data,
        custom_rules,
        normalize_countries,
    } = body;

    let normalized = if normalize_countries {
        let paths = default_country_paths(&data);
        normalize_country_fields(&state.countries, &mut data, &paths)
    } else {
        Vec::new()
    };

    let mut validator = FormValidator::new(form_type).with_custom_rules(custom_rules);
    validator.set_data(data);
    let is_valid = validator.validate();

    tracing::debug!(
        form_type = %form_type,
        is_valid,
        error_count = validator.report().errors.len(),
        normalized = normalized.len(),
        "Validated form submission"
    );

    Ok(Json(DataResponse {
        data: ValidateResponse {
            form_type,
            report: validator.report().clone(),
            normalized,
            form: validator.data().clone(),
        },
    }))
}
