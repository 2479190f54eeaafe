//! Form types and their built-in required-field rule sets.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Ordered mapping of field path to human-readable label.
pub type RuleSet = IndexMap<String, String>;

/// The dashboard form a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum FormType {
    Rate,
    LandedCost,
    Shipment,
    Tracking,
    ProofOfDelivery,
}

impl FormType {
    pub const ALL: [FormType; 5] = [
        FormType::Rate,
        FormType::LandedCost,
        FormType::Shipment,
        FormType::Tracking,
        FormType::ProofOfDelivery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormType::Rate => "rate",
            FormType::LandedCost => "landed-cost",
            FormType::Shipment => "shipment",
            FormType::Tracking => "tracking",
            FormType::ProofOfDelivery => "proof-of-delivery",
        }
    }

    /// Whether supplied weight and dimensions must be greater than zero.
    pub fn checks_positive_measurements(self) -> bool {
        matches!(self, FormType::Rate | FormType::LandedCost)
    }

    /// Whether each entry of `items` is validated as a customs line item.
    pub fn checks_line_items(self) -> bool {
        matches!(self, FormType::LandedCost)
    }

    /// Built-in `(path, label)` pairs, in reporting order.
    pub fn required_fields(self) -> &'static [(&'static str, &'static str)] {
        match self {
            FormType::Rate => RATE_FIELDS,
            FormType::LandedCost => LANDED_COST_FIELDS,
            FormType::Shipment => SHIPMENT_FIELDS,
            FormType::Tracking => TRACKING_FIELDS,
            FormType::ProofOfDelivery => PROOF_OF_DELIVERY_FIELDS,
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormType::ALL
            .into_iter()
            .find(|form_type| form_type.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown form type '{s}'")))
    }
}

const RATE_FIELDS: &[(&str, &str)] = &[
    ("origin.city", "Origin city"),
    ("origin.postal_code", "Origin postal code"),
    ("origin.country", "Origin country"),
    ("destination.city", "Destination city"),
    ("destination.postal_code", "Destination postal code"),
    ("destination.country", "Destination country"),
    ("weight", "Weight"),
    ("dimensions.length", "Length"),
    ("dimensions.width", "Width"),
    ("dimensions.height", "Height"),
];

const LANDED_COST_FIELDS: &[(&str, &str)] = &[
    ("origin.country", "Origin country"),
    ("destination.country", "Destination country"),
    ("currency", "Currency"),
    ("weight", "Weight"),
    ("items", "Items"),
];

const SHIPMENT_FIELDS: &[(&str, &str)] = &[
    ("shipper.name", "Shipper name"),
    ("shipper.phone", "Shipper phone"),
    ("shipper.address.street", "Shipper street"),
    ("shipper.address.city", "Shipper city"),
    ("shipper.address.postal_code", "Shipper postal code"),
    ("shipper.address.country", "Shipper country"),
    ("recipient.name", "Recipient name"),
    ("recipient.phone", "Recipient phone"),
    ("recipient.address.street", "Recipient street"),
    ("recipient.address.city", "Recipient city"),
    ("recipient.address.postal_code", "Recipient postal code"),
    ("recipient.address.country", "Recipient country"),
    ("service_type", "Service type"),
    ("packages[0].weight", "Package weight"),
];

const TRACKING_FIELDS: &[(&str, &str)] = &[("tracking_number", "Tracking number")];

const PROOF_OF_DELIVERY_FIELDS: &[(&str, &str)] = &[
    ("tracking_number", "Tracking number"),
    ("ship_date", "Ship date"),
];

/// Measurements that must be greater than zero when supplied on rate and
/// landed-cost forms. Labels apply when the active rule set has none.
pub const POSITIVE_MEASUREMENTS: &[(&str, &str)] = &[
    ("dimensions.length", "Length"),
    ("dimensions.width", "Width"),
    ("dimensions.height", "Height"),
    ("weight", "Weight"),
];

/// Path of the customs line-item list on landed-cost forms.
pub const LINE_ITEMS_PATH: &str = "items";

/// Fields every landed-cost line item must carry.
pub const LINE_ITEM_FIELDS: &[(&str, &str)] = &[
    ("name", "Name"),
    ("description", "Description"),
    ("manufacturer_country", "Manufacturer country"),
    ("quantity", "Quantity"),
    ("unit_price", "Unit price"),
    ("customs_value", "Customs value"),
    ("commodity_code", "Commodity code"),
];

/// Line-item fields that must be greater than zero when supplied.
pub const POSITIVE_LINE_ITEM_FIELDS: &[&str] = &["quantity", "unit_price", "customs_value"];

/// Built-in rules for `form_type` as an owned, ordered rule set.
pub fn built_in_rules(form_type: FormType) -> RuleSet {
    form_type
        .required_fields()
        .iter()
        .map(|(path, label)| (path.to_string(), label.to_string()))
        .collect()
}

/// Merge caller-supplied rules over the built-ins.
///
/// A custom rule for a built-in path replaces its label in place; new paths
/// are appended in the order given.
pub fn merged_rules(form_type: FormType, custom_rules: &RuleSet) -> RuleSet {
    let mut rules = built_in_rules(form_type);
    for (path, label) in custom_rules {
        rules.insert(path.clone(), label.clone());
    }
    rules
}
