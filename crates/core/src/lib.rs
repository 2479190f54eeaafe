//! Shipping dashboard form core.
//!
//! Pure logic consumed by the dashboard's form components: required-field
//! validation keyed by form type, and the ISO country code / name lookup
//! used to normalize address fields. Nothing in this crate performs I/O.

pub mod countries;
pub mod error;
pub mod validation;
