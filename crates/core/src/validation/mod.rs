//! Form field validation engine.
//!
//! Provides field-path parsing and resolution, the built-in required-field
//! rule sets per form type, a pure-logic evaluator, and the stateful
//! per-form validator the dashboard binds its inputs to.

pub mod evaluator;
pub mod form;
pub mod path;
pub mod rules;
