//! ISO 3166-1 country lookup.
//!
//! A static table of two-letter codes with English and Spanish name
//! variants, the indexed [`lookup::CountryLookup`] built from it, and the
//! helpers that rewrite free-form country fields in form data to codes.

mod data;
pub mod lookup;
pub mod normalize;
