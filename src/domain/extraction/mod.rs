//! Extraction module - Rule-based interaction extraction.
//!
//! Maps one free-text description of an HCP interaction to a partial
//! interaction record, suggested follow-ups, and an acknowledgement.
//!
//! # Components
//!
//! - `rules` - Ordered `(keyword, value)` tables, first match wins
//! - `fields` - Independent regex/keyword extractors, one field each
//! - `suggestions` - Canned follow-up lists and acknowledgements
//! - `engine` - `extract`, which runs all of the above
//!
//! Everything here is pure. The current year is a parameter so callers
//! decide where "now" comes from.

mod engine;
mod fields;
mod rules;
mod suggestions;

pub use engine::{extract, ExtractionResult};
pub use fields::{month_number, ExtractionInput, FieldExtractor, FIELD_EXTRACTORS};
pub use rules::{first_match, KeywordRule, INTERACTION_TYPE_RULES, SENTIMENT_RULES};
pub use suggestions::{
    Suggestion, SuggestionProfile, DEFAULT_ACKNOWLEDGEMENT, GENERIC_FOLLOW_UPS,
    ONCOBOOST_ACKNOWLEDGEMENT, ONCOBOOST_FOLLOW_UPS,
};
