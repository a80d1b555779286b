//! Extraction entry point.

use super::fields::{ExtractionInput, FIELD_EXTRACTORS};
use super::suggestions::SuggestionProfile;
use crate::domain::interaction::InteractionUpdate;

/// Outcome of extracting one free-text description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Fields recognized in the text, plus the suggested follow-ups.
    pub field_updates: InteractionUpdate,
    /// Human-readable summary for the transcript.
    pub acknowledgement_message: String,
}

impl ExtractionResult {
    /// Suggested follow-up actions, also carried in `field_updates`.
    pub fn suggested_follow_ups(&self) -> &[String] {
        self.field_updates
            .ai_suggested_follow_ups
            .as_deref()
            .unwrap_or_default()
    }
}

/// Derives structured interaction fields from free text.
///
/// Total and deterministic: any string, including the empty one, yields a
/// result. `current_year` stamps dates written as `<Month> <day>`.
pub fn extract(text: &str, current_year: i32) -> ExtractionResult {
    let input = ExtractionInput::new(text, current_year);
    let mut field_updates = InteractionUpdate::new();

    for (_, extractor) in FIELD_EXTRACTORS {
        extractor(&input, &mut field_updates);
    }

    let suggestion =
        SuggestionProfile::select(input.lowered(), field_updates.hcp_sentiment).build();
    field_updates.ai_suggested_follow_ups = Some(suggestion.follow_ups);

    ExtractionResult {
        field_updates,
        acknowledgement_message: suggestion.acknowledgement,
    }
}
