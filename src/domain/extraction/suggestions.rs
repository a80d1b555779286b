//! Suggested follow-ups and the acknowledgement shown to the user.

use crate::domain::interaction::Sentiment;

/// Acknowledgement used when no tailored response applies.
pub const DEFAULT_ACKNOWLEDGEMENT: &str = "I've processed your input.";

/// Canned acknowledgement for a positive OncoBoost interaction.
pub const ONCOBOOST_ACKNOWLEDGEMENT: &str = "I've processed your interaction with Dr. Patel about OncoBoost. Based on the positive sentiment, I've suggested some follow-up actions related to patient selection and sharing additional data. Would you like to add any outcomes from this meeting?";

pub const ONCOBOOST_FOLLOW_UPS: [&str; 3] = [
    "Schedule follow-up meeting to discuss patient selection criteria",
    "Share latest OncoBoost efficacy data from Phase III trials",
    "Invite to upcoming OncoBoost symposium next month",
];

pub const GENERIC_FOLLOW_UPS: [&str; 3] = [
    "Schedule follow-up call in 2 weeks",
    "Send additional materials via email",
    "Connect with office manager to arrange next visit",
];

const ONCOBOOST_KEYWORD: &str = "oncoboost";

/// Follow-up list plus the acknowledgement that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub follow_ups: Vec<String>,
    pub acknowledgement: String,
}

/// Which canned suggestion set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionProfile {
    OncoBoostPositive,
    Generic,
}

impl SuggestionProfile {
    /// Picks the profile from lowercased text and the sentiment already extracted.
    pub fn select(lowered: &str, sentiment: Option<Sentiment>) -> Self {
        if lowered.contains(ONCOBOOST_KEYWORD) && sentiment == Some(Sentiment::Positive) {
            SuggestionProfile::OncoBoostPositive
        } else {
            SuggestionProfile::Generic
        }
    }

    pub fn follow_ups(&self) -> &'static [&'static str] {
        match self {
            SuggestionProfile::OncoBoostPositive => &ONCOBOOST_FOLLOW_UPS,
            SuggestionProfile::Generic => &GENERIC_FOLLOW_UPS,
        }
    }

    pub fn acknowledgement(&self) -> &'static str {
        match self {
            SuggestionProfile::OncoBoostPositive => ONCOBOOST_ACKNOWLEDGEMENT,
            SuggestionProfile::Generic => DEFAULT_ACKNOWLEDGEMENT,
        }
    }

    pub fn build(&self) -> Suggestion {
        Suggestion {
            follow_ups: self.follow_ups().iter().map(|s| s.to_string()).collect(),
            acknowledgement: self.acknowledgement().to_string(),
        }
    }
}
