//! Partial interaction record (delta).
//!
//! An `InteractionUpdate` names only the fields that changed. `None` means
//! "leave the target field alone", never "clear it".

use serde::{Deserialize, Serialize};

use super::values::{FormField, InteractionType, Material, Sample, Sentiment};

/// A subset of interaction fields to merge into a longer-lived form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcp_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_type: Option<InteractionType>,
    /// `YYYY-MM-DD`, not validated against the calendar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// `H:MM` or `HH:MM` as written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics_discussed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials_shared: Option<Vec<Material>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_distributed: Option<Vec<Sample>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcp_sentiment: Option<Sentiment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_actions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_suggested_follow_ups: Option<Vec<String>>,
}

impl InteractionUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        self.touched_fields().is_empty()
    }

    /// Fields present in this update, in declaration order.
    pub fn touched_fields(&self) -> Vec<FormField> {
        let presence = [
            (FormField::HcpName, self.hcp_name.is_some()),
            (FormField::InteractionType, self.interaction_type.is_some()),
            (FormField::Date, self.date.is_some()),
            (FormField::Time, self.time.is_some()),
            (FormField::Attendees, self.attendees.is_some()),
            (FormField::TopicsDiscussed, self.topics_discussed.is_some()),
            (FormField::MaterialsShared, self.materials_shared.is_some()),
            (FormField::SamplesDistributed, self.samples_distributed.is_some()),
            (FormField::HcpSentiment, self.hcp_sentiment.is_some()),
            (FormField::Outcomes, self.outcomes.is_some()),
            (FormField::FollowUpActions, self.follow_up_actions.is_some()),
            (FormField::AiSuggestedFollowUps, self.ai_suggested_follow_ups.is_some()),
        ];

        presence
            .into_iter()
            .filter_map(|(field, present)| present.then_some(field))
            .collect()
    }
}
