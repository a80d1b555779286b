//! Value types for an HCP interaction record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the representative met the HCP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionType {
    Meeting,
    Call,
}

impl InteractionType {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            InteractionType::Meeting => "Meeting",
            InteractionType::Call => "Call",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The HCP's overall attitude during the interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A piece of collateral handed to the HCP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
}

/// Product samples left with the HCP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

/// Editable fields of the interaction form, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    HcpName,
    InteractionType,
    Date,
    Time,
    Attendees,
    TopicsDiscussed,
    MaterialsShared,
    SamplesDistributed,
    HcpSentiment,
    Outcomes,
    FollowUpActions,
    AiSuggestedFollowUps,
}

impl FormField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::HcpName => "hcpName",
            FormField::InteractionType => "interactionType",
            FormField::Date => "date",
            FormField::Time => "time",
            FormField::Attendees => "attendees",
            FormField::TopicsDiscussed => "topicsDiscussed",
            FormField::MaterialsShared => "materialsShared",
            FormField::SamplesDistributed => "samplesDistributed",
            FormField::HcpSentiment => "hcpSentiment",
            FormField::Outcomes => "outcomes",
            FormField::FollowUpActions => "followUpActions",
            FormField::AiSuggestedFollowUps => "aiSuggestedFollowUps",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
