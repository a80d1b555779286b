//! ProcessInteractionHandler - Stateless extraction of one interaction note.
//!
//! Runs the extraction engine against the clock's year, then enriches the
//! result with catalog data: resources, the HCP profile and follow-ups
//! personalized from it.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::catalog::{find_hcp, personalized_follow_ups, suggest_resources, HcpProfile};
use crate::domain::extraction::extract;
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::interaction::InteractionUpdate;
use crate::ports::Clock;

/// Command to process a free-text interaction note.
#[derive(Debug, Clone)]
pub struct ProcessInteractionCommand {
    pub text: String,
    /// Optional caller context object; carried for logging only.
    pub context: Option<serde_json::Value>,
}

/// Errors that can occur when processing an interaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProcessInteractionError {
    #[error("Validation error: interaction text cannot be empty")]
    EmptyText,

    #[error("Validation error: interaction text exceeds {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

impl From<ProcessInteractionError> for DomainError {
    fn from(err: ProcessInteractionError) -> Self {
        match err {
            ProcessInteractionError::EmptyText => ValidationError::empty_field("text").into(),
            ProcessInteractionError::TooLong { max, actual } => {
                ValidationError::too_long("text", max, actual).into()
            }
        }
    }
}

/// Result of processing an interaction note.
#[derive(Debug, Clone)]
pub struct ProcessInteractionResult {
    pub message: String,
    pub extracted: InteractionUpdate,
    pub suggested_follow_ups: Vec<String>,
    pub personalized_follow_ups: Vec<String>,
    pub suggested_resources: Vec<String>,
    pub hcp_profile: Option<&'static HcpProfile>,
}

/// Handler for processing interaction notes.
pub struct ProcessInteractionHandler {
    clock: Arc<dyn Clock>,
    max_length: usize,
}

impl ProcessInteractionHandler {
    pub fn new(clock: Arc<dyn Clock>, max_length: usize) -> Self {
        Self { clock, max_length }
    }

    pub fn handle(
        &self,
        cmd: ProcessInteractionCommand,
    ) -> Result<ProcessInteractionResult, ProcessInteractionError> {
        // 1. Validate input
        if cmd.text.trim().is_empty() {
            return Err(ProcessInteractionError::EmptyText);
        }
        let length = cmd.text.chars().count();
        if length > self.max_length {
            return Err(ProcessInteractionError::TooLong {
                max: self.max_length,
                actual: length,
            });
        }

        // 2. Extract
        let result = extract(&cmd.text, self.clock.current_year());

        // 3. Enrich from the catalog
        let suggested_resources = suggest_resources(&result.field_updates);
        let hcp_profile = result.field_updates.hcp_name.as_deref().and_then(find_hcp);
        let personalized_follow_ups = personalized_follow_ups(
            hcp_profile,
            result.field_updates.topics_discussed.as_deref(),
            result.field_updates.hcp_sentiment,
        );

        tracing::debug!(
            fields = ?result.field_updates.touched_fields(),
            hcp_known = hcp_profile.is_some(),
            has_context = cmd.context.is_some(),
            "Processed interaction note"
        );

        Ok(ProcessInteractionResult {
            suggested_follow_ups: result.suggested_follow_ups().to_vec(),
            message: result.acknowledgement_message,
            extracted: result.field_updates,
            personalized_follow_ups,
            suggested_resources,
            hcp_profile,
        })
    }
}
