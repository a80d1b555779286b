//! SendMessage command handler.
//!
//! Appends the user's message, simulates assistant latency, runs the
//! extraction engine, and merges the resulting delta into the
//! conversation's form.
//!
//! # Typing serialization
//!
//! Admission (`begin_processing`) happens inside a single store update, so
//! at most one message per conversation is in flight. The reply phase runs
//! on its own task: a caller that disconnects mid-delay still gets the
//! typing flag cleared.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::domain::conversation::{Conversation, Message};
use crate::domain::extraction::extract;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::domain::interaction::InteractionUpdate;
use crate::ports::{Clock, ConversationStore};

/// Command to send a message in a conversation.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub conversation_id: ConversationId,
    pub content: String,
}

impl SendMessageCommand {
    pub fn new(conversation_id: ConversationId, content: impl Into<String>) -> Self {
        Self {
            conversation_id,
            content: content.into(),
        }
    }
}

/// Errors that can occur when sending a message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendMessageError {
    /// Message content is empty or whitespace only.
    #[error("Validation error: message content cannot be empty")]
    EmptyContent,

    #[error("Validation error: message exceeds {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),

    /// A previous message is still being answered.
    #[error("Conversation {0} is still processing the previous message")]
    ConversationBusy(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for SendMessageError {
    fn from(err: DomainError) -> Self {
        let conversation_id = err
            .details
            .get("conversation_id")
            .cloned()
            .unwrap_or_default();
        match err.code() {
            ErrorCode::EmptyField => SendMessageError::EmptyContent,
            ErrorCode::ConversationNotFound => {
                SendMessageError::ConversationNotFound(conversation_id)
            }
            ErrorCode::ConversationBusy => SendMessageError::ConversationBusy(conversation_id),
            ErrorCode::ValidationFailed | ErrorCode::InternalError => {
                SendMessageError::Internal(err.to_string())
            }
        }
    }
}

/// Result of sending a message.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    /// The assistant's acknowledgement.
    pub reply: Message,
    /// Delta extracted from the user's message.
    pub field_updates: InteractionUpdate,
    /// Conversation after the delta was merged.
    pub conversation: Conversation,
}

/// Tunables for the message shell.
#[derive(Debug, Clone, Copy)]
pub struct SendMessageConfig {
    /// Simulated assistant latency.
    pub response_delay: Duration,
    /// Maximum message length in characters.
    pub max_message_length: usize,
}

impl Default for SendMessageConfig {
    fn default() -> Self {
        Self {
            response_delay: Duration::from_millis(1000),
            max_message_length: 4000,
        }
    }
}

/// Handler for sending messages.
pub struct SendMessageHandler {
    store: Arc<dyn ConversationStore>,
    clock: Arc<dyn Clock>,
    config: SendMessageConfig,
}

impl SendMessageHandler {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        clock: Arc<dyn Clock>,
        config: SendMessageConfig,
    ) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: SendMessageCommand,
    ) -> Result<SendMessageResult, SendMessageError> {
        let conversation_id = cmd.conversation_id;

        // 1. Validate content
        if cmd.content.trim().is_empty() {
            tracing::warn!(%conversation_id, "Rejected blank message");
            return Err(SendMessageError::EmptyContent);
        }
        let length = cmd.content.chars().count();
        if length > self.config.max_message_length {
            tracing::warn!(%conversation_id, length, "Rejected oversized message");
            return Err(SendMessageError::TooLong {
                max: self.config.max_message_length,
                actual: length,
            });
        }

        // 2. Admit: append user message and start typing
        let content = cmd.content;
        let admitted = content.clone();
        self.store
            .update_with(
                &conversation_id,
                Box::new(move |c: &mut Conversation| {
                    c.begin_processing(&admitted).map(|_| ())
                }),
            )
            .await
            .map_err(|e| {
                tracing::warn!(%conversation_id, code = %e.code(), "Message not admitted");
                SendMessageError::from(e)
            })?;

        tracing::info!(%conversation_id, "Assistant typing");

        // 3. Reply on a detached task
        let store = Arc::clone(&self.store);
        let year = self.clock.current_year();
        let delay = self.config.response_delay;
        let task = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            respond(store.as_ref(), conversation_id, &content, year).await
        });

        task.await.map_err(|e| {
            tracing::error!(%conversation_id, error = %e, "Reply task failed");
            SendMessageError::Internal(e.to_string())
        })?
    }
}

async fn respond(
    store: &dyn ConversationStore,
    conversation_id: ConversationId,
    content: &str,
    year: i32,
) -> Result<SendMessageResult, SendMessageError> {
    let result = extract(content, year);
    tracing::debug!(
        %conversation_id,
        fields = ?result.field_updates.touched_fields(),
        "Extracted interaction fields"
    );

    let reply = result.acknowledgement_message.clone();
    let update = result.field_updates.clone();
    let completed = store
        .update_with(
            &conversation_id,
            Box::new(move |c: &mut Conversation| {
                c.complete_with(&reply, &update).map(|_| ())
            }),
        )
        .await;

    let conversation = match completed {
        Ok(conversation) => conversation,
        Err(e) => {
            tracing::error!(%conversation_id, error = %e, "Failed to record reply");
            let reason = e.to_string();
            // Best effort; the conversation may be gone entirely.
            let _ = store
                .update_with(
                    &conversation_id,
                    Box::new(move |c: &mut Conversation| {
                        c.fail(reason);
                        Ok(())
                    }),
                )
                .await;
            return Err(e.into());
        }
    };

    let reply = conversation
        .messages()
        .last()
        .cloned()
        .ok_or_else(|| SendMessageError::Internal("reply missing from transcript".to_string()))?;

    tracing::info!(%conversation_id, messages = conversation.messages().len(), "Assistant replied");

    Ok(SendMessageResult {
        reply,
        field_updates: result.field_updates,
        conversation,
    })
}
