//! Conversation aggregate.
//!
//! Owns the transcript shown next to the interaction form, the single
//! "assistant is typing" flag, and the form the assistant fills in.

use serde::{Deserialize, Serialize};

use super::message::Message;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, Timestamp};
use crate::domain::interaction::{InteractionForm, InteractionUpdate};

/// An assistant conversation.
///
/// # Invariants
///
/// - At most one message is processed at a time (`is_typing`)
/// - Messages are append-only except for an explicit clear
/// - `updated_at` never precedes `created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    id: ConversationId,
    messages: Vec<Message>,
    is_typing: bool,
    error: Option<String>,
    form: InteractionForm,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Conversation {
    /// Starts an empty conversation with a blank form.
    pub fn new() -> Self {
        let now = Timestamp::now();
        Self {
            id: ConversationId::new(),
            messages: Vec::new(),
            is_typing: false,
            error: None,
            form: InteractionForm::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &InteractionForm {
        &self.form
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Appends the user's message and marks the assistant as typing.
    ///
    /// # Errors
    ///
    /// - `ConversationBusy` if a message is already being processed
    /// - `EmptyField` if the content is blank
    pub fn begin_processing(&mut self, content: &str) -> Result<&Message, DomainError> {
        if self.is_typing {
            return Err(DomainError::new(
                ErrorCode::ConversationBusy,
                "The assistant is still processing the previous message",
            )
            .with_detail("conversation_id", self.id.to_string()));
        }

        let message = Message::user(content)?;
        self.messages.push(message);
        self.is_typing = true;
        self.error = None;
        self.touch();

        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Appends the assistant's reply and merges its field updates into the form.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the reply is blank; the conversation is left typing
    pub fn complete_with(
        &mut self,
        reply: &str,
        update: &InteractionUpdate,
    ) -> Result<&Message, DomainError> {
        let message = Message::assistant(reply)?;
        self.messages.push(message);
        self.form = self.form.apply_update(update);
        self.is_typing = false;
        self.touch();

        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Stops typing and records why processing failed.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.is_typing = false;
        self.error = Some(reason.into());
        self.touch();
    }

    /// Empties the transcript, keeping the form.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
        self.touch();
    }

    /// Merges a manual edit into the form.
    pub fn edit_form(&mut self, update: &InteractionUpdate) {
        self.form = self.form.apply_update(update);
        self.touch();
    }

    /// Puts the form back to its initial state.
    pub fn reset_form(&mut self) {
        self.form = InteractionForm::reset();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
