//! DeleteConversationHandler - Discards a conversation and its form.
//!
//! A reply still pending for the conversation finds it gone and reports
//! `ConversationNotFound` to its sender.

use std::sync::Arc;

use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ConversationStore;

/// Command to delete a conversation.
#[derive(Debug, Clone)]
pub struct DeleteConversationCommand {
    pub conversation_id: ConversationId,
}

/// Handler for deleting conversations.
pub struct DeleteConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl DeleteConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteConversationCommand) -> Result<(), DomainError> {
        self.store.delete(&cmd.conversation_id).await?;

        tracing::info!(conversation_id = %cmd.conversation_id, "Conversation deleted");
        Ok(())
    }
}
