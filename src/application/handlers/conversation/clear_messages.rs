//! ClearMessagesHandler - Empties a conversation's transcript.
//!
//! The form is left as is.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ConversationStore;

/// Command to clear the transcript.
#[derive(Debug, Clone)]
pub struct ClearMessagesCommand {
    pub conversation_id: ConversationId,
}

/// Handler for clearing transcripts.
pub struct ClearMessagesHandler {
    store: Arc<dyn ConversationStore>,
}

impl ClearMessagesHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ClearMessagesCommand) -> Result<Conversation, DomainError> {
        let conversation = self
            .store
            .update_with(
                &cmd.conversation_id,
                Box::new(|c: &mut Conversation| {
                    c.clear_messages();
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(conversation_id = %cmd.conversation_id, "Transcript cleared");
        Ok(conversation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationStore;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::interaction::{InteractionUpdate, Sentiment};

    #[tokio::test]
    async fn clears_messages_but_keeps_form() {
        let store = Arc::new(InMemoryConversationStore::new());
        let mut conversation = Conversation::new();
        conversation.begin_processing("Neutral call").unwrap();
        conversation
            .complete_with(
                "Noted",
                &InteractionUpdate {
                    hcp_sentiment: Some(Sentiment::Neutral),
                    ..Default::default()
                },
            )
            .unwrap();
        store.insert(&conversation).await.unwrap();
        let handler = ClearMessagesHandler::new(store);

        let cleared = handler
            .handle(ClearMessagesCommand {
                conversation_id: *conversation.id(),
            })
            .await
            .unwrap();

        assert!(cleared.messages().is_empty());
        assert_eq!(cleared.form().hcp_sentiment, Some(Sentiment::Neutral));
    }

    #[tokio::test]
    async fn unknown_conversation_is_not_found() {
        let handler = ClearMessagesHandler::new(Arc::new(InMemoryConversationStore::new()));

        let err = handler
            .handle(ClearMessagesCommand {
                conversation_id: ConversationId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ConversationNotFound);
    }
}
