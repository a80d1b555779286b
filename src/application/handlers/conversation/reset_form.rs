//! ResetFormHandler - Puts a conversation's form back to its initial state.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ConversationStore;

/// Command to reset the form.
#[derive(Debug, Clone)]
pub struct ResetFormCommand {
    pub conversation_id: ConversationId,
}

/// Handler for form resets.
pub struct ResetFormHandler {
    store: Arc<dyn ConversationStore>,
}

impl ResetFormHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ResetFormCommand) -> Result<Conversation, DomainError> {
        let conversation = self
            .store
            .update_with(
                &cmd.conversation_id,
                Box::new(|c: &mut Conversation| {
                    c.reset_form();
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(conversation_id = %cmd.conversation_id, "Form reset");
        Ok(conversation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationStore;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::interaction::{InteractionForm, InteractionUpdate};

    #[tokio::test]
    async fn resets_edited_form_and_keeps_messages() {
        let store = Arc::new(InMemoryConversationStore::new());
        let mut conversation = Conversation::new();
        conversation.begin_processing("Met Dr. Johnson").unwrap();
        conversation
            .complete_with(
                "Noted",
                &InteractionUpdate {
                    hcp_name: Some("Dr. Johnson".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        store.insert(&conversation).await.unwrap();
        let handler = ResetFormHandler::new(store);

        let reset = handler
            .handle(ResetFormCommand {
                conversation_id: *conversation.id(),
            })
            .await
            .unwrap();

        assert_eq!(reset.form(), &InteractionForm::reset());
        assert_eq!(reset.messages().len(), 2);
    }

    #[tokio::test]
    async fn unknown_conversation_is_not_found() {
        let handler = ResetFormHandler::new(Arc::new(InMemoryConversationStore::new()));

        let err = handler
            .handle(ResetFormCommand {
                conversation_id: ConversationId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ConversationNotFound);
    }
}
