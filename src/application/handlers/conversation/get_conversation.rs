//! GetConversationHandler - Query handler for retrieving a conversation.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::ConversationStore;

/// Query to get a conversation.
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub conversation_id: ConversationId,
}

/// Handler for getting conversations.
pub struct GetConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl GetConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetConversationQuery) -> Result<Conversation, DomainError> {
        match self.store.find_by_id(&query.conversation_id).await {
            Ok(Some(conversation)) => Ok(conversation),
            Ok(None) => Err(DomainError::new(
                ErrorCode::ConversationNotFound,
                format!("Conversation not found: {}", query.conversation_id),
            )
            .with_detail("conversation_id", query.conversation_id.to_string())),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationStore;

    #[tokio::test]
    async fn returns_conversation_when_found() {
        let store = Arc::new(InMemoryConversationStore::new());
        let conversation = Conversation::new();
        store.insert(&conversation).await.unwrap();
        let handler = GetConversationHandler::new(store);

        let found = handler
            .handle(GetConversationQuery {
                conversation_id: *conversation.id(),
            })
            .await
            .unwrap();

        assert_eq!(found, conversation);
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_id() {
        let handler = GetConversationHandler::new(Arc::new(InMemoryConversationStore::new()));

        let err = handler
            .handle(GetConversationQuery {
                conversation_id: ConversationId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ConversationNotFound);
    }
}
