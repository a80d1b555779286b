//! StartConversationHandler - Command handler for opening a conversation.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::DomainError;
use crate::ports::ConversationStore;

/// Handler for starting conversations.
pub struct StartConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl StartConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Conversation, DomainError> {
        let conversation = Conversation::new();
        self.store.insert(&conversation).await?;

        tracing::info!(conversation_id = %conversation.id(), "Conversation started");
        Ok(conversation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationStore;

    #[tokio::test]
    async fn starts_empty_conversation_and_stores_it() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = StartConversationHandler::new(store.clone());

        let conversation = handler.handle().await.unwrap();

        assert!(conversation.messages().is_empty());
        assert!(!conversation.is_typing());
        assert!(!conversation.form().is_form_updated);
        let stored = store.find_by_id(conversation.id()).await.unwrap();
        assert_eq!(stored, Some(conversation));
    }

    #[tokio::test]
    async fn each_start_gets_a_fresh_id() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = StartConversationHandler::new(store.clone());

        let a = handler.handle().await.unwrap();
        let b = handler.handle().await.unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(store.len().await, 2);
    }
}
