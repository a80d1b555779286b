//! In-Memory Conversation Store
//!
//! Keeps conversations in a process-local map. Nothing survives a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::{ConversationMutation, ConversationStore};

/// In-memory storage for conversations
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    conversations: Arc<RwLock<HashMap<ConversationId, Conversation>>>,
}

impl InMemoryConversationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored conversations
    pub async fn len(&self) -> usize {
        self.conversations.read().await.len()
    }

    /// Whether the store holds no conversations
    pub async fn is_empty(&self) -> bool {
        self.conversations.read().await.is_empty()
    }
}

fn not_found(id: &ConversationId) -> DomainError {
    DomainError::new(ErrorCode::ConversationNotFound, "Conversation not found")
        .with_detail("conversation_id", id.to_string())
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn insert(&self, conversation: &Conversation) -> Result<(), DomainError> {
        let mut conversations = self.conversations.write().await;
        if conversations.contains_key(conversation.id()) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Conversation already exists",
            )
            .with_detail("conversation_id", conversation.id().to_string()));
        }
        conversations.insert(*conversation.id(), conversation.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError> {
        Ok(self.conversations.read().await.get(id).cloned())
    }

    async fn update_with(
        &self,
        id: &ConversationId,
        mutation: ConversationMutation,
    ) -> Result<Conversation, DomainError> {
        let mut conversations = self.conversations.write().await;
        let stored = conversations.get_mut(id).ok_or_else(|| not_found(id))?;

        // Mutate a copy so a failed mutation leaves the stored value intact.
        let mut next = stored.clone();
        mutation(&mut next)?;
        *stored = next.clone();

        Ok(next)
    }

    async fn delete(&self, id: &ConversationId) -> Result<(), DomainError> {
        self.conversations
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
