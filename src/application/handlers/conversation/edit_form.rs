//! EditFormHandler - Manual edits to a conversation's interaction form.
//!
//! Uses the same selective merge as assistant replies: only fields present
//! in the update are written.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError};
use crate::domain::interaction::InteractionUpdate;
use crate::ports::ConversationStore;

/// Command to merge a manual edit into the form.
#[derive(Debug, Clone)]
pub struct EditFormCommand {
    pub conversation_id: ConversationId,
    pub update: InteractionUpdate,
}

/// Handler for manual form edits.
pub struct EditFormHandler {
    store: Arc<dyn ConversationStore>,
}

impl EditFormHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EditFormCommand) -> Result<Conversation, DomainError> {
        let fields = cmd.update.touched_fields();
        let update = cmd.update;
        let conversation = self
            .store
            .update_with(
                &cmd.conversation_id,
                Box::new(move |c: &mut Conversation| {
                    c.edit_form(&update);
                    Ok(())
                }),
            )
            .await?;

        tracing::debug!(conversation_id = %cmd.conversation_id, ?fields, "Form edited");
        Ok(conversation)
    }
}
