//! HTTP adapters - REST API implementations.
//!
//! Each API area has its own adapter; `app` stitches them together.
//!
//! - `interactions` - Stateless processing of free-text notes
//! - `conversation` - Assistant transcript and its interaction form
//! - `error` - Shared JSON error body and status mapping

mod app;
pub mod conversation;
mod error;
pub mod interactions;

pub use app::{app_router, health, HealthResponse};
pub use conversation::{conversation_router, ConversationAppState};
pub use error::{ApiError, ErrorResponse};
pub use interactions::{interaction_router, InteractionsAppState};
