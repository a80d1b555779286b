//! HTTP adapter for stateless interaction processing.

mod dto;
mod handlers;
mod routes;

pub use dto::{HcpProfileResponse, ProcessInteractionRequest, ProcessInteractionResponse};
pub use handlers::{process_interaction, InteractionsAppState};
pub use routes::interaction_router;
