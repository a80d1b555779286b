//! Interaction module - The record an HCP interaction is logged into.
//!
//! - `InteractionUpdate` - partial record (delta); absent means "no change"
//! - `InteractionForm` - full record with a selective-merge reducer

mod form;
mod update;
mod values;

pub use form::{apply_update, InteractionForm};
pub use update::InteractionUpdate;
pub use values::{FormField, InteractionType, Material, Sample, Sentiment};
