//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `interaction` - Interaction record, partial updates, and the merge reducer
//! - `extraction` - Pure rule-based extraction from free text
//! - `catalog` - Static HCP directory and product materials
//! - `conversation` - Assistant transcript and typing state

pub mod catalog;
pub mod conversation;
pub mod extraction;
pub mod foundation;
pub mod interaction;
