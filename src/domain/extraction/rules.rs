//! Ordered keyword rule tables.
//!
//! Each table is evaluated top to bottom against lowercased text; the first
//! keyword found as a substring decides the value.

use crate::domain::interaction::{InteractionType, Sentiment};

/// A single `(keyword, value)` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule<T> {
    pub keyword: &'static str,
    pub value: T,
}

impl<T> KeywordRule<T> {
    pub const fn new(keyword: &'static str, value: T) -> Self {
        Self { keyword, value }
    }
}

/// `met` is tested before `call`.
pub const INTERACTION_TYPE_RULES: &[KeywordRule<InteractionType>] = &[
    KeywordRule::new("met", InteractionType::Meeting),
    KeywordRule::new("call", InteractionType::Call),
];

/// `positive` is tested before `negative`, which is tested before `neutral`.
pub const SENTIMENT_RULES: &[KeywordRule<Sentiment>] = &[
    KeywordRule::new("positive", Sentiment::Positive),
    KeywordRule::new("negative", Sentiment::Negative),
    KeywordRule::new("neutral", Sentiment::Neutral),
];

/// Returns the value of the first rule whose keyword occurs in `lowered`.
///
/// `lowered` must already be lowercase; keywords are lowercase.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], lowered: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| lowered.contains(rule.keyword))
        .map(|rule| rule.value)
}
