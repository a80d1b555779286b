//! The interaction form: the long-lived record deltas are merged into.

use serde::{Deserialize, Serialize};

use super::update::InteractionUpdate;
use super::values::{FormField, InteractionType, Material, Sample, Sentiment};

/// Full interaction record as edited by the representative.
///
/// # Invariants
///
/// - `is_form_updated` is set whenever a non-empty update is merged
/// - `last_updated_field` names the last field written, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionForm {
    pub hcp_name: String,
    pub interaction_type: Option<InteractionType>,
    pub date: String,
    pub time: String,
    pub attendees: Vec<String>,
    pub topics_discussed: String,
    pub materials_shared: Vec<Material>,
    pub samples_distributed: Vec<Sample>,
    pub hcp_sentiment: Option<Sentiment>,
    pub outcomes: String,
    pub follow_up_actions: String,
    pub ai_suggested_follow_ups: Vec<String>,
    pub is_form_updated: bool,
    pub last_updated_field: Option<FormField>,
}

impl InteractionForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a delta, overwriting only the fields it names.
    ///
    /// An empty delta returns the form unchanged.
    pub fn apply_update(&self, update: &InteractionUpdate) -> Self {
        let touched = update.touched_fields();
        let Some(&last) = touched.last() else {
            return self.clone();
        };

        let mut next = self.clone();
        if let Some(v) = &update.hcp_name {
            next.hcp_name = v.clone();
        }
        if let Some(v) = update.interaction_type {
            next.interaction_type = Some(v);
        }
        if let Some(v) = &update.date {
            next.date = v.clone();
        }
        if let Some(v) = &update.time {
            next.time = v.clone();
        }
        if let Some(v) = &update.attendees {
            next.attendees = v.clone();
        }
        if let Some(v) = &update.topics_discussed {
            next.topics_discussed = v.clone();
        }
        if let Some(v) = &update.materials_shared {
            next.materials_shared = v.clone();
        }
        if let Some(v) = &update.samples_distributed {
            next.samples_distributed = v.clone();
        }
        if let Some(v) = update.hcp_sentiment {
            next.hcp_sentiment = Some(v);
        }
        if let Some(v) = &update.outcomes {
            next.outcomes = v.clone();
        }
        if let Some(v) = &update.follow_up_actions {
            next.follow_up_actions = v.clone();
        }
        if let Some(v) = &update.ai_suggested_follow_ups {
            next.ai_suggested_follow_ups = v.clone();
        }

        next.is_form_updated = true;
        next.last_updated_field = Some(last);
        next
    }

    /// Clears the "recently updated" highlight.
    pub fn mark_seen(mut self) -> Self {
        self.is_form_updated = false;
        self.last_updated_field = None;
        self
    }

    /// Returns the initial, empty form.
    pub fn reset() -> Self {
        Self::default()
    }
}

/// Reducer form of [`InteractionForm::apply_update`].
pub fn apply_update(current: &InteractionForm, delta: &InteractionUpdate) -> InteractionForm {
    current.apply_update(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled_form() -> InteractionForm {
        InteractionForm {
            hcp_name: "Dr. Smith".to_string(),
            interaction_type: Some(InteractionType::Call),
            date: "2024-01-02".to_string(),
            time: "9:15".to_string(),
            attendees: vec!["Nurse Lee".to_string()],
            topics_discussed: "CardioPlus dosing".to_string(),
            materials_shared: vec![Material {
                id: "CardioPlus".to_string(),
                name: "Efficacy data".to_string(),
            }],
            samples_distributed: vec![Sample {
                id: "cp-10".to_string(),
                name: "CardioPlus 10mg".to_string(),
                quantity: 3,
            }],
            hcp_sentiment: Some(Sentiment::Neutral),
            outcomes: "Will review".to_string(),
            follow_up_actions: "Call back".to_string(),
            ai_suggested_follow_ups: vec!["Send email".to_string()],
            is_form_updated: false,
            last_updated_field: None,
        }
    }

    mod apply_update {
        use super::*;

        #[test]
        fn overwrites_only_present_fields() {
            let form = filled_form();
            let update = InteractionUpdate {
                hcp_name: Some("Dr. Patel".to_string()),
                hcp_sentiment: Some(Sentiment::Positive),
                ..Default::default()
            };

            let next = form.apply_update(&update);

            assert_eq!(next.hcp_name, "Dr. Patel");
            assert_eq!(next.hcp_sentiment, Some(Sentiment::Positive));
            assert_eq!(next.interaction_type, form.interaction_type);
            assert_eq!(next.date, form.date);
            assert_eq!(next.attendees, form.attendees);
            assert_eq!(next.materials_shared, form.materials_shared);
            assert_eq!(next.outcomes, form.outcomes);
        }

        #[test]
        fn marks_form_updated_with_last_field() {
            let update = InteractionUpdate {
                time: Some("10:30".to_string()),
                follow_up_actions: Some("in 2 weeks".to_string()),
                ..Default::default()
            };

            let next = InteractionForm::new().apply_update(&update);

            assert!(next.is_form_updated);
            assert_eq!(next.last_updated_field, Some(FormField::FollowUpActions));
        }

        #[test]
        fn empty_update_is_a_no_op() {
            let form = filled_form();
            let next = form.apply_update(&InteractionUpdate::new());
            assert_eq!(next, form);
            assert!(!next.is_form_updated);
        }

        #[test]
        fn does_not_mutate_the_source_form() {
            let form = filled_form();
            let update = InteractionUpdate {
                outcomes: Some("Agreed to trial".to_string()),
                ..Default::default()
            };

            let _ = apply_update(&form, &update);

            assert_eq!(form.outcomes, "Will review");
        }

        #[test]
        fn empty_string_is_a_real_value() {
            let update = InteractionUpdate {
                topics_discussed: Some(String::new()),
                ..Default::default()
            };

            let next = filled_form().apply_update(&update);

            assert_eq!(next.topics_discussed, "");
            assert_eq!(next.last_updated_field, Some(FormField::TopicsDiscussed));
        }
    }

    #[test]
    fn mark_seen_clears_highlight_only() {
        let update = InteractionUpdate {
            date: Some("2024-04-19".to_string()),
            ..Default::default()
        };
        let seen = InteractionForm::new().apply_update(&update).mark_seen();

        assert!(!seen.is_form_updated);
        assert!(seen.last_updated_field.is_none());
        assert_eq!(seen.date, "2024-04-19");
    }

    #[test]
    fn reset_returns_empty_form() {
        assert_eq!(InteractionForm::reset(), InteractionForm::new());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(InteractionForm::new()).unwrap();
        assert!(json.get("hcpName").is_some());
        assert!(json.get("aiSuggestedFollowUps").is_some());
        assert!(json.get("isFormUpdated").is_some());
    }

    fn arb_sentiment() -> impl Strategy<Value = Sentiment> {
        prop_oneof![
            Just(Sentiment::Positive),
            Just(Sentiment::Neutral),
            Just(Sentiment::Negative)
        ]
    }

    fn arb_update() -> impl Strategy<Value = InteractionUpdate> {
        (
            proptest::option::of("[A-Za-z. ]{0,12}"),
            proptest::option::of("[0-9:-]{0,10}"),
            proptest::option::of("[a-z ]{0,20}"),
            proptest::option::of(arb_sentiment()),
            proptest::option::of(proptest::collection::vec("[a-z ]{1,10}", 0..4)),
        )
            .prop_map(|(hcp_name, date, outcomes, hcp_sentiment, ai)| InteractionUpdate {
                hcp_name,
                date,
                outcomes,
                hcp_sentiment,
                ai_suggested_follow_ups: ai,
                ..Default::default()
            })
    }

    proptest! {
        #[test]
        fn merge_touches_exactly_the_present_fields(update in arb_update()) {
            let form = filled_form();
            let next = form.apply_update(&update);

            match &update.hcp_name {
                Some(v) => prop_assert_eq!(&next.hcp_name, v),
                None => prop_assert_eq!(&next.hcp_name, &form.hcp_name),
            }
            match &update.date {
                Some(v) => prop_assert_eq!(&next.date, v),
                None => prop_assert_eq!(&next.date, &form.date),
            }
            match &update.outcomes {
                Some(v) => prop_assert_eq!(&next.outcomes, v),
                None => prop_assert_eq!(&next.outcomes, &form.outcomes),
            }
            match update.hcp_sentiment {
                Some(v) => prop_assert_eq!(next.hcp_sentiment, Some(v)),
                None => prop_assert_eq!(next.hcp_sentiment, form.hcp_sentiment),
            }
            match &update.ai_suggested_follow_ups {
                Some(v) => prop_assert_eq!(&next.ai_suggested_follow_ups, v),
                None => prop_assert_eq!(&next.ai_suggested_follow_ups, &form.ai_suggested_follow_ups),
            }

            // Never named by the strategy, so never touched.
            prop_assert_eq!(&next.time, &form.time);
            prop_assert_eq!(&next.attendees, &form.attendees);
            prop_assert_eq!(&next.samples_distributed, &form.samples_distributed);
            prop_assert_eq!(next.interaction_type, form.interaction_type);
        }

        #[test]
        fn merge_is_idempotent(update in arb_update()) {
            let once = filled_form().apply_update(&update);
            let twice = once.apply_update(&update);
            prop_assert_eq!(once, twice);
        }
    }
}
