//! Independent field extractors.
//!
//! Every extractor reads the same input and writes exactly one field of the
//! update, so their order does not matter. A field is only written when its
//! pattern matches.

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::{first_match, INTERACTION_TYPE_RULES, SENTIMENT_RULES};
use crate::domain::interaction::{FormField, InteractionUpdate};

/// Text under extraction plus the values derived from it once.
#[derive(Debug, Clone)]
pub struct ExtractionInput<'a> {
    text: &'a str,
    lowered: String,
    current_year: i32,
}

impl<'a> ExtractionInput<'a> {
    pub fn new(text: &'a str, current_year: i32) -> Self {
        Self {
            text,
            lowered: text.to_lowercase(),
            current_year,
        }
    }

    /// Original text, for case-insensitive regex captures.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Lowercased text, for keyword rules.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }
}

/// Writes at most one field of `update`.
pub type FieldExtractor = fn(&ExtractionInput<'_>, &mut InteractionUpdate);

/// All field extractors, tagged with the field each one writes.
pub const FIELD_EXTRACTORS: &[(FormField, FieldExtractor)] = &[
    (FormField::HcpName, extract_hcp_name),
    (FormField::InteractionType, extract_interaction_type),
    (FormField::Time, extract_time),
    (FormField::Date, extract_date),
    (FormField::TopicsDiscussed, extract_topics),
    (FormField::HcpSentiment, extract_sentiment),
    (FormField::FollowUpActions, extract_follow_up_actions),
];

static HCP_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Dr\.\s+\w+").unwrap());

static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{1,2}):([0-9]{2})").unwrap());

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(january|february|march|april|may|june|july|august|september|october|november|december)\s+([0-9]{1,2})",
    )
    .unwrap()
});

// Captures start right after the keyword, so "discussed" keeps its "ed".
static TOPICS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)discuss([^.]*)").unwrap());

static FOLLOW_UP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)follow(?:-| )up([^.]*)").unwrap());

const MONTHS: [(&str, &str); 12] = [
    ("january", "01"),
    ("february", "02"),
    ("march", "03"),
    ("april", "04"),
    ("may", "05"),
    ("june", "06"),
    ("july", "07"),
    ("august", "08"),
    ("september", "09"),
    ("october", "10"),
    ("november", "11"),
    ("december", "12"),
];

/// Zero-padded month number for an English month name.
pub fn month_number(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}

/// First `Dr.` + whitespace + word, kept verbatim.
pub fn extract_hcp_name(input: &ExtractionInput<'_>, update: &mut InteractionUpdate) {
    if let Some(m) = HCP_NAME_RE.find(input.text()) {
        update.hcp_name = Some(m.as_str().to_string());
    }
}

pub fn extract_interaction_type(input: &ExtractionInput<'_>, update: &mut InteractionUpdate) {
    if let Some(kind) = first_match(INTERACTION_TYPE_RULES, input.lowered()) {
        update.interaction_type = Some(kind);
    }
}

/// First `H:MM`/`HH:MM`; the hour is not re-padded.
pub fn extract_time(input: &ExtractionInput<'_>, update: &mut InteractionUpdate) {
    if let Some(caps) = TIME_RE.captures(input.text()) {
        update.time = Some(format!("{}:{}", &caps[1], &caps[2]));
    }
}

/// First `<Month> <day>`, stamped with the current year.
///
/// The day is not checked against the month, so `February 30` yields
/// `YYYY-02-30`.
pub fn extract_date(input: &ExtractionInput<'_>, update: &mut InteractionUpdate) {
    let Some(caps) = DATE_RE.captures(input.text()) else {
        return;
    };
    // Unicode case folding can match spellings the table does not list.
    let Some(month) = month_number(&caps[1]) else {
        return;
    };
    update.date = Some(format!(
        "{}-{}-{:0>2}",
        input.current_year(),
        month,
        &caps[2]
    ));
}

/// Text after the first `discuss`, up to the next period, trimmed.
pub fn extract_topics(input: &ExtractionInput<'_>, update: &mut InteractionUpdate) {
    if let Some(caps) = TOPICS_RE.captures(input.text()) {
        update.topics_discussed = Some(caps[1].trim().to_string());
    }
}

pub fn extract_sentiment(input: &ExtractionInput<'_>, update: &mut InteractionUpdate) {
    if let Some(sentiment) = first_match(SENTIMENT_RULES, input.lowered()) {
        update.hcp_sentiment = Some(sentiment);
    }
}

/// Text after the first `follow-up`/`follow up`, up to the next period, trimmed.
pub fn extract_follow_up_actions(input: &ExtractionInput<'_>, update: &mut InteractionUpdate) {
    if let Some(caps) = FOLLOW_UP_RE.captures(input.text()) {
        update.follow_up_actions = Some(caps[1].trim().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interaction::{InteractionType, Sentiment};

    fn run(extractor: FieldExtractor, text: &str) -> InteractionUpdate {
        let input = ExtractionInput::new(text, 2024);
        let mut update = InteractionUpdate::new();
        extractor(&input, &mut update);
        update
    }

    mod hcp_name {
        use super::*;

        #[test]
        fn captures_prefix_and_name() {
            let update = run(extract_hcp_name, "Met Dr. Patel today");
            assert_eq!(update.hcp_name.as_deref(), Some("Dr. Patel"));
        }

        #[test]
        fn keeps_literal_case_and_spacing() {
            let update = run(extract_hcp_name, "spoke with dr.  smith");
            assert_eq!(update.hcp_name.as_deref(), Some("dr.  smith"));
        }

        #[test]
        fn uses_first_match_only() {
            let update = run(extract_hcp_name, "Dr. Patel referred me to Dr. Johnson");
            assert_eq!(update.hcp_name.as_deref(), Some("Dr. Patel"));
        }

        #[test]
        fn requires_whitespace_after_dot() {
            let update = run(extract_hcp_name, "Dr.Patel was out");
            assert!(update.hcp_name.is_none());
        }
    }

    mod interaction_type {
        use super::*;

        #[test]
        fn met_is_meeting() {
            let update = run(extract_interaction_type, "MET the doctor");
            assert_eq!(update.interaction_type, Some(InteractionType::Meeting));
        }

        #[test]
        fn call_is_call() {
            let update = run(extract_interaction_type, "Quick Call with the clinic");
            assert_eq!(update.interaction_type, Some(InteractionType::Call));
        }

        #[test]
        fn neither_leaves_field_unset() {
            let update = run(extract_interaction_type, "Sent an email");
            assert!(update.interaction_type.is_none());
        }
    }

    mod time {
        use super::*;

        #[test]
        fn two_digit_hour() {
            let update = run(extract_time, "at 10:30 sharp");
            assert_eq!(update.time.as_deref(), Some("10:30"));
        }

        #[test]
        fn single_digit_hour_is_not_padded() {
            let update = run(extract_time, "at 9:05");
            assert_eq!(update.time.as_deref(), Some("9:05"));
        }

        #[test]
        fn out_of_range_values_pass_through() {
            let update = run(extract_time, "at 99:99");
            assert_eq!(update.time.as_deref(), Some("99:99"));
        }

        #[test]
        fn takes_first_occurrence() {
            let update = run(extract_time, "from 8:00 to 17:45");
            assert_eq!(update.time.as_deref(), Some("8:00"));
        }

        #[test]
        fn single_minute_digit_does_not_match() {
            let update = run(extract_time, "at 10:3");
            assert!(update.time.is_none());
        }
    }

    mod date {
        use super::*;

        #[test]
        fn month_and_day_use_current_year() {
            let update = run(extract_date, "on April 19");
            assert_eq!(update.date.as_deref(), Some("2024-04-19"));
        }

        #[test]
        fn day_is_zero_padded() {
            let update = run(extract_date, "on december 5");
            assert_eq!(update.date.as_deref(), Some("2024-12-05"));
        }

        #[test]
        fn month_is_case_insensitive() {
            let update = run(extract_date, "SEPTEMBER 30");
            assert_eq!(update.date.as_deref(), Some("2024-09-30"));
        }

        #[test]
        fn explicit_year_is_ignored() {
            let update = run(extract_date, "March 3, 2019");
            assert_eq!(update.date.as_deref(), Some("2024-03-03"));
        }

        #[test]
        fn day_is_not_validated() {
            let update = run(extract_date, "February 30");
            assert_eq!(update.date.as_deref(), Some("2024-02-30"));
        }

        #[test]
        fn abbreviated_month_does_not_match() {
            let update = run(extract_date, "Apr 19");
            assert!(update.date.is_none());
        }

        #[test]
        fn month_number_covers_all_months() {
            assert_eq!(month_number("January"), Some("01"));
            assert_eq!(month_number("december"), Some("12"));
            assert_eq!(month_number("smarch"), None);
        }
    }

    mod topics {
        use super::*;

        #[test]
        fn captures_until_period() {
            let update = run(extract_topics, "Met to discuss OncoBoost. Shared data.");
            assert_eq!(update.topics_discussed.as_deref(), Some("OncoBoost"));
        }

        #[test]
        fn inflected_keyword_keeps_its_suffix() {
            let update = run(extract_topics, "We discussed dosing and side effects. Then left.");
            assert_eq!(
                update.topics_discussed.as_deref(),
                Some("ed dosing and side effects")
            );
        }

        #[test]
        fn runs_to_end_without_period() {
            let update = run(extract_topics, "Wanted to Discuss trial enrollment");
            assert_eq!(update.topics_discussed.as_deref(), Some("trial enrollment"));
        }

        #[test]
        fn trailing_keyword_yields_empty_topic() {
            let update = run(extract_topics, "nothing much to discuss");
            assert_eq!(update.topics_discussed.as_deref(), Some(""));
        }

        #[test]
        fn absent_keyword_leaves_field_unset() {
            let update = run(extract_topics, "Shared samples.");
            assert!(update.topics_discussed.is_none());
        }
    }

    mod sentiment {
        use super::*;

        #[test]
        fn detects_each_sentiment() {
            assert_eq!(
                run(extract_sentiment, "Very POSITIVE").hcp_sentiment,
                Some(Sentiment::Positive)
            );
            assert_eq!(
                run(extract_sentiment, "rather negative").hcp_sentiment,
                Some(Sentiment::Negative)
            );
            assert_eq!(
                run(extract_sentiment, "Neutral overall").hcp_sentiment,
                Some(Sentiment::Neutral)
            );
        }

        #[test]
        fn no_keyword_leaves_field_unset() {
            assert!(run(extract_sentiment, "went fine").hcp_sentiment.is_none());
        }
    }

    mod follow_up {
        use super::*;

        #[test]
        fn hyphenated_form() {
            let update = run(extract_follow_up_actions, "Agreed to next follow-up in 2 weeks.");
            assert_eq!(update.follow_up_actions.as_deref(), Some("in 2 weeks"));
        }

        #[test]
        fn spaced_form() {
            let update = run(extract_follow_up_actions, "Follow up with trial data. Bye.");
            assert_eq!(update.follow_up_actions.as_deref(), Some("with trial data"));
        }

        #[test]
        fn absent_keyword_leaves_field_unset() {
            let update = run(extract_follow_up_actions, "No next steps.");
            assert!(update.follow_up_actions.is_none());
        }

        #[test]
        fn unseparated_followup_does_not_match() {
            let update = run(extract_follow_up_actions, "followup next week");
            assert!(update.follow_up_actions.is_none());
        }

        #[test]
        fn plural_keeps_its_suffix() {
            let update = run(extract_follow_up_actions, "Two follow-ups planned. Done.");
            assert_eq!(update.follow_up_actions.as_deref(), Some("s planned"));
        }
    }

    #[test]
    fn extractors_write_disjoint_fields() {
        let text = "Met Dr. Patel at 10:30 on April 19 to discuss OncoBoost. \
                    Sentiment was positive. Agreed to next follow-up in 2 weeks.";
        let input = ExtractionInput::new(text, 2024);

        for (field, extractor) in FIELD_EXTRACTORS {
            let mut update = InteractionUpdate::new();
            extractor(&input, &mut update);
            assert_eq!(update.touched_fields(), vec![*field]);
        }
    }
}
