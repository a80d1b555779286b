//! Known healthcare professionals and follow-ups tailored to them.

use serde::Serialize;

use crate::domain::interaction::Sentiment;

/// Static profile of an HCP the field team already knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HcpProfile {
    pub name: &'static str,
    pub specialty: &'static str,
    pub preferences: &'static str,
}

pub const HCP_DIRECTORY: &[HcpProfile] = &[
    HcpProfile {
        name: "Dr. Patel",
        specialty: "Oncology",
        preferences: "Prefers morning meetings",
    },
    HcpProfile {
        name: "Dr. Smith",
        specialty: "Cardiology",
        preferences: "Likes clinical data",
    },
    HcpProfile {
        name: "Dr. Johnson",
        specialty: "Neurology",
        preferences: "Interested in new trials",
    },
];

/// Looks up an HCP by name, ignoring case and runs of whitespace.
pub fn find_hcp(name: &str) -> Option<&'static HcpProfile> {
    let wanted = normalize(name);
    HCP_DIRECTORY.iter().find(|p| normalize(p.name) == wanted)
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub const MAX_PERSONALIZED_FOLLOW_UPS: usize = 3;

/// `(specialty, product keyword, follow-up)`; applies when the topics mention
/// the product that fits the HCP's specialty.
const SPECIALTY_FOLLOW_UPS: &[(&str, &str, &str)] = &[
    (
        "Oncology",
        "oncoboost",
        "Share the latest patient outcomes data for OncoBoost in similar cancer types",
    ),
    (
        "Cardiology",
        "cardio",
        "Provide comparative efficacy data for CardioPlus vs. standard of care",
    ),
    (
        "Neurology",
        "neuro",
        "Follow up with new clinical trial enrollment information",
    ),
];

const POSITIVE_FOLLOW_UPS: [&str; 2] = [
    "Send thank you email with additional resources discussed",
    "Invite to upcoming product symposium",
];

const NEGATIVE_FOLLOW_UPS: [&str; 2] = [
    "Schedule call to address concerns",
    "Share additional safety data to address hesitations",
];

const NEUTRAL_FOLLOW_UPS: [&str; 2] = [
    "Share additional clinical data that may help with decision making",
    "Schedule follow-up call in 2 weeks to continue the discussion",
];

/// Follow-ups built from the HCP directory and the interaction's tone.
///
/// A known profile contributes a scheduling line, then a product line when
/// `topics` mention the product for its specialty. The sentiment always adds
/// a pair, with unknown sentiment treated as neutral. At most
/// [`MAX_PERSONALIZED_FOLLOW_UPS`] lines are returned.
pub fn personalized_follow_ups(
    profile: Option<&HcpProfile>,
    topics: Option<&str>,
    sentiment: Option<Sentiment>,
) -> Vec<String> {
    let topics = topics.unwrap_or_default().to_lowercase();
    let mut follow_ups = Vec::with_capacity(4);

    if let Some(profile) = profile {
        follow_ups.push(format!(
            "Schedule next meeting according to {}'s preference: {}",
            profile.name, profile.preferences
        ));

        let product_line = SPECIALTY_FOLLOW_UPS
            .iter()
            .find(|(specialty, keyword, _)| {
                *specialty == profile.specialty && topics.contains(keyword)
            })
            .map(|(_, _, line)| *line);
        if let Some(line) = product_line {
            follow_ups.push(line.to_string());
        }
    }

    let tone = match sentiment {
        Some(Sentiment::Positive) => POSITIVE_FOLLOW_UPS,
        Some(Sentiment::Negative) => NEGATIVE_FOLLOW_UPS,
        Some(Sentiment::Neutral) | None => NEUTRAL_FOLLOW_UPS,
    };
    follow_ups.extend(tone.iter().map(|s| s.to_string()));

    follow_ups.truncate(MAX_PERSONALIZED_FOLLOW_UPS);
    follow_ups
}
