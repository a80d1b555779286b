//! Data Transfer Objects for interaction processing.

use serde::{Deserialize, Serialize};

use crate::application::handlers::ProcessInteractionResult;
use crate::domain::catalog::HcpProfile;
use crate::domain::interaction::InteractionUpdate;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to process one free-text interaction note.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInteractionRequest {
    pub text: String,
    /// Free-form caller context, such as `{"is_edit": true}`.
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Known HCP attached to a processed note.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HcpProfileResponse {
    pub name: String,
    pub specialty: String,
    pub preferences: String,
}

impl From<&HcpProfile> for HcpProfileResponse {
    fn from(profile: &HcpProfile) -> Self {
        Self {
            name: profile.name.to_string(),
            specialty: profile.specialty.to_string(),
            preferences: profile.preferences.to_string(),
        }
    }
}

/// Result of processing a note.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInteractionResponse {
    pub message: String,
    pub extracted_data: InteractionUpdate,
    pub suggested_followups: Vec<String>,
    /// Follow-ups drawn from the HCP directory and the sentiment.
    pub personalized_followups: Vec<String>,
    pub suggested_resources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcp_profile: Option<HcpProfileResponse>,
}

impl From<ProcessInteractionResult> for ProcessInteractionResponse {
    fn from(result: ProcessInteractionResult) -> Self {
        Self {
            message: result.message,
            extracted_data: result.extracted,
            suggested_followups: result.suggested_follow_ups,
            personalized_followups: result.personalized_follow_ups,
            suggested_resources: result.suggested_resources,
            hcp_profile: result.hcp_profile.map(HcpProfileResponse::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::find_hcp;
    use serde_json::json;

    #[test]
    fn request_context_is_optional() {
        let request: ProcessInteractionRequest =
            serde_json::from_value(json!({"text": "Met Dr. Smith"})).unwrap();
        assert_eq!(request.text, "Met Dr. Smith");
        assert!(request.context.is_none());
    }

    #[test]
    fn request_context_accepts_an_object() {
        let request: ProcessInteractionRequest = serde_json::from_value(
            json!({"text": "Met Dr. Patel", "context": {"is_edit": true}}),
        )
        .unwrap();
        assert_eq!(request.context, Some(json!({"is_edit": true})));
    }

    #[test]
    fn response_uses_wire_names() {
        let response = ProcessInteractionResponse {
            message: "ok".to_string(),
            extracted_data: InteractionUpdate {
                hcp_name: Some("Dr. Smith".to_string()),
                ..Default::default()
            },
            suggested_followups: vec!["Call back".to_string()],
            personalized_followups: vec!["Invite to upcoming product symposium".to_string()],
            suggested_resources: vec![],
            hcp_profile: find_hcp("dr. smith").map(HcpProfileResponse::from),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["extractedData"], json!({"hcpName": "Dr. Smith"}));
        assert_eq!(value["suggestedFollowups"], json!(["Call back"]));
        assert_eq!(
            value["personalizedFollowups"],
            json!(["Invite to upcoming product symposium"])
        );
        assert_eq!(value["hcpProfile"]["specialty"], "Cardiology");
    }

    #[test]
    fn unknown_hcp_profile_is_omitted() {
        let response = ProcessInteractionResponse {
            message: "ok".to_string(),
            extracted_data: InteractionUpdate::new(),
            suggested_followups: vec![],
            personalized_followups: vec![],
            suggested_resources: vec![],
            hcp_profile: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("hcpProfile").is_none());
    }
}
