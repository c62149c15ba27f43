use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The persisted per-user record created by onboarding.
///
/// Storage-internal identifiers never appear here; adapters strip them when
/// mapping rows into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity of the authenticated user that owns this profile.
    pub id: String,
    pub username: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub bio: String,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Raw onboarding payload.
///
/// Every field is kept as an untyped JSON value so the validator can report
/// missing and wrongly typed fields in a fixed order instead of failing at
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OnboardingSubmission {
    #[serde(default)]
    pub username: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub avatar: Option<Value>,
    #[serde(default)]
    pub bio: Option<Value>,
    #[serde(default)]
    pub interests: Option<Value>,
}

impl OnboardingSubmission {
    /// Reads a request body.
    ///
    /// An object supplies fields by name. An array has no named fields and
    /// reads as an empty submission. Any other value is not a submission.
    pub fn from_body(body: Value) -> Option<Self> {
        match body {
            Value::Object(mut fields) => Some(Self {
                username: fields.remove("username"),
                name: fields.remove("name"),
                avatar: fields.remove("avatar"),
                bio: fields.remove("bio"),
                interests: fields.remove("interests"),
            }),
            Value::Array(_) => Some(Self::default()),
            _ => None,
        }
    }
}

/// Success body for a completed onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingReceipt {
    pub message: String,
}

impl OnboardingReceipt {
    pub fn completed() -> Self {
        Self {
            message: "Onboarding completed.".into(),
        }
    }
}
