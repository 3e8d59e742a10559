//! Wire DTOs exchanged with the school backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Request types only exist
//! in validated form; the editable form state lives in `state::*`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Audience of a notification as sent on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetGroup {
    /// Everyone in the selected year and session (students and parents).
    Course,
    /// One student identified by DNI.
    Student,
    /// One parent identified by their child's DNI.
    Parent,
}

impl TargetGroup {
    /// Parse the recipient selector value (`all`, `student`, `parent`).
    pub fn from_selector(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::Course),
            "student" => Some(Self::Student),
            "parent" => Some(Self::Parent),
            _ => None,
        }
    }

    /// Selector value for this group; the inverse of [`Self::from_selector`].
    pub fn selector_value(self) -> &'static str {
        match self {
            Self::Course => "all",
            Self::Student => "student",
            Self::Parent => "parent",
        }
    }

    /// Whether this group addresses one recipient and therefore needs a DNI.
    pub fn requires_dni(self) -> bool {
        matches!(self, Self::Student | Self::Parent)
    }
}

/// Body sent to every notification dispatch endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub year: String,
    pub session: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    pub target_group: TargetGroup,
    pub message: String,
}

/// Password reset submission; only built from a validated `ResetForm`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetRequest {
    pub token: String,
    pub new_password: String,
}

impl ResetRequest {
    /// `application/x-www-form-urlencoded` body for `POST /api/reset_password`.
    pub fn form_body(&self) -> String {
        format!(
            "token={}&password={}",
            urlencoding::encode(&self.token),
            urlencoding::encode(&self.new_password)
        )
    }
}

/// Result of a DNI lookup. Either name part may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientLookup {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl RecipientLookup {
    /// `"{first} {last}"` with missing parts treated as empty, trimmed.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_owned()
    }
}

/// Error body the backend attaches to failed responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
