//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! `Identity` comes from the external auth backend and is treated as an
//! opaque token: routing and layout only ever test for its presence.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in principal as reported by the auth backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    /// Best human-readable label for header chrome.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Account")
    }
}

/// Request body for `POST /api/menu/describe`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DescribeRequest<'a> {
    pub name: &'a str,
    pub ingredients: &'a str,
}

/// Why the server fell back to canned copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedReason {
    MissingCredential,
    Misconfigured,
    RequestFailed,
}

/// Response body for `POST /api/menu/describe`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DescribeResponse {
    pub text: String,
    pub generated: bool,
    #[serde(default)]
    pub degraded_reason: Option<DegradedReason>,
}
