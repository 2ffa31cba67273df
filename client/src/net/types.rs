//! Wire DTOs for the backend auth/profile contract.
//!
//! DESIGN
//! ======
//! Every field the backend may omit is an `Option` with `#[serde(default)]`
//! so a sparse profile still decodes. `AuthStatus` is the value the auth
//! client always resolves to; it serializes back to the same JSON shape for
//! the debug panel.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const NOT_AUTHENTICATED_MESSAGE: &str = "Not authenticated";
pub const FAILED_CHECK_MESSAGE: &str = "Failed to check authentication";

/// Identity record returned by `GET /api/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier.
    pub id: String,
    pub email: String,
    /// Optional display handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<UserMetadata>,
}

impl User {
    /// Username if the backend sent a non-empty one.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }

    /// Metadata field accessor that treats empty strings as absent.
    pub fn meta(&self, pick: impl Fn(&UserMetadata) -> Option<&String>) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|meta| pick(meta))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Identity-provider profile details. All fields optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// ISO 8601 timestamp of the last profile change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Result of a single authentication-status check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    /// Present when `authenticated` is true, if the backend honors its contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Human-readable reason on unauthenticated and failure paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Set when the check itself failed (no response or undecodable body).
    #[serde(skip)]
    failed_check: bool,
}

impl AuthStatus {
    pub fn authenticated(user: User) -> Self {
        Self { authenticated: true, user: Some(user), message: None, failed_check: false }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self { authenticated: false, user: None, message: Some(message.into()), failed_check: false }
    }

    /// Status used when the backend could not be reached or understood.
    pub fn failed() -> Self {
        Self { failed_check: true, ..Self::unauthenticated(FAILED_CHECK_MESSAGE) }
    }

    pub fn is_failed_check(&self) -> bool {
        self.failed_check
    }
}
