//! Identifier types for Warden.
//!
//! All identifiers are UUID-based so they can be issued by the API
//! server and echoed back by admin clients without coordination.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for an authenticated user.
///
/// Backs [`Principal::User`](crate::Principal::User). The UUID is the
/// same identifier the account database uses, so audit log lines can be
/// joined back to user records.
///
/// # Why No `Default`?
///
/// **Do NOT implement `Default` for `UserId`.**
///
/// A user identity must come from authentication. Conjuring a fresh
/// random identity via `Default` would let a forgotten initialization
/// masquerade as a real user. Always construct via [`UserId::new`]
/// (registration) or deserialization (login response).
///
/// # Example
///
/// ```
/// use warden_types::UserId;
///
/// let id = UserId::new();
/// assert!(id.to_string().starts_with("user:"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new [`UserId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// Identifier for a login session.
///
/// Assigned when a session context is created at login and kept stable
/// across grant refreshes, so audit events from one session can be
/// correlated even when the user's permission set changes mid-session.
///
/// # Example
///
/// ```
/// use warden_types::SessionId;
///
/// let id = SessionId::new();
/// assert!(id.to_string().starts_with("sess:"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Creates a new [`SessionId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sess:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_serde_roundtrip() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        let parsed: UserId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, id);
    }

    #[test]
    fn session_id_serde_roundtrip() {
        let id = SessionId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        let parsed: SessionId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, id);
    }

    #[test]
    fn uuid_accessor_matches_inner() {
        let id = UserId::new();
        assert_eq!(id.uuid(), id.0);
    }
}
