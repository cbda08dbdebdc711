//! Principal (actor identity) types.
//!
//! A [`Principal`] represents the actor behind a request, separating
//! "who is acting" from "what they are allowed to do".
//!
//! Principal lives in `warden-types` rather than `warden-auth` because
//! it is pure identity: audit events, session contexts, and HTTP-layer
//! request metadata all need it without pulling in any permission
//! logic.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// The actor behind a request.
///
/// A Principal is identity only; the granted permission set lives in
/// the session context one layer up.
///
/// # Variants
///
/// | Variant | Description | Typical Use |
/// |---------|-------------|-------------|
/// | `User` | Authenticated human | Admin dashboard session |
/// | `Service` | Named machine client | Sync jobs, CI integrations |
/// | `System` | Internal operations | Migrations, scheduled cleanup |
///
/// # Example
///
/// ```
/// use warden_types::{Principal, UserId};
///
/// let admin = Principal::User(UserId::new());
/// assert!(admin.is_user());
///
/// let sync = Principal::Service("license-sync".to_string());
/// assert_eq!(sync.to_string(), "service:license-sync");
///
/// assert_eq!(Principal::System.to_string(), "system");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Principal {
    /// Authenticated human user identified by [`UserId`].
    User(UserId),

    /// Machine client identified by a stable service name.
    ///
    /// Service principals authenticate with API keys rather than login
    /// sessions, but flow through the same permission checks.
    Service(String),

    /// System internal operations not attributable to any user or
    /// service: migrations, scheduled jobs, seed scripts.
    System,
}

impl Principal {
    /// Returns `true` if this is a [`Principal::User`].
    #[must_use]
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User(_))
    }

    /// Returns `true` if this is a [`Principal::Service`].
    #[must_use]
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service(_))
    }

    /// Returns `true` if this is [`Principal::System`].
    #[must_use]
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System)
    }

    /// Returns the [`UserId`] if this is a User, otherwise `None`.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::User(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the service name if this is a Service, otherwise `None`.
    #[must_use]
    pub fn service_name(&self) -> Option<&str> {
        match self {
            Self::Service(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(id) => write!(f, "user:{}", id.uuid()),
            Self::Service(name) => write!(f, "service:{name}"),
            Self::System => write!(f, "system"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_user() {
        let id = UserId::new();
        let principal = Principal::User(id);

        assert!(principal.is_user());
        assert!(!principal.is_service());
        assert!(!principal.is_system());
        assert_eq!(principal.user_id(), Some(id));
        assert!(principal.service_name().is_none());
    }

    #[test]
    fn principal_service() {
        let principal = Principal::Service("license-sync".to_string());

        assert!(!principal.is_user());
        assert!(principal.is_service());
        assert!(!principal.is_system());
        assert!(principal.user_id().is_none());
        assert_eq!(principal.service_name(), Some("license-sync"));
    }

    #[test]
    fn principal_system() {
        let principal = Principal::System;

        assert!(!principal.is_user());
        assert!(!principal.is_service());
        assert!(principal.is_system());
        assert!(principal.user_id().is_none());
        assert!(principal.service_name().is_none());
    }

    #[test]
    fn principal_display() {
        let user = Principal::User(UserId::new());
        assert!(format!("{user}").starts_with("user:"));

        let service = Principal::Service("ci".to_string());
        assert_eq!(format!("{service}"), "service:ci");

        assert_eq!(format!("{}", Principal::System), "system");
    }

    #[test]
    fn principal_equality() {
        let id1 = UserId::new();
        let id2 = UserId::new();

        assert_eq!(Principal::User(id1), Principal::User(id1));
        assert_ne!(Principal::User(id1), Principal::User(id2));
        assert_ne!(Principal::System, Principal::User(id1));
    }

    #[test]
    fn serde_roundtrip() {
        let principal = Principal::User(UserId::new());
        let json = serde_json::to_string(&principal).expect("serialize");
        let parsed: Principal = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, principal);
    }
}
