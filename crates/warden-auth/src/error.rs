//! Access denial error type.
//!
//! [`AccessDenied`] is the typed form of a failed check, for callers
//! that propagate denials with `?` instead of branching on a bool:
//!
//! ```text
//! NotAuthenticated     — no session at all (session layer)
//! EmptyRequirement     — misconfigured call site (requirement layer)
//! PermissionDenied     — grants don't cover the requirement (permission layer)
//! ```

use crate::Requirement;
use thiserror::Error;
use warden_types::ErrorCode;

/// Why an access check failed.
///
/// Callers can match on the variant to pick the right user feedback:
/// a login redirect, an ops alert for a broken route table, or the
/// "insufficient permission" view.
///
/// # Example
///
/// ```
/// use warden_auth::{AccessDenied, Requirement};
/// use warden_types::ErrorCode;
///
/// let err = AccessDenied::PermissionDenied {
///     requirement: Requirement::single("users:delete".parse().unwrap()),
/// };
///
/// assert!(err.to_string().contains("users:delete"));
/// assert_eq!(err.code(), "ACCESS_PERMISSION_DENIED");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// The session's grants do not cover the requirement.
    #[error("permission denied: requires {requirement}")]
    PermissionDenied {
        /// What the call site required.
        requirement: Requirement,
    },

    /// The call site supplied an empty requirement list.
    ///
    /// Always a bug in the caller's configuration, never a user
    /// problem; empty requirements deny by design.
    #[error("empty permission requirement denies access")]
    EmptyRequirement,

    /// No authenticated session is present.
    #[error("not authenticated")]
    NotAuthenticated,
}

impl AccessDenied {
    /// Returns the layer that produced the denial.
    #[must_use]
    pub fn layer(&self) -> &'static str {
        match self {
            Self::PermissionDenied { .. } => "permission",
            Self::EmptyRequirement => "requirement",
            Self::NotAuthenticated => "session",
        }
    }
}

impl ErrorCode for AccessDenied {
    fn code(&self) -> &'static str {
        match self {
            Self::PermissionDenied { .. } => "ACCESS_PERMISSION_DENIED",
            Self::EmptyRequirement => "ACCESS_EMPTY_REQUIREMENT",
            Self::NotAuthenticated => "ACCESS_NOT_AUTHENTICATED",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // Needs a wider grant, not a retry
            Self::PermissionDenied { .. } => false,
            // Needs a config fix
            Self::EmptyRequirement => false,
            // The user can log in
            Self::NotAuthenticated => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_types::assert_error_codes;

    #[test]
    fn permission_denied_display() {
        let err = AccessDenied::PermissionDenied {
            requirement: Requirement::single("roles:update".parse().unwrap()),
        };

        let msg = err.to_string();
        assert!(msg.contains("permission denied"), "got: {msg}");
        assert!(msg.contains("roles:update"), "got: {msg}");
        assert_eq!(err.layer(), "permission");
    }

    #[test]
    fn empty_requirement_display() {
        let err = AccessDenied::EmptyRequirement;
        assert!(err.to_string().contains("empty"));
        assert_eq!(err.layer(), "requirement");
    }

    #[test]
    fn not_authenticated_display() {
        let err = AccessDenied::NotAuthenticated;
        assert_eq!(err.to_string(), "not authenticated");
        assert_eq!(err.layer(), "session");
    }

    #[test]
    fn error_codes_follow_convention() {
        assert_error_codes(
            &[
                AccessDenied::PermissionDenied {
                    requirement: Requirement::single("users:read".parse().unwrap()),
                },
                AccessDenied::EmptyRequirement,
                AccessDenied::NotAuthenticated,
            ],
            "ACCESS_",
        );
    }

    #[test]
    fn only_not_authenticated_is_recoverable() {
        assert!(AccessDenied::NotAuthenticated.is_recoverable());
        assert!(!AccessDenied::EmptyRequirement.is_recoverable());
        assert!(!AccessDenied::PermissionDenied {
            requirement: Requirement::single("users:read".parse().unwrap()),
        }
        .is_recoverable());
    }
}
