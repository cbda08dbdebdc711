//! Access decision types.
//!
//! Provides [`AccessDecision`] for policy-level results that carry a
//! denial reason, where a bare `bool` would lose the "why" that the
//! unauthorized view and the audit log both want.

/// Result of an access check against a policy.
///
/// # Variants
///
/// - `Allowed`: the session satisfies the requirement
/// - `Denied`: the session does not, with a human-readable reason
///
/// # Example
///
/// ```
/// use warden_auth::AccessDecision;
///
/// let d = AccessDecision::Allowed;
/// assert!(d.is_allowed());
///
/// let d = AccessDecision::Denied("missing permission: any[users:read]".to_string());
/// assert!(d.is_denied());
/// assert_eq!(d.status_str(), "denied");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The requirement is satisfied.
    Allowed,
    /// The requirement is not satisfied, with a reason.
    Denied(String),
}

impl AccessDecision {
    /// Returns `true` if access is allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns `true` if access is denied.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }

    /// Returns the denial reason if denied.
    #[must_use]
    pub fn denial_reason(&self) -> Option<&str> {
        match self {
            Self::Denied(reason) => Some(reason),
            Self::Allowed => None,
        }
    }

    /// Returns the status as a string (`"allowed"`, `"denied"`).
    #[must_use]
    pub fn status_str(&self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Denied(_) => "denied",
        }
    }
}
