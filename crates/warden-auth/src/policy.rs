//! Access policy trait.
//!
//! Defines [`AccessPolicy`] — the abstract seam between the pure
//! matcher and its consumers. The trait lives here so both the guard
//! layer and application code can reference it without depending on a
//! concrete implementation (or on each other).
//!
//! # Architecture
//!
//! ```text
//! AccessPolicy trait (warden-auth)   ← abstract, no logging deps
//!          │
//!          ├── DefaultPolicy (warden-guard)  ← concrete, audited
//!          └── test doubles (mock policies in consumer tests)
//! ```

use crate::{AccessDecision, Requirement, SessionContext};

/// Abstract policy deciding whether a session may satisfy a
/// requirement.
///
/// The default [`can_access`](Self::can_access) behavior most
/// implementations want is a straight delegation to the matcher;
/// implementors add environment concerns on top (audit logging,
/// metrics, kill switches for a compromised deploy).
///
/// # Implementors
///
/// - `DefaultPolicy` (in `warden-guard`) — matcher plus audit logging
/// - Custom impls for tests or locked-down environments
///
/// # Example
///
/// ```
/// use warden_auth::{AccessPolicy, PermissionSet, Requirement, SessionContext};
/// use warden_types::{Principal, UserId};
///
/// /// Denies everything; used while a breach is being investigated.
/// struct LockdownPolicy;
///
/// impl AccessPolicy for LockdownPolicy {
///     fn can_access(&self, _session: &SessionContext, _requirement: &Requirement) -> bool {
///         false
///     }
/// }
///
/// let session = SessionContext::new(
///     Principal::User(UserId::new()),
///     PermissionSet::from_strs(["admin:*"]).unwrap(),
/// );
/// let requirement = Requirement::single("users:read".parse().unwrap());
///
/// assert!(!LockdownPolicy.can_access(&session, &requirement));
/// assert!(LockdownPolicy.check_access(&session, &requirement).is_denied());
/// ```
pub trait AccessPolicy: Send + Sync {
    /// Decides whether the session satisfies the requirement.
    fn can_access(&self, session: &SessionContext, requirement: &Requirement) -> bool;

    /// Check with a reasoned result.
    ///
    /// # Default Implementation
    ///
    /// Wraps [`can_access`](Self::can_access):
    /// - `Allowed` if it returns true
    /// - `Denied` with the formatted requirement otherwise
    ///
    /// Override for more specific denial reasons.
    fn check_access(&self, session: &SessionContext, requirement: &Requirement) -> AccessDecision {
        if self.can_access(session, requirement) {
            AccessDecision::Allowed
        } else {
            AccessDecision::Denied(format!("missing permission: {requirement}"))
        }
    }
}

/// The obvious policy: exactly the matcher, nothing else.
///
/// Useful as a building block and in tests. Production code usually
/// wants `DefaultPolicy` from `warden-guard`, which adds audit
/// logging around the same decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatcherPolicy;

impl AccessPolicy for MatcherPolicy {
    fn can_access(&self, session: &SessionContext, requirement: &Requirement) -> bool {
        session.satisfies(requirement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PermissionSet;
    use warden_types::{PermissionFlag, Principal, UserId};

    fn flag(s: &str) -> PermissionFlag {
        s.parse().expect("test flag must be well-formed")
    }

    fn session_with(flags: &[&str]) -> SessionContext {
        SessionContext::new(
            Principal::User(UserId::new()),
            PermissionSet::from_strs(flags).expect("test grants must be well-formed"),
        )
    }

    #[test]
    fn matcher_policy_delegates() {
        let policy = MatcherPolicy;
        let session = session_with(&["users:read"]);

        assert!(policy.can_access(&session, &Requirement::single(flag("users:read"))));
        assert!(!policy.can_access(&session, &Requirement::single(flag("users:delete"))));
    }

    #[test]
    fn matcher_policy_denies_empty_requirement() {
        let policy = MatcherPolicy;
        let session = session_with(&["admin:*"]);

        assert!(!policy.can_access(&session, &Requirement::any_of(vec![])));
    }

    #[test]
    fn default_check_access_wraps_can_access() {
        let policy = MatcherPolicy;
        let session = session_with(&["users:read"]);

        let decision = policy.check_access(&session, &Requirement::single(flag("users:read")));
        assert!(decision.is_allowed());

        let decision = policy.check_access(&session, &Requirement::single(flag("users:delete")));
        assert!(decision.is_denied());
        let reason = decision.denial_reason().expect("denied carries a reason");
        assert!(reason.contains("users:delete"), "got: {reason}");
    }

    #[test]
    fn trait_object_works() {
        let policy: Box<dyn AccessPolicy> = Box::new(MatcherPolicy);
        let session = session_with(&["docs:*"]);

        assert!(policy.can_access(&session, &Requirement::single(flag("docs:update"))));
    }
}
