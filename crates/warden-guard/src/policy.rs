//! Default access policy with audit logging.
//!
//! # Design
//!
//! Permission checking is separated from the types themselves:
//!
//! - [`SessionContext`](warden_auth::SessionContext): holds identity and grants
//! - [`Requirement`](warden_auth::Requirement): what a call site demands
//! - [`AccessPolicy`]: decides between them
//!
//! [`DefaultPolicy`] is the matcher plus an audit trail. Every decision
//! is logged with structured fields so denied navigation attempts can
//! be investigated without reproducing them.

use warden_auth::{AccessDecision, AccessPolicy, Requirement, SessionContext};

/// Default access policy.
///
/// # Rules
///
/// | Case | Decision |
/// |------|----------|
/// | Empty requirement | Denied (misconfiguration, fails closed) |
/// | Requirement satisfied by grants | Allowed |
/// | Otherwise | Denied |
///
/// # Audit Logging
///
/// All checks are logged:
/// - Allowed: debug level
/// - Denied: warn level
/// - Empty requirement: warn level, flagged as a config problem
///
/// # Example
///
/// ```
/// use warden_auth::{AccessPolicy, PermissionSet, Requirement, SessionContext};
/// use warden_guard::DefaultPolicy;
/// use warden_types::{Principal, UserId};
///
/// let policy = DefaultPolicy;
/// let session = SessionContext::new(
///     Principal::User(UserId::new()),
///     PermissionSet::from_strs(["bug_reports:*"]).unwrap(),
/// );
///
/// let triage = Requirement::single("bug_reports:review".parse().unwrap());
/// assert!(policy.can_access(&session, &triage));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl AccessPolicy for DefaultPolicy {
    fn can_access(&self, session: &SessionContext, requirement: &Requirement) -> bool {
        if requirement.is_empty() {
            tracing::warn!(
                principal = %session.principal(),
                session = %session.id(),
                "access denied: empty requirement (misconfigured call site)"
            );
            return false;
        }

        let allowed = session.satisfies(requirement);

        // Audit logging
        if allowed {
            tracing::debug!(
                principal = %session.principal(),
                session = %session.id(),
                requirement = %requirement,
                "access allowed"
            );
        } else {
            tracing::warn!(
                principal = %session.principal(),
                session = %session.id(),
                requirement = %requirement,
                grants = %session.grants(),
                "access denied: missing permission"
            );
        }

        allowed
    }

    /// Check with denial reasons that distinguish a misconfigured call
    /// site from an ordinary missing grant.
    fn check_access(&self, session: &SessionContext, requirement: &Requirement) -> AccessDecision {
        if requirement.is_empty() {
            // can_access logs the warn; keep the reason machine-friendly
            self.can_access(session, requirement);
            return AccessDecision::Denied("empty permission requirement".to_string());
        }

        if self.can_access(session, requirement) {
            AccessDecision::Allowed
        } else {
            AccessDecision::Denied(format!("missing permission: {requirement}"))
        }
    }
}
