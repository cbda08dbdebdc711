//! Session context (Principal + grants).
//!
//! The session context replaces the ambient global store the matcher
//! originally read from: every check site receives an explicit
//! [`SessionContext`] instead of reaching into shared mutable state.

use crate::{PermissionSet, Requirement};
use serde::{Deserialize, Serialize};
use warden_types::{PermissionFlag, Principal, SessionId};

/// The security context of one authenticated session.
///
/// Combines:
///
/// - **Who**: the [`Principal`]
/// - **What**: their [`PermissionSet`], as granted at login
///
/// # Immutability
///
/// Contexts are immutable value types. [`refresh`](Self::refresh) and
/// [`revoke_all`](Self::revoke_all) return new contexts rather than
/// mutating in place. This keeps concurrent permission checks trivially
/// safe and makes "grants before refresh" vs "grants after refresh"
/// explicit in audit trails. The [`SessionId`] is preserved across
/// refreshes so one login's audit events stay correlated.
///
/// # Why No `Default`?
///
/// **Do NOT implement `Default` for `SessionContext`.**
///
/// A context requires a principal; there is no sensible default
/// identity. Always construct with [`SessionContext::new`].
///
/// # Example
///
/// ```
/// use warden_auth::{PermissionSet, SessionContext};
/// use warden_types::{Principal, UserId};
///
/// let grants = PermissionSet::from_strs(["users:read"]).unwrap();
/// let session = SessionContext::new(Principal::User(UserId::new()), grants);
///
/// assert!(session.can("users:read".parse().unwrap()));
/// assert!(!session.can("users:delete".parse().unwrap()));
///
/// // Profile refresh replaces the grant set wholesale
/// let widened = session.refresh(PermissionSet::from_strs(["users:*"]).unwrap());
/// assert!(widened.can("users:delete".parse().unwrap()));
/// assert_eq!(session.id(), widened.id()); // same login session
///
/// // Logout clears the grants
/// let ended = widened.revoke_all();
/// assert!(!ended.can("users:read".parse().unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Correlates audit events from one login.
    id: SessionId,
    /// The actor this session authenticates.
    principal: Principal,
    /// The flags granted at login (or at the last refresh).
    grants: PermissionSet,
}

impl SessionContext {
    /// Creates a context at login time with a fresh [`SessionId`].
    #[must_use]
    pub fn new(principal: Principal, grants: PermissionSet) -> Self {
        Self {
            id: SessionId::new(),
            principal,
            grants,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the principal.
    #[must_use]
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Returns the granted permission set.
    #[must_use]
    pub fn grants(&self) -> &PermissionSet {
        &self.grants
    }

    /// Decides a single required flag against this session's grants.
    #[must_use]
    pub fn can(&self, required: PermissionFlag) -> bool {
        self.grants.allows(required)
    }

    /// Decides a full requirement against this session's grants.
    #[must_use]
    pub fn satisfies(&self, requirement: &Requirement) -> bool {
        requirement.is_satisfied_by(&self.grants)
    }

    /// Returns a new context with the grant set replaced.
    ///
    /// Used on profile refresh: the server re-derives the user's flags
    /// from their roles and the client swaps the whole set. Principal
    /// and session id are preserved.
    #[must_use]
    pub fn refresh(&self, grants: PermissionSet) -> Self {
        Self {
            id: self.id,
            principal: self.principal.clone(),
            grants,
        }
    }

    /// Returns a new context with every grant removed.
    ///
    /// The logout transition: identity is retained for the final audit
    /// event, but no check can succeed against the returned context.
    #[must_use]
    pub fn revoke_all(&self) -> Self {
        Self {
            id: self.id,
            principal: self.principal.clone(),
            grants: PermissionSet::new(),
        }
    }
}

impl std::fmt::Display for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}-grants", self.principal, self.grants.len())
    }
}
