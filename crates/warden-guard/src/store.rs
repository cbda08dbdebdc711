//! Session store with an explicit lifecycle.
//!
//! The admin frontend originally kept the authenticated user's grants
//! in an ambient global store read from anywhere. [`SessionStore`]
//! replaces that with one explicit object whose lifecycle is the
//! session's: populated at login, swapped on profile refresh, cleared
//! at logout. Checks read a snapshot; nothing holds a lock across a
//! render.

use parking_lot::RwLock;
use warden_auth::{AccessDenied, PermissionSet, SessionContext};

/// Thread-safe holder of the current session context.
///
/// Holds at most one session (one authenticated user per client).
/// [`current`](Self::current) hands out clones — contexts are small
/// immutable values — so readers never observe a half-applied refresh
/// and never contend beyond the snapshot itself.
///
/// # Example
///
/// ```
/// use warden_auth::{PermissionSet, SessionContext};
/// use warden_guard::SessionStore;
/// use warden_types::{Principal, UserId};
///
/// let store = SessionStore::new();
/// assert!(!store.is_authenticated());
///
/// store.login(SessionContext::new(
///     Principal::User(UserId::new()),
///     PermissionSet::from_strs(["docs:read"]).unwrap(),
/// ));
/// assert!(store.is_authenticated());
///
/// // Profile refresh swaps the grant set, preserving identity
/// store.refresh(PermissionSet::from_strs(["docs:*"]).unwrap()).unwrap();
/// assert!(store.current().unwrap().can("docs:delete".parse().unwrap()));
///
/// let ended = store.logout().unwrap();
/// assert!(ended.grants().is_empty());
/// assert!(!store.is_authenticated());
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<SessionContext>>,
}

impl SessionStore {
    /// Creates an empty (logged-out) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a session at login.
    ///
    /// Replaces any existing session; logging in over a live session
    /// is how re-authentication works, not an error.
    pub fn login(&self, session: SessionContext) {
        let mut slot = self.current.write();
        if let Some(old) = slot.as_ref() {
            tracing::debug!(
                old_session = %old.id(),
                new_session = %session.id(),
                "existing session replaced at login"
            );
        }
        tracing::info!(
            principal = %session.principal(),
            session = %session.id(),
            grants = session.grants().len(),
            "session started"
        );
        *slot = Some(session);
    }

    /// Returns a snapshot of the current session, if any.
    #[must_use]
    pub fn current(&self) -> Option<SessionContext> {
        self.current.read().clone()
    }

    /// Returns `true` if a session is installed.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Replaces the grant set of the current session.
    ///
    /// Called after a profile refresh re-derives the user's flags from
    /// their roles. Identity and session id are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied::NotAuthenticated`] if no session is
    /// installed.
    pub fn refresh(&self, grants: PermissionSet) -> Result<(), AccessDenied> {
        let mut slot = self.current.write();
        let session = slot.as_ref().ok_or(AccessDenied::NotAuthenticated)?;

        tracing::debug!(
            principal = %session.principal(),
            session = %session.id(),
            grants_before = session.grants().len(),
            grants_after = grants.len(),
            "session grants refreshed"
        );
        *slot = Some(session.refresh(grants));
        Ok(())
    }

    /// Ends the current session.
    ///
    /// Returns the ended context with its grants revoked, for a final
    /// audit event. A logged-out store is a no-op.
    pub fn logout(&self) -> Option<SessionContext> {
        let ended = self.current.write().take()?;
        tracing::info!(
            principal = %ended.principal(),
            session = %ended.id(),
            "session ended"
        );
        Some(ended.revoke_all())
    }
}
