//! Navigation guard.
//!
//! [`RouteGuard`] is the piece the admin frontend calls on every
//! navigation: given the current session (if any) and the target path,
//! it either lets the navigation through or names the route to
//! redirect to — login when there is no session, the unauthorized view
//! when there is one without the grants.

use crate::{DefaultPolicy, RouteMap, RouteRule};
use warden_auth::{AccessDecision, AccessPolicy, SessionContext};

/// Outcome of a navigation check.
///
/// # Example
///
/// ```
/// use warden_guard::GuardVerdict;
///
/// let verdict = GuardVerdict::Redirect {
///     to: "/unauthorized".to_string(),
///     reason: "missing permission: any[users:read]".to_string(),
/// };
/// assert!(!verdict.is_allowed());
/// assert_eq!(verdict.redirect_target(), Some("/unauthorized"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Navigation may proceed.
    Allowed,
    /// Navigation is blocked; the frontend should redirect.
    Redirect {
        /// Route to redirect to.
        to: String,
        /// Why the navigation was blocked.
        reason: String,
    },
}

impl GuardVerdict {
    /// Returns `true` if navigation may proceed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns the redirect target if blocked.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Redirect { to, .. } => Some(to),
            Self::Allowed => None,
        }
    }

    /// Returns the blocking reason if blocked.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Redirect { reason, .. } => Some(reason),
            Self::Allowed => None,
        }
    }
}

/// Route guard: a [`RouteMap`] plus an [`AccessPolicy`].
///
/// # Check Flow
///
/// 1. Public route → allowed, session or not
/// 2. Guarded route, no session → redirect to login
/// 3. Guarded route, session → policy decides; denial redirects to the
///    unauthorized view with the policy's reason
/// 4. Unmatched route → denied unless the map opts into
///    [`allow_unmatched`](RouteMap::allow_unmatched)
///
/// # Example
///
/// ```
/// use warden_auth::{PermissionSet, SessionContext};
/// use warden_guard::{RouteGuard, RouteMap};
/// use warden_types::{Principal, UserId};
///
/// let guard = RouteGuard::new(RouteMap::admin_defaults());
///
/// // Anonymous visitors reach the login page but not the admin
/// assert!(guard.check(None, "/login").is_allowed());
/// let verdict = guard.check(None, "/admin/users");
/// assert_eq!(verdict.redirect_target(), Some("/login"));
///
/// // A session with the right grant gets through
/// let session = SessionContext::new(
///     Principal::User(UserId::new()),
///     PermissionSet::from_strs(["users:read"]).unwrap(),
/// );
/// assert!(guard.check(Some(&session), "/admin/users").is_allowed());
/// ```
#[derive(Debug)]
pub struct RouteGuard<P = DefaultPolicy> {
    map: RouteMap,
    policy: P,
    login_route: String,
    unauthorized_route: String,
}

impl RouteGuard<DefaultPolicy> {
    /// Creates a guard over the map with [`DefaultPolicy`].
    #[must_use]
    pub fn new(map: RouteMap) -> Self {
        Self::with_policy(map, DefaultPolicy)
    }
}

impl<P: AccessPolicy> RouteGuard<P> {
    /// Creates a guard with a custom policy.
    #[must_use]
    pub fn with_policy(map: RouteMap, policy: P) -> Self {
        Self {
            map,
            policy,
            login_route: "/login".to_string(),
            unauthorized_route: "/unauthorized".to_string(),
        }
    }

    /// Overrides the login redirect target (default `/login`).
    #[must_use]
    pub fn login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    /// Overrides the unauthorized redirect target
    /// (default `/unauthorized`).
    #[must_use]
    pub fn unauthorized_route(mut self, route: impl Into<String>) -> Self {
        self.unauthorized_route = route.into();
        self
    }

    /// Checks a navigation attempt.
    #[must_use]
    pub fn check(&self, session: Option<&SessionContext>, path: &str) -> GuardVerdict {
        match self.map.lookup(path) {
            Some(RouteRule::Public) => GuardVerdict::Allowed,

            Some(RouteRule::Require(requirement)) => {
                let Some(session) = session else {
                    tracing::debug!(path, "navigation redirected: not authenticated");
                    return GuardVerdict::Redirect {
                        to: self.login_route.clone(),
                        reason: "not authenticated".to_string(),
                    };
                };

                match self.policy.check_access(session, requirement) {
                    AccessDecision::Allowed => GuardVerdict::Allowed,
                    AccessDecision::Denied(reason) => GuardVerdict::Redirect {
                        to: self.unauthorized_route.clone(),
                        reason,
                    },
                }
            }

            None => {
                if self.map.unmatched_allowed() {
                    return GuardVerdict::Allowed;
                }
                // Unmapped admin pages fail closed
                tracing::warn!(path, "navigation denied: route not in permission map");
                match session {
                    None => GuardVerdict::Redirect {
                        to: self.login_route.clone(),
                        reason: "not authenticated".to_string(),
                    },
                    Some(_) => GuardVerdict::Redirect {
                        to: self.unauthorized_route.clone(),
                        reason: "route not in permission map".to_string(),
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_auth::{PermissionSet, Requirement};
    use warden_types::{Principal, UserId};

    fn session_with(flags: &[&str]) -> SessionContext {
        SessionContext::new(
            Principal::User(UserId::new()),
            PermissionSet::from_strs(flags).expect("test grants must be well-formed"),
        )
    }

    fn guard() -> RouteGuard {
        RouteGuard::new(RouteMap::admin_defaults())
    }

    #[test]
    fn public_route_allows_anonymous() {
        assert!(guard().check(None, "/login").is_allowed());
        assert!(guard().check(None, "/unauthorized").is_allowed());
    }

    #[test]
    fn guarded_route_redirects_anonymous_to_login() {
        let verdict = guard().check(None, "/admin/users");
        assert_eq!(verdict.redirect_target(), Some("/login"));
        assert_eq!(verdict.reason(), Some("not authenticated"));
    }

    #[test]
    fn matching_grant_allows() {
        let session = session_with(&["users:read"]);
        assert!(guard().check(Some(&session), "/admin/users").is_allowed());
    }

    #[test]
    fn missing_grant_redirects_to_unauthorized() {
        let session = session_with(&["users:read"]);
        let verdict = guard().check(Some(&session), "/admin/roles");

        assert_eq!(verdict.redirect_target(), Some("/unauthorized"));
        let reason = verdict.reason().expect("redirect carries a reason");
        assert!(reason.contains("roles:read"), "got: {reason}");
    }

    #[test]
    fn super_admin_reaches_everything() {
        let session = session_with(&["admin:*"]);
        let g = guard();

        for route in [
            "/admin",
            "/admin/users",
            "/admin/roles/5/permissions",
            "/admin/bug-reports/review",
        ] {
            assert!(g.check(Some(&session), route).is_allowed(), "{route}");
        }
    }

    #[test]
    fn wildcard_grant_covers_nested_review_queue() {
        let session = session_with(&["bug_reports:*"]);
        assert!(guard()
            .check(Some(&session), "/admin/bug-reports/review/77")
            .is_allowed());
    }

    #[test]
    fn reader_cannot_reach_review_queue() {
        let session = session_with(&["bug_reports:read"]);
        let g = guard();

        assert!(g.check(Some(&session), "/admin/bug-reports").is_allowed());
        assert!(!g
            .check(Some(&session), "/admin/bug-reports/review")
            .is_allowed());
    }

    #[test]
    fn admin_shell_visible_with_any_section() {
        let session = session_with(&["licenses:read"]);
        assert!(guard().check(Some(&session), "/admin").is_allowed());

        let none = session_with(&[]);
        assert!(!guard().check(Some(&none), "/admin").is_allowed());
    }

    #[test]
    fn unmatched_route_fails_closed() {
        let session = session_with(&["admin:*"]);
        let verdict = guard().check(Some(&session), "/admin-v2/secret");

        assert_eq!(verdict.redirect_target(), Some("/unauthorized"));
        assert_eq!(verdict.reason(), Some("route not in permission map"));
    }

    #[test]
    fn unmatched_route_allowed_when_opted_in() {
        let g = RouteGuard::new(RouteMap::admin_defaults().allow_unmatched());
        assert!(g.check(None, "/blog/announcing-v2").is_allowed());
    }

    #[test]
    fn custom_redirect_targets() {
        let g = RouteGuard::new(RouteMap::admin_defaults())
            .login_route("/signin")
            .unauthorized_route("/403");

        assert_eq!(
            g.check(None, "/admin/users").redirect_target(),
            Some("/signin")
        );

        let session = session_with(&[]);
        assert_eq!(
            g.check(Some(&session), "/admin/users").redirect_target(),
            Some("/403")
        );
    }

    #[test]
    fn custom_policy_is_honored() {
        struct LockdownPolicy;
        impl AccessPolicy for LockdownPolicy {
            fn can_access(&self, _: &SessionContext, _: &Requirement) -> bool {
                false
            }
        }

        let g = RouteGuard::with_policy(RouteMap::admin_defaults(), LockdownPolicy);
        let session = session_with(&["admin:*"]);

        assert!(!g.check(Some(&session), "/admin/users").is_allowed());
        // Public routes bypass the policy entirely
        assert!(g.check(Some(&session), "/login").is_allowed());
    }
}
