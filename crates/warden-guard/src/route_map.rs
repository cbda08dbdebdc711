//! Route-to-permission tables.
//!
//! Associates admin routes with the [`Requirement`] a session must
//! satisfy to navigate there. Lookup is longest-prefix with `/`
//! boundaries, so `/admin/users/42/edit` inherits the `/admin/users`
//! rule unless a more specific entry exists.
//!
//! Unmatched routes deny by default: a freshly added admin page that
//! nobody remembered to map must not be world-visible. Public pages
//! are listed explicitly.

use warden_auth::Requirement;
use warden_types::{Action, PermissionFlag, Resource};

/// What a route demands of the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteRule {
    /// No session needed (login page, unauthorized view, docs site).
    Public,
    /// An authenticated session satisfying the requirement.
    Require(Requirement),
}

/// A static lookup table from route prefixes to [`RouteRule`]s.
///
/// # Matching
///
/// An entry `/admin/users` matches `/admin/users` and
/// `/admin/users/...` but not `/admin/users-archive`. When several
/// entries match, the longest prefix wins regardless of insertion
/// order.
///
/// # Example
///
/// ```
/// use warden_auth::Requirement;
/// use warden_guard::{RouteMap, RouteRule};
///
/// let map = RouteMap::new()
///     .public("/login")
///     .require("/admin/users", Requirement::single("users:read".parse().unwrap()));
///
/// assert_eq!(map.lookup("/login"), Some(&RouteRule::Public));
/// assert!(matches!(map.lookup("/admin/users/42"), Some(RouteRule::Require(_))));
/// assert_eq!(map.lookup("/somewhere-else"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    entries: Vec<(String, RouteRule)>,
    allow_unmatched: bool,
}

impl RouteMap {
    /// Creates an empty map. Unmatched routes deny.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard table for the admin surface.
    ///
    /// Each admin section requires `read` on its resource; the
    /// bug-report triage queue additionally requires `review`. The
    /// admin shell itself (`/admin`) is visible to anyone who can read
    /// at least one section. Login and the unauthorized view are
    /// public.
    #[must_use]
    pub fn admin_defaults() -> Self {
        let read = |r: Resource| PermissionFlag::new(r, Action::Read);
        let sections = [
            (Resource::Users, "/admin/users"),
            (Resource::Roles, "/admin/roles"),
            (Resource::Departments, "/admin/departments"),
            (Resource::Organizations, "/admin/organizations"),
            (Resource::Licenses, "/admin/licenses"),
            (Resource::Docs, "/admin/docs"),
            (Resource::BugReports, "/admin/bug-reports"),
        ];

        let mut map = Self::new().public("/login").public("/unauthorized");

        map = map.require(
            "/admin",
            Requirement::any_of(sections.iter().map(|&(r, _)| read(r)).collect()),
        );
        for (resource, route) in sections {
            map = map.require(route, Requirement::single(read(resource)));
        }
        map.require(
            "/admin/bug-reports/review",
            Requirement::single(PermissionFlag::new(Resource::BugReports, Action::Review)),
        )
    }

    /// Adds a public route.
    #[must_use]
    pub fn public(mut self, prefix: impl Into<String>) -> Self {
        self.entries.push((prefix.into(), RouteRule::Public));
        self
    }

    /// Adds a guarded route.
    #[must_use]
    pub fn require(mut self, prefix: impl Into<String>, requirement: Requirement) -> Self {
        self.entries
            .push((prefix.into(), RouteRule::Require(requirement)));
        self
    }

    /// Allows navigation to unmatched routes.
    ///
    /// For apps that embed the guard around the admin section only and
    /// serve everything else publicly.
    #[must_use]
    pub fn allow_unmatched(mut self) -> Self {
        self.allow_unmatched = true;
        self
    }

    /// Returns whether unmatched routes are allowed.
    #[must_use]
    pub fn unmatched_allowed(&self) -> bool {
        self.allow_unmatched
    }

    /// Returns the rule for the longest matching prefix, if any.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&RouteRule> {
        self.entries
            .iter()
            .filter(|(prefix, _)| prefix_matches(prefix, path))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, rule)| rule)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Prefix match on `/` boundaries: `/admin/users` matches itself and
/// `/admin/users/...`, never `/admin/users-archive`.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
