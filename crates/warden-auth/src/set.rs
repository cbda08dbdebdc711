//! Permission sets and the core matcher.
//!
//! A [`PermissionSet`] is the flags held by an authenticated user — a
//! derived, read-only view of their grants, built at login and replaced
//! wholesale on refresh. Matching is hierarchical: an exact flag, the
//! resource wildcard, or the super-admin flag can each satisfy a
//! requirement.
//!
//! # Example
//!
//! ```
//! use warden_auth::PermissionSet;
//! use warden_types::{Action, PermissionFlag, Resource};
//!
//! let grants = PermissionSet::from_strs(["users:read", "bug_reports:*"]).unwrap();
//!
//! // Exact match
//! assert!(grants.allows(PermissionFlag::new(Resource::Users, Action::Read)));
//! // Resource wildcard covers every action on bug_reports
//! assert!(grants.allows(PermissionFlag::new(Resource::BugReports, Action::Review)));
//! // But nothing else
//! assert!(!grants.allows(PermissionFlag::new(Resource::Roles, Action::Read)));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use warden_types::{FlagError, PermissionFlag};

/// The set of permission flags held by an authenticated user.
///
/// Backed by a `HashSet`, so duplicates collapse and order is
/// irrelevant — both properties of the grant lists the API server
/// sends at login.
///
/// # Matching
///
/// [`allows`](Self::allows) implements the hierarchical match; the
/// aggregate forms [`allows_any`](Self::allows_any) and
/// [`allows_all`](Self::allows_all) fold it over a requirement list.
/// All three are pure: no I/O, no mutation, deterministic, and safe to
/// call concurrently from any number of render passes.
///
/// # Serde
///
/// Serializes as a list of wire strings (`["users:read", "docs:*"]`),
/// the exact shape of the `permissions` array in a login response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashSet<PermissionFlag>);

impl PermissionSet {
    /// Creates an empty set (a user with no grants).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a set from wire-form flag strings, failing on the first
    /// malformed entry.
    ///
    /// This is the boundary where a login response's `permissions`
    /// array becomes typed. A single bad flag rejects the whole set:
    /// a half-parsed grant list would silently deny whatever the
    /// dropped flags covered.
    ///
    /// # Errors
    ///
    /// Returns the [`FlagError`] for the first entry that fails to
    /// parse.
    ///
    /// # Example
    ///
    /// ```
    /// use warden_auth::PermissionSet;
    ///
    /// let grants = PermissionSet::from_strs(["users:read", "users:read"]).unwrap();
    /// assert_eq!(grants.len(), 1); // duplicates collapse
    ///
    /// assert!(PermissionSet::from_strs(["users:read", "broken"]).is_err());
    /// ```
    pub fn from_strs<I, S>(flags: I) -> Result<Self, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        flags
            .into_iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<HashSet<_>, _>>()
            .map(Self)
    }

    /// Adds a flag. Returns `false` if it was already present.
    pub fn insert(&mut self, flag: PermissionFlag) -> bool {
        self.0.insert(flag)
    }

    /// Removes a flag. Returns `false` if it was not present.
    pub fn remove(&mut self, flag: PermissionFlag) -> bool {
        self.0.remove(&flag)
    }

    /// Returns `true` if the exact flag is present (no wildcard
    /// expansion — use [`allows`](Self::allows) for matching).
    #[must_use]
    pub fn contains(&self, flag: PermissionFlag) -> bool {
        self.0.contains(&flag)
    }

    /// Returns the number of distinct flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no flags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the held flags in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = PermissionFlag> + '_ {
        self.0.iter().copied()
    }

    /// Decides whether this set satisfies a single required flag.
    ///
    /// Returns `true` iff some granted flag `g` satisfies one of:
    ///
    /// 1. `g` equals `required` (exact match)
    /// 2. `g` is `admin:*` (super-admin override)
    /// 3. `g` is `required.resource:*` (resource wildcard)
    ///
    /// An empty set never matches.
    ///
    /// # Example
    ///
    /// ```
    /// use warden_auth::PermissionSet;
    /// use warden_types::{Action, PermissionFlag, Resource};
    ///
    /// let root = PermissionSet::from_strs(["admin:*"]).unwrap();
    /// assert!(root.allows(PermissionFlag::new(Resource::Licenses, Action::Delete)));
    ///
    /// let nobody = PermissionSet::new();
    /// assert!(!nobody.allows(PermissionFlag::new(Resource::Docs, Action::Read)));
    /// ```
    #[must_use]
    pub fn allows(&self, required: PermissionFlag) -> bool {
        self.0.iter().any(|g| {
            *g == required
                || g.is_super_admin()
                || (g.action.is_wildcard() && g.resource == required.resource)
        })
    }

    /// Decides whether at least one required flag is satisfied.
    ///
    /// An empty requirement list denies.
    #[must_use]
    pub fn allows_any(&self, required: &[PermissionFlag]) -> bool {
        required.iter().any(|r| self.allows(*r))
    }

    /// Decides whether every required flag is satisfied.
    ///
    /// An empty requirement list denies. Vacuous truth is deliberately
    /// rejected here: a call site that computes its requirements and
    /// ends up with an empty list is misconfigured, and misconfiguration
    /// must fail closed rather than expose the route to everyone.
    #[must_use]
    pub fn allows_all(&self, required: &[PermissionFlag]) -> bool {
        !required.is_empty() && required.iter().all(|r| self.allows(*r))
    }
}

impl FromIterator<PermissionFlag> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = PermissionFlag>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<PermissionFlag> for PermissionSet {
    fn extend<T: IntoIterator<Item = PermissionFlag>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl std::fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut flags: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        flags.sort_unstable();
        write!(f, "{{{}}}", flags.join(", "))
    }
}
