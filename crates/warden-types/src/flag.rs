//! Permission flag types.
//!
//! A permission flag names a single grantable capability as a
//! `(Resource, Action)` pair, written `resource:action` on the wire
//! (`"users:read"`, `"bug_reports:review"`). Two wildcard forms exist:
//!
//! - `resource:*` — every action on one resource
//! - `admin:*` — the super-admin flag, matching everything
//!
//! # Why Tagged Enums Instead of Strings?
//!
//! The admin surface has a fixed resource vocabulary. Modeling flags as
//! opaque strings pushes typos ("user:read", "users:raed") all the way
//! to a silent access denial at match time. With [`Resource`] and
//! [`Action`] as closed enums, a bad flag is a [`FlagError`] at the
//! parse boundary and unrepresentable beyond it.
//!
//! # Example
//!
//! ```
//! use warden_types::{Action, PermissionFlag, Resource};
//!
//! let read_users = PermissionFlag::new(Resource::Users, Action::Read);
//! assert_eq!(read_users.to_string(), "users:read");
//!
//! let any_docs: PermissionFlag = "docs:*".parse().unwrap();
//! assert!(any_docs.is_wildcard());
//! assert!(!any_docs.is_super_admin());
//!
//! assert!("users-read".parse::<PermissionFlag>().is_err());
//! ```

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a permission flag from its wire form.
///
/// Parsing is the fail-fast boundary: any string that is not exactly
/// `<known-resource>:<known-action>` is rejected here, so downstream
/// matching never has to define behavior for malformed flags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    /// The flag has no `:` separator.
    #[error("permission flag '{flag}' has no ':' separator")]
    MissingSeparator {
        /// The offending input.
        flag: String,
    },

    /// The resource or action segment is empty.
    #[error("permission flag '{flag}' has an empty segment")]
    EmptySegment {
        /// The offending input.
        flag: String,
    },

    /// The resource segment names no known resource.
    #[error("unknown permission resource '{name}'")]
    UnknownResource {
        /// The unrecognized resource segment.
        name: String,
    },

    /// The action segment names no known action.
    #[error("unknown permission action '{name}'")]
    UnknownAction {
        /// The unrecognized action segment.
        name: String,
    },
}

impl ErrorCode for FlagError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingSeparator { .. } => "FLAG_MISSING_SEPARATOR",
            Self::EmptySegment { .. } => "FLAG_EMPTY_SEGMENT",
            Self::UnknownResource { .. } => "FLAG_UNKNOWN_RESOURCE",
            Self::UnknownAction { .. } => "FLAG_UNKNOWN_ACTION",
        }
    }

    fn is_recoverable(&self) -> bool {
        // A malformed flag is a configuration or deployment mistake;
        // retrying the same input cannot succeed.
        false
    }
}

/// A protected resource of the admin platform.
///
/// Resources are the left-hand segment of a permission flag. The
/// vocabulary is closed: it tracks the admin sections of the platform
/// (user management, role management, crowd-testing bug reports, paid
/// docs licensing, ...).
///
/// [`Resource::Admin`] is special only in combination with
/// [`Action::Wildcard`]: `admin:*` is the super-admin flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// The super-admin pseudo-resource (`admin:*`).
    Admin,
    /// User accounts.
    Users,
    /// Roles and their permission assignments.
    Roles,
    /// Departments (organizational units).
    Departments,
    /// Organizations (tenants).
    Organizations,
    /// Paid-content licenses.
    Licenses,
    /// Documentation content management.
    Docs,
    /// Crowd-testing bug reports.
    BugReports,
}

impl Resource {
    /// Every resource, in declaration order.
    ///
    /// Useful for building complete permission matrices in role
    /// editors and for exhaustive tests.
    pub const ALL: &'static [Self] = &[
        Self::Admin,
        Self::Users,
        Self::Roles,
        Self::Departments,
        Self::Organizations,
        Self::Licenses,
        Self::Docs,
        Self::BugReports,
    ];

    /// Returns the wire name (snake_case).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Users => "users",
            Self::Roles => "roles",
            Self::Departments => "departments",
            Self::Organizations => "organizations",
            Self::Licenses => "licenses",
            Self::Docs => "docs",
            Self::BugReports => "bug_reports",
        }
    }
}

impl FromStr for Resource {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "users" => Ok(Self::Users),
            "roles" => Ok(Self::Roles),
            "departments" => Ok(Self::Departments),
            "organizations" => Ok(Self::Organizations),
            "licenses" => Ok(Self::Licenses),
            "docs" => Ok(Self::Docs),
            "bug_reports" => Ok(Self::BugReports),
            _ => Err(FlagError::UnknownResource {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action on a [`Resource`].
///
/// Actions are the right-hand segment of a permission flag.
/// [`Action::Wildcard`] (`*`) stands for "every action on this
/// resource" and is only meaningful on the granted side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// View or list.
    Read,
    /// Create new entries.
    Create,
    /// Modify existing entries.
    Update,
    /// Remove entries.
    Delete,
    /// Review submissions (bug-report triage).
    Review,
    /// Export data.
    Export,
    /// Any action on the resource (`*`).
    Wildcard,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Read,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Review,
        Self::Export,
        Self::Wildcard,
    ];

    /// Returns the wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Review => "review",
            Self::Export => "export",
            Self::Wildcard => "*",
        }
    }

    /// Returns `true` if this is [`Action::Wildcard`].
    #[must_use]
    pub fn is_wildcard(self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

impl FromStr for Action {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Self::Read),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "review" => Ok(Self::Review),
            "export" => Ok(Self::Export),
            "*" => Ok(Self::Wildcard),
            _ => Err(FlagError::UnknownAction {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single grantable capability: one action on one resource.
///
/// The wire form is `resource:action`. Serde uses the wire form in both
/// directions, so a login response carrying
/// `["users:read", "bug_reports:*"]` deserializes directly into typed
/// flags — and fails loudly on a malformed entry.
///
/// # Example
///
/// ```
/// use warden_types::{Action, PermissionFlag, Resource};
///
/// let flag = PermissionFlag::new(Resource::Licenses, Action::Export);
/// assert_eq!(flag.to_string(), "licenses:export");
///
/// let json = serde_json::to_string(&flag).unwrap();
/// assert_eq!(json, "\"licenses:export\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionFlag {
    /// The protected resource.
    pub resource: Resource,
    /// The action on that resource.
    pub action: Action,
}

impl PermissionFlag {
    /// The super-admin flag, `admin:*`. Matches every requirement.
    pub const SUPER_ADMIN: Self = Self {
        resource: Resource::Admin,
        action: Action::Wildcard,
    };

    /// Creates a flag from its parts.
    #[must_use]
    pub const fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    /// Creates the wildcard flag for a resource (`resource:*`).
    ///
    /// # Example
    ///
    /// ```
    /// use warden_types::{PermissionFlag, Resource};
    ///
    /// let flag = PermissionFlag::wildcard(Resource::Docs);
    /// assert_eq!(flag.to_string(), "docs:*");
    /// ```
    #[must_use]
    pub const fn wildcard(resource: Resource) -> Self {
        Self {
            resource,
            action: Action::Wildcard,
        }
    }

    /// Returns `true` if this is the super-admin flag `admin:*`.
    #[must_use]
    pub fn is_super_admin(self) -> bool {
        self == Self::SUPER_ADMIN
    }

    /// Returns `true` if the action segment is the wildcard.
    ///
    /// Note that `admin:*` is both a wildcard and the super-admin flag.
    #[must_use]
    pub fn is_wildcard(self) -> bool {
        self.action.is_wildcard()
    }
}

impl FromStr for PermissionFlag {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, action) = s.split_once(':').ok_or_else(|| FlagError::MissingSeparator {
            flag: s.to_string(),
        })?;
        if resource.is_empty() || action.is_empty() {
            return Err(FlagError::EmptySegment {
                flag: s.to_string(),
            });
        }
        Ok(Self {
            resource: resource.parse()?,
            action: action.parse()?,
        })
    }
}

impl TryFrom<String> for PermissionFlag {
    type Error = FlagError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PermissionFlag> for String {
    fn from(flag: PermissionFlag) -> Self {
        flag.to_string()
    }
}

impl std::fmt::Display for PermissionFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}
