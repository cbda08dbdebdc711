//! Permission requirements.
//!
//! A [`Requirement`] is what a call site demands: one or more flags
//! plus a [`Mode`] saying how they aggregate. Pages, buttons, and
//! route-guard entries all express their needs this way.

use crate::PermissionSet;
use serde::{Deserialize, Serialize};
use warden_types::PermissionFlag;

/// Aggregation policy when a requirement carries multiple flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// At least one required flag must match.
    Any,
    /// Every required flag must match.
    All,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::All => f.write_str("all"),
        }
    }
}

/// A call site's permission demand: flags plus aggregation mode.
///
/// A single-flag demand is normalized into a one-element [`Mode::Any`]
/// list by [`single`](Self::single), so every consumer deals with one
/// shape.
///
/// An empty flag list is representable (e.g. deserialized from a
/// miswritten route table) but never satisfiable — see
/// [`is_satisfied_by`](Self::is_satisfied_by).
///
/// # Example
///
/// ```
/// use warden_auth::{PermissionSet, Requirement};
/// use warden_types::{Action, PermissionFlag, Resource};
///
/// let grants = PermissionSet::from_strs(["users:read", "roles:read"]).unwrap();
///
/// let view = Requirement::single(PermissionFlag::new(Resource::Users, Action::Read));
/// assert!(view.is_satisfied_by(&grants));
///
/// let manage = Requirement::all_of(vec![
///     PermissionFlag::new(Resource::Users, Action::Read),
///     PermissionFlag::new(Resource::Users, Action::Delete),
/// ]);
/// assert!(!manage.is_satisfied_by(&grants));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    flags: Vec<PermissionFlag>,
    mode: Mode,
}

impl Requirement {
    /// A requirement for exactly one flag.
    #[must_use]
    pub fn single(flag: PermissionFlag) -> Self {
        Self {
            flags: vec![flag],
            mode: Mode::Any,
        }
    }

    /// A requirement satisfied when at least one flag matches.
    #[must_use]
    pub fn any_of(flags: Vec<PermissionFlag>) -> Self {
        Self {
            flags,
            mode: Mode::Any,
        }
    }

    /// A requirement satisfied only when every flag matches.
    #[must_use]
    pub fn all_of(flags: Vec<PermissionFlag>) -> Self {
        Self {
            flags,
            mode: Mode::All,
        }
    }

    /// The required flags.
    #[must_use]
    pub fn flags(&self) -> &[PermissionFlag] {
        &self.flags
    }

    /// The aggregation mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` if the flag list is empty.
    ///
    /// An empty requirement is a misconfiguration; it denies everyone.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Decides whether the granted set satisfies this requirement.
    ///
    /// Dispatches to [`PermissionSet::allows_any`] or
    /// [`PermissionSet::allows_all`] per mode. Empty requirements deny
    /// in both modes.
    #[must_use]
    pub fn is_satisfied_by(&self, grants: &PermissionSet) -> bool {
        match self.mode {
            Mode::Any => grants.allows_any(&self.flags),
            Mode::All => grants.allows_all(&self.flags),
        }
    }
}

impl From<PermissionFlag> for Requirement {
    fn from(flag: PermissionFlag) -> Self {
        Self::single(flag)
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flags: Vec<String> = self.flags.iter().map(ToString::to_string).collect();
        write!(f, "{}[{}]", self.mode, flags.join(", "))
    }
}
