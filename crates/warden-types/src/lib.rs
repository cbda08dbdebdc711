//! Core types for Warden.
//!
//! This crate provides the foundational identity and permission-flag
//! types for the Warden access-control stack.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Model Layer                             │
//! │  (Value types, SemVer stable, safe to depend on)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  warden-types   : IDs, Principal, PermissionFlag  ◄── HERE   │
//! │  warden-auth    : PermissionSet, Requirement, policies       │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Guard Layer                             │
//! │  (Concrete policies, route guard, session store)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  warden-guard   : DefaultPolicy, RouteGuard, SessionStore    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Identity is not permission** — [`Principal`] says *who* is acting;
//!   what they may do is decided a layer up, against their granted flags.
//! - **Parse, don't validate** — [`PermissionFlag`] is a tagged
//!   `(Resource, Action)` pair. Wire strings like `"users:read"` are
//!   parsed once at the boundary; a malformed flag is a hard
//!   [`FlagError`], never a silently-failing match.
//! - **UUID-based identifiers** — safe to transmit between the API server
//!   and admin clients without coordination.
//!
//! # Example
//!
//! ```
//! use warden_types::{Action, PermissionFlag, Principal, Resource, UserId};
//!
//! // Typed construction
//! let flag = PermissionFlag::new(Resource::Users, Action::Read);
//! assert_eq!(flag.to_string(), "users:read");
//!
//! // Parsing the wire form is the fail-fast boundary
//! let parsed: PermissionFlag = "bug_reports:review".parse().unwrap();
//! assert_eq!(parsed.resource, Resource::BugReports);
//!
//! // The super-admin flag
//! assert!(PermissionFlag::SUPER_ADMIN.is_super_admin());
//!
//! // Who is acting
//! let admin = Principal::User(UserId::new());
//! assert!(admin.is_user());
//! ```

mod error;
mod flag;
mod id;
mod principal;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use flag::{Action, FlagError, PermissionFlag, Resource};
pub use id::{SessionId, UserId};
pub use principal::Principal;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_uniqueness() {
        let id1 = UserId::new();
        let id2 = UserId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn user_id_display() {
        let id = UserId::new();
        let display = format!("{id}");
        assert!(display.starts_with("user:"));
        assert!(display.contains(&id.uuid().to_string()));
    }

    // NOTE: UserId does not implement Default intentionally.
    // See id.rs for rationale.

    #[test]
    fn session_id_display() {
        let id = SessionId::new();
        let display = format!("{id}");
        assert!(display.starts_with("sess:"));
        assert!(display.contains(&id.uuid().to_string()));
    }

    #[test]
    fn session_id_default() {
        let id1 = SessionId::default();
        let id2 = SessionId::default();
        assert_ne!(id1, id2);
    }

    #[test]
    fn flag_parse_and_display_roundtrip() {
        let flag: PermissionFlag = "roles:create".parse().unwrap();
        assert_eq!(flag, PermissionFlag::new(Resource::Roles, Action::Create));
        assert_eq!(flag.to_string(), "roles:create");
    }

    #[test]
    fn super_admin_constant() {
        assert_eq!(PermissionFlag::SUPER_ADMIN.to_string(), "admin:*");
        assert_eq!(
            "admin:*".parse::<PermissionFlag>().unwrap(),
            PermissionFlag::SUPER_ADMIN
        );
    }

    #[test]
    fn flag_error_codes_follow_convention() {
        assert_error_codes(
            &[
                FlagError::MissingSeparator {
                    flag: "usersread".into(),
                },
                FlagError::EmptySegment {
                    flag: ":read".into(),
                },
                FlagError::UnknownResource {
                    name: "tenants".into(),
                },
                FlagError::UnknownAction {
                    name: "approve".into(),
                },
            ],
            "FLAG_",
        );
    }
}
