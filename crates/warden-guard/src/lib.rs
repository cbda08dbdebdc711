//! Concrete access-control layer for Warden.
//!
//! Core types ([`SessionContext`], [`AccessPolicy`]) are defined in
//! `warden-auth`. This crate provides the implementations an admin
//! frontend actually wires up:
//!
//! - [`DefaultPolicy`]: concrete [`AccessPolicy`] with audit logging
//! - [`RouteMap`]: route → requirement table with prefix matching
//! - [`RouteGuard`]: navigation checks that redirect on denial
//! - [`SessionStore`]: thread-safe session holder with an explicit
//!   login / refresh / logout lifecycle
//!
//! # Architecture
//!
//! ```text
//! warden-auth (traits + data types)
//!     SessionContext, PermissionSet, Requirement, AccessPolicy
//!         ↓
//! warden-guard (implementations)
//!     DefaultPolicy, RouteMap, RouteGuard, SessionStore
//! ```
//!
//! # Example
//!
//! ```
//! use warden_auth::{PermissionSet, SessionContext};
//! use warden_guard::{RouteGuard, RouteMap, SessionStore};
//! use warden_types::{Principal, UserId};
//!
//! let guard = RouteGuard::new(RouteMap::admin_defaults());
//! let store = SessionStore::new();
//!
//! store.login(SessionContext::new(
//!     Principal::User(UserId::new()),
//!     PermissionSet::from_strs(["users:read"]).unwrap(),
//! ));
//!
//! let session = store.current();
//! assert!(guard.check(session.as_ref(), "/admin/users").is_allowed());
//! assert!(!guard.check(session.as_ref(), "/admin/roles").is_allowed());
//! ```

mod guard;
mod policy;
mod route_map;
mod store;

pub use guard::{GuardVerdict, RouteGuard};
pub use policy::DefaultPolicy;
pub use route_map::{RouteMap, RouteRule};
pub use store::SessionStore;

// Re-export from warden-auth for convenience
pub use warden_auth::{AccessDecision, AccessDenied, AccessPolicy, SessionContext};
