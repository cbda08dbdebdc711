//! Permission primitives for Warden.
//!
//! This crate provides the pure permission model: who holds which
//! flags, what a call site requires, and the matcher that decides
//! between them. Nothing here does I/O; every check is a synchronous,
//! deterministic computation over value types, cheap enough to run on
//! every UI render pass.
//!
//! # Matching Rules
//!
//! A granted flag `g` satisfies a required flag `r` when any of:
//!
//! | Rule | Granted | Required | Result |
//! |------|---------|----------|--------|
//! | Exact | `users:read` | `users:read` | match |
//! | Super admin | `admin:*` | anything | match |
//! | Resource wildcard | `users:*` | `users:delete` | match |
//! | — | `users:*` | `roles:read` | no match |
//!
//! # Crate Architecture
//!
//! ```text
//! warden-types  (UserId, Principal, PermissionFlag)
//!        ↑
//! warden-auth   ◄── THIS CRATE
//! (PermissionSet, Requirement, SessionContext, AccessPolicy)
//!        ↑
//! warden-guard  (DefaultPolicy impl, RouteGuard, SessionStore)
//! ```
//!
//! # Design Principles
//!
//! - **Deny wins** — an empty permission set matches nothing, and an
//!   empty requirement list denies in both [`Mode::Any`] and
//!   [`Mode::All`]. A misconfigured call site fails closed.
//! - **Trait definitions here, implementations in consumers** —
//!   `warden-guard` provides the concrete [`AccessPolicy`] with audit
//!   logging; tests provide mock policies.
//! - **Immutable contexts** — [`SessionContext`] is a value type;
//!   login, refresh, and logout produce new contexts rather than
//!   mutating shared state.

pub mod decision;
pub mod error;
pub mod policy;
pub mod requirement;
pub mod session;
pub mod set;

pub use decision::AccessDecision;
pub use error::AccessDenied;
pub use policy::{AccessPolicy, MatcherPolicy};
pub use requirement::{Mode, Requirement};
pub use session::SessionContext;
pub use set::PermissionSet;

// Re-export identity types from warden_types for convenience
pub use warden_types::{Action, PermissionFlag, Principal, Resource};
