//! Unified error interface for Warden.
//!
//! This module provides the [`ErrorCode`] trait that all Warden error
//! types implement, so the API layer can map any denial or parse
//! failure to a stable machine-readable code.
//!
//! # Code Spaces
//!
//! - `FLAG_*` — permission-flag parse errors (`warden-types`)
//! - `ACCESS_*` — access-control denials (`warden-auth`)
//!
//! # Example
//!
//! ```
//! use warden_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum LoginError {
//!     BadCredentials,
//!     Locked,
//! }
//!
//! impl ErrorCode for LoginError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::BadCredentials => "LOGIN_BAD_CREDENTIALS",
//!             Self::Locked => "LOGIN_LOCKED",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::BadCredentials)
//!     }
//! }
//!
//! assert_eq!(LoginError::Locked.code(), "LOGIN_LOCKED");
//! ```

/// Stable machine-readable error codes.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**: e.g. `"FLAG_MISSING_SEPARATOR"`
/// - **Domain-prefixed**: e.g. `"FLAG_"`, `"ACCESS_"`
/// - **Stable**: codes are an API contract; changing one is breaking
///
/// # Recoverability
///
/// Recoverable means the caller can do something about it: log in
/// again, request a grant, fix their input. Not recoverable means a
/// code or configuration change is needed — retrying the same
/// operation cannot succeed.
pub trait ErrorCode {
    /// Returns the machine-readable code for this error.
    fn code(&self) -> &'static str;

    /// Returns whether the caller can recover from this error.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows Warden conventions.
///
/// # Checks
///
/// 1. Code is non-empty
/// 2. Code starts with the expected domain prefix
/// 3. Code is UPPER_SNAKE_CASE
///
/// # Panics
///
/// Panics with a descriptive message if validation fails. Intended for
/// use in tests.
///
/// # Example
///
/// ```
/// use warden_types::{assert_error_code, FlagError};
///
/// let err = FlagError::MissingSeparator { flag: "x".into() };
/// assert_error_code(&err, "FLAG_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );
    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates every variant of an error enum at once.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestError {
        Transient,
        Permanent,
    }

    impl ErrorCode for TestError {
        fn code(&self) -> &'static str {
            match self {
                Self::Transient => "TEST_TRANSIENT",
                Self::Permanent => "TEST_PERMANENT",
            }
        }

        fn is_recoverable(&self) -> bool {
            matches!(self, Self::Transient)
        }
    }

    #[test]
    fn error_code_trait() {
        assert_eq!(TestError::Transient.code(), "TEST_TRANSIENT");
        assert!(TestError::Transient.is_recoverable());
        assert!(!TestError::Permanent.is_recoverable());
    }

    #[test]
    fn assert_error_codes_all_variants() {
        assert_error_codes(&[TestError::Transient, TestError::Permanent], "TEST_");
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn wrong_prefix_panics() {
        assert_error_code(&TestError::Transient, "WRONG_");
    }

    #[test]
    fn upper_snake_case_rules() {
        assert!(is_upper_snake_case("ACCESS_DENIED"));
        assert!(is_upper_snake_case("FLAG_2"));
        assert!(!is_upper_snake_case(""));
        assert!(!is_upper_snake_case("access_denied"));
        assert!(!is_upper_snake_case("_ACCESS"));
        assert!(!is_upper_snake_case("ACCESS__DENIED"));
    }
}
