//! Runtime type guards for type-erased values.
//!
//! This module provides:
//!
//! - [`is_secret`]: predicate over `&dyn Any`
//! - [`assert_secret`]: fallible narrowing to `&Secret<T>`
//!
//! Both guards are nominal: they answer "was this value constructed as a
//! `Secret<T>`", not "does it look like one", so a plain struct shaped like a
//! `Secret` is rejected. The expected inner type is supplied as a type
//! parameter: a `Secret<u64>` is not a `Secret<String>`.

use std::any::Any;

use crate::{error::NotASecretError, secret::Secret};

/// Returns `true` iff `value` is a [`Secret<T>`].
///
/// Pure predicate with no side effects; never panics.
///
/// ```rust
/// use shroud::{Secret, is_secret};
///
/// let secret = Secret::new(String::from("password"));
/// assert!(is_secret::<String>(&secret));
/// assert!(!is_secret::<String>(&String::from("password")));
/// ```
#[must_use]
pub fn is_secret<T: 'static>(value: &dyn Any) -> bool {
    value.is::<Secret<T>>()
}

/// Asserts that `value` is a [`Secret<T>`], narrowing it on success.
///
/// Returns the value as `&Secret<T>` so the caller can treat it as a
/// `Secret` from that point on. Fails with [`NotASecretError`], the only
/// error this crate raises, when the value is anything else.
///
/// # Errors
///
/// Returns [`NotASecretError`] if `value` is not a `Secret<T>`.
///
/// ```rust
/// use shroud::{Secret, assert_secret};
///
/// let secret = Secret::new(42_u64);
/// let narrowed = assert_secret::<u64>(&secret).unwrap();
/// assert_eq!(*narrowed.expose(), 42);
///
/// assert!(assert_secret::<u64>(&42_u64).is_err());
/// ```
pub fn assert_secret<T: 'static>(value: &dyn Any) -> Result<&Secret<T>, NotASecretError> {
    value
        .downcast_ref::<Secret<T>>()
        .ok_or_else(NotASecretError::expected::<T>)
}

// =============================================================================
// Tests
// =============================================================================
