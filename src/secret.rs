//! The [`Secret<T>`] wrapper type.
//!
//! This module provides:
//!
//! - [`Secret<T>`]: owns one sensitive value and redacts every default
//!   presentation path
//! - [`REDACTED_PLACEHOLDER`]: the literal emitted in place of the value

use std::any::Any;

/// Placeholder emitted wherever a [`Secret`] is converted to text or to a
/// serialized structure.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// A sensitive value that cannot be observed accidentally.
///
/// `Secret<T>` owns its inner value and keeps it out of every implicit
/// presentation path: `Display` and `Debug` print [`REDACTED_PLACEHOLDER`],
/// and with the `json` feature enabled, serde serialization emits the
/// placeholder as a JSON string, including when the `Secret` sits inside a
/// larger structure. The raw value is reachable only through [`expose`],
/// [`into_inner`], and the trusted closure passed to [`map`].
///
/// The inner field is private and no mutable accessor exists, so a
/// constructed `Secret` is immutable from outside this crate:
///
/// ```compile_fail
/// let mut secret = shroud::Secret::new(String::from("hunter2"));
/// secret.0 = String::from("overwritten");
/// ```
///
/// # Example
///
/// ```rust
/// use shroud::Secret;
///
/// let secret = Secret::new("password");
/// assert_eq!(*secret.expose(), "password");
/// assert_eq!(secret.to_string(), "[REDACTED]");
/// assert_eq!(format!("{secret:?}"), r#"Secret("[REDACTED]")"#);
/// ```
///
/// [`expose`]: Secret::expose
/// [`into_inner`]: Secret::into_inner
/// [`map`]: Secret::map
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Secret<T>(T);

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    ///
    /// Accepts any `T`; no validation is performed.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Explicitly access the inner value.
    ///
    /// This method makes it clear in your code that you are intentionally
    /// accessing the raw sensitive value. Use with care.
    #[must_use]
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Applies `f` to the inner value and wraps the result in a new `Secret`.
    ///
    /// The closure receives the raw value, so the mapping logic itself must
    /// be trusted not to leak it. The returned `Secret` carries the full
    /// redaction contract independently of the original.
    ///
    /// ```rust
    /// use shroud::Secret;
    ///
    /// let secret = Secret::new("password");
    /// let length = secret.map(|value| value.len());
    /// assert_eq!(*length.expose(), 8);
    /// assert_eq!(length.to_string(), "[REDACTED]");
    /// ```
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Secret<U>
    where
        F: FnOnce(T) -> U,
    {
        Secret(f(self.0))
    }

    /// Compares against a value of unknown type.
    ///
    /// Returns `true` iff `other` is a `Secret<T>` whose inner value equals
    /// this one's. Any non-`Secret` input (a bare `T`, `None`, an unrelated
    /// type) yields `false` rather than an error, so defensive comparisons
    /// against untyped data stay total.
    ///
    /// Two `Secret<T>` values of the same inner type can also be compared
    /// directly with `==`. There is deliberately no `PartialEq<T>` impl: a
    /// `Secret` never equals its own unwrapped value.
    pub fn equals(&self, other: &dyn Any) -> bool
    where
        T: PartialEq + 'static,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.0 == other.0)
    }

    /// Returns the redacted representation.
    ///
    /// Always [`REDACTED_PLACEHOLDER`], independent of the inner value.
    #[must_use]
    pub fn redacted(&self) -> &'static str {
        REDACTED_PLACEHOLDER
    }
}

impl<T> From<T> for Secret<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> std::fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED_PLACEHOLDER)
    }
}

impl<T> std::fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Secret").field(&self.redacted()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
