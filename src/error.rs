//! The error raised by a failed secret assertion.

use thiserror::Error;

/// A value asserted to be a [`Secret`] was not a `Secret`.
///
/// Raised only by [`assert_secret`]; every other operation in this crate is
/// total. The message names the inner type the assertion expected.
///
/// [`Secret`]: crate::Secret
/// [`assert_secret`]: crate::assert_secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value is not a Secret<{expected}>")]
pub struct NotASecretError {
    expected: &'static str,
}

impl NotASecretError {
    pub(crate) fn expected<T>() -> Self {
        Self {
            expected: std::any::type_name::<T>(),
        }
    }

    /// The inner type the failed assertion expected.
    #[must_use]
    pub fn expected_type(&self) -> &'static str {
        self.expected
    }
}
