//! Adapter for emitting [`Secret`] values through `tracing`.
//!
//! [`Secret`] already implements `Display`, so `%secret` in a `tracing` macro
//! is safe on its own. The extension trait here makes the redaction explicit
//! at the call site:
//!
//! ```ignore
//! use shroud::TracingRedactedExt;
//!
//! tracing::info!(password = %password.tracing_redacted(), "authenticating");
//! ```

use ::tracing::field::{DisplayValue, display};

use crate::secret::Secret;

/// Extension trait for logging a [`Secret`] as a redacted display value.
pub trait TracingRedactedExt {
    /// Wraps the value for `tracing` logging as a display value.
    ///
    /// The emitted representation is always the redaction placeholder.
    fn tracing_redacted(&self) -> DisplayValue<&'static str>;
}

impl<T> TracingRedactedExt for Secret<T> {
    fn tracing_redacted(&self) -> DisplayValue<&'static str> {
        display(self.redacted())
    }
}

// =============================================================================
// Tests
// =============================================================================
