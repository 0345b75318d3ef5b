//! Adapter for emitting [`Secret`] values through `slog`.
//!
//! This module connects [`Secret`] with `slog` by providing a `slog::Value`
//! implementation that emits [`REDACTED_PLACEHOLDER`] instead of the inner
//! value, so a `Secret` logged as a structured field redacts at the sink:
//!
//! ```ignore
//! slog::info!(logger, "authenticating"; "password" => &password);
//! // ... password=[REDACTED]
//! ```
//!
//! It does not configure `slog` or perform any logging itself.

use ::slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::secret::{REDACTED_PLACEHOLDER, Secret};

impl<T> SlogValue for Secret<T> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, REDACTED_PLACEHOLDER)
    }
}
