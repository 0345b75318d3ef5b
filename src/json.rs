//! serde support for [`Secret`].
//!
//! Serialization is redacting-only: a `Secret<T>` always serializes to the
//! JSON string `"[REDACTED]"`, with no `T: Serialize` bound, so a `Secret`
//! nested anywhere in a serialized structure redacts in place. This makes a
//! serialize/deserialize round trip deliberately lossy.
//!
//! Deserialization is the deliberate intake path: a plain `T` is read and
//! wrapped, so credentials can be pulled straight out of config or wire data
//! into a `Secret` field.

use serde::{Deserialize, Serialize};

use crate::secret::{REDACTED_PLACEHOLDER, Secret};

impl<T> Serialize for Secret<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(REDACTED_PLACEHOLDER)
    }
}

impl<'de, T> Deserialize<'de> for Secret<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Secret::new)
    }
}
