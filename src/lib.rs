//! A secret-wrapping primitive for sensitive values.
//!
//! [`Secret<T>`] holds one sensitive value (password, token, key material)
//! and keeps it out of every accidental observation path (`Display`,
//! `Debug`, serde serialization, structured logging) while allowing
//! deliberate access through [`Secret::expose`].
//!
//! What this crate does:
//! - redacts every default text and serialization path to `"[REDACTED]"`
//! - provides guarded access (`expose`), transformation (`map`), equality
//!   and cloning over the hidden value
//! - provides runtime type guards ([`is_secret`], [`assert_secret`]) over
//!   type-erased values
//! - provides logging-sink adapters behind feature flags (`slog`, `tracing`)
//!
//! What it does not do:
//! - encryption, key derivation, memory zeroing or secure erasure on drop
//! - secret lifecycle management (rotation, expiry) or storage
//! - protect against an attacker with memory or debugger access
//!
//! # Example
//!
//! ```rust
//! use shroud::Secret;
//!
//! let password = Secret::new(String::from("hunter2"));
//!
//! // Accidental observation paths see the placeholder.
//! assert_eq!(format!("logging in with {password}"), "logging in with [REDACTED]");
//!
//! // Deliberate access is explicit.
//! authenticate(password.expose());
//! # fn authenticate(_: &str) {}
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::cargo_common_metadata
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

// Module declarations
mod error;
mod guard;
mod secret;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "slog")]
mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use crate::error::NotASecretError;
pub use crate::guard::{assert_secret, is_secret};
pub use crate::secret::{REDACTED_PLACEHOLDER, Secret};
#[cfg(feature = "tracing")]
pub use crate::tracing::TracingRedactedExt;
