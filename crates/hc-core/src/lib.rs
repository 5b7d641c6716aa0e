//! # hc-core
//!
//! Error types and shared-state primitives for holidaycal.
//!
//! This crate provides the building blocks shared across the workspace — the
//! error taxonomy and the [`Slot`] cell used to hold a replaceable, shared
//! calendar.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `Result` alias.
pub mod errors;

/// `Slot<T>` — an atomically swappable, shared, optionally-empty cell.
pub mod slot;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use slot::Slot;
