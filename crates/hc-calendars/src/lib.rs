//! # hc-calendars
//!
//! Jurisdiction-aware holiday calendars: map a calendar date to the name of
//! the holiday it falls on, for a fixed set of supported countries and their
//! subdivisions.
//!
//! The two entry points are [`HolidayCalendar::load`], which resolves a
//! [`CalendarSelection`] into an owned calendar, and [`CurrentCalendar`],
//! which keeps at most one loaded calendar and answers `get` queries against
//! it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The loaded calendar: per-year materialization and date lookup.
pub mod calendar;

/// Per-country holiday rule sets.
pub(crate) mod calendars;

/// The load/get facade holding the current calendar.
pub mod facade;

/// Supported countries and their capability declarations.
pub mod jurisdiction;

/// Date-rule building blocks (Easter, nth weekday, weekend shifts).
pub(crate) mod rules;

/// Calendar selection: country, subdivision, and load options.
pub mod selection;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::HolidayCalendar;
pub use facade::CurrentCalendar;
pub use hc_core::{Error, Result};
pub use jurisdiction::{Capabilities, Country};
pub use selection::CalendarSelection;
