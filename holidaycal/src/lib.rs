//! # holidaycal
//!
//! Jurisdiction-aware holiday calendars: load a country/region calendar and
//! look holidays up by date.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! holidaycal = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use holidaycal::{CalendarSelection, Country, HolidayCalendar};
//!
//! let calendar = HolidayCalendar::load(CalendarSelection::new(Country::US))?;
//! let date = NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
//! assert_eq!(calendar.holiday_name(date).as_deref(), Some("Independence Day"));
//! # Ok::<(), holidaycal::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared-state primitives.
pub use hc_core as core;

/// Jurisdictions, selections, calendars, and the load/get facade.
pub use hc_calendars as calendars;

pub use hc_calendars::{
    Capabilities, CalendarSelection, Country, CurrentCalendar, Error, HolidayCalendar, Result,
};
