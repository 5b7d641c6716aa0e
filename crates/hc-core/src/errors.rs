//! Error types for holidaycal.
//!
//! Every failure the library can report to a caller lives in one
//! `thiserror`-derived enum.  Failures are immediate: nothing is retried and
//! nothing is silently recovered.

use thiserror::Error;

/// The top-level error type used throughout holidaycal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A country code outside the supported set was passed to `load`.
    #[error("unrecognized jurisdiction: {code:?}")]
    UnrecognizedJurisdiction {
        /// The offending country code, as given by the caller.
        code: String,
    },

    /// A subdivision code the selected country does not define.
    ///
    /// Also raised when a subdivision is passed for a country that has no
    /// subnational holiday variation at all.
    #[error("unknown subdivision {code:?} for {country}")]
    UnknownSubdivision {
        /// The country the subdivision was looked up in.
        country: &'static str,
        /// The offending subdivision code.
        code: String,
    },

    /// `get` was called before any calendar was successfully loaded.
    #[error("no holiday calendar loaded")]
    NotLoaded,
}

/// Shorthand `Result` type used throughout holidaycal.
pub type Result<T, E = Error> = std::result::Result<T, E>;
