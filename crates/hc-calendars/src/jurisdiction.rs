//! Supported countries and their capability declarations.
//!
//! The supported set is fixed and enumerated here; nothing is discovered at
//! runtime.  Each country declares which of the optional load parameters it
//! honors, and dispatches year generation to its rule module under
//! [`crate::calendars`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use hc_core::{Error, Result};

use crate::calendars;

/// A supported country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// United States.
    US,
    /// Canada.
    CA,
    /// Mexico.
    MX,
    /// New Zealand.
    NZ,
    /// Australia.
    AU,
    /// Austria.
    AT,
    /// Germany.
    DE,
}

/// Which optional load parameters a country honors.
///
/// `expand` and `years` are honored by every country and are therefore not
/// declared per jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The country defines subdivisions with their own holiday variation.
    pub subdivisions: bool,
    /// Holidays falling on a weekend are shifted to an observed working day.
    pub observed: bool,
}

impl Country {
    /// Every supported country, in code order.
    pub const ALL: [Country; 7] = [
        Country::US,
        Country::CA,
        Country::MX,
        Country::NZ,
        Country::AU,
        Country::AT,
        Country::DE,
    ];

    /// Resolve a country code (case-insensitive).
    ///
    /// Unknown codes fail with [`Error::UnrecognizedJurisdiction`].
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_ascii_uppercase().as_str() {
            "US" => Ok(Country::US),
            "CA" => Ok(Country::CA),
            "MX" => Ok(Country::MX),
            "NZ" => Ok(Country::NZ),
            "AU" => Ok(Country::AU),
            "AT" => Ok(Country::AT),
            "DE" => Ok(Country::DE),
            _ => Err(Error::UnrecognizedJurisdiction { code: code.into() }),
        }
    }

    /// The two-letter country code.
    pub fn code(self) -> &'static str {
        match self {
            Country::US => "US",
            Country::CA => "CA",
            Country::MX => "MX",
            Country::NZ => "NZ",
            Country::AU => "AU",
            Country::AT => "AT",
            Country::DE => "DE",
        }
    }

    /// Human-readable country name.
    pub fn name(self) -> &'static str {
        match self {
            Country::US => "United States",
            Country::CA => "Canada",
            Country::MX => "Mexico",
            Country::NZ => "New Zealand",
            Country::AU => "Australia",
            Country::AT => "Austria",
            Country::DE => "Germany",
        }
    }

    /// The optional load parameters this country honors.
    pub fn capabilities(self) -> Capabilities {
        match self {
            Country::US | Country::CA | Country::NZ | Country::AU => Capabilities {
                subdivisions: true,
                observed: true,
            },
            Country::MX => Capabilities {
                subdivisions: false,
                observed: true,
            },
            // Neither Austria nor Germany shifts weekend holidays.
            Country::AT | Country::DE => Capabilities {
                subdivisions: true,
                observed: false,
            },
        }
    }

    /// The subdivision codes this country defines (empty for countries
    /// without subnational holiday variation).
    pub fn subdivisions(self) -> &'static [&'static str] {
        match self {
            Country::US => calendars::united_states::STATES,
            Country::CA => calendars::canada::PROVINCES,
            Country::MX => &[],
            Country::NZ => calendars::new_zealand::PROVINCES,
            Country::AU => calendars::australia::STATES,
            Country::AT => calendars::austria::PROVINCES,
            Country::DE => calendars::germany::STATES,
        }
    }

    /// Validate a subdivision code against this country's list.
    pub(crate) fn check_subdivision(self, subdivision: Option<&str>) -> Result<()> {
        match subdivision {
            None => Ok(()),
            Some(code) if self.subdivisions().contains(&code) => Ok(()),
            Some(code) => Err(Error::UnknownSubdivision {
                country: self.code(),
                code: code.into(),
            }),
        }
    }

    /// Generate the holidays of `year` for this country.
    ///
    /// `subdivision` must already be validated; `observed` is ignored by
    /// countries whose [`Capabilities`] do not declare it.
    pub(crate) fn holidays_for_year(
        self,
        year: i32,
        subdivision: Option<&str>,
        observed: bool,
    ) -> Vec<(NaiveDate, String)> {
        match self {
            Country::US => calendars::united_states::holidays(year, subdivision, observed),
            Country::CA => calendars::canada::holidays(year, subdivision, observed),
            Country::MX => calendars::mexico::holidays(year, observed),
            Country::NZ => calendars::new_zealand::holidays(year, subdivision, observed),
            Country::AU => calendars::australia::holidays(year, subdivision, observed),
            Country::AT => calendars::austria::holidays(year, subdivision),
            Country::DE => calendars::germany::holidays(year, subdivision),
        }
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Country::from_code(s)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
