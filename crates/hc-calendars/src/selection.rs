//! Calendar selection: which jurisdiction to load, and how.

use std::collections::BTreeSet;

use hc_core::Result;

use crate::jurisdiction::Country;

/// Everything `load` needs to resolve a calendar: the country, an optional
/// subdivision, the observed/expand flags, and an optional set of years to
/// pre-materialize.
///
/// A selection is a plain value; it is consumed by
/// [`HolidayCalendar::load`](crate::HolidayCalendar::load) and immutable
/// from then on.  Flags default to `observed = true`, `expand = true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSelection {
    country: Country,
    subdivision: Option<String>,
    observed: bool,
    expand: bool,
    years: Option<BTreeSet<i32>>,
}

impl CalendarSelection {
    /// Start a selection for `country` with default options.
    pub fn new(country: Country) -> Self {
        Self {
            country,
            subdivision: None,
            observed: true,
            expand: true,
            years: None,
        }
    }

    /// Start a selection from a country code string.
    ///
    /// Fails with
    /// [`Error::UnrecognizedJurisdiction`](hc_core::Error::UnrecognizedJurisdiction)
    /// for codes outside the supported set.
    pub fn for_code(code: &str) -> Result<Self> {
        Ok(Self::new(Country::from_code(code)?))
    }

    /// Select a subdivision (state, province, Bundesland).
    pub fn with_subdivision(mut self, code: impl Into<String>) -> Self {
        self.subdivision = Some(code.into());
        self
    }

    /// Whether weekend holidays also get a shifted observed entry.
    pub fn with_observed(mut self, observed: bool) -> Self {
        self.observed = observed;
        self
    }

    /// Whether lookups outside the materialized years generate that year on
    /// demand.
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Years to materialize at load time.
    pub fn with_years<I>(mut self, years: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        self.years = Some(years.into_iter().collect());
        self
    }

    /// The selected country.
    pub fn country(&self) -> Country {
        self.country
    }

    /// The selected subdivision code, if any.
    pub fn subdivision(&self) -> Option<&str> {
        self.subdivision.as_deref()
    }

    /// `true` if observed entries are generated (where the country honors
    /// the convention).
    pub fn observes(&self) -> bool {
        self.observed
    }

    /// `true` if missing years are generated on demand.
    pub fn expands(&self) -> bool {
        self.expand
    }

    /// The years requested for pre-materialization, if any.
    pub fn years(&self) -> Option<&BTreeSet<i32>> {
        self.years.as_ref()
    }
}
