//! The load/get facade: at most one current calendar, replaced atomically.

use std::sync::Arc;

use chrono::NaiveDate;
use hc_core::{Error, Result, Slot};

use crate::calendar::HolidayCalendar;
use crate::selection::CalendarSelection;

/// Holds the currently loaded calendar and answers date queries against it.
///
/// `load` resolves a [`CalendarSelection`] and atomically replaces the
/// current calendar; the previous one becomes unreachable through the facade
/// but stays valid for anyone still holding its handle.  `get` fails with
/// [`Error::NotLoaded`] until the first successful `load` — absence of a
/// calendar is never reported as absence of a holiday.
///
/// Cloning a `CurrentCalendar` clones the *cell*, not the calendar: all
/// clones see the same current calendar.
#[derive(Debug, Clone, Default)]
pub struct CurrentCalendar {
    slot: Slot<HolidayCalendar>,
}

impl CurrentCalendar {
    /// Create a facade with no calendar loaded.
    pub fn new() -> Self {
        Self { slot: Slot::empty() }
    }

    /// Resolve `selection` and install the result as the current calendar.
    ///
    /// Returns the installed calendar handle so callers may also keep it
    /// independently of the facade.  On failure the previously installed
    /// calendar — or the absence of one — is left untouched.
    pub fn load(&self, selection: CalendarSelection) -> Result<Arc<HolidayCalendar>> {
        let calendar = HolidayCalendar::load(selection)?;
        Ok(self.slot.install(calendar))
    }

    /// The holiday name for `date` in the current calendar.
    ///
    /// `Ok(None)` means `date` is not a holiday; `Err(NotLoaded)` means no
    /// calendar has been loaded yet.
    pub fn get(&self, date: NaiveDate) -> Result<Option<String>> {
        let calendar = self.slot.current().ok_or(Error::NotLoaded)?;
        Ok(calendar.holiday_name(date))
    }

    /// A handle to the current calendar, if one is loaded.
    pub fn current(&self) -> Option<Arc<HolidayCalendar>> {
        self.slot.current()
    }

    /// `true` once a calendar has been successfully loaded.
    pub fn is_loaded(&self) -> bool {
        !self.slot.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jurisdiction::Country;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn get_before_load_is_not_loaded() {
        let facade = CurrentCalendar::new();
        assert_eq!(facade.get(date(2023, 7, 4)), Err(Error::NotLoaded));
        assert!(!facade.is_loaded());
    }

    #[test]
    fn failed_load_keeps_previous_calendar() {
        let facade = CurrentCalendar::new();
        facade.load(CalendarSelection::new(Country::US)).unwrap();

        let err = facade
            .load(CalendarSelection::new(Country::US).with_subdivision("ZZ"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSubdivision { .. }));

        // Still the US calendar.
        assert_eq!(
            facade.get(date(2023, 7, 4)).unwrap().as_deref(),
            Some("Independence Day")
        );
    }

    #[test]
    fn reload_replaces_wholesale() {
        let facade = CurrentCalendar::new();
        facade.load(CalendarSelection::new(Country::US)).unwrap();
        facade.load(CalendarSelection::new(Country::DE)).unwrap();

        // German Unity Day, not a US holiday.
        assert!(facade.get(date(2023, 10, 3)).unwrap().is_some());
        // Thanksgiving must be gone.
        assert_eq!(facade.get(date(2023, 11, 23)).unwrap(), None);
    }

    #[test]
    fn load_returns_a_handle_that_outlives_replacement() {
        let facade = CurrentCalendar::new();
        let us = facade.load(CalendarSelection::new(Country::US)).unwrap();
        facade.load(CalendarSelection::new(Country::CA)).unwrap();
        // The old handle still answers for the old jurisdiction.
        assert!(us.is_holiday(date(2023, 7, 4)));
    }
}
