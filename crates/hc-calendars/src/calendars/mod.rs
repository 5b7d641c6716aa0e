//! Per-country holiday rule sets.
//!
//! One module per supported country.  Each exposes the country's subdivision
//! code list and a `holidays(year, …)` function producing `(date, name)`
//! pairs for a single year.  Entries may land outside the generating year
//! only for rules that explicitly reach across the boundary; the calendar
//! layer drops those, and each module emits the in-year counterpart itself
//! (see the New Year's Day handling in `united_states`).

use chrono::NaiveDate;

pub(crate) mod australia;
pub(crate) mod austria;
pub(crate) mod canada;
pub(crate) mod germany;
pub(crate) mod mexico;
pub(crate) mod new_zealand;
pub(crate) mod united_states;

/// The `(date, name)` pairs of one generated year.
pub(crate) type HolidayVec = Vec<(NaiveDate, String)>;

/// Record a holiday.
pub(crate) fn add(hol: &mut HolidayVec, date: NaiveDate, name: &str) {
    hol.push((date, name.to_string()));
}

/// Record a holiday plus, when `observed` is set and `shift` applies, its
/// shifted `" (Observed)"` entry.
pub(crate) fn add_observable(
    hol: &mut HolidayVec,
    date: NaiveDate,
    name: &str,
    observed: bool,
    shift: fn(NaiveDate) -> Option<NaiveDate>,
) {
    add(hol, date, name);
    if observed {
        if let Some(shifted) = shift(date) {
            hol.push((shifted, format!("{name} (Observed)")));
        }
    }
}
