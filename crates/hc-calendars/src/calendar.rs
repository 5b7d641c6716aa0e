//! The loaded calendar: per-year materialization and date lookup.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use chrono::{Datelike, NaiveDate};
use hc_core::Result;

use crate::selection::CalendarSelection;

/// Materialized holidays, grouped behind one lock.
#[derive(Debug, Default)]
struct Table {
    entries: BTreeMap<NaiveDate, String>,
    years: BTreeSet<i32>,
}

impl Table {
    /// Generate and insert the holidays of `year` for `selection`.
    ///
    /// Only dates inside `year` are kept: the year set is the source of
    /// truth for what has been materialized, so an entry may never leak
    /// outside its generating year.  Rules that would shift across the year
    /// boundary (a Saturday New Year's Day observed on Dec 31) are written
    /// to emit the entry from the year it falls in.
    fn materialize(&mut self, selection: &CalendarSelection, year: i32) {
        let generated = selection.country().holidays_for_year(
            year,
            selection.subdivision(),
            selection.observes(),
        );
        for (date, name) in generated {
            if date.year() != year {
                continue;
            }
            match self.entries.entry(date) {
                // Two holidays on one date read as one joined name.
                Entry::Occupied(mut slot) => {
                    let existing = slot.get_mut();
                    if !existing.split(", ").any(|n| n == name) {
                        existing.push_str(", ");
                        existing.push_str(&name);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(name);
                }
            }
        }
        self.years.insert(year);
    }
}

/// A loaded holiday calendar for one jurisdiction.
///
/// Holds the selection it was resolved from plus a `date → holiday name`
/// table, materialized one year at a time.  Lookups in a year that has not
/// been materialized either generate that year on demand (when the
/// selection expands) or report absence.
///
/// The calendar is logically immutable: loading a different selection means
/// loading a different calendar, never editing this one.  The internal year
/// cache grows behind a lock, so a calendar can be shared across threads.
#[derive(Debug)]
pub struct HolidayCalendar {
    selection: CalendarSelection,
    table: RwLock<Table>,
}

impl HolidayCalendar {
    /// Resolve `selection` into a loaded calendar.
    ///
    /// Validates the subdivision against the country's subdivision list and
    /// materializes any years the selection requests.  On failure no
    /// calendar is produced and nothing else changes.
    pub fn load(selection: CalendarSelection) -> Result<Self> {
        selection
            .country()
            .check_subdivision(selection.subdivision())?;

        let mut table = Table::default();
        if let Some(years) = selection.years() {
            for &year in years {
                table.materialize(&selection, year);
            }
        }
        Ok(Self {
            selection,
            table: RwLock::new(table),
        })
    }

    /// The selection this calendar was loaded from.
    pub fn selection(&self) -> &CalendarSelection {
        &self.selection
    }

    /// The holiday name for `date`, or `None` if `date` is not a holiday in
    /// this calendar.
    ///
    /// Two holidays on the same date are joined as `"A, B"`.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<String> {
        let year = date.year();
        {
            let table = self.table.read().expect("calendar lock poisoned");
            if table.years.contains(&year) {
                return table.entries.get(&date).cloned();
            }
        }
        if !self.selection.expands() {
            return None;
        }
        let mut table = self.table.write().expect("calendar lock poisoned");
        // Another thread may have materialized the year in the meantime.
        if !table.years.contains(&year) {
            table.materialize(&self.selection, year);
        }
        table.entries.get(&date).cloned()
    }

    /// `true` if `date` is a holiday in this calendar.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }

    /// A sorted snapshot of every materialized holiday.
    pub fn holidays(&self) -> Vec<(NaiveDate, String)> {
        let table = self.table.read().expect("calendar lock poisoned");
        table
            .entries
            .iter()
            .map(|(d, n)| (*d, n.clone()))
            .collect()
    }

    /// The years materialized so far.
    pub fn years(&self) -> BTreeSet<i32> {
        self.table.read().expect("calendar lock poisoned").years.clone()
    }
}
