//! Austria holiday rules.
//!
//! National holidays:
//! * New Year's Day (Jan 1)
//! * Epiphany (Jan 6)
//! * Easter Monday
//! * Labour Day (May 1)
//! * Ascension Day, Whit Monday, Corpus Christi
//! * Assumption of Mary (Aug 15)
//! * National Day (Oct 26, from 1967)
//! * All Saints' Day (Nov 1)
//! * Immaculate Conception (Dec 8)
//! * Christmas Day (Dec 25)
//! * St. Stephen's Day (Dec 26)
//!
//! Provincial patron-saint days are added per Bundesland.  Austria does not
//! shift weekend holidays, so no observed entries exist.

use chrono::Days;

use super::{add, HolidayVec};
use crate::rules::{easter_sunday, ymd};

/// Bundesland codes.
pub(crate) const PROVINCES: &[&str] = &["B", "K", "N", "O", "S", "ST", "T", "V", "W"];

pub(crate) fn holidays(year: i32, subdivision: Option<&str>) -> HolidayVec {
    let mut hol = HolidayVec::new();

    add(&mut hol, ymd(year, 1, 1), "New Year's Day");
    add(&mut hol, ymd(year, 1, 6), "Epiphany");

    let easter = easter_sunday(year);
    add(&mut hol, easter + Days::new(1), "Easter Monday");
    add(&mut hol, ymd(year, 5, 1), "Labour Day");
    add(&mut hol, easter + Days::new(39), "Ascension Day");
    add(&mut hol, easter + Days::new(50), "Whit Monday");
    add(&mut hol, easter + Days::new(60), "Corpus Christi");

    add(&mut hol, ymd(year, 8, 15), "Assumption of Mary");
    if year >= 1967 {
        add(&mut hol, ymd(year, 10, 26), "National Day");
    }
    add(&mut hol, ymd(year, 11, 1), "All Saints' Day");
    add(&mut hol, ymd(year, 12, 8), "Immaculate Conception");
    add(&mut hol, ymd(year, 12, 25), "Christmas Day");
    add(&mut hol, ymd(year, 12, 26), "St. Stephen's Day");

    if let Some(code) = subdivision {
        match code {
            "B" => add(&mut hol, ymd(year, 11, 11), "St. Martin's Day"),
            "K" => {
                add(&mut hol, ymd(year, 3, 19), "St. Joseph's Day");
                add(&mut hol, ymd(year, 10, 10), "Carinthian Plebiscite Day");
            }
            "ST" | "T" | "V" => add(&mut hol, ymd(year, 3, 19), "St. Joseph's Day"),
            "O" if year >= 2004 => add(&mut hol, ymd(year, 5, 4), "St. Florian's Day"),
            "S" => add(&mut hol, ymd(year, 9, 24), "St. Rupert's Day"),
            "N" | "W" => add(&mut hol, ymd(year, 11, 15), "St. Leopold's Day"),
            _ => {}
        }
    }

    hol
}
