//! New Zealand holiday rules.
//!
//! National holidays:
//! * New Year's Day and Day after New Year's Day (Jan 1–2, Mondayised)
//! * Waitangi Day (Feb 6, Mondayised from 2014)
//! * Good Friday, Easter Monday
//! * Anzac Day (Apr 25, Mondayised from 2014)
//! * Queen's / King's Birthday (1st Mon in Jun)
//! * Matariki (from 2022, per the official date table)
//! * Labour Day (4th Mon in Oct)
//! * Christmas Day (Dec 25; weekend → Dec 27)
//! * Boxing Day (Dec 26; weekend → Dec 28)
//!
//! Each province observes its anniversary day; most are "closest Monday"
//! rules, Canterbury uses Show Day and Southland moved onto Easter Tuesday
//! in 2012.  Northland shares Auckland's anniversary.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::{add, add_observable, HolidayVec};
use crate::rules::{closest_monday, easter_sunday, is_weekend, next_monday, nth_weekday, ymd};

/// Province codes.
pub(crate) const PROVINCES: &[&str] = &[
    "NTL", "AUK", "TKI", "HKB", "WGN", "MBH", "NSN", "CAN", "STC", "WTL", "OTA", "STL", "CIT",
];

/// Matariki, as gazetted.  The table runs well past the provider's default
/// horizon; years outside it simply have no Matariki entry.
const MATARIKI: &[(i32, u32, u32)] = &[
    (2022, 6, 24),
    (2023, 7, 14),
    (2024, 6, 28),
    (2025, 6, 20),
    (2026, 7, 10),
    (2027, 6, 25),
    (2028, 7, 14),
    (2029, 7, 6),
    (2030, 6, 21),
    (2031, 7, 11),
    (2032, 7, 2),
];

pub(crate) fn holidays(year: i32, subdivision: Option<&str>, observed: bool) -> HolidayVec {
    let mut hol = HolidayVec::new();

    new_year_pair(&mut hol, year, observed);

    if year >= 1974 {
        add_observable(
            &mut hol,
            ymd(year, 2, 6),
            "Waitangi Day",
            observed && year >= 2014,
            next_monday,
        );
    }

    let easter = easter_sunday(year);
    add(&mut hol, easter - Days::new(2), "Good Friday");
    add(&mut hol, easter + Days::new(1), "Easter Monday");

    if year >= 1921 {
        add_observable(
            &mut hol,
            ymd(year, 4, 25),
            "Anzac Day",
            observed && year >= 2014,
            next_monday,
        );
    }

    let sovereign = if year >= 2023 {
        "King's Birthday"
    } else {
        "Queen's Birthday"
    };
    add(&mut hol, nth_weekday(year, 6, Weekday::Mon, 1), sovereign);

    if let Some(&(_, m, d)) = MATARIKI.iter().find(|(y, _, _)| *y == year) {
        add(&mut hol, ymd(year, m, d), "Matariki");
    }

    let labour_day = nth_weekday(year, 10, Weekday::Mon, 4);
    add(&mut hol, labour_day, "Labour Day");

    let christmas = ymd(year, 12, 25);
    let boxing = ymd(year, 12, 26);
    add(&mut hol, christmas, "Christmas Day");
    add(&mut hol, boxing, "Boxing Day");
    if observed {
        if is_weekend(christmas) {
            add(&mut hol, ymd(year, 12, 27), "Christmas Day (Observed)");
        }
        if is_weekend(boxing) {
            add(&mut hol, ymd(year, 12, 28), "Boxing Day (Observed)");
        }
    }

    if let Some(code) = subdivision {
        anniversary_day(&mut hol, year, code, labour_day, easter);
    }

    hol
}

/// Jan 1 and Jan 2, Mondayised as a pair: the observed days may not
/// collide, so a Sunday New Year's Day skips over Monday (which already
/// belongs to the Day after New Year's Day).
fn new_year_pair(hol: &mut HolidayVec, year: i32, observed: bool) {
    let jan1 = ymd(year, 1, 1);
    add(hol, jan1, "New Year's Day");
    add(hol, ymd(year, 1, 2), "Day after New Year's Day");
    if !observed {
        return;
    }
    match jan1.weekday() {
        Weekday::Sat => {
            add(hol, ymd(year, 1, 3), "New Year's Day (Observed)");
            add(hol, ymd(year, 1, 4), "Day after New Year's Day (Observed)");
        }
        Weekday::Sun => {
            add(hol, ymd(year, 1, 3), "New Year's Day (Observed)");
        }
        Weekday::Fri => {
            add(hol, ymd(year, 1, 4), "Day after New Year's Day (Observed)");
        }
        _ => {}
    }
}

fn anniversary_day(
    hol: &mut HolidayVec,
    year: i32,
    code: &str,
    labour_day: NaiveDate,
    easter: NaiveDate,
) {
    match code {
        "AUK" | "NTL" => add(
            hol,
            closest_monday(ymd(year, 1, 29)),
            "Auckland Anniversary Day",
        ),
        "TKI" => add(
            hol,
            nth_weekday(year, 3, Weekday::Mon, 2),
            "Taranaki Anniversary Day",
        ),
        "HKB" => add(
            hol,
            labour_day - Days::new(3),
            "Hawke's Bay Anniversary Day",
        ),
        "WGN" => add(
            hol,
            closest_monday(ymd(year, 1, 22)),
            "Wellington Anniversary Day",
        ),
        "MBH" => add(
            hol,
            labour_day + Days::new(7),
            "Marlborough Anniversary Day",
        ),
        "NSN" => add(
            hol,
            closest_monday(ymd(year, 2, 1)),
            "Nelson Anniversary Day",
        ),
        // Show Day: the second Friday after the first Tuesday of November.
        "CAN" => add(
            hol,
            nth_weekday(year, 11, Weekday::Tue, 1) + Days::new(10),
            "Canterbury Anniversary Day",
        ),
        // Dominion Day.
        "STC" => add(
            hol,
            nth_weekday(year, 9, Weekday::Mon, 4),
            "South Canterbury Anniversary Day",
        ),
        "WTL" => add(
            hol,
            closest_monday(ymd(year, 12, 1)),
            "Westland Anniversary Day",
        ),
        "OTA" => add(
            hol,
            closest_monday(ymd(year, 3, 23)),
            "Otago Anniversary Day",
        ),
        "STL" if year >= 2012 => add(
            hol,
            easter + Days::new(2),
            "Southland Anniversary Day",
        ),
        "STL" => add(
            hol,
            closest_monday(ymd(year, 1, 17)),
            "Southland Anniversary Day",
        ),
        "CIT" => add(
            hol,
            closest_monday(ymd(year, 11, 30)),
            "Chatham Islands Anniversary Day",
        ),
        _ => {}
    }
}
