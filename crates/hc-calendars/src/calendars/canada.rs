//! Canada holiday rules.
//!
//! Federal holidays:
//! * New Year's Day (Jan 1, weekend → following Mon)
//! * Good Friday
//! * Victoria Day (Monday preceding May 25, from 1953)
//! * Canada Day (Jul 1, weekend → following Mon)
//! * Civic Holiday (1st Mon in Aug)
//! * Labour Day (1st Mon in Sep)
//! * National Day for Truth and Reconciliation (Sep 30, from 2021, shifted)
//! * Thanksgiving (2nd Mon in Oct)
//! * Remembrance Day (Nov 11, weekend → following Mon)
//! * Christmas Day (Dec 25; weekend → Dec 27)
//! * Boxing Day (Dec 26; weekend → Dec 28)
//!
//! Provincial additions cover the third-Monday-of-February family (Family
//! Day and its local names), Québec's Fête nationale, and the territorial
//! days.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::{add, add_observable, HolidayVec};
use crate::rules::{easter_sunday, is_weekend, next_monday, nth_weekday, ymd};

/// Province and territory codes.
pub(crate) const PROVINCES: &[&str] = &[
    "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT",
];

pub(crate) fn holidays(year: i32, subdivision: Option<&str>, observed: bool) -> HolidayVec {
    let mut hol = HolidayVec::new();

    add_observable(
        &mut hol,
        ymd(year, 1, 1),
        "New Year's Day",
        observed,
        next_monday,
    );

    add(&mut hol, easter_sunday(year) - Days::new(2), "Good Friday");

    if year >= 1953 {
        add(&mut hol, victoria_day(year), "Victoria Day");
    }

    add_observable(
        &mut hol,
        ymd(year, 7, 1),
        "Canada Day",
        observed,
        next_monday,
    );

    add(
        &mut hol,
        nth_weekday(year, 8, Weekday::Mon, 1),
        "Civic Holiday",
    );

    add(&mut hol, nth_weekday(year, 9, Weekday::Mon, 1), "Labour Day");

    if year >= 2021 {
        add_observable(
            &mut hol,
            ymd(year, 9, 30),
            "National Day for Truth and Reconciliation",
            observed,
            next_monday,
        );
    }

    add(
        &mut hol,
        nth_weekday(year, 10, Weekday::Mon, 2),
        "Thanksgiving",
    );

    add_observable(
        &mut hol,
        ymd(year, 11, 11),
        "Remembrance Day",
        observed,
        next_monday,
    );

    christmas_pair(&mut hol, year, observed);

    if let Some(code) = subdivision {
        provincial(&mut hol, year, code, observed);
    }

    hol
}

/// The Monday preceding May 25.
fn victoria_day(year: i32) -> NaiveDate {
    let mut d = ymd(year, 5, 24);
    while d.weekday() != Weekday::Mon {
        d = d - Days::new(1);
    }
    d
}

/// Christmas and Boxing Day, observed on Dec 27/28 whenever the nominal
/// dates land on a weekend.
fn christmas_pair(hol: &mut HolidayVec, year: i32, observed: bool) {
    let christmas = ymd(year, 12, 25);
    let boxing = ymd(year, 12, 26);
    add(hol, christmas, "Christmas Day");
    add(hol, boxing, "Boxing Day");
    if observed {
        if is_weekend(christmas) {
            add(hol, ymd(year, 12, 27), "Christmas Day (Observed)");
        }
        if is_weekend(boxing) {
            add(hol, ymd(year, 12, 28), "Boxing Day (Observed)");
        }
    }
}

fn provincial(hol: &mut HolidayVec, year: i32, code: &str, observed: bool) {
    let third_monday_feb = nth_weekday(year, 2, Weekday::Mon, 3);
    match code {
        "AB" if year >= 1990 => add(hol, third_monday_feb, "Family Day"),
        "SK" if year >= 2007 => add(hol, third_monday_feb, "Family Day"),
        "ON" if year >= 2008 => add(hol, third_monday_feb, "Family Day"),
        "NB" if year >= 2018 => add(hol, third_monday_feb, "Family Day"),
        "BC" if year >= 2019 => add(hol, third_monday_feb, "Family Day"),
        // BC introduced Family Day on the second Monday.
        "BC" if year >= 2013 => add(hol, nth_weekday(year, 2, Weekday::Mon, 2), "Family Day"),
        "MB" if year >= 2008 => add(hol, third_monday_feb, "Louis Riel Day"),
        "PE" if year >= 2009 => add(hol, third_monday_feb, "Islander Day"),
        "NS" if year >= 2015 => add(hol, third_monday_feb, "Heritage Day"),
        _ => {}
    }
    match code {
        "QC" if year >= 1925 => {
            let fete = ymd(year, 6, 24);
            add(hol, fete, "St. Jean Baptiste Day");
            if observed && fete.weekday() == Weekday::Sun {
                add(hol, ymd(year, 6, 25), "St. Jean Baptiste Day (Observed)");
            }
        }
        "NT" if year >= 1996 => add(hol, ymd(year, 6, 21), "National Aboriginal Day"),
        "YT" => add(
            hol,
            nth_weekday(year, 8, Weekday::Mon, 3),
            "Discovery Day",
        ),
        _ => {}
    }
}
