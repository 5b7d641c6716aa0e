//! Australia holiday rules.
//!
//! National holidays:
//! * New Year's Day (Jan 1, weekend → following Mon)
//! * Australia Day (Jan 26, weekend → following Mon from 1946)
//! * Good Friday, Easter Monday
//! * Anzac Day (Apr 25)
//! * Christmas Day (Dec 25; weekend → Dec 27)
//! * Boxing Day (Dec 26; weekend → Dec 28; Proclamation Day in SA)
//!
//! Labour Day and the sovereign's birthday only exist with a state
//! selected, since their dates are set state by state.  State additions
//! cover Canberra Day, Adelaide Cup Day, Melbourne Cup Day, Picnic Day,
//! Western Australia Day, and the Easter Saturday states.

use chrono::{Days, Weekday};

use super::{add, add_observable, HolidayVec};
use crate::rules::{easter_sunday, is_weekend, last_weekday, next_monday, nth_weekday, ymd};

/// State and territory codes.
pub(crate) const STATES: &[&str] = &["ACT", "NSW", "NT", "QLD", "SA", "TAS", "VIC", "WA"];

pub(crate) fn holidays(year: i32, subdivision: Option<&str>, observed: bool) -> HolidayVec {
    let mut hol = HolidayVec::new();

    add_observable(
        &mut hol,
        ymd(year, 1, 1),
        "New Year's Day",
        observed,
        next_monday,
    );

    if year >= 1935 {
        add_observable(
            &mut hol,
            ymd(year, 1, 26),
            "Australia Day",
            observed && year >= 1946,
            next_monday,
        );
    }

    let easter = easter_sunday(year);
    add(&mut hol, easter - Days::new(2), "Good Friday");
    add(&mut hol, easter + Days::new(1), "Easter Monday");
    if matches!(
        subdivision,
        Some("ACT") | Some("NSW") | Some("NT") | Some("QLD") | Some("SA") | Some("VIC")
    ) {
        add(&mut hol, easter - Days::new(1), "Easter Saturday");
    }

    if year >= 1921 {
        add(&mut hol, ymd(year, 4, 25), "Anzac Day");
    }

    if let Some(code) = subdivision {
        sovereign_birthday(&mut hol, year, code);
        labour_day(&mut hol, year, code);
        state_days(&mut hol, year, code);
    }

    let christmas = ymd(year, 12, 25);
    let boxing = ymd(year, 12, 26);
    add(&mut hol, christmas, "Christmas Day");
    let boxing_name = if subdivision == Some("SA") {
        "Proclamation Day"
    } else {
        "Boxing Day"
    };
    add(&mut hol, boxing, boxing_name);
    if observed {
        if is_weekend(christmas) {
            add(&mut hol, ymd(year, 12, 27), "Christmas Day (Observed)");
        }
        if is_weekend(boxing) {
            add(&mut hol, ymd(year, 12, 28), &format!("{boxing_name} (Observed)"));
        }
    }

    hol
}

/// The sovereign's birthday: second Monday of June, except Western
/// Australia (late September) and Queensland's October years.
fn sovereign_birthday(hol: &mut HolidayVec, year: i32, code: &str) {
    let name = if year >= 2023 {
        "King's Birthday"
    } else {
        "Queen's Birthday"
    };
    let date = match code {
        // Proclaimed annually in WA; falls in late September.
        "WA" => last_weekday(year, 9, Weekday::Mon),
        "QLD" if year == 2012 => ymd(year, 10, 1),
        "QLD" if year >= 2016 => nth_weekday(year, 10, Weekday::Mon, 1),
        _ => nth_weekday(year, 6, Weekday::Mon, 2),
    };
    add(hol, date, name);
}

fn labour_day(hol: &mut HolidayVec, year: i32, code: &str) {
    match code {
        "ACT" | "NSW" | "SA" => add(
            hol,
            nth_weekday(year, 10, Weekday::Mon, 1),
            "Labour Day",
        ),
        "VIC" => add(hol, nth_weekday(year, 3, Weekday::Mon, 2), "Labour Day"),
        "TAS" => add(
            hol,
            nth_weekday(year, 3, Weekday::Mon, 2),
            "Eight Hours Day",
        ),
        "WA" => add(hol, nth_weekday(year, 3, Weekday::Mon, 1), "Labour Day"),
        "QLD" if (2013..=2015).contains(&year) => add(
            hol,
            nth_weekday(year, 10, Weekday::Mon, 1),
            "Labour Day",
        ),
        "QLD" => add(hol, nth_weekday(year, 5, Weekday::Mon, 1), "Labour Day"),
        "NT" => add(hol, nth_weekday(year, 5, Weekday::Mon, 1), "May Day"),
        _ => {}
    }
}

fn state_days(hol: &mut HolidayVec, year: i32, code: &str) {
    match code {
        "ACT" => add(
            hol,
            nth_weekday(year, 3, Weekday::Mon, 2),
            "Canberra Day",
        ),
        "SA" if year >= 2006 => add(
            hol,
            nth_weekday(year, 3, Weekday::Mon, 2),
            "Adelaide Cup Day",
        ),
        "VIC" => add(
            hol,
            nth_weekday(year, 11, Weekday::Tue, 1),
            "Melbourne Cup Day",
        ),
        "NT" => add(hol, nth_weekday(year, 8, Weekday::Mon, 1), "Picnic Day"),
        "WA" => {
            let name = if year >= 2012 {
                "Western Australia Day"
            } else {
                "Foundation Day"
            };
            add(hol, nth_weekday(year, 6, Weekday::Mon, 1), name);
        }
        _ => {}
    }
}
