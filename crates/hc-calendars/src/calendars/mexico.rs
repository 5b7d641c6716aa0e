//! Mexico holiday rules.
//!
//! Statutory holidays:
//! * New Year's Day (Jan 1; Sat → preceding Fri, Sun → following Mon)
//! * Constitution Day (Feb 5; 1st Mon in Feb from 2006)
//! * Benito Juárez's Birthday (Mar 21; 3rd Mon in Mar from 2007)
//! * Labour Day (May 1, shifted)
//! * Independence Day (Sep 16, shifted)
//! * Revolution Day (Nov 20; 3rd Mon in Nov from 2007)
//! * Change of Federal Government (Dec 1, every six years from 2018, shifted)
//! * Christmas Day (Dec 25, shifted)
//!
//! Mexico has no subnational holiday variation; no subdivision codes are
//! defined.

use chrono::{Datelike, Weekday};

use super::{add, add_observable, HolidayVec};
use crate::rules::{nearest_weekday, nth_weekday, ymd};

pub(crate) fn holidays(year: i32, observed: bool) -> HolidayVec {
    let mut hol = HolidayVec::new();

    let name = "New Year's Day";
    let jan1 = ymd(year, 1, 1);
    add(&mut hol, jan1, name);
    if observed && jan1.weekday() == Weekday::Sun {
        add(&mut hol, ymd(year, 1, 2), "New Year's Day (Observed)");
    }
    // Next year's Saturday New Year lands on this year's Dec 31.
    let dec31 = ymd(year, 12, 31);
    if observed && dec31.weekday() == Weekday::Fri {
        add(&mut hol, dec31, "New Year's Day (Observed)");
    }

    if year >= 2006 {
        add(
            &mut hol,
            nth_weekday(year, 2, Weekday::Mon, 1),
            "Constitution Day",
        );
    } else if year >= 1917 {
        add(&mut hol, ymd(year, 2, 5), "Constitution Day");
    }

    if year >= 2007 {
        add(
            &mut hol,
            nth_weekday(year, 3, Weekday::Mon, 3),
            "Benito Juárez's Birthday",
        );
    } else if year >= 1917 {
        add(&mut hol, ymd(year, 3, 21), "Benito Juárez's Birthday");
    }

    if year >= 1923 {
        add_observable(
            &mut hol,
            ymd(year, 5, 1),
            "Labour Day",
            observed,
            nearest_weekday,
        );
    }

    add_observable(
        &mut hol,
        ymd(year, 9, 16),
        "Independence Day",
        observed,
        nearest_weekday,
    );

    if year >= 2007 {
        add(
            &mut hol,
            nth_weekday(year, 11, Weekday::Mon, 3),
            "Revolution Day",
        );
    } else if year >= 1917 {
        add(&mut hol, ymd(year, 11, 20), "Revolution Day");
    }

    // Presidential handover, every six years.
    if year >= 1970 && (year - 2018) % 6 == 0 {
        add_observable(
            &mut hol,
            ymd(year, 12, 1),
            "Change of Federal Government",
            observed,
            nearest_weekday,
        );
    }

    add_observable(
        &mut hol,
        ymd(year, 12, 25),
        "Christmas Day",
        observed,
        nearest_weekday,
    );

    hol
}
