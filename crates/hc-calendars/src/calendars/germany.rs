//! Germany holiday rules.
//!
//! National holidays:
//! * New Year's Day (Jan 1)
//! * Good Friday, Easter Monday
//! * Labour Day (May 1)
//! * Ascension Day, Whit Monday
//! * German Unity Day (Oct 3, from 1990)
//! * Christmas Day (Dec 25)
//! * Second Day of Christmas (Dec 26)
//!
//! The Länder add Epiphany, Corpus Christi, Assumption, Reformation Day,
//! All Saints' Day, Repentance and Prayer Day, Women's Day, and
//! Brandenburg's Easter and Whit Sundays.  Reformation Day was a one-off
//! national holiday in 2017 (the 500th anniversary) and became permanent in
//! the northern states from 2018.  Germany does not shift weekend holidays.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::{add, HolidayVec};
use crate::rules::{easter_sunday, ymd};

/// Bundesland codes.
pub(crate) const STATES: &[&str] = &[
    "BW", "BY", "BE", "BB", "HB", "HH", "HE", "MV", "NI", "NW", "RP", "SL", "SN", "ST", "SH",
    "TH",
];

pub(crate) fn holidays(year: i32, subdivision: Option<&str>) -> HolidayVec {
    let mut hol = HolidayVec::new();
    let sub = subdivision.unwrap_or("");

    add(&mut hol, ymd(year, 1, 1), "New Year's Day");

    if matches!(sub, "BW" | "BY" | "ST") {
        add(&mut hol, ymd(year, 1, 6), "Epiphany");
    }

    if sub == "BE" && year >= 2019 {
        add(&mut hol, ymd(year, 3, 8), "International Women's Day");
    }

    let easter = easter_sunday(year);
    add(&mut hol, easter - Days::new(2), "Good Friday");
    if sub == "BB" {
        add(&mut hol, easter, "Easter Sunday");
    }
    add(&mut hol, easter + Days::new(1), "Easter Monday");

    add(&mut hol, ymd(year, 5, 1), "Labour Day");
    add(&mut hol, easter + Days::new(39), "Ascension Day");
    if sub == "BB" {
        add(&mut hol, easter + Days::new(49), "Whit Sunday");
    }
    add(&mut hol, easter + Days::new(50), "Whit Monday");

    if matches!(sub, "BW" | "BY" | "HE" | "NW" | "RP" | "SL") {
        add(&mut hol, easter + Days::new(60), "Corpus Christi");
    }

    if matches!(sub, "BY" | "SL") {
        add(&mut hol, ymd(year, 8, 15), "Assumption of Mary");
    }

    if year >= 1990 {
        add(&mut hol, ymd(year, 10, 3), "German Unity Day");
    }

    if reformation_day(year, sub) {
        add(&mut hol, ymd(year, 10, 31), "Reformation Day");
    }

    if matches!(sub, "BW" | "BY" | "NW" | "RP" | "SL") {
        add(&mut hol, ymd(year, 11, 1), "All Saints' Day");
    }

    // Abolished as a nationwide holiday after 1994; Saxony kept it.
    if year <= 1994 || sub == "SN" {
        add(&mut hol, repentance_day(year), "Repentance and Prayer Day");
    }

    add(&mut hol, ymd(year, 12, 25), "Christmas Day");
    add(&mut hol, ymd(year, 12, 26), "Second Day of Christmas");

    hol
}

fn reformation_day(year: i32, sub: &str) -> bool {
    // 500th anniversary: nationwide for 2017 only.
    if year == 2017 {
        return true;
    }
    match sub {
        "BB" | "MV" | "SN" | "ST" | "TH" => true,
        "HB" | "HH" | "NI" | "SH" => year >= 2018,
        _ => false,
    }
}

/// The Wednesday before Nov 23.
fn repentance_day(year: i32) -> NaiveDate {
    let mut d = ymd(year, 11, 22);
    while d.weekday() != Weekday::Wed {
        d = d - Days::new(1);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(hol: &[(NaiveDate, String)], date: NaiveDate, name: &str) -> bool {
        hol.iter().any(|(d, n)| *d == date && n == name)
    }

    #[test]
    fn national_2023() {
        let hol = holidays(2023, None);
        assert!(has(&hol, ymd(2023, 1, 1), "New Year's Day"));
        assert!(has(&hol, ymd(2023, 4, 7), "Good Friday"));
        assert!(has(&hol, ymd(2023, 4, 10), "Easter Monday"));
        assert!(has(&hol, ymd(2023, 5, 18), "Ascension Day"));
        assert!(has(&hol, ymd(2023, 5, 29), "Whit Monday"));
        assert!(has(&hol, ymd(2023, 10, 3), "German Unity Day"));
        assert!(has(&hol, ymd(2023, 12, 26), "Second Day of Christmas"));
    }

    #[test]
    fn bavaria_additions() {
        let hol = holidays(2023, Some("BY"));
        assert!(has(&hol, ymd(2023, 1, 6), "Epiphany"));
        assert!(has(&hol, ymd(2023, 6, 8), "Corpus Christi"));
        assert!(has(&hol, ymd(2023, 8, 15), "Assumption of Mary"));
        assert!(has(&hol, ymd(2023, 11, 1), "All Saints' Day"));
    }

    #[test]
    fn reformation_day_rollout() {
        // Traditional Reformation states.
        assert!(has(&holidays(2016, Some("SN")), ymd(2016, 10, 31), "Reformation Day"));
        assert!(!has(&holidays(2016, Some("HH")), ymd(2016, 10, 31), "Reformation Day"));
        // Nationwide in 2017.
        assert!(has(&holidays(2017, None), ymd(2017, 10, 31), "Reformation Day"));
        // Northern states joined permanently in 2018.
        assert!(has(&holidays(2018, Some("HH")), ymd(2018, 10, 31), "Reformation Day"));
        assert!(!has(&holidays(2018, Some("BY")), ymd(2018, 10, 31), "Reformation Day"));
    }

    #[test]
    fn repentance_day_saxony_only_after_1994() {
        // Wednesday before Nov 23, 2023 = Nov 22.
        assert!(has(&holidays(2023, Some("SN")), ymd(2023, 11, 22), "Repentance and Prayer Day"));
        assert!(!holidays(2023, Some("BY"))
            .iter()
            .any(|(_, n)| n == "Repentance and Prayer Day"));
        // Nationwide before the 1995 abolition: Nov 16 in 1994.
        assert!(has(&holidays(1994, None), ymd(1994, 11, 16), "Repentance and Prayer Day"));
    }

    #[test]
    fn brandenburg_easter_and_whit_sundays() {
        let hol = holidays(2023, Some("BB"));
        assert!(has(&hol, ymd(2023, 4, 9), "Easter Sunday"));
        assert!(has(&hol, ymd(2023, 5, 28), "Whit Sunday"));
    }

    #[test]
    fn womens_day_berlin() {
        assert!(has(&holidays(2019, Some("BE")), ymd(2019, 3, 8), "International Women's Day"));
        assert!(!has(&holidays(2018, Some("BE")), ymd(2018, 3, 8), "International Women's Day"));
    }
}
