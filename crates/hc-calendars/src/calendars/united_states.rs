//! United States holiday rules.
//!
//! Federal holidays:
//! * New Year's Day (Jan 1; Sat → preceding Fri, Sun → following Mon)
//! * Martin Luther King Jr. Day (3rd Mon in Jan, from 1986)
//! * Washington's Birthday (3rd Mon in Feb, from 1971; Feb 22 before)
//! * Memorial Day (last Mon in May, from 1971; May 30 before)
//! * Juneteenth National Independence Day (Jun 19, from 2021, shifted)
//! * Independence Day (Jul 4, shifted)
//! * Labor Day (1st Mon in Sep)
//! * Columbus Day (2nd Mon in Oct, from 1971)
//! * Veterans Day (Nov 11, shifted; 4th Mon in Oct during 1971–1977)
//! * Thanksgiving (4th Thu in Nov)
//! * Christmas Day (Dec 25, shifted)
//!
//! State additions are modeled for California, Texas, New York, and
//! Massachusetts; the remaining state codes resolve to the federal set.

use chrono::{Datelike, Days, Weekday};

use super::{add, add_observable, HolidayVec};
use crate::rules::{last_weekday, nearest_weekday, nth_weekday, ymd};

/// State and district codes.
pub(crate) const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub(crate) fn holidays(year: i32, subdivision: Option<&str>, observed: bool) -> HolidayVec {
    let mut hol = HolidayVec::new();

    new_years_day(&mut hol, year, observed);

    if year >= 1986 {
        add(
            &mut hol,
            nth_weekday(year, 1, Weekday::Mon, 3),
            "Martin Luther King Jr. Day",
        );
    }

    if year >= 1971 {
        add(
            &mut hol,
            nth_weekday(year, 2, Weekday::Mon, 3),
            "Washington's Birthday",
        );
        add(&mut hol, last_weekday(year, 5, Weekday::Mon), "Memorial Day");
    } else {
        add(&mut hol, ymd(year, 2, 22), "Washington's Birthday");
        add(&mut hol, ymd(year, 5, 30), "Memorial Day");
    }

    if year >= 2021 {
        add_observable(
            &mut hol,
            ymd(year, 6, 19),
            "Juneteenth National Independence Day",
            observed,
            nearest_weekday,
        );
    }

    add_observable(
        &mut hol,
        ymd(year, 7, 4),
        "Independence Day",
        observed,
        nearest_weekday,
    );

    add(&mut hol, nth_weekday(year, 9, Weekday::Mon, 1), "Labor Day");

    if year >= 1971 {
        add(
            &mut hol,
            nth_weekday(year, 10, Weekday::Mon, 2),
            "Columbus Day",
        );
    }

    // The Uniform Monday Holiday Act moved Veterans Day to a Monday for a
    // few years before it was moved back.
    if (1971..=1977).contains(&year) {
        add(
            &mut hol,
            nth_weekday(year, 10, Weekday::Mon, 4),
            "Veterans Day",
        );
    } else {
        add_observable(
            &mut hol,
            ymd(year, 11, 11),
            "Veterans Day",
            observed,
            nearest_weekday,
        );
    }

    add(
        &mut hol,
        nth_weekday(year, 11, Weekday::Thu, 4),
        "Thanksgiving",
    );

    add_observable(
        &mut hol,
        ymd(year, 12, 25),
        "Christmas Day",
        observed,
        nearest_weekday,
    );

    match subdivision {
        Some("CA") => california(&mut hol, year, observed),
        Some("TX") => texas(&mut hol, year),
        Some("NY") => new_york(&mut hol, year, observed),
        Some("MA") => massachusetts(&mut hol, year),
        _ => {}
    }

    hol
}

/// New Year's Day, with the cross-year observed rule: a Saturday Jan 1 is
/// observed on Dec 31 of the prior year, so each generated year checks the
/// *next* year's Jan 1 and claims the Dec 31 entry itself.
fn new_years_day(hol: &mut HolidayVec, year: i32, observed: bool) {
    let name = "New Year's Day";
    let jan1 = ymd(year, 1, 1);
    add(hol, jan1, name);
    if observed && jan1.weekday() == Weekday::Sun {
        add(hol, ymd(year, 1, 2), "New Year's Day (Observed)");
    }
    let dec31 = ymd(year, 12, 31);
    if observed && dec31.weekday() == Weekday::Fri {
        add(hol, dec31, "New Year's Day (Observed)");
    }
}

fn california(hol: &mut HolidayVec, year: i32, observed: bool) {
    if year >= 1995 {
        let chavez = ymd(year, 3, 31);
        add(hol, chavez, "Cesar Chavez Day");
        if observed && chavez.weekday() == Weekday::Sun {
            add(hol, ymd(year, 4, 1), "Cesar Chavez Day (Observed)");
        }
    }
    if year >= 1975 {
        add(
            hol,
            nth_weekday(year, 11, Weekday::Thu, 4) + Days::new(1),
            "Day After Thanksgiving",
        );
    }
}

fn texas(hol: &mut HolidayVec, year: i32) {
    if year >= 1874 {
        add(hol, ymd(year, 3, 2), "Texas Independence Day");
    }
    if year >= 1875 {
        add(hol, ymd(year, 4, 21), "San Jacinto Day");
    }
    if year >= 1980 {
        add(hol, ymd(year, 6, 19), "Emancipation Day In Texas");
    }
    if year >= 1973 {
        add(hol, ymd(year, 8, 27), "Lyndon Baines Johnson Day");
    }
}

fn new_york(hol: &mut HolidayVec, year: i32, observed: bool) {
    add_observable(
        hol,
        ymd(year, 2, 12),
        "Lincoln's Birthday",
        observed,
        nearest_weekday,
    );
    if year >= 2004 {
        add(hol, ymd(year, 2, 15), "Susan B. Anthony Day");
    }
    // General elections: the Tuesday after the first Monday of November,
    // even years.
    if year % 2 == 0 {
        add(
            hol,
            nth_weekday(year, 11, Weekday::Mon, 1) + Days::new(1),
            "Election Day",
        );
    }
}

fn massachusetts(hol: &mut HolidayVec, year: i32) {
    if year >= 1969 {
        add(hol, nth_weekday(year, 4, Weekday::Mon, 3), "Patriots' Day");
    } else if year >= 1894 {
        add(hol, ymd(year, 4, 19), "Patriots' Day");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn names(year: i32, subdivision: Option<&str>, observed: bool) -> Vec<(NaiveDate, String)> {
        holidays(year, subdivision, observed)
    }

    fn has(hol: &[(NaiveDate, String)], date: NaiveDate, name: &str) -> bool {
        hol.iter().any(|(d, n)| *d == date && n == name)
    }

    #[test]
    fn federal_2023() {
        let hol = names(2023, None, true);
        assert!(has(&hol, ymd(2023, 1, 2), "New Year's Day (Observed)"));
        assert!(has(&hol, ymd(2023, 1, 16), "Martin Luther King Jr. Day"));
        assert!(has(&hol, ymd(2023, 5, 29), "Memorial Day"));
        assert!(has(&hol, ymd(2023, 7, 4), "Independence Day"));
        assert!(has(&hol, ymd(2023, 11, 23), "Thanksgiving"));
        assert!(has(&hol, ymd(2023, 12, 25), "Christmas Day"));
    }

    #[test]
    fn saturday_independence_day_observed_friday() {
        // Jul 4, 2020 was a Saturday.
        let hol = names(2020, None, true);
        assert!(has(&hol, ymd(2020, 7, 3), "Independence Day (Observed)"));
        assert!(has(&hol, ymd(2020, 7, 4), "Independence Day"));
    }

    #[test]
    fn no_observed_entries_when_disabled() {
        let hol = names(2020, None, false);
        assert!(hol.iter().all(|(_, n)| !n.ends_with("(Observed)")));
    }

    #[test]
    fn saturday_new_year_claimed_by_prior_year() {
        // Jan 1, 2022 was a Saturday: the observed entry belongs to 2021.
        let hol_2021 = names(2021, None, true);
        assert!(has(&hol_2021, ymd(2021, 12, 31), "New Year's Day (Observed)"));
        let hol_2022 = names(2022, None, true);
        assert!(!hol_2022.iter().any(|(d, _)| d.year() == 2021));
    }

    #[test]
    fn juneteenth_starts_2021() {
        assert!(!names(2020, None, true)
            .iter()
            .any(|(_, n)| n.starts_with("Juneteenth")));
        assert!(has(
            &names(2021, None, true),
            ymd(2021, 6, 19),
            "Juneteenth National Independence Day"
        ));
    }

    #[test]
    fn veterans_day_monday_era() {
        // 4th Monday of October 1972 = Oct 23.
        assert!(has(&names(1972, None, true), ymd(1972, 10, 23), "Veterans Day"));
        assert!(!has(&names(1972, None, true), ymd(1972, 11, 11), "Veterans Day"));
    }

    #[test]
    fn texas_additions() {
        let hol = names(2023, Some("TX"), true);
        assert!(has(&hol, ymd(2023, 3, 2), "Texas Independence Day"));
        assert!(has(&hol, ymd(2023, 6, 19), "Emancipation Day In Texas"));
        // Federal set still present.
        assert!(has(&hol, ymd(2023, 7, 4), "Independence Day"));
    }

    #[test]
    fn patriots_day_2023() {
        // 3rd Monday of April 2023 = Apr 17.
        let hol = names(2023, Some("MA"), true);
        assert!(has(&hol, ymd(2023, 4, 17), "Patriots' Day"));
    }
}
