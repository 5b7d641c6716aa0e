//! Per-jurisdiction calendar content tests: whole-year holiday lists
//! checked date by date, plus property tests of the shifting rules.

use chrono::{Datelike, NaiveDate, Weekday};
use hc_calendars::{CalendarSelection, Country, HolidayCalendar};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn year_calendar(country: Country, year: i32) -> HolidayCalendar {
    HolidayCalendar::load(
        CalendarSelection::new(country)
            .with_years([year])
            .with_expand(false),
    )
    .unwrap()
}

/// Assert that the materialized dates match `expected` exactly.
fn check_holidays(cal: &HolidayCalendar, expected: &[NaiveDate]) {
    let calculated: Vec<NaiveDate> = cal.holidays().into_iter().map(|(d, _)| d).collect();
    for d in &calculated {
        assert!(
            expected.contains(d),
            "{d} calculated as holiday but not expected"
        );
    }
    for d in expected {
        assert!(
            calculated.contains(d),
            "{d} expected as holiday but not found"
        );
    }
}

#[test]
fn test_us_federal_2023() {
    let expected = vec![
        date(2023, 1, 1),   // New Year's Day (Sunday)
        date(2023, 1, 2),   // New Year's Day (Observed)
        date(2023, 1, 16),  // Martin Luther King Jr. Day
        date(2023, 2, 20),  // Washington's Birthday
        date(2023, 5, 29),  // Memorial Day
        date(2023, 6, 19),  // Juneteenth
        date(2023, 7, 4),   // Independence Day
        date(2023, 9, 4),   // Labor Day
        date(2023, 10, 9),  // Columbus Day
        date(2023, 11, 10), // Veterans Day (Observed)
        date(2023, 11, 11), // Veterans Day (Saturday)
        date(2023, 11, 23), // Thanksgiving
        date(2023, 12, 25), // Christmas Day
    ];
    check_holidays(&year_calendar(Country::US, 2023), &expected);
}

#[test]
fn test_austria_2023() {
    let expected = vec![
        date(2023, 1, 1),   // New Year's Day
        date(2023, 1, 6),   // Epiphany
        date(2023, 4, 10),  // Easter Monday
        date(2023, 5, 1),   // Labour Day
        date(2023, 5, 18),  // Ascension Day
        date(2023, 5, 29),  // Whit Monday
        date(2023, 6, 8),   // Corpus Christi
        date(2023, 8, 15),  // Assumption of Mary
        date(2023, 10, 26), // National Day
        date(2023, 11, 1),  // All Saints' Day
        date(2023, 12, 8),  // Immaculate Conception
        date(2023, 12, 25), // Christmas Day
        date(2023, 12, 26), // St. Stephen's Day
    ];
    check_holidays(&year_calendar(Country::AT, 2023), &expected);
}

#[test]
fn test_mexico_2024() {
    let expected = vec![
        date(2024, 1, 1),   // New Year's Day
        date(2024, 2, 5),   // Constitution Day (1st Monday)
        date(2024, 3, 18),  // Benito Juárez's Birthday (3rd Monday)
        date(2024, 5, 1),   // Labour Day
        date(2024, 9, 16),  // Independence Day (Monday)
        date(2024, 11, 18), // Revolution Day (3rd Monday)
        date(2024, 12, 1),  // Change of Federal Government (Sunday)
        date(2024, 12, 2),  // Change of Federal Government (Observed)
        date(2024, 12, 25), // Christmas Day
    ];
    check_holidays(&year_calendar(Country::MX, 2024), &expected);
}

#[test]
fn test_new_zealand_wellington_2023() {
    let cal = HolidayCalendar::load(
        CalendarSelection::new(Country::NZ)
            .with_subdivision("WGN")
            .with_years([2023])
            .with_expand(false),
    )
    .unwrap();
    let expected = vec![
        date(2023, 1, 1),   // New Year's Day (Sunday)
        date(2023, 1, 2),   // Day after New Year's Day
        date(2023, 1, 3),   // New Year's Day (Observed)
        date(2023, 1, 23),  // Wellington Anniversary Day
        date(2023, 2, 6),   // Waitangi Day
        date(2023, 4, 7),   // Good Friday
        date(2023, 4, 10),  // Easter Monday
        date(2023, 4, 25),  // Anzac Day
        date(2023, 6, 5),   // King's Birthday
        date(2023, 7, 14),  // Matariki
        date(2023, 10, 23), // Labour Day
        date(2023, 12, 25), // Christmas Day
        date(2023, 12, 26), // Boxing Day
    ];
    check_holidays(&cal, &expected);
}

#[test]
fn test_germany_bavaria_2022() {
    let cal = HolidayCalendar::load(
        CalendarSelection::new(Country::DE)
            .with_subdivision("BY")
            .with_years([2022])
            .with_expand(false),
    )
    .unwrap();
    let expected = vec![
        date(2022, 1, 1),   // New Year's Day
        date(2022, 1, 6),   // Epiphany
        date(2022, 4, 15),  // Good Friday
        date(2022, 4, 18),  // Easter Monday
        date(2022, 5, 1),   // Labour Day
        date(2022, 5, 26),  // Ascension Day
        date(2022, 6, 6),   // Whit Monday
        date(2022, 6, 16),  // Corpus Christi
        date(2022, 8, 15),  // Assumption of Mary
        date(2022, 10, 3),  // German Unity Day
        date(2022, 11, 1),  // All Saints' Day
        date(2022, 12, 25), // Christmas Day
        date(2022, 12, 26), // Second Day of Christmas
    ];
    check_holidays(&cal, &expected);
}

#[test]
fn names_resolve_through_multiple_years() {
    let cal = HolidayCalendar::load(
        CalendarSelection::new(Country::CA).with_years([2022, 2023]),
    )
    .unwrap();
    assert_eq!(
        cal.holiday_name(date(2022, 9, 30)).as_deref(),
        Some("National Day for Truth and Reconciliation")
    );
    assert_eq!(
        cal.holiday_name(date(2023, 10, 9)).as_deref(),
        Some("Thanksgiving")
    );
    assert_eq!(cal.years().into_iter().collect::<Vec<_>>(), vec![2022, 2023]);
}

proptest! {
    /// Observed entries exist to land on working days; none may ever fall
    /// on a weekend, in any jurisdiction that shifts.
    #[test]
    fn observed_entries_never_fall_on_weekends(year in 1980i32..2100) {
        for country in [Country::US, Country::CA, Country::MX, Country::NZ, Country::AU] {
            let cal = year_calendar(country, year);
            for (d, name) in cal.holidays() {
                if name.ends_with("(Observed)") {
                    prop_assert!(
                        !matches!(d.weekday(), Weekday::Sat | Weekday::Sun),
                        "{country} {d} {name}"
                    );
                }
            }
        }
    }

    /// Jurisdictions that do not shift never produce observed entries.
    #[test]
    fn non_shifting_jurisdictions_have_no_observed_entries(year in 1980i32..2100) {
        for country in [Country::AT, Country::DE] {
            let cal = year_calendar(country, year);
            for (_, name) in cal.holidays() {
                prop_assert!(!name.ends_with("(Observed)"), "{country} {name}");
            }
        }
    }

    /// A non-expanding calendar with no materialized years answers nothing
    /// and stays empty.
    #[test]
    fn frozen_empty_calendar_never_answers(
        year in 1950i32..2150,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let cal = HolidayCalendar::load(
            CalendarSelection::new(Country::US).with_expand(false),
        )
        .unwrap();
        prop_assert_eq!(cal.holiday_name(date(year, month, day)), None);
        prop_assert!(cal.years().is_empty());
    }
}
