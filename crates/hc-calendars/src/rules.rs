//! Date-rule building blocks shared by the country modules.
//!
//! Holiday rules come in a handful of shapes: a fixed month/day, the nth
//! weekday of a month, the last weekday of a month, a date relative to
//! Easter Sunday, or a date snapped to the closest Monday.  The helpers here
//! cover those shapes; each country module composes them.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Build a date from components known to be valid.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Easter Sunday for `year` (Gregorian).
///
/// Anonymous Gregorian computus; valid for any Gregorian year.
pub(crate) fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    ymd(year, month as u32, day as u32)
}

/// The `n`-th (1-based) `weekday` of `month` in `year`.
///
/// Panics if the occurrence does not exist (n = 5 in a short month); callers
/// only use occurrences that exist in every year.
pub(crate) fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u8) -> NaiveDate {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n).unwrap()
}

/// The last `weekday` of `month` in `year`.
pub(crate) fn last_weekday(year: i32, month: u32, weekday: Weekday) -> NaiveDate {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, 5)
        .unwrap_or_else(|| nth_weekday(year, month, weekday, 4))
}

/// The Monday closest to `date` (Fri/Sat/Sun roll forward, Tue–Thu roll
/// back).  Used by the New Zealand anniversary-day rules.
pub(crate) fn closest_monday(date: NaiveDate) -> NaiveDate {
    match date.weekday().num_days_from_monday() {
        0 => date,
        n @ 1..=3 => date - Days::new(n as u64),
        n => date + Days::new((7 - n) as u64),
    }
}

/// `true` for Saturday and Sunday.
pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Shift a weekend date to the nearest working day: Saturday to the
/// preceding Friday, Sunday to the following Monday.  `None` on weekdays.
///
/// The US and Mexican federal convention.
pub(crate) fn nearest_weekday(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => Some(date - Days::new(1)),
        Weekday::Sun => Some(date + Days::new(1)),
        _ => None,
    }
}

/// Shift a weekend date forward to the following Monday.  `None` on
/// weekdays.
///
/// The "Mondayisation" convention of Canada, New Zealand, and Australia.
pub(crate) fn next_monday(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => Some(date + Days::new(2)),
        Weekday::Sun => Some(date + Days::new(1)),
        _ => None,
    }
}
