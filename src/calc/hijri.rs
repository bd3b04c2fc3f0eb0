//! Tabular (Kuwaiti algorithm) Hijri calendar.
//!
//! Conversions go through the Julian Day Number. The 30-year cycle with 11
//! leap years is an arithmetic approximation; it can differ from
//! sighting-based calendars by a day or two around month boundaries.

use crate::calc::julian::{julian_day_number, julian_to_gregorian, weekday};
use crate::calc::locale::{day_name, month_name, Lang};
use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

/// JDN of the Hijri epoch reference point used by the algorithm.
const HIJRI_EPOCH: i64 = 1_948_440;

/// Positions of the leap years within each 30-year cycle.
const LEAP_YEARS: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// A date in the tabular Hijri calendar.
///
/// Values are immutable; use [`HijriDate::new`] or the conversions to build
/// another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HijriDate {
    year: i32,
    month: u32,
    date: u32,
    day: u32,
    #[serde(skip)]
    time: Option<NaiveTime>,
}

impl HijriDate {
    /// Builds a date from an explicit Hijri triple and derives its weekday.
    ///
    /// The triple is not validated; see [`HijriDate::is_valid`].
    pub fn new(year: i32, month: u32, date: u32) -> Self {
        HijriDate {
            year,
            month,
            date,
            day: weekday(hijri_to_julian(year, month, date)),
            time: None,
        }
    }

    /// Converts a Gregorian calendar date.
    pub fn from_gregorian(gregorian: NaiveDate) -> Self {
        let (year, month, date) =
            gregorian_to_hijri(gregorian.year(), gregorian.month(), gregorian.day());
        HijriDate {
            year,
            month,
            date,
            day: gregorian.weekday().num_days_from_sunday(),
            time: None,
        }
    }

    /// Today according to the local system clock, with the wall-clock time.
    pub fn today() -> Self {
        let now = Local::now();
        HijriDate {
            time: Some(now.time()),
            ..Self::from_gregorian(now.date_naive())
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1..=12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month, 1..=30.
    pub fn date(&self) -> u32 {
        self.date
    }

    /// Day of week, 0 = Sunday.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hours(&self) -> Option<u32> {
        self.time.map(|t| t.hour())
    }

    pub fn minutes(&self) -> Option<u32> {
        self.time.map(|t| t.minute())
    }

    pub fn seconds(&self) -> Option<u32> {
        self.time.map(|t| t.second())
    }

    /// True when the month is 1..=12 and the date fits that month.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.date >= 1
            && self.date <= days_in_month(self.year, self.month)
    }

    pub fn julian_day(&self) -> i64 {
        hijri_to_julian(self.year, self.month, self.date)
    }

    /// The Gregorian date of this day, or `None` outside chrono's range.
    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        let (y, m, d) = hijri_to_gregorian(self.year, self.month, self.date);
        NaiveDate::from_ymd_opt(y, m, d)
    }

    pub fn month_name(&self, lang: Lang) -> &'static str {
        month_name(self.month, lang)
    }

    pub fn day_name(&self, lang: Lang) -> &'static str {
        day_name(self.day, lang)
    }

    /// Substitutes `YYYY`, `MM`, `M`, `DD`, `D`, `MONTH` and `DAY` in
    /// `template`.
    ///
    /// Tokens are matched left to right, longest first, so `MONTH` is never
    /// read as `M` followed by text. Substituted values are not rescanned.
    pub fn format(&self, template: &str, lang: Lang) -> String {
        const TOKENS: [&str; 7] = ["YYYY", "MONTH", "DAY", "MM", "DD", "M", "D"];

        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;
        while !rest.is_empty() {
            match TOKENS.iter().find(|t| rest.starts_with(*t)) {
                Some(token) => {
                    match *token {
                        "YYYY" => out.push_str(&self.year.to_string()),
                        "MONTH" => out.push_str(self.month_name(lang)),
                        "DAY" => out.push_str(self.day_name(lang)),
                        "MM" => out.push_str(&format!("{:02}", self.month)),
                        "DD" => out.push_str(&format!("{:02}", self.date)),
                        "M" => out.push_str(&self.month.to_string()),
                        _ => out.push_str(&self.date.to_string()),
                    }
                    rest = &rest[token.len()..];
                }
                None => {
                    let mut chars = rest.chars();
                    if let Some(c) = chars.next() {
                        out.push(c);
                    }
                    rest = chars.as_str();
                }
            }
        }
        out
    }
}

/// Converts a proleptic Gregorian date to a Hijri `(year, month, date)`.
pub fn gregorian_to_hijri(year: i32, month: u32, date: u32) -> (i32, u32, u32) {
    julian_to_hijri(julian_day_number(year, month, date))
}

/// Converts a Julian Day Number to a Hijri `(year, month, date)`.
pub fn julian_to_hijri(jdn: i64) -> (i32, u32, u32) {
    let l = jdn - HIJRI_EPOCH + 10632;
    // Complete 30-year cycles
    let n = (l - 1).div_euclid(10631);
    let l1 = l - 10631 * n + 354;
    // Year within the cycle
    let j = (10985 - l1).div_euclid(5316) * (50 * l1).div_euclid(17719)
        + l1.div_euclid(5670) * (43 * l1).div_euclid(15238);
    let l2 = l1
        - (30 - j).div_euclid(15) * (17719 * j).div_euclid(50)
        - j.div_euclid(16) * (15238 * j).div_euclid(43)
        + 29;

    let month = (24 * l2).div_euclid(709);
    let date = l2 - (709 * month).div_euclid(24);
    let year = 30 * n + j - 30;
    (year as i32, month as u32, date as u32)
}

/// Julian Day Number of a Hijri date.
pub fn hijri_to_julian(year: i32, month: u32, date: u32) -> i64 {
    let (y, m, d) = (year as i64, month as i64, date as i64);
    (11 * y + 3).div_euclid(30) + 354 * y + 30 * m - (m - 1).div_euclid(2) + d + HIJRI_EPOCH
        - 385
}

/// Converts a Hijri date to a proleptic Gregorian `(year, month, date)`.
pub fn hijri_to_gregorian(year: i32, month: u32, date: u32) -> (i32, u32, u32) {
    julian_to_gregorian(hijri_to_julian(year, month, date))
}

pub fn is_leap_year(year: i32) -> bool {
    LEAP_YEARS.contains(&year.rem_euclid(30))
}

/// 30 for odd months and for month 12 of a leap year, otherwise 29.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 12 && is_leap_year(year) {
        30
    } else if month % 2 == 0 {
        29
    } else {
        30
    }
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 355 } else { 354 }
}
