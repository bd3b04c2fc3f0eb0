use crate::calc::julian::gregorian_to_julian;
use crate::calc::{days_in_month, HijriDate, Lang};
use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// Both sides of a conversion, as printed with `--json`.
#[derive(Serialize, Debug)]
struct Conversion {
    gregorian: String,
    julian_day: f64,
    hijri: HijriDate,
    weekday: &'static str,
    month_name: &'static str,
}

impl Conversion {
    fn new(gregorian: NaiveDate, hijri: HijriDate, lang: Lang) -> Self {
        Conversion {
            gregorian: gregorian.format("%Y-%m-%d").to_string(),
            julian_day: gregorian_to_julian(gregorian.year(), gregorian.month(), gregorian.day()),
            hijri,
            weekday: hijri.day_name(lang),
            month_name: hijri.month_name(lang),
        }
    }
}

/// `convert YYYY-MM-DD`: Gregorian → Hijri.
pub fn run_to_hijri(input: &str, json: bool, lang: Lang) -> Result<()> {
    let gregorian = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("invalid Gregorian date '{input}' (expected YYYY-MM-DD)"))?;
    let hijri = HijriDate::from_gregorian(gregorian);
    debug!(%gregorian, year = hijri.year(), month = hijri.month(), date = hijri.date(), "converted");
    write_conversion(&Conversion::new(gregorian, hijri, lang), json, &mut std::io::stdout())
}

/// `gregorian YYYY-MM-DD`: Hijri → Gregorian.
pub fn run_to_gregorian(input: &str, json: bool, lang: Lang) -> Result<()> {
    let hijri = parse_hijri(input)?;
    let Some(gregorian) = hijri.to_gregorian() else {
        bail!("Hijri date '{input}' is outside the supported Gregorian range");
    };
    debug!(%gregorian, "converted");
    write_conversion(&Conversion::new(gregorian, hijri, lang), json, &mut std::io::stdout())
}

/// Parses and validates a Hijri `YYYY-MM-DD` date.
pub(crate) fn parse_hijri(input: &str) -> Result<HijriDate> {
    let parts: Vec<&str> = input.trim().split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        bail!("invalid Hijri date '{input}' (expected YYYY-MM-DD)");
    };
    let year: i32 = y
        .parse()
        .with_context(|| format!("invalid Hijri year '{y}'"))?;
    let month: u32 = m
        .parse()
        .with_context(|| format!("invalid Hijri month '{m}'"))?;
    let date: u32 = d
        .parse()
        .with_context(|| format!("invalid Hijri day '{d}'"))?;

    if year < 1 {
        bail!("Hijri year must be 1 or later, got {year}");
    }
    if !(1..=12).contains(&month) {
        bail!("Hijri month must be 1..=12, got {month}");
    }
    let hijri = HijriDate::new(year, month, date);
    if !hijri.is_valid() {
        let max = days_in_month(year, month);
        bail!("day {date} is not valid for {year}-{month:02} (max {max})");
    }
    Ok(hijri)
}

fn write_conversion<W: std::io::Write>(c: &Conversion, json: bool, out: &mut W) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(c)?)?;
        return Ok(());
    }
    writeln!(out, "{:<11} {}", "Gregorian:", c.gregorian)?;
    writeln!(
        out,
        "{:<11} {} {} {} ({:04}-{:02}-{:02})",
        "Hijri:",
        c.hijri.date(),
        c.month_name,
        c.hijri.year(),
        c.hijri.year(),
        c.hijri.month(),
        c.hijri.date()
    )?;
    writeln!(out, "{:<11} {}", "Weekday:", c.weekday)?;
    writeln!(out, "{:<11} {}", "Julian day:", c.julian_day)?;
    Ok(())
}
