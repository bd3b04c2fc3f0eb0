use crate::calc::{weekday_header, HijriDate, HijriMonth, Lang};
use crate::data::OccasionData;
use anyhow::{bail, Context, Result};

pub fn run(key: Option<&str>, lang: Lang, occasions: &OccasionData) -> Result<()> {
    let today = HijriDate::today();
    let month = match key {
        Some(k) => parse_month(k)?,
        None => HijriMonth::of(&today),
    };
    write_month(month, lang, &today, occasions, &mut std::io::stdout())
}

/// Parses a Hijri `YYYY-MM` month.
pub(crate) fn parse_month(input: &str) -> Result<HijriMonth> {
    let Some((y, m)) = input.trim().split_once('-') else {
        bail!("invalid Hijri month '{input}' (expected YYYY-MM)");
    };
    let year: i32 = y
        .parse()
        .with_context(|| format!("invalid Hijri year '{y}'"))?;
    let month: u32 = m
        .parse()
        .with_context(|| format!("invalid Hijri month '{m}'"))?;
    if year < 1 {
        bail!("Hijri year must be 1 or later, got {year}");
    }
    if !(1..=12).contains(&month) {
        bail!("Hijri month must be 1..=12, got {month}");
    }
    Ok(HijriMonth::new(year, month))
}

pub(crate) fn write_month<W: std::io::Write>(
    month: HijriMonth,
    lang: Lang,
    today: &HijriDate,
    occasions: &OccasionData,
    out: &mut W,
) -> Result<()> {
    let first = month.first_day();
    let last = month.last_day();

    writeln!(out, "{} {}", first.month_name(lang), month.year)?;
    if let (Some(start), Some(end)) = (first.to_gregorian(), last.to_gregorian()) {
        writeln!(
            out,
            "{} - {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        )?;
    }
    writeln!(out, "{}", weekday_header(lang).join(" "))?;

    // Padding cells from the neighbouring months are left blank.
    for row in month.grid().chunks(7) {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                if !cell.is_current_month {
                    "  ".to_string()
                } else {
                    format!("{:>2}", cell.date)
                }
            })
            .collect();
        writeln!(out, "{}", line.join(" ").trim_end())?;
    }

    if month.contains(today) {
        writeln!(out, "Today: {}", today.format("DAY, D MONTH YYYY", lang))?;
    }

    let in_month = occasions.in_month(month.month);
    if !in_month.is_empty() {
        writeln!(out, "---")?;
        for o in in_month {
            let Some(date) = o.in_year(month.year) else {
                continue;
            };
            let gregorian = date
                .to_gregorian()
                .map(|g| g.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            writeln!(out, "  {:>2}  {:<12} {}", o.day, gregorian, o.name)?;
        }
    }
    Ok(())
}
