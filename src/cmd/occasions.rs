use crate::calc::{days_in_year, HijriDate, Lang};
use crate::data::OccasionData;
use anyhow::Result;

pub fn run(year: Option<i32>, lang: Lang, data: &OccasionData) -> Result<()> {
    let year = year.unwrap_or_else(|| HijriDate::today().year());
    write_occasions(data, year, lang, &mut std::io::stdout())
}

pub(crate) fn write_occasions<W: std::io::Write>(
    data: &OccasionData,
    year: i32,
    lang: Lang,
    out: &mut W,
) -> Result<()> {
    let dated = data.for_year(year);
    writeln!(out, "Occasions {} AH ({} days)", year, days_in_year(year))?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<22} {:<12} {}", "Hijri", "Gregorian", "Name")?;
    for d in &dated {
        let hijri = d.hijri.format("D MONTH", lang);
        let gregorian = d
            .gregorian
            .map(|g| g.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "  {:<22} {:<12} {}", hijri, gregorian, d.occasion.name)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} occasion(s)", dated.len())?;
    Ok(())
}
