use crate::calc::HijriDate;
use crate::data::AppSettings;
use anyhow::Result;

pub fn run(settings: &AppSettings, format: Option<&str>) -> Result<()> {
    let today = HijriDate::today();
    let template = format.unwrap_or(&settings.date_format);
    write_today(&today, template, settings, &mut std::io::stdout())
}

pub(crate) fn write_today<W: std::io::Write>(
    today: &HijriDate,
    template: &str,
    settings: &AppSettings,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", today.format(template, settings.language))?;
    if let Some(g) = today.to_gregorian() {
        writeln!(out, "{:<11} {}", "Gregorian:", g.format("%Y-%m-%d"))?;
    }
    if let (Some(h), Some(m), Some(s)) = (today.hours(), today.minutes(), today.seconds()) {
        writeln!(out, "{:<11} {:02}:{:02}:{:02}", "Time:", h, m, s)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::Lang;

    fn render(date: &HijriDate, template: &str, lang: Lang) -> String {
        let settings = AppSettings {
            language: lang,
            ..AppSettings::default()
        };
        let mut buf = Vec::new();
        write_today(date, template, &settings, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_today_default_template() {
        let out = render(&HijriDate::new(1446, 9, 1), "DAY, D MONTH YYYY", Lang::En);
        assert!(out.starts_with("Saturday, 1 Ramadan 1446"));
        assert!(out.contains("2025-03-01"));
    }

    #[test]
    fn test_write_today_arabic() {
        let out = render(&HijriDate::new(1446, 9, 1), "D MONTH YYYY", Lang::Ar);
        assert!(out.contains("رمضان"));
    }

    #[test]
    fn test_write_today_without_time_has_no_time_line() {
        let out = render(&HijriDate::new(1446, 9, 1), "YYYY", Lang::En);
        assert!(!out.contains("Time:"));
    }

    #[test]
    fn test_write_today_from_clock_has_time_line() {
        let out = render(&HijriDate::today(), "YYYY", Lang::En);
        assert!(out.contains("Time:"));
    }
}
