use serde::{Deserialize, Serialize};

/// Display language for month and weekday names.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ar,
    #[default]
    En,
}

impl Lang {
    pub fn toggle(self) -> Self {
        match self {
            Lang::Ar => Lang::En,
            Lang::En => Lang::Ar,
        }
    }
}

const MONTH_NAMES_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الثاني",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

const MONTH_NAMES_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const DAY_NAMES_AR: [&str; 7] = [
    "الأحد",
    "الإثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

const DAY_NAMES_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Hijri month name for a 1-based month; "Unknown" outside 1..=12.
pub fn month_name(month: u32, lang: Lang) -> &'static str {
    let table = match lang {
        Lang::Ar => &MONTH_NAMES_AR,
        Lang::En => &MONTH_NAMES_EN,
    };
    month
        .checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Weekday name for a 0-based day (0 = Sunday); "Unknown" outside 0..=6.
pub fn day_name(day: u32, lang: Lang) -> &'static str {
    let table = match lang {
        Lang::Ar => &DAY_NAMES_AR,
        Lang::En => &DAY_NAMES_EN,
    };
    table.get(day as usize).copied().unwrap_or("Unknown")
}

/// Two-letter weekday header, Sunday first.
pub fn weekday_header(lang: Lang) -> [&'static str; 7] {
    match lang {
        Lang::Ar => ["أح", "إث", "ثل", "أر", "خم", "جم", "سب"],
        Lang::En => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    }
}
