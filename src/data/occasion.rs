use crate::calc::{days_in_month, HijriDate};
use crate::data::persistence::{get_data_dir, Persistable};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named observance fixed to a Hijri month and day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Occasion {
    pub name: String,
    pub month: u32,
    pub day: u32,
}

impl Occasion {
    pub fn new(name: &str, month: u32, day: u32) -> Self {
        Occasion {
            name: name.to_string(),
            month,
            day,
        }
    }

    /// The occasion's date in `year`, or `None` when the day does not exist
    /// that year (the 30th of a 29-day month).
    pub fn in_year(&self, year: i32) -> Option<HijriDate> {
        if !(1..=12).contains(&self.month) || self.day == 0 {
            return None;
        }
        if self.day > days_in_month(year, self.month) {
            return None;
        }
        Some(HijriDate::new(year, self.month, self.day))
    }
}

/// An occasion resolved to a concrete Hijri and Gregorian date.
#[derive(Debug, Clone)]
pub struct DatedOccasion<'a> {
    pub occasion: &'a Occasion,
    pub hijri: HijriDate,
    pub gregorian: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct OccasionData {
    pub occasions: Vec<Occasion>,
}

impl Persistable for OccasionData {
    fn filename() -> &'static str {
        "occasions.yaml"
    }
}

impl OccasionData {
    /// The list shipped with `init` and used when no occasions.yaml exists.
    pub fn builtin() -> Self {
        let mut data = OccasionData::default();
        data.add(Occasion::new("Islamic New Year", 1, 1));
        data.add(Occasion::new("Ashura", 1, 10));
        data.add(Occasion::new("Mawlid al-Nabi", 3, 12));
        data.add(Occasion::new("Isra and Mi'raj", 7, 27));
        data.add(Occasion::new("Mid-Sha'ban", 8, 15));
        data.add(Occasion::new("First of Ramadan", 9, 1));
        data.add(Occasion::new("Laylat al-Qadr", 9, 27));
        data.add(Occasion::new("Eid al-Fitr", 10, 1));
        data.add(Occasion::new("Day of Arafah", 12, 9));
        data.add(Occasion::new("Eid al-Adha", 12, 10));
        data
    }

    /// Loads occasions.yaml from the data directory, falling back to
    /// [`OccasionData::builtin`] when the file is absent.
    pub fn load_or_builtin() -> Result<Self> {
        Self::load_or_builtin_from(&get_data_dir()?)
    }

    pub fn load_or_builtin_from(dir: &Path) -> Result<Self> {
        if !dir.join(Self::filename()).exists() {
            return Ok(Self::builtin());
        }
        Self::load_from(dir)
    }

    /// Adds an occasion, keeping the list in calendar order.
    pub fn add(&mut self, occasion: Occasion) {
        self.occasions.push(occasion);
        self.occasions.sort_by_key(|o| (o.month, o.day));
    }

    pub fn in_month(&self, month: u32) -> Vec<&Occasion> {
        self.occasions.iter().filter(|o| o.month == month).collect()
    }

    /// Occasions falling on the given Hijri date.
    pub fn on(&self, date: &HijriDate) -> Vec<&Occasion> {
        self.occasions
            .iter()
            .filter(|o| o.month == date.month() && o.day == date.date())
            .collect()
    }

    /// Every occasion that exists in `year`, with its Gregorian date.
    pub fn for_year(&self, year: i32) -> Vec<DatedOccasion<'_>> {
        let mut dated: Vec<DatedOccasion<'_>> = self
            .occasions
            .iter()
            .filter_map(|occasion| {
                occasion.in_year(year).map(|hijri| DatedOccasion {
                    occasion,
                    gregorian: hijri.to_gregorian(),
                    hijri,
                })
            })
            .collect();
        dated.sort_by_key(|d| d.hijri.julian_day());
        dated
    }
}
