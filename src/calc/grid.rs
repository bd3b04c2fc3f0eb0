use crate::calc::hijri::{days_in_month, HijriDate};

/// Cells in a month view: 6 rows of 7 days.
pub const GRID_CELLS: usize = 42;

/// One cell of a month view.
///
/// `month` and `year` name the Hijri month the cell's date belongs to, which
/// for padding cells is the previous or next month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarGridCell {
    pub date: u32,
    pub month: u32,
    pub year: i32,
    pub is_current_month: bool,
}

/// A displayed Hijri month, used for pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriMonth {
    pub year: i32,
    pub month: u32,
}

impl HijriMonth {
    pub fn new(year: i32, month: u32) -> Self {
        HijriMonth { year, month }
    }

    /// The month containing `date`.
    pub fn of(date: &HijriDate) -> Self {
        HijriMonth::new(date.year(), date.month())
    }

    pub fn prev(self) -> Self {
        let (year, month) = prev_month(self.year, self.month);
        HijriMonth { year, month }
    }

    pub fn next(self) -> Self {
        let (year, month) = next_month(self.year, self.month);
        HijriMonth { year, month }
    }

    pub fn first_day(self) -> HijriDate {
        HijriDate::new(self.year, self.month, 1)
    }

    pub fn last_day(self) -> HijriDate {
        HijriDate::new(self.year, self.month, self.days())
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn grid(self) -> Vec<CalendarGridCell> {
        build_month_grid(self.year, self.month)
    }

    pub fn contains(self, date: &HijriDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Month 1 wraps to month 12 of the previous year.
///
/// An out-of-range month 0 is treated like month 1.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Month 12 wraps to month 1 of the next year.
///
/// Months past 12 are treated like month 12.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Builds the 42-cell grid for a Hijri month, Sunday first.
///
/// Leading cells are the tail of the previous month, trailing cells the head
/// of the next one, so the 1st lands in the column of its weekday.
pub fn build_month_grid(year: i32, month: u32) -> Vec<CalendarGridCell> {
    let days = days_in_month(year, month);
    let starting_day_of_week = HijriDate::new(year, month, 1).day();

    let (prev_year, prev) = prev_month(year, month);
    let days_in_prev = days_in_month(prev_year, prev);

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for date in (days_in_prev + 1 - starting_day_of_week)..=days_in_prev {
        cells.push(CalendarGridCell {
            date,
            month: prev,
            year: prev_year,
            is_current_month: false,
        });
    }

    for date in 1..=days {
        cells.push(CalendarGridCell {
            date,
            month,
            year,
            is_current_month: true,
        });
    }

    let (next_year, next) = next_month(year, month);
    let remaining = GRID_CELLS.saturating_sub(cells.len()) as u32;
    for date in 1..=remaining {
        cells.push(CalendarGridCell {
            date,
            month: next,
            year: next_year,
            is_current_month: false,
        });
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(cells: &[CalendarGridCell]) -> Vec<u32> {
        cells
            .iter()
            .filter(|c| c.is_current_month)
            .map(|c| c.date)
            .collect()
    }

    #[test]
    fn test_grid_always_42_cells() {
        for year in 1440..=1460 {
            for month in 1..=12 {
                assert_eq!(build_month_grid(year, month).len(), GRID_CELLS, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_grid_current_month_is_contiguous() {
        for year in 1440..=1460 {
            for month in 1..=12 {
                let cells = build_month_grid(year, month);
                let expected: Vec<u32> = (1..=days_in_month(year, month)).collect();
                assert_eq!(current(&cells), expected, "{year}-{month}");
                assert!(
                    cells
                        .iter()
                        .filter(|c| c.is_current_month)
                        .all(|c| c.year == year && c.month == month)
                );
            }
        }
    }

    #[test]
    fn test_first_day_in_weekday_column() {
        for year in 1440..=1460 {
            for month in 1..=12 {
                let cells = build_month_grid(year, month);
                let idx = cells.iter().position(|c| c.is_current_month).unwrap();
                assert_eq!(idx as u32, HijriDate::new(year, month, 1).day());
                assert_eq!(cells[idx].date, 1);
            }
        }
    }

    #[test]
    fn test_ramadan_1446_leading_and_trailing_cells() {
        // 1 Ramadan 1446 is a Saturday; Sha'ban has 29 days
        let cells = build_month_grid(1446, 9);
        let leading: Vec<u32> = cells[..6].iter().map(|c| c.date).collect();
        assert_eq!(leading, vec![24, 25, 26, 27, 28, 29]);
        assert!(cells[..6].iter().all(|c| !c.is_current_month && c.month == 8 && c.year == 1446));

        let trailing = &cells[36..];
        assert_eq!(trailing.len(), 6);
        assert_eq!(trailing[0].date, 1);
        assert_eq!(trailing[5].date, 6);
        assert!(trailing.iter().all(|c| !c.is_current_month && c.month == 10));
    }

    #[test]
    fn test_muharram_grid_borrows_from_previous_year() {
        // 1 Muharram 1446 is a Monday; 1445 is a leap year so Dhu al-Hijjah has 30 days
        let cells = build_month_grid(1446, 1);
        assert_eq!(
            cells[0],
            CalendarGridCell {
                date: 30,
                month: 12,
                year: 1445,
                is_current_month: false,
            }
        );
        assert_eq!(cells[1].date, 1);
        assert!(cells[1].is_current_month);
        assert_eq!(cells[41].date, 11);
        assert_eq!(cells[41].month, 2);
    }

    #[test]
    fn test_dhu_al_hijjah_grid_spills_into_next_year() {
        let cells = build_month_grid(1446, 12);
        let last = cells[41];
        assert_eq!(last.year, 1447);
        assert_eq!(last.month, 1);
        assert!(!last.is_current_month);
    }

    #[test]
    fn test_sunday_start_has_no_leading_cells() {
        // 1 Jumada al-Awwal 1446 is a Sunday
        let cells = build_month_grid(1446, 5);
        assert!(cells[0].is_current_month);
        assert_eq!(cells[0].date, 1);
        assert_eq!(cells.iter().filter(|c| !c.is_current_month).count(), 12);
    }

    #[test]
    fn test_prev_month_wraps() {
        assert_eq!(prev_month(1446, 1), (1445, 12));
        assert_eq!(prev_month(1446, 7), (1446, 6));
    }

    #[test]
    fn test_next_month_wraps() {
        assert_eq!(next_month(1446, 12), (1447, 1));
        assert_eq!(next_month(1446, 7), (1446, 8));
    }

    #[test]
    fn test_out_of_range_months_clamp_when_paging() {
        assert_eq!(prev_month(1446, 0), (1445, 12));
        assert_eq!(next_month(1446, 13), (1447, 1));
        assert_eq!(next_month(1446, u32::MAX), (1447, 1));
        assert_eq!(HijriMonth::new(1446, 0).prev(), HijriMonth::new(1445, 12));
        assert_eq!(HijriMonth::new(1446, 13).next(), HijriMonth::new(1447, 1));
    }

    #[test]
    fn test_malformed_month_grid_does_not_panic() {
        for month in [0, 13, u32::MAX] {
            let cells = build_month_grid(1446, month);
            assert_eq!(cells.len(), GRID_CELLS, "month {month}");
            assert!(cells.iter().any(|c| c.is_current_month));
        }
        assert_eq!(HijriMonth::new(1446, 0).grid().len(), GRID_CELLS);
    }

    #[test]
    fn test_hijri_month_navigation_roundtrip() {
        let m = HijriMonth::new(1446, 1);
        assert_eq!(m.prev(), HijriMonth::new(1445, 12));
        assert_eq!(m.prev().next(), m);
        assert_eq!(HijriMonth::new(1446, 12).next(), HijriMonth::new(1447, 1));
    }

    #[test]
    fn test_hijri_month_helpers() {
        let m = HijriMonth::new(1445, 12);
        assert_eq!(m.days(), 30);
        assert_eq!(m.first_day().date(), 1);
        assert_eq!(m.last_day().date(), 30);
        assert!(m.contains(&HijriDate::new(1445, 12, 15)));
        assert!(!m.contains(&HijriDate::new(1446, 12, 15)));
        assert_eq!(HijriMonth::of(&HijriDate::new(1446, 9, 3)), HijriMonth::new(1446, 9));
        assert_eq!(m.grid(), build_month_grid(1445, 12));
    }
}
