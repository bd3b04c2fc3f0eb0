pub mod grid;
pub mod hijri;
pub mod julian;
pub mod locale;

pub use grid::{CalendarGridCell, HijriMonth};
pub use hijri::{days_in_month, days_in_year, HijriDate};
pub use locale::{weekday_header, Lang};
