//! Gregorian ⇄ Julian Day Number arithmetic.
//!
//! All floors are computed with exact integer division so the results match
//! the real-valued civil-calendar formulas (`365.25`, `30.6001`, ...) without
//! floating point rounding.

/// Real-valued Julian Day of a proleptic Gregorian date at midnight.
///
/// The fractional `.5` comes from the midnight convention. No validation is
/// performed; `month` is expected in 1..=12.
pub fn gregorian_to_julian(year: i32, month: u32, date: u32) -> f64 {
    civil_days(year, month, date) as f64 - 1524.5
}

/// Integer (noon-based) Julian Day Number of a proleptic Gregorian date.
///
/// Equals `gregorian_to_julian(..) + 0.5`; 2000-01-01 is 2451545.
pub fn julian_day_number(year: i32, month: u32, date: u32) -> i64 {
    civil_days(year, month, date) - 1524
}

/// `c + date + e + f` from the civil-calendar algorithm.
fn civil_days(year: i32, month: u32, date: u32) -> i64 {
    let (mut y, mut m) = (year as i64, month as i64);
    // January and February count as months 13 and 14 of the prior year.
    if m < 3 {
        y -= 1;
        m += 12;
    }
    let a = y.div_euclid(100);
    let b = a.div_euclid(4);
    let c = 2 - a + b;
    let e = (1461 * (y + 4716)).div_euclid(4);
    let f = (306_001 * (m + 1)).div_euclid(10_000);
    c + date as i64 + e + f
}

/// Inverse of [`julian_day_number`]: returns the proleptic Gregorian
/// `(year, month, date)`.
///
/// The century correction is applied for every day number, matching the
/// proleptic forward formula rather than switching to the Julian calendar
/// before 1582.
pub fn julian_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    // alpha = floor((jdn - 1867216.25) / 36524.25)
    let alpha = (4 * jdn - 7_468_865).div_euclid(146_097);
    let b = jdn + 1 + alpha - alpha.div_euclid(4) + 1524;
    // c = floor((b - 122.1) / 365.25)
    let c = (20 * b - 2442).div_euclid(7305);
    let d = (1461 * c).div_euclid(4);
    // e = floor((b - d) / 30.6001)
    let e = (10_000 * (b - d)).div_euclid(306_001);

    let date = b - d - (306_001 * e).div_euclid(10_000);
    let month = if e > 13 { e - 13 } else { e - 1 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    (year as i32, month as u32, date as u32)
}

/// Day of week for a Julian Day Number, 0 = Sunday through 6 = Saturday.
pub fn weekday(jdn: i64) -> u32 {
    (jdn + 1).rem_euclid(7) as u32
}
