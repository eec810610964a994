/*!
A collection of calendar related utility functions.

These routines operate on primitive integers and assume their inputs are
already valid (for example, a month in `1..=12`). Validation is the job of
the public types in `civil`.

# Algorithms

The conversions between civil dates and days since the Unix epoch use the
era based algorithms from Howard Hinnant's "chrono-Compatible Low-Level Date
Algorithms", widened to 64-bit integers so that they cover every year in
`-999_999_999..=999_999_999` (and then some):
- https://howardhinnant.github.io/date_algorithms.html
*/

/// The number of days in a 400 year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// The number of days from 0000-03-01 to 1970-01-01.
const DAYS_FROM_ERA_START_TO_UNIX_EPOCH: i64 = 719_468;

/// Returns true if and only if the given year is a leap year.
///
/// A leap year is a year with 366 days. Typical years have 365 days.
#[inline]
pub(crate) const fn is_leap_year(year: i64) -> bool {
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

/// Returns the number of days in the given year and month.
///
/// This correctly returns `29` when the year is a leap year and the month is
/// February.
#[inline]
pub(crate) const fn days_in_month(year: i64, month: i8) -> i8 {
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ (month >> 3))
    }
}

/// Returns the number of days in the given year.
#[inline]
pub(crate) const fn days_in_year(year: i64) -> i16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the 1-based ordinal day of the year for the given date.
pub(crate) const fn day_of_year(year: i64, month: i8, day: i8) -> i16 {
    // The day of year for the first day of each month in a non-leap year,
    // minus one.
    const BEFORE: [i16; 12] =
        [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    let mut doy = BEFORE[(month - 1) as usize] + (day as i16);
    if month > 2 && is_leap_year(year) {
        doy += 1;
    }
    doy
}

/// Returns the month and day for the given 1-based day of the year.
///
/// The day given must be in `1..=days_in_year(year)`.
pub(crate) const fn month_day_from_day_of_year(
    year: i64,
    mut day_of_year: i16,
) -> (i8, i8) {
    let mut month = 1;
    loop {
        let len = days_in_month(year, month) as i16;
        if day_of_year <= len || month == 12 {
            return (month, day_of_year as i8);
        }
        day_of_year -= len;
        month += 1;
    }
}

/// Converts a Gregorian date to days since the Unix epoch.
#[inline]
pub(crate) const fn to_epoch_day(year: i64, month: i8, day: i8) -> i64 {
    let (month, day) = (month as i64, day as i64);
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100
        + day_of_year;
    era * DAYS_PER_ERA + day_of_era - DAYS_FROM_ERA_START_TO_UNIX_EPOCH
}

/// Converts days since the Unix epoch to a Gregorian date.
#[inline]
pub(crate) const fn from_epoch_day(epoch_day: i64) -> (i64, i8, i8) {
    let z = epoch_day + DAYS_FROM_ERA_START_TO_UNIX_EPOCH;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36524
        - day_of_era / 146_096)
        / 365;
    let day_of_year = day_of_era
        - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * mp + 2) / 5 + 1) as i8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as i8;
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(0));
        assert!(is_leap_year(-400));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2008));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn month_lengths() {
        let lengths: [i8; 12] =
            [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, &len) in lengths.iter().enumerate() {
            let month = i as i8 + 1;
            assert_eq!(days_in_month(2011, month), len, "month {month}");
        }
        assert_eq!(days_in_month(2012, 2), 29);
    }

    #[test]
    fn epoch_days() {
        assert_eq!(to_epoch_day(1970, 1, 1), 0);
        assert_eq!(from_epoch_day(0), (1970, 1, 1));
        assert_eq!(to_epoch_day(1969, 12, 31), -1);
        assert_eq!(from_epoch_day(-1), (1969, 12, 31));
        assert_eq!(to_epoch_day(2000, 3, 1), 11_017);
        assert_eq!(from_epoch_day(11_017), (2000, 3, 1));
        assert_eq!(to_epoch_day(0, 1, 1), -719_528);
        assert_eq!(from_epoch_day(-719_528), (0, 1, 1));
    }

    #[test]
    fn epoch_days_extremes() {
        let min = to_epoch_day(-999_999_999, 1, 1);
        assert_eq!(from_epoch_day(min), (-999_999_999, 1, 1));
        let max = to_epoch_day(999_999_999, 12, 31);
        assert_eq!(from_epoch_day(max), (999_999_999, 12, 31));
        assert_eq!(to_epoch_day(-1_000_000_000, 1, 1), -365_243_219_528);
        assert_eq!(to_epoch_day(1_000_000_000, 12, 31), 365_241_780_837);
    }

    #[test]
    fn day_of_year_round_trip() {
        for &year in &[2007, 2008, -400, 0] {
            let len = days_in_year(year);
            for doy in 1..=len {
                let (month, day) = month_day_from_day_of_year(year, doy);
                assert_eq!(day_of_year(year, month, day), doy);
            }
        }
        assert_eq!(month_day_from_day_of_year(2008, 60), (2, 29));
        assert_eq!(month_day_from_day_of_year(2007, 60), (3, 1));
    }

    quickcheck::quickcheck! {
        fn prop_epoch_day_round_trip(day: i32) -> bool {
            let day = i64::from(day);
            let (y, m, d) = from_epoch_day(day);
            to_epoch_day(y, m, d) == day
        }
    }
}
