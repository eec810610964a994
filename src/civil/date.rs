use crate::{
    civil::Year,
    error::Error,
    fmt::util::DecimalFormatter,
    util::common::{self, days_in_month},
};

/// A date in the proleptic ISO calendar.
///
/// A `Date` is a triple of year, month and day. Every `Date` is a valid date,
/// so both `2023-02-29` and `2023-11-31` cannot be represented. The year is
/// always within the range of [`Year`].
///
/// This type is intentionally minimal. It exists so that a [`Year`] can be
/// combined with a month and day.
///
/// # Display
///
/// Dates are written as `YYYY-MM-DD`. Years with more than four digits carry
/// a sign:
///
/// ```
/// use calendrical::civil::Date;
///
/// assert_eq!(Date::new(2024, 2, 29)?.to_string(), "2024-02-29");
/// assert_eq!(Date::new(-1, 12, 31)?.to_string(), "-0001-12-31");
/// assert_eq!(Date::new(12_345, 1, 1)?.to_string(), "+12345-01-01");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: i8,
    day: i8,
}

impl Date {
    /// The earliest supported date, `-999999999-01-01`.
    pub const MIN: Date =
        Date::new_unchecked(Year::MIN.get(), 1, 1);

    /// The latest supported date, `+999999999-12-31`.
    pub const MAX: Date =
        Date::new_unchecked(Year::MAX.get(), 12, 31);

    /// Creates a date from a year, month and day.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year is outside the range of
    /// [`Year`], the month isn't in `1..=12` or the day doesn't exist in the
    /// given month.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Date;
    ///
    /// let d = Date::new(2024, 2, 29)?;
    /// assert_eq!((d.year(), d.month(), d.day()), (2024, 2, 29));
    /// assert!(Date::new(2023, 2, 29).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(year: i32, month: i8, day: i8) -> Result<Date, Error> {
        let year = Year::new(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::range("month", month, 1, 12));
        }
        let max_day = days_in_month(i64::from(year.get()), month);
        if !(1..=max_day).contains(&day) {
            return Err(Error::range("day", day, 1, max_day));
        }
        Ok(Date::new_unchecked(year.get(), month, day))
    }

    /// Creates a date from components that are known to be valid.
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, month: i8, day: i8) -> Date {
        Date { year, month, day }
    }

    /// Creates a date from the number of days since `1970-01-01`.
    ///
    /// # Errors
    ///
    /// This returns an error when the date falls outside of the range of
    /// [`Year`].
    pub fn from_epoch_day(day: i64) -> Result<Date, Error> {
        let min = Date::MIN.to_epoch_day();
        let max = Date::MAX.to_epoch_day();
        if !(min..=max).contains(&day) {
            return Err(Error::range("epoch day", day, min, max));
        }
        let (year, month, day) = common::from_epoch_day(day);
        // OK because the epoch day was checked against the range of `Year`.
        Ok(Date::new_unchecked(year as i32, month, day))
    }

    /// Returns the number of days since `1970-01-01`. This is negative for
    /// earlier dates.
    pub fn to_epoch_day(self) -> i64 {
        common::to_epoch_day(i64::from(self.year), self.month, self.day)
    }

    /// Returns the year of this date.
    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month of this date, in `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of the month of this date.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns the 1-based ordinal day of the year.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Date;
    ///
    /// assert_eq!(Date::new(2024, 12, 31)?.day_of_year(), 366);
    /// assert_eq!(Date::new(2023, 3, 1)?.day_of_year(), 60);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn day_of_year(self) -> i16 {
        common::day_of_year(i64::from(self.year), self.month, self.day)
    }

    /// Returns the date immediately following this one.
    ///
    /// # Errors
    ///
    /// This returns an error when this date is [`Date::MAX`].
    #[inline]
    pub fn tomorrow(self) -> Result<Date, Error> {
        Date::from_epoch_day(self.to_epoch_day() + 1)
    }

    /// Returns the date immediately preceding this one.
    ///
    /// # Errors
    ///
    /// This returns an error when this date is [`Date::MIN`].
    #[inline]
    pub fn yesterday(self) -> Result<Date, Error> {
        Date::from_epoch_day(self.to_epoch_day() - 1)
    }

    /// Writes a year, month and day as `YYYY-MM-DD`.
    ///
    /// This accepts years outside the range of [`Year`] so that instants at
    /// the edges of their range can be written too.
    pub(crate) fn write_ymd(
        year: i64,
        month: i8,
        day: i8,
        f: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        let year = DecimalFormatter::new()
            .padding(4)
            .force_sign(year > 9_999)
            .format(year);
        let two = DecimalFormatter::new().padding(2);
        write!(
            f,
            "{}-{}-{}",
            year.as_str(),
            two.format(i64::from(month)).as_str(),
            two.format(i64::from(day)).as_str(),
        )
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        Date::write_ymd(i64::from(self.year), self.month, self.day, f)
    }
}

impl core::fmt::Debug for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Date {
    fn arbitrary(g: &mut quickcheck::Gen) -> Date {
        use quickcheck::Arbitrary;

        let year = Year::arbitrary(g).get();
        let month = (u8::arbitrary(g) % 12 + 1) as i8;
        let max_day = days_in_month(i64::from(year), month);
        let day = (u8::arbitrary(g) % (max_day as u8) + 1) as i8;
        Date::new_unchecked(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn new_errors() {
        insta::assert_snapshot!(
            Date::new(2023, 2, 29).unwrap_err(),
            @"parameter 'day' with value 29 is not in the required range of 1..=28",
        );
        insta::assert_snapshot!(
            Date::new(2023, 13, 1).unwrap_err(),
            @"parameter 'month' with value 13 is not in the required range of 1..=12",
        );
        assert!(Date::new(1_000_000_000, 1, 1).unwrap_err().is_range());
        assert!(Date::new(2023, 4, 31).is_err());
        assert!(Date::new(2023, 4, 0).is_err());
    }

    #[test]
    fn epoch_days() {
        let d = Date::new(1970, 1, 1).unwrap();
        assert_eq!(d.to_epoch_day(), 0);
        assert_eq!(
            Date::from_epoch_day(-1).unwrap(),
            Date::new(1969, 12, 31).unwrap(),
        );
        assert_eq!(
            Date::from_epoch_day(Date::MAX.to_epoch_day()).unwrap(),
            Date::MAX,
        );
        assert!(Date::from_epoch_day(Date::MAX.to_epoch_day() + 1).is_err());
        assert!(Date::from_epoch_day(Date::MIN.to_epoch_day() - 1).is_err());
    }

    #[test]
    fn tomorrow_yesterday() {
        let d = Date::new(2024, 2, 28).unwrap();
        assert_eq!(d.tomorrow().unwrap(), Date::new(2024, 2, 29).unwrap());
        assert_eq!(
            Date::new(2023, 12, 31).unwrap().tomorrow().unwrap(),
            Date::new(2024, 1, 1).unwrap(),
        );
        assert_eq!(
            Date::new(2023, 3, 1).unwrap().yesterday().unwrap(),
            Date::new(2023, 2, 28).unwrap(),
        );
        assert!(Date::MAX.tomorrow().is_err());
        assert!(Date::MIN.yesterday().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Date::MIN.to_string(), "-999999999-01-01");
        assert_eq!(Date::MAX.to_string(), "+999999999-12-31");
        assert_eq!(Date::new(0, 1, 1).unwrap().to_string(), "0000-01-01");
        assert_eq!(
            Date::new(9_999, 12, 31).unwrap().to_string(),
            "9999-12-31",
        );
        assert_eq!(
            Date::new(-10_000, 1, 9).unwrap().to_string(),
            "-10000-01-09",
        );
    }

    #[test]
    fn ordering() {
        let a = Date::new(2024, 1, 31).unwrap();
        let b = Date::new(2024, 2, 1).unwrap();
        let c = Date::new(-2024, 12, 31).unwrap();
        assert!(c < a && a < b);
    }

    quickcheck::quickcheck! {
        fn prop_epoch_day_round_trip(d: Date) -> bool {
            Date::from_epoch_day(d.to_epoch_day()).unwrap() == d
        }

        fn prop_tomorrow_is_next_epoch_day(d: Date) -> quickcheck::TestResult {
            let Ok(next) = d.tomorrow() else {
                return quickcheck::TestResult::discard();
            };
            quickcheck::TestResult::from_bool(
                next.to_epoch_day() == d.to_epoch_day() + 1 && next > d,
            )
        }
    }
}
