use alloc::string::String;

use crate::{
    civil::{Date, MonthDay, YearMonth},
    clock::Clock,
    error::{civil::Error as E, Error, ErrorContext},
    fmt::year::YearFormat,
    range::ValueRange,
    util::common,
};

/// A field that can be read from a [`Year`].
///
/// See [`Year::get_field`] and [`Year::range`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum YearField {
    /// The proleptic year, which may be zero or negative.
    Year,
    /// The year counted within its era.
    ///
    /// In the common era this is the same as the proleptic year. Before it,
    /// year `0` is year `1` of its era, year `-1` is year `2` and so on.
    YearOfEra,
    /// The era, which is `1` for proleptic years greater than zero and `0`
    /// otherwise.
    Era,
}

/// A year in the proleptic ISO calendar, like `2024`.
///
/// A `Year` is always in the range `-999_999_999..=999_999_999`. Year `0` is
/// `1 BCE` and year `-1` is `2 BCE`. The leap year rules of the Gregorian
/// calendar are applied to every year, including those before the calendar
/// was introduced.
///
/// # Parsing and printing
///
/// The `FromStr` impl and serde use [`YearFormat::new`]: at least four
/// digits, with a leading sign only when the year doesn't fit in four digits
/// or is negative. `Display` writes the plain integer.
///
/// ```
/// use calendrical::{civil::Year, fmt::year::YearFormat};
///
/// let year: Year = "2024".parse()?;
/// assert_eq!(year.get(), 2024);
/// assert_eq!(Year::new(-12)?.to_string(), "-12");
/// assert_eq!(YearFormat::new().format(Year::new(-12)?)?, "-0012");
/// assert_eq!(YearFormat::new().format(Year::new(12_345)?)?, "+12345");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Lenient resolution
///
/// Combining a year with a month and day never fails. When the day doesn't
/// exist in the year, which only happens for February 29, the last valid day
/// of the month is used instead:
///
/// ```
/// use calendrical::civil::{Date, MonthDay, Year};
///
/// let leap_day = MonthDay::new(2, 29)?;
/// assert_eq!(
///     Year::new(2024)?.at_month_day(leap_day),
///     Date::new(2024, 2, 29)?,
/// );
/// assert_eq!(
///     Year::new(2023)?.at_month_day(leap_day),
///     Date::new(2023, 2, 28)?,
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Year {
    year: i32,
}

impl Year {
    /// The minimum supported year.
    pub const MIN: Year = Year { year: -999_999_999 };

    /// The maximum supported year.
    pub const MAX: Year = Year { year: 999_999_999 };

    /// Creates a new year.
    ///
    /// # Errors
    ///
    /// This returns a range error when the given year is outside of
    /// `Year::MIN..=Year::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Year;
    ///
    /// assert_eq!(Year::new(2024)?.get(), 2024);
    /// assert!(Year::new(1_000_000_000).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(year: i32) -> Result<Year, Error> {
        Year::from_i64(i64::from(year))
    }

    pub(crate) fn from_i64(year: i64) -> Result<Year, Error> {
        let (min, max) = (Year::MIN.get(), Year::MAX.get());
        if !(i64::from(min)..=i64::from(max)).contains(&year) {
            return Err(Error::range("year", year, min, max));
        }
        // OK because the range check above is narrower than `i32`.
        Ok(Year { year: year as i32 })
    }

    /// Returns the current year from the system clock in UTC.
    ///
    /// # Errors
    ///
    /// This returns an error when the system clock reports a time that
    /// can't be represented.
    #[cfg(feature = "std")]
    pub fn now() -> Result<Year, Error> {
        Year::now_with_clock(&crate::clock::SystemClock)
    }

    /// Returns the current year according to the given clock.
    ///
    /// The year is determined from the local date of the clock's instant
    /// using the clock's UTC offset.
    ///
    /// # Errors
    ///
    /// This returns an error when the clock fails or when its local date is
    /// outside the range of `Year`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::Year, clock::FixedClock, Instant};
    ///
    /// let clock = FixedClock::utc(Instant::from_millisecond(0)?);
    /// assert_eq!(Year::now_with_clock(&clock)?, Year::new(1970)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn now_with_clock<C: Clock + ?Sized>(
        clock: &C,
    ) -> Result<Year, Error> {
        let instant = clock.instant().context(E::NowFromClock)?;
        let offset = clock.offset_seconds();
        let (year, _, _) = instant.to_civil_with_offset(offset);
        Year::from_i64(year)
            .map_err(|err| {
                warn!(
                    "clock reported {instant} with offset {offset}s, \
                     which is outside the supported range of years: {err}",
                );
                err
            })
            .context(E::NowFromClock)
    }

    /// Parses a year using the default [`YearFormat`].
    ///
    /// # Errors
    ///
    /// This returns a parse error when the input isn't a year in the
    /// default format, or a range error wrapped in a parse error when the
    /// year is out of range.
    #[inline]
    pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Year, Error> {
        YearFormat::new().parse(input)
    }

    /// Parses a year using the given format.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::Year, fmt::year::YearFormat};
    ///
    /// let fmt = YearFormat::from_pattern("yyyy")?;
    /// assert_eq!(Year::parse_with("0001", &fmt)?, Year::new(1)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse_with<I: AsRef<[u8]>>(
        input: I,
        format: &YearFormat,
    ) -> Result<Year, Error> {
        format.parse(input)
    }

    /// Formats this year using the given format.
    ///
    /// # Errors
    ///
    /// This returns an error when the year can't be printed with the given
    /// format, for example because it has too many digits.
    #[inline]
    pub fn format_with(self, format: &YearFormat) -> Result<String, Error> {
        format.format(self)
    }

    /// Returns this year as a primitive integer.
    #[inline]
    pub const fn get(self) -> i32 {
        self.year
    }

    /// Returns the value of the given field for this year.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::{Year, YearField};
    ///
    /// let year = Year::new(-1)?;
    /// assert_eq!(year.get_field(YearField::Year), -1);
    /// assert_eq!(year.get_field(YearField::YearOfEra), 2);
    /// assert_eq!(year.get_field(YearField::Era), 0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get_field(self, field: YearField) -> i64 {
        let year = i64::from(self.year);
        match field {
            YearField::Year => year,
            YearField::YearOfEra if year < 1 => 1 - year,
            YearField::YearOfEra => year,
            YearField::Era => i64::from(year >= 1),
        }
    }

    /// Returns the range of valid values of the given field.
    ///
    /// The range of the year of era depends on the era this year is in,
    /// since the era before year `1` ends one year later.
    pub fn range(self, field: YearField) -> ValueRange {
        let (min, max) =
            (i64::from(Year::MIN.year), i64::from(Year::MAX.year));
        let (lo, hi) = match field {
            YearField::Year => (min, max),
            YearField::YearOfEra if self.year < 1 => (1, max + 1),
            YearField::YearOfEra => (1, max),
            YearField::Era => (0, 1),
        };
        ValueRange::fixed_unchecked(lo, hi)
    }

    /// Returns true when this is a leap year.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Year;
    ///
    /// assert!(Year::new(2000)?.is_leap());
    /// assert!(!Year::new(1900)?.is_leap());
    /// assert!(Year::new(0)?.is_leap());
    /// assert!(Year::new(-4)?.is_leap());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn is_leap(self) -> bool {
        common::is_leap_year(i64::from(self.year))
    }

    /// Returns the number of days in this year, either 365 or 366.
    #[inline]
    pub fn length(self) -> i16 {
        common::days_in_year(i64::from(self.year))
    }

    /// Returns the year that is `years` after this one.
    ///
    /// # Errors
    ///
    /// This returns a range error when the result is outside of
    /// `Year::MIN..=Year::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Year;
    ///
    /// let year = Year::new(2024)?;
    /// assert_eq!(year.plus_years(-2025)?, Year::new(-1)?);
    /// assert!(Year::MAX.plus_years(1).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus_years(self, years: i64) -> Result<Year, Error> {
        if years == 0 {
            return Ok(self);
        }
        let sum = i128::from(self.year) + i128::from(years);
        let year = i64::try_from(sum).map_err(|_| {
            Error::range("year", sum, Year::MIN.year, Year::MAX.year)
        })?;
        Year::from_i64(year)
    }

    /// Returns the year that is `years` before this one.
    ///
    /// # Errors
    ///
    /// This returns a range error when the result is outside of
    /// `Year::MIN..=Year::MAX`.
    pub fn minus_years(self, years: i64) -> Result<Year, Error> {
        if years == 0 {
            return Ok(self);
        }
        let diff = i128::from(self.year) - i128::from(years);
        let year = i64::try_from(diff).map_err(|_| {
            Error::range("year", diff, Year::MIN.year, Year::MAX.year)
        })?;
        Year::from_i64(year)
    }

    /// Returns true when this year is strictly after `other`.
    #[inline]
    pub fn is_after(self, other: Year) -> bool {
        self > other
    }

    /// Returns true when this year is strictly before `other`.
    #[inline]
    pub fn is_before(self, other: Year) -> bool {
        self < other
    }

    /// Returns true when the given month and day exist in this year.
    ///
    /// This is only false for February 29 in a non-leap year.
    #[inline]
    pub fn is_valid_month_day(self, month_day: MonthDay) -> bool {
        month_day.is_valid_year(self)
    }

    /// Combines this year with a month and day.
    ///
    /// February 29 resolves to February 28 in a non-leap year.
    #[inline]
    pub fn at_month_day(self, month_day: MonthDay) -> Date {
        month_day.at_year(self)
    }

    /// Returns the date at the given 1-based day of this year.
    ///
    /// # Errors
    ///
    /// This returns a range error when the day isn't in the range
    /// `1..=self.length()`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::{Date, Year};
    ///
    /// let year = Year::new(2024)?;
    /// assert_eq!(year.at_day(60)?, Date::new(2024, 2, 29)?);
    /// assert_eq!(year.at_day(366)?, Date::new(2024, 12, 31)?);
    /// assert!(Year::new(2023)?.at_day(366).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn at_day(self, day_of_year: i16) -> Result<Date, Error> {
        let length = self.length();
        if !(1..=length).contains(&day_of_year) {
            return Err(Error::range("day of year", day_of_year, 1, length)
                .context(E::DayOfYear { year: self.year }));
        }
        let (month, day) = common::month_day_from_day_of_year(
            i64::from(self.year),
            day_of_year,
        );
        Ok(Date::new_unchecked(self.year, month, day))
    }

    /// Combines this year with a month.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month isn't in `1..=12`.
    #[inline]
    pub fn at_month(self, month: i8) -> Result<YearMonth, Error> {
        YearMonth::new(self.year, month)
    }

    /// Returns the given date moved into this year.
    ///
    /// The month and day are kept, except that February 29 resolves to
    /// February 28 in a non-leap year.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::{Date, Year};
    ///
    /// let date = Date::new(2024, 2, 29)?;
    /// assert_eq!(
    ///     Year::new(1999)?.adjust_date(date),
    ///     Date::new(1999, 2, 28)?,
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn adjust_date(self, date: Date) -> Date {
        if date.year() == self.year {
            return date;
        }
        // OK because every date has a month and day that exist in some year.
        match MonthDay::new(date.month(), date.day()) {
            Ok(month_day) => month_day.at_year(self),
            Err(_) => date,
        }
    }
}

impl From<Date> for Year {
    #[inline]
    fn from(date: Date) -> Year {
        Year { year: date.year() }
    }
}

impl From<YearMonth> for Year {
    #[inline]
    fn from(year_month: YearMonth) -> Year {
        Year { year: year_month.year() }
    }
}

impl From<Year> for i32 {
    #[inline]
    fn from(year: Year) -> i32 {
        year.get()
    }
}

impl TryFrom<i32> for Year {
    type Error = Error;

    #[inline]
    fn try_from(year: i32) -> Result<Year, Error> {
        Year::new(year)
    }
}

impl core::str::FromStr for Year {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Year, Error> {
        Year::parse(s)
    }
}

impl core::fmt::Display for Year {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.year)
    }
}

impl core::fmt::Debug for Year {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Year {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        use serde::ser::Error as _;

        let text =
            YearFormat::new().format(*self).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Year {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Year, D::Error> {
        use serde::de;

        struct YearVisitor;

        impl<'de> de::Visitor<'de> for YearVisitor {
            type Value = Year;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a year string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Year, E> {
                Year::parse(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Year, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_bytes(YearVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Year {
    fn arbitrary(g: &mut quickcheck::Gen) -> Year {
        use quickcheck::Arbitrary;

        let span = i64::from(Year::MAX.year) - i64::from(Year::MIN.year) + 1;
        let year =
            i64::from(Year::MIN.year) + i64::arbitrary(g).rem_euclid(span);
        Year { year: year as i32 }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Year>> {
        use quickcheck::Arbitrary;

        alloc::boxed::Box::new(
            self.year.shrink().filter_map(|year| Year::new(year).ok()),
        )
    }
}
