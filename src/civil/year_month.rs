use crate::{
    civil::{Date, Year},
    error::Error,
    fmt::util::DecimalFormatter,
    util::common::days_in_month,
};

/// A year and month, like `2024-02`.
///
/// # Example
///
/// ```
/// use calendrical::civil::{Date, YearMonth};
///
/// let ym = YearMonth::new(2024, 2)?;
/// assert_eq!(ym.length_of_month(), 29);
/// assert_eq!(ym.at_day(29)?, Date::new(2024, 2, 29)?);
/// assert_eq!(ym.to_string(), "2024-02");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: i8,
}

impl YearMonth {
    /// Creates a new year and month.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year is outside the range of
    /// [`Year`] or when the month isn't in `1..=12`.
    pub fn new(year: i32, month: i8) -> Result<YearMonth, Error> {
        let year = Year::new(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::range("month", month, 1, 12));
        }
        Ok(YearMonth { year: year.get(), month })
    }

    /// Returns the year.
    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month, in `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the number of days in this month.
    #[inline]
    pub fn length_of_month(self) -> i8 {
        days_in_month(i64::from(self.year), self.month)
    }

    /// Returns the date at the given day of this month.
    ///
    /// # Errors
    ///
    /// This returns a range error when the day doesn't exist in this month.
    pub fn at_day(self, day: i8) -> Result<Date, Error> {
        let max_day = self.length_of_month();
        if !(1..=max_day).contains(&day) {
            return Err(Error::range("day", day, 1, max_day));
        }
        Ok(Date::new_unchecked(self.year, self.month, day))
    }
}

impl From<Date> for YearMonth {
    #[inline]
    fn from(date: Date) -> YearMonth {
        YearMonth { year: date.year(), month: date.month() }
    }
}

impl core::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let year = i64::from(self.year);
        let year = DecimalFormatter::new()
            .padding(4)
            .force_sign(year > 9_999)
            .format(year);
        let month =
            DecimalFormatter::new().padding(2).format(i64::from(self.month));
        write!(f, "{}-{}", year.as_str(), month.as_str())
    }
}

impl core::fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}
