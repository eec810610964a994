use crate::{
    civil::{Date, Year},
    error::Error,
    fmt::util::DecimalFormatter,
    util::common::days_in_month,
};

/// A month and day without a year, like `--02-29`.
///
/// Any day that exists in the month in some year is valid, so February 29 is
/// a valid `MonthDay`. Whether it exists in a particular year can be checked
/// with [`MonthDay::is_valid_year`].
///
/// `MonthDay` values are ordered by month and then by day.
///
/// # Example
///
/// ```
/// use calendrical::civil::{Date, MonthDay, Year};
///
/// let md = MonthDay::new(2, 29)?;
/// assert_eq!(md.to_string(), "--02-29");
/// assert!(md.is_valid_year(Year::new(2024)?));
/// assert_eq!(md.at_year(Year::new(2023)?), Date::new(2023, 2, 28)?);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct MonthDay {
    month: i8,
    day: i8,
}

impl MonthDay {
    /// Creates a new month and day.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month isn't in `1..=12` or when
    /// the day doesn't exist in the month of a leap year.
    pub fn new(month: i8, day: i8) -> Result<MonthDay, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::range("month", month, 1, 12));
        }
        // Any leap year gives the longest possible month.
        let max_day = days_in_month(2000, month);
        if !(1..=max_day).contains(&day) {
            return Err(Error::range("day", day, 1, max_day));
        }
        Ok(MonthDay { month, day })
    }

    /// Returns the month, in `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of the month.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns true when this month and day exist in the given year.
    #[inline]
    pub fn is_valid_year(self, year: Year) -> bool {
        self.day <= days_in_month(i64::from(year.get()), self.month)
    }

    /// Combines this month and day with a year.
    ///
    /// February 29 resolves to February 28 when the year isn't a leap year.
    pub fn at_year(self, year: Year) -> Date {
        let max_day = days_in_month(i64::from(year.get()), self.month);
        if self.day > max_day {
            debug!(
                "resolved {self} to day {max_day} in year {year}, \
                 since it doesn't exist in that year",
            );
        }
        Date::new_unchecked(year.get(), self.month, self.day.min(max_day))
    }
}

impl From<Date> for MonthDay {
    #[inline]
    fn from(date: Date) -> MonthDay {
        MonthDay { month: date.month(), day: date.day() }
    }
}

impl core::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let two = DecimalFormatter::new().padding(2);
        write!(
            f,
            "--{}-{}",
            two.format(i64::from(self.month)).as_str(),
            two.format(i64::from(self.day)).as_str(),
        )
    }
}

impl core::fmt::Debug for MonthDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}
