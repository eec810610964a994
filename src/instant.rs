use crate::{
    civil::Date,
    duration::{FixedPointDuration, NANOS_PER_SECOND, SECONDS_PER_DAY},
    error::{instant::Error as E, Error, ErrorContext},
    fmt::util::{DecimalFormatter, FractionalFormatter},
    util::common,
};

/// The number of seconds from the Unix epoch to `-1000000000-01-01T00:00:00Z`.
const MIN_SECOND: i64 = -31_557_014_167_219_200;
/// The number of seconds from the Unix epoch to `1000000000-12-31T23:59:59Z`.
const MAX_SECOND: i64 = 31_556_889_864_403_199;

/// An instant on the time-line, measured from the Unix epoch.
///
/// An instant is a number of whole seconds since `1970-01-01T00:00:00Z` plus
/// a nanosecond fraction in the range `0..1_000_000_000`. Like
/// [`FixedPointDuration`], the fraction always moves forward in time, so
/// half a second before the epoch is `-1` seconds and `500_000_000`
/// nanoseconds.
///
/// Instants are bounded to the years `-1000000000` through `1000000000`.
/// Since these bounds are well within the range of a
/// [`FixedPointDuration`], the duration between any two instants is always
/// representable. See [`FixedPointDuration::between`].
///
/// # Display
///
/// The `Display` impl renders an instant as an ISO 8601 timestamp in UTC.
/// The fraction is written in groups of three digits, and omitted entirely
/// when it is zero:
///
/// ```
/// use calendrical::Instant;
///
/// let instant = Instant::new(1_214_818_210, 500)?;
/// assert_eq!(instant.to_string(), "2008-06-30T09:30:10.000000500Z");
/// assert_eq!(Instant::UNIX_EPOCH.to_string(), "1970-01-01T00:00:00Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Instant {
    second: i64,
    nanosecond: i32,
}

impl Instant {
    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const UNIX_EPOCH: Instant = Instant { second: 0, nanosecond: 0 };

    /// The earliest supported instant, `-1000000000-01-01T00:00:00Z`.
    pub const MIN: Instant = Instant { second: MIN_SECOND, nanosecond: 0 };

    /// The latest supported instant,
    /// `1000000000-12-31T23:59:59.999999999Z`.
    pub const MAX: Instant =
        Instant { second: MAX_SECOND, nanosecond: 999_999_999 };

    /// Creates an instant from seconds since the Unix epoch and an
    /// adjustment in nanoseconds.
    ///
    /// The adjustment may be negative or bigger than one second. It is
    /// normalized into the seconds, so `Instant::new(3, -1)` is the same as
    /// `Instant::new(2, 999_999_999)`.
    ///
    /// # Errors
    ///
    /// This returns an error if the resulting instant is outside of the
    /// range `Instant::MIN..=Instant::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Instant;
    ///
    /// let instant = Instant::new(3, -1)?;
    /// assert_eq!(instant.second(), 2);
    /// assert_eq!(instant.nanosecond(), 999_999_999);
    /// assert!(Instant::new(i64::MAX, 0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(second: i64, nano_adjustment: i64) -> Result<Instant, Error> {
        let carry = nano_adjustment.div_euclid(NANOS_PER_SECOND);
        // OK because the remainder is always in `0..1_000_000_000`.
        let nanosecond =
            nano_adjustment.rem_euclid(NANOS_PER_SECOND) as i32;
        let Some(second) = second.checked_add(carry) else {
            return Err(Error::range(
                "second",
                i128::from(second) + i128::from(carry),
                MIN_SECOND,
                MAX_SECOND,
            ));
        };
        Instant::from_normalized(second, nanosecond)
    }

    /// Creates an instant from milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// This returns an error if the instant is out of range, which can only
    /// happen for very large magnitudes.
    pub fn from_millisecond(millisecond: i64) -> Result<Instant, Error> {
        let second = millisecond.div_euclid(1_000);
        let nanos = millisecond.rem_euclid(1_000) * 1_000_000;
        Instant::new(second, nanos)
    }

    /// Returns the current instant from the system clock.
    ///
    /// # Errors
    ///
    /// This returns an error if the system clock reports a time outside
    /// the range of an `Instant`. This is not expected to happen on any
    /// reasonably configured system.
    #[cfg(feature = "std")]
    pub fn now() -> Result<Instant, Error> {
        Instant::try_from(std::time::SystemTime::now())
    }

    /// Returns the whole number of seconds since the Unix epoch.
    ///
    /// This rounds toward negative infinity.
    #[inline]
    pub fn second(self) -> i64 {
        self.second
    }

    /// Returns the fraction of a second, in nanoseconds, that follows
    /// [`Instant::second`]. This is always in `0..1_000_000_000`.
    #[inline]
    pub fn nanosecond(self) -> i32 {
        self.nanosecond
    }

    /// Adds the given duration to this instant.
    ///
    /// # Errors
    ///
    /// This returns an error if the result would be out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{FixedPointDuration, Instant};
    ///
    /// let instant = Instant::new(10, 0)?;
    /// let later = instant.checked_add(FixedPointDuration::of_millis(1_500))?;
    /// assert_eq!(later, Instant::new(11, 500_000_000)?);
    /// assert!(
    ///     Instant::MAX.checked_add(FixedPointDuration::of_nanos(1)).is_err(),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add(
        self,
        duration: FixedPointDuration,
    ) -> Result<Instant, Error> {
        let total = self.as_i128_nanos() + duration.as_i128_nanos();
        Instant::from_i128_nanos(total)
    }

    /// Subtracts the given duration from this instant.
    ///
    /// # Errors
    ///
    /// This returns an error if the result would be out of range.
    pub fn checked_sub(
        self,
        duration: FixedPointDuration,
    ) -> Result<Instant, Error> {
        let total = self.as_i128_nanos() - duration.as_i128_nanos();
        Instant::from_i128_nanos(total)
    }

    /// Returns the duration from this instant until the one given.
    ///
    /// The duration is negative when `other` is before `self`. This never
    /// fails.
    pub fn duration_until(self, other: Instant) -> FixedPointDuration {
        FixedPointDuration::between(self, other)
    }

    /// Returns the civil date of this instant after applying a fixed offset
    /// from UTC.
    ///
    /// The year is returned as an `i64` since instants near the bounds fall
    /// in years not supported by [`Date`]. Callers must check it.
    pub(crate) fn to_civil_with_offset(
        self,
        offset_seconds: i32,
    ) -> (i64, i8, i8) {
        let local = self.second + i64::from(offset_seconds);
        common::from_epoch_day(local.div_euclid(SECONDS_PER_DAY))
    }

    fn from_normalized(
        second: i64,
        nanosecond: i32,
    ) -> Result<Instant, Error> {
        if !(MIN_SECOND..=MAX_SECOND).contains(&second) {
            return Err(Error::range("second", second, MIN_SECOND, MAX_SECOND));
        }
        Ok(Instant { second, nanosecond })
    }

    fn from_i128_nanos(nanos: i128) -> Result<Instant, Error> {
        let nanos_per_second = i128::from(NANOS_PER_SECOND);
        let second = nanos.div_euclid(nanos_per_second);
        // OK because the remainder is always in `0..1_000_000_000`.
        let nanosecond = nanos.rem_euclid(nanos_per_second) as i32;
        let second = i64::try_from(second).map_err(|_| {
            Error::range("second", second, MIN_SECOND, MAX_SECOND)
        })?;
        Instant::from_normalized(second, nanosecond)
    }

    fn as_i128_nanos(self) -> i128 {
        i128::from(self.second) * i128::from(NANOS_PER_SECOND)
            + i128::from(self.nanosecond)
    }
}

impl core::fmt::Debug for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let (year, month, day) = self.to_civil_with_offset(0);
        let second_of_day = self.second.rem_euclid(SECONDS_PER_DAY);
        Date::write_ymd(year, month, day, f)?;

        let two = DecimalFormatter::new().padding(2);
        write!(
            f,
            "T{}:{}:{}",
            two.format(second_of_day / 3_600).as_str(),
            two.format(second_of_day / 60 % 60).as_str(),
            two.format(second_of_day % 60).as_str(),
        )?;
        if self.nanosecond != 0 {
            let precision = if self.nanosecond % 1_000_000 == 0 {
                3
            } else if self.nanosecond % 1_000 == 0 {
                6
            } else {
                9
            };
            let fraction = FractionalFormatter::new()
                .precision(precision)
                .format(self.nanosecond);
            write!(f, ".{}", fraction.as_str())?;
        }
        f.write_str("Z")
    }
}

#[cfg(feature = "std")]
impl TryFrom<std::time::SystemTime> for Instant {
    type Error = Error;

    fn try_from(system_time: std::time::SystemTime) -> Result<Instant, Error> {
        let unix_epoch = std::time::SystemTime::UNIX_EPOCH;
        let result = match system_time.duration_since(unix_epoch) {
            Ok(dur) => FixedPointDuration::try_from(dur),
            Err(err) => {
                trace!(
                    "system time {system_time:?} is before the Unix epoch \
                     by {:?}",
                    err.duration(),
                );
                FixedPointDuration::try_from(err.duration())
                    .and_then(FixedPointDuration::negated)
            }
        };
        result
            .and_then(|dur| Instant::UNIX_EPOCH.checked_add(dur))
            .context(E::ConvertSystemTime)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Instant {
    fn arbitrary(g: &mut quickcheck::Gen) -> Instant {
        use quickcheck::Arbitrary;

        let second = i64::arbitrary(g).clamp(MIN_SECOND, MAX_SECOND);
        let nanosecond = i32::arbitrary(g).rem_euclid(1_000_000_000);
        Instant { second, nanosecond }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Instant>> {
        use quickcheck::Arbitrary;

        alloc::boxed::Box::new(
            (self.second, self.nanosecond)
                .shrink()
                .filter_map(|(s, n)| Instant::new(s, i64::from(n)).ok()),
        )
    }
}
