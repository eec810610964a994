use core::time::Duration;

use crate::{
    error::{duration::Error as E, Error},
    instant::Instant,
    unit::PeriodUnit,
};

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_MICRO: i64 = 1_000;
const MILLIS_PER_SECOND: i64 = 1_000;
const MICROS_PER_SECOND: i64 = 1_000_000;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// A signed amount of time with nanosecond precision.
///
/// A fixed-point duration is stored as a signed 64-bit number of whole
/// seconds plus a fraction of a second in nanoseconds. The fraction is always
/// in the range `0..=999_999_999`, even when the duration is negative. For
/// example, `-0.4` seconds is stored as `-1` seconds plus `600,000,000`
/// nanoseconds.
///
/// Since the representation is canonical, equality, ordering and hashing
/// compare the `(seconds, nanos)` pair directly.
///
/// A duration has no calendar semantics. A day is always `86,400` seconds.
/// Use [`PeriodFields`](crate::period::PeriodFields) to keep track of
/// amounts of calendar units like months and years.
///
/// # Parsing and printing
///
/// The `FromStr` and `Display` impls use the ISO 8601 duration format
/// restricted to days, hours, minutes and (fractional) seconds:
///
/// ```
/// use calendrical::FixedPointDuration;
///
/// let dur: FixedPointDuration = "PT2H1M1.5S".parse()?;
/// assert_eq!(dur, FixedPointDuration::of_seconds_nanos(7_261, 500_000_000)?);
/// assert_eq!(dur.to_string(), "PT2H1M1.5S");
///
/// // Days are converted to 24 hour periods and
/// // are printed as hours.
/// let dur: FixedPointDuration = "P2DT3H".parse()?;
/// assert_eq!(dur.to_string(), "PT51H");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Arithmetic
///
/// All arithmetic is checked. When a result cannot be represented, an error
/// is returned instead:
///
/// ```
/// use calendrical::FixedPointDuration;
///
/// let dur = FixedPointDuration::of_seconds_nanos(-4, 666_666_667)?;
/// let third = dur.divided_by(3)?;
/// assert_eq!(third.seconds(), -2);
/// assert_eq!(third.nano(), 888_888_889);
///
/// assert!(FixedPointDuration::MAX.plus_nanos(1).unwrap_err().is_overflow());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct FixedPointDuration {
    seconds: i64,
    nanos: i32,
}

/// Constants and constructors.
impl FixedPointDuration {
    /// A duration of zero time.
    pub const ZERO: FixedPointDuration =
        FixedPointDuration { seconds: 0, nanos: 0 };

    /// The minimum possible duration.
    pub const MIN: FixedPointDuration =
        FixedPointDuration { seconds: i64::MIN, nanos: 0 };

    /// The maximum possible duration.
    pub const MAX: FixedPointDuration =
        FixedPointDuration { seconds: i64::MAX, nanos: 999_999_999 };

    /// Creates a duration from whole seconds and an already normalized
    /// nanosecond fraction.
    pub(crate) const fn new_unchecked(
        seconds: i64,
        nanos: i32,
    ) -> FixedPointDuration {
        debug_assert!(0 <= nanos && (nanos as i64) < NANOS_PER_SECOND);
        FixedPointDuration { seconds, nanos }
    }

    /// Creates a duration from whole seconds and a nanosecond adjustment that
    /// may be out of range, returning `None` if carrying the adjustment into
    /// the seconds overflows.
    const fn checked_new(
        seconds: i64,
        nano_adjustment: i64,
    ) -> Option<FixedPointDuration> {
        let carry = nano_adjustment.div_euclid(NANOS_PER_SECOND);
        let nanos = nano_adjustment.rem_euclid(NANOS_PER_SECOND) as i32;
        match seconds.checked_add(carry) {
            Some(seconds) => Some(FixedPointDuration { seconds, nanos }),
            None => None,
        }
    }

    /// Creates a duration from a number of whole seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let dur = FixedPointDuration::of_seconds(-5);
    /// assert_eq!((dur.seconds(), dur.nano()), (-5, 0));
    /// ```
    #[inline]
    pub const fn of_seconds(seconds: i64) -> FixedPointDuration {
        FixedPointDuration { seconds, nanos: 0 }
    }

    /// Creates a duration from a number of whole seconds and an adjustment
    /// in nanoseconds.
    ///
    /// The adjustment may be negative or bigger than one second. It is
    /// carried into (or borrowed from) the seconds.
    ///
    /// # Errors
    ///
    /// This returns an error if carrying the adjustment overflows the seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let dur = FixedPointDuration::of_seconds_nanos(2, -1)?;
    /// assert_eq!((dur.seconds(), dur.nano()), (1, 999_999_999));
    ///
    /// let dur = FixedPointDuration::of_seconds_nanos(3, 2_000_000_001)?;
    /// assert_eq!((dur.seconds(), dur.nano()), (5, 1));
    ///
    /// assert!(FixedPointDuration::of_seconds_nanos(
    ///     i64::MAX,
    ///     1_000_000_000,
    /// ).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_seconds_nanos(
        seconds: i64,
        nano_adjustment: i64,
    ) -> Result<FixedPointDuration, Error> {
        FixedPointDuration::checked_new(seconds, nano_adjustment).ok_or_else(
            || {
                Error::from(E::Overflow {
                    operation: "creating from seconds and nanoseconds",
                })
            },
        )
    }

    /// Creates a duration from a number of minutes.
    ///
    /// # Errors
    ///
    /// This returns an error if the number of seconds overflows.
    pub fn of_minutes(minutes: i64) -> Result<FixedPointDuration, Error> {
        FixedPointDuration::ZERO.plus_minutes(minutes)
    }

    /// Creates a duration from a number of hours.
    ///
    /// # Errors
    ///
    /// This returns an error if the number of seconds overflows.
    pub fn of_hours(hours: i64) -> Result<FixedPointDuration, Error> {
        FixedPointDuration::ZERO.plus_hours(hours)
    }

    /// Creates a duration from a number of standard 24 hour days.
    ///
    /// # Errors
    ///
    /// This returns an error if the number of seconds overflows.
    pub fn of_days(days: i64) -> Result<FixedPointDuration, Error> {
        FixedPointDuration::ZERO.plus_days(days)
    }

    /// Creates a duration from a number of milliseconds.
    ///
    /// This never fails since every `i64` number of milliseconds fits.
    /// Negative values are floored, so the nanosecond fraction is still
    /// positive.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let dur = FixedPointDuration::of_millis(-1);
    /// assert_eq!((dur.seconds(), dur.nano()), (-1, 999_000_000));
    /// ```
    #[inline]
    pub const fn of_millis(millis: i64) -> FixedPointDuration {
        let seconds = millis.div_euclid(MILLIS_PER_SECOND);
        let nanos = millis.rem_euclid(MILLIS_PER_SECOND) * NANOS_PER_MILLI;
        FixedPointDuration { seconds, nanos: nanos as i32 }
    }

    /// Creates a duration from a number of microseconds.
    ///
    /// Like [`FixedPointDuration::of_millis`], this never fails.
    #[inline]
    pub const fn of_micros(micros: i64) -> FixedPointDuration {
        let seconds = micros.div_euclid(MICROS_PER_SECOND);
        let nanos = micros.rem_euclid(MICROS_PER_SECOND) * NANOS_PER_MICRO;
        FixedPointDuration { seconds, nanos: nanos as i32 }
    }

    /// Creates a duration from a number of nanoseconds.
    ///
    /// This uses floor division, so `-1` nanoseconds is `-1` seconds plus
    /// `999,999,999` nanoseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let dur = FixedPointDuration::of_nanos(-1);
    /// assert_eq!((dur.seconds(), dur.nano()), (-1, 999_999_999));
    /// ```
    #[inline]
    pub const fn of_nanos(nanos: i64) -> FixedPointDuration {
        let seconds = nanos.div_euclid(NANOS_PER_SECOND);
        let nanos = nanos.rem_euclid(NANOS_PER_SECOND);
        FixedPointDuration { seconds, nanos: nanos as i32 }
    }

    /// Creates a duration from an amount of the given unit.
    ///
    /// Only units with an exact duration are accepted. Days are treated as
    /// 24 hours.
    ///
    /// # Errors
    ///
    /// This returns an invalid parameter error when the unit's duration is
    /// estimated (like months), and an overflow error when the amount is too
    /// big.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{FixedPointDuration, Unit};
    ///
    /// assert_eq!(
    ///     FixedPointDuration::of(3, Unit::HalfDay)?,
    ///     FixedPointDuration::of_hours(36)?,
    /// );
    /// assert!(FixedPointDuration::of(1, Unit::Week).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of<U: PeriodUnit>(
        amount: i64,
        unit: U,
    ) -> Result<FixedPointDuration, Error> {
        FixedPointDuration::ZERO.plus_amount(amount, unit)
    }

    /// Returns the duration from `start` to `end`.
    ///
    /// The result is negative when `end` is before `start`. This never fails
    /// since the range of an [`Instant`] is much smaller than the range of a
    /// duration.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{FixedPointDuration, Instant};
    ///
    /// let start = Instant::new(10, 500_000_000)?;
    /// let end = Instant::new(12, 0)?;
    /// let dur = FixedPointDuration::between(start, end);
    /// assert_eq!(dur.to_string(), "PT1.5S");
    /// assert_eq!(
    ///     FixedPointDuration::between(end, start).to_string(),
    ///     "PT-1.5S",
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn between(start: Instant, end: Instant) -> FixedPointDuration {
        let mut seconds = end.second() - start.second();
        let mut nanos = end.nanosecond() - start.nanosecond();
        if nanos < 0 {
            seconds -= 1;
            nanos += NANOS_PER_SECOND as i32;
        }
        FixedPointDuration { seconds, nanos }
    }

    /// Parses an ISO 8601 duration like `PT1H30M` or `P2DT0.5S`.
    ///
    /// Designators may be upper or lower case, and both `.` and `,` are
    /// accepted as the decimal separator for fractional seconds. Each
    /// component may carry its own sign, and a leading sign negates the
    /// whole duration.
    ///
    /// # Errors
    ///
    /// This returns a parse error, with the offset of the failure, if the
    /// text is not a valid duration or if the total overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let dur = FixedPointDuration::parse("PT12M-0.35S")?;
    /// assert_eq!((dur.seconds(), dur.nano()), (719, 650_000_000));
    ///
    /// let dur = FixedPointDuration::parse("-pt1,5s")?;
    /// assert_eq!((dur.seconds(), dur.nano()), (-2, 500_000_000));
    ///
    /// let err = FixedPointDuration::parse("PT1ABC2S").unwrap_err();
    /// assert_eq!(err.parse_offset(), Some(3));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse<I: AsRef<[u8]>>(
        input: I,
    ) -> Result<FixedPointDuration, Error> {
        crate::fmt::duration::parse(input.as_ref())
    }
}

/// Accessors and predicates.
impl FixedPointDuration {
    /// Returns the number of whole seconds in this duration.
    ///
    /// For negative durations, this is rounded towards negative infinity so
    /// that [`FixedPointDuration::nano`] is never negative.
    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the nanosecond fraction of this duration, in the range
    /// `0..=999_999_999`.
    #[inline]
    pub const fn nano(&self) -> i32 {
        self.nanos
    }

    /// Returns true if this duration is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    /// Returns true if this duration is less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// Returns true if this duration is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Returns a copy of this duration with the given number of whole
    /// seconds. The nanosecond fraction is retained.
    #[inline]
    pub const fn with_seconds(self, seconds: i64) -> FixedPointDuration {
        FixedPointDuration { seconds, ..self }
    }

    /// Returns a copy of this duration with the given nanosecond fraction.
    /// The whole seconds are retained.
    ///
    /// # Errors
    ///
    /// This returns an error if `nanos` is not in `0..=999_999_999`.
    pub fn with_nanos(self, nanos: i32) -> Result<FixedPointDuration, Error> {
        if !(0..NANOS_PER_SECOND as i32).contains(&nanos) {
            return Err(Error::range("nanos", nanos, 0, 999_999_999));
        }
        Ok(FixedPointDuration { nanos, ..self })
    }
}

/// Arithmetic.
impl FixedPointDuration {
    /// Adds the given duration to this one.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let a = FixedPointDuration::of_seconds_nanos(1, 600_000_000)?;
    /// let b = FixedPointDuration::of_seconds_nanos(-3, 500_000_000)?;
    /// assert_eq!(a.plus(b)?, FixedPointDuration::of_millis(-900));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus(
        self,
        duration: FixedPointDuration,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_i128_nanos(duration.as_i128_nanos())
    }

    /// Subtracts the given duration from this one.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn minus(
        self,
        duration: FixedPointDuration,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_i128_nanos(-duration.as_i128_nanos())
    }

    /// Adds an amount of the given unit to this duration.
    ///
    /// # Errors
    ///
    /// This returns an invalid parameter error when the unit's duration is
    /// estimated, and an overflow error when the result is too big.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{FixedPointDuration, Unit};
    ///
    /// let dur = FixedPointDuration::of_seconds(1);
    /// assert_eq!(
    ///     dur.plus_amount(250, Unit::Millisecond)?.to_string(),
    ///     "PT1.25S",
    /// );
    /// let err = dur.plus_amount(1, Unit::Month).unwrap_err();
    /// assert!(err.is_invalid_parameter());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus_amount<U: PeriodUnit>(
        self,
        amount: i64,
        unit: U,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_unit_amount(i128::from(amount), unit)
    }

    /// Subtracts an amount of the given unit from this duration.
    ///
    /// # Errors
    ///
    /// This returns an invalid parameter error when the unit's duration is
    /// estimated, and an overflow error when the result is too big.
    pub fn minus_amount<U: PeriodUnit>(
        self,
        amount: i64,
        unit: U,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_unit_amount(-i128::from(amount), unit)
    }

    /// Adds a number of standard 24 hour days to this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn plus_days(self, days: i64) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(i128::from(days), SECONDS_PER_DAY * NANOS_PER_SECOND)
    }

    /// Adds a number of hours to this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn plus_hours(self, hours: i64) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(
            i128::from(hours),
            SECONDS_PER_HOUR * NANOS_PER_SECOND,
        )
    }

    /// Adds a number of minutes to this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn plus_minutes(
        self,
        minutes: i64,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(
            i128::from(minutes),
            SECONDS_PER_MINUTE * NANOS_PER_SECOND,
        )
    }

    /// Adds a number of seconds to this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn plus_seconds(
        self,
        seconds: i64,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(i128::from(seconds), NANOS_PER_SECOND)
    }

    /// Adds a number of milliseconds to this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let dur = FixedPointDuration::of_seconds_nanos(1, 999_000_000)?;
    /// assert_eq!(dur.plus_millis(2)?, FixedPointDuration::of_millis(2_001));
    /// assert_eq!(
    ///     dur.plus_millis(-2_000)?,
    ///     FixedPointDuration::of_millis(-1),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus_millis(
        self,
        millis: i64,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(i128::from(millis), NANOS_PER_MILLI)
    }

    /// Adds a number of nanoseconds to this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn plus_nanos(self, nanos: i64) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(i128::from(nanos), 1)
    }

    /// Subtracts a number of standard 24 hour days from this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn minus_days(self, days: i64) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(-i128::from(days), SECONDS_PER_DAY * NANOS_PER_SECOND)
    }

    /// Subtracts a number of hours from this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn minus_hours(self, hours: i64) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(
            -i128::from(hours),
            SECONDS_PER_HOUR * NANOS_PER_SECOND,
        )
    }

    /// Subtracts a number of minutes from this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn minus_minutes(
        self,
        minutes: i64,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(
            -i128::from(minutes),
            SECONDS_PER_MINUTE * NANOS_PER_SECOND,
        )
    }

    /// Subtracts a number of seconds from this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn minus_seconds(
        self,
        seconds: i64,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(-i128::from(seconds), NANOS_PER_SECOND)
    }

    /// Subtracts a number of milliseconds from this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn minus_millis(
        self,
        millis: i64,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(-i128::from(millis), NANOS_PER_MILLI)
    }

    /// Subtracts a number of nanoseconds from this duration.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn minus_nanos(self, nanos: i64) -> Result<FixedPointDuration, Error> {
        self.plus_scaled(-i128::from(nanos), 1)
    }

    /// Multiplies this duration by a scalar.
    ///
    /// No precision is lost. The result is exact or an error.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let dur = FixedPointDuration::of_seconds_nanos(-4, 666_666_667)?;
    /// assert_eq!(
    ///     dur.multiplied_by(3)?,
    ///     FixedPointDuration::of_nanos(-9_999_999_999),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn multiplied_by(
        self,
        scalar: i64,
    ) -> Result<FixedPointDuration, Error> {
        match scalar {
            0 => return Ok(FixedPointDuration::ZERO),
            1 => return Ok(self),
            _ => {}
        }
        self.as_i128_nanos()
            .checked_mul(i128::from(scalar))
            .and_then(FixedPointDuration::from_i128_nanos)
            .ok_or_else(|| {
                E::Overflow { operation: "multiplying by a scalar" }.into()
            })
    }

    /// Divides this duration by a scalar.
    ///
    /// The duration is treated as a single number of nanoseconds, and the
    /// division truncates towards zero.
    ///
    /// # Errors
    ///
    /// This returns an error when `divisor` is zero, and on overflow (which
    /// can only happen when dividing the minimum duration by `-1`).
    pub fn divided_by(
        self,
        divisor: i64,
    ) -> Result<FixedPointDuration, Error> {
        match divisor {
            0 => return Err(E::DivideByZero.into()),
            1 => return Ok(self),
            _ => {}
        }
        self.as_i128_nanos()
            .checked_div(i128::from(divisor))
            .and_then(FixedPointDuration::from_i128_nanos)
            .ok_or_else(|| {
                E::Overflow { operation: "dividing by a scalar" }.into()
            })
    }

    /// Returns this duration with its sign flipped.
    ///
    /// # Errors
    ///
    /// This returns an error when the negation isn't representable, as is
    /// the case for [`FixedPointDuration::MIN`].
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let dur = FixedPointDuration::of_millis(1_500).negated()?;
    /// assert_eq!((dur.seconds(), dur.nano()), (-2, 500_000_000));
    /// assert!(FixedPointDuration::MIN.negated().is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn negated(self) -> Result<FixedPointDuration, Error> {
        self.multiplied_by(-1)
    }

    /// Returns the absolute value of this duration.
    ///
    /// # Errors
    ///
    /// This fails in the same cases as [`FixedPointDuration::negated`].
    pub fn abs(self) -> Result<FixedPointDuration, Error> {
        if self.is_negative() {
            self.negated()
        } else {
            Ok(self)
        }
    }

    fn plus_unit_amount<U: PeriodUnit>(
        self,
        amount: i128,
        unit: U,
    ) -> Result<FixedPointDuration, Error> {
        if unit.is_duration_estimated() {
            return Err(E::estimated_unit(&unit).into());
        }
        if amount == 0 {
            return Ok(self);
        }
        let nanos = unit
            .estimated_duration()
            .as_i128_nanos()
            .checked_mul(amount)
            .ok_or(E::Overflow { operation: "converting unit amount" })?;
        self.plus_i128_nanos(nanos)
    }

    /// Adds `amount` of a unit that is `nanos_per_unit` nanoseconds long.
    ///
    /// Both inputs come from 64-bit integers and the unit is at most a day,
    /// so the product always fits in an `i128`.
    fn plus_scaled(
        self,
        amount: i128,
        nanos_per_unit: i64,
    ) -> Result<FixedPointDuration, Error> {
        self.plus_i128_nanos(amount * i128::from(nanos_per_unit))
    }

    fn plus_i128_nanos(
        self,
        nanos: i128,
    ) -> Result<FixedPointDuration, Error> {
        if nanos == 0 {
            return Ok(self);
        }
        self.as_i128_nanos()
            .checked_add(nanos)
            .and_then(FixedPointDuration::from_i128_nanos)
            .ok_or_else(|| E::Overflow { operation: "adding" }.into())
    }
}

/// Conversions.
impl FixedPointDuration {
    /// Returns the total number of standard 24 hour days, truncated towards
    /// zero on the whole seconds.
    #[inline]
    pub const fn to_days(&self) -> i64 {
        self.seconds / SECONDS_PER_DAY
    }

    /// Returns the total number of hours, truncated towards zero on the
    /// whole seconds.
    #[inline]
    pub const fn to_hours(&self) -> i64 {
        self.seconds / SECONDS_PER_HOUR
    }

    /// Returns the total number of minutes, truncated towards zero on the
    /// whole seconds.
    #[inline]
    pub const fn to_minutes(&self) -> i64 {
        self.seconds / SECONDS_PER_MINUTE
    }

    /// Returns the total number of milliseconds, rounded towards negative
    /// infinity.
    ///
    /// # Errors
    ///
    /// This returns an error if the total doesn't fit in an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let dur = FixedPointDuration::of_seconds_nanos(-1, 500_000_001)?;
    /// assert_eq!(dur.to_millis()?, -500);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_millis(&self) -> Result<i64, Error> {
        self.to_i64_units(NANOS_PER_MILLI, "milliseconds")
    }

    /// Returns the total number of microseconds, rounded towards negative
    /// infinity.
    ///
    /// # Errors
    ///
    /// This returns an error if the total doesn't fit in an `i64`.
    pub fn to_micros(&self) -> Result<i64, Error> {
        self.to_i64_units(NANOS_PER_MICRO, "microseconds")
    }

    /// Returns the total number of nanoseconds.
    ///
    /// # Errors
    ///
    /// This returns an error if the total doesn't fit in an `i64`, which is
    /// the case for durations longer than about 292 years.
    pub fn to_nanos(&self) -> Result<i64, Error> {
        self.to_i64_units(1, "nanoseconds")
    }

    fn to_i64_units(
        &self,
        nanos_per_unit: i64,
        unit: &'static str,
    ) -> Result<i64, Error> {
        let total =
            self.as_i128_nanos().div_euclid(i128::from(nanos_per_unit));
        i64::try_from(total).map_err(|_| E::ConvertOverflow { unit }.into())
    }

    pub(crate) fn as_i128_nanos(&self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND)
            + i128::from(self.nanos)
    }

    fn from_i128_nanos(nanos: i128) -> Option<FixedPointDuration> {
        let per = i128::from(NANOS_PER_SECOND);
        let seconds = i64::try_from(nanos.div_euclid(per)).ok()?;
        let nanos = nanos.rem_euclid(per) as i32;
        Some(FixedPointDuration { seconds, nanos })
    }
}

impl core::fmt::Display for FixedPointDuration {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        crate::fmt::duration::print(self, f)
    }
}

impl core::str::FromStr for FixedPointDuration {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<FixedPointDuration, Error> {
        FixedPointDuration::parse(string)
    }
}

/// Converts an unsigned `core::time::Duration` to a fixed-point duration.
///
/// # Errors
///
/// This fails when the number of seconds is bigger than `i64::MAX`.
impl TryFrom<Duration> for FixedPointDuration {
    type Error = Error;

    fn try_from(d: Duration) -> Result<FixedPointDuration, Error> {
        let seconds = i64::try_from(d.as_secs())
            .map_err(|_| E::ConvertUnsignedTooBig { seconds: d.as_secs() })?;
        // OK because subsec nanoseconds are always in 0..1_000_000_000.
        let nanos = d.subsec_nanos() as i32;
        Ok(FixedPointDuration { seconds, nanos })
    }
}

/// Converts a fixed-point duration to an unsigned `core::time::Duration`.
///
/// # Errors
///
/// This fails when the duration is negative.
impl TryFrom<FixedPointDuration> for Duration {
    type Error = Error;

    fn try_from(d: FixedPointDuration) -> Result<Duration, Error> {
        let seconds =
            u64::try_from(d.seconds).map_err(|_| E::ConvertNegative)?;
        // OK because `nanos` is never negative.
        Ok(Duration::new(seconds, d.nanos as u32))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FixedPointDuration {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FixedPointDuration {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<FixedPointDuration, D::Error> {
        use serde::de;

        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = FixedPointDuration;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an ISO 8601 duration string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<FixedPointDuration, E> {
                FixedPointDuration::parse(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<FixedPointDuration, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_bytes(DurationVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for FixedPointDuration {
    fn arbitrary(g: &mut quickcheck::Gen) -> FixedPointDuration {
        use quickcheck::Arbitrary;

        let seconds = i64::arbitrary(g);
        let nanos = (u32::arbitrary(g) % 1_000_000_000) as i32;
        FixedPointDuration { seconds, nanos }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        alloc::boxed::Box::new((self.seconds, self.nanos).shrink().filter_map(
            |(seconds, nanos)| {
                if nanos < 0 {
                    return None;
                }
                Some(FixedPointDuration { seconds, nanos })
            },
        ))
    }
}
