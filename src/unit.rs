use crate::duration::FixedPointDuration;

/// A unit of time that can be used to measure an amount of a period.
///
/// Implementations describe how long one unit lasts via
/// [`PeriodUnit::estimated_duration`]. Some units, like hours, always have
/// the same length. Others, like months, vary depending on where they are
/// measured from. For those, the duration returned is only an estimate and
/// [`PeriodUnit::is_duration_estimated`] returns `true`.
///
/// The ordering of a unit type must agree with its durations: a unit with a
/// longer duration should compare greater than a unit with a shorter one.
/// [`PeriodFields`](crate::period::PeriodFields) relies on this ordering to
/// list its amounts from the largest unit to the smallest.
///
/// This crate provides a standard set of units in [`Unit`]. Callers with
/// their own calendar system may implement this trait on their own types.
///
/// # Example
///
/// ```
/// use calendrical::{FixedPointDuration, PeriodUnit, Unit};
///
/// assert_eq!(
///     Unit::Hour.estimated_duration(),
///     FixedPointDuration::of_seconds(3_600),
/// );
/// assert!(!Unit::Hour.is_duration_estimated());
/// assert!(Unit::Month.is_duration_estimated());
/// ```
pub trait PeriodUnit:
    Copy
    + Ord
    + core::hash::Hash
    + core::fmt::Debug
    + core::fmt::Display
{
    /// Returns the duration of one of this unit.
    ///
    /// When [`PeriodUnit::is_duration_estimated`] returns true, this is an
    /// average and not an exact value.
    fn estimated_duration(&self) -> FixedPointDuration;

    /// Returns true when the duration of this unit varies, and thus
    /// [`PeriodUnit::estimated_duration`] returns an approximation.
    fn is_duration_estimated(&self) -> bool;
}

/// The standard units of time.
///
/// Units up to and including [`Unit::Day`] have an exact duration. A day is
/// always considered to be 86,400 seconds long. Weeks and everything bigger
/// have an estimated duration based on the average length of a year in the
/// 400 year Gregorian cycle, which is 365.2425 days.
///
/// # Example: ordering
///
/// Bigger units compare greater than smaller units.
///
/// ```
/// use calendrical::Unit;
///
/// assert!(Unit::Year > Unit::Nanosecond);
/// assert!(Unit::Day > Unit::HalfDay);
/// assert!(Unit::Forever > Unit::Era);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Unit {
    /// A nanosecond, the smallest unit supported.
    Nanosecond = 0,
    /// A microsecond is always 1,000 nanoseconds.
    Microsecond = 1,
    /// A millisecond is always 1,000 microseconds.
    Millisecond = 2,
    /// A second is always 1,000 milliseconds.
    Second = 3,
    /// A minute is always 60 seconds. Leap seconds are not supported.
    Minute = 4,
    /// An hour is always 60 minutes.
    Hour = 5,
    /// Half of a day, always 12 hours.
    HalfDay = 6,
    /// A day, always 24 hours.
    Day = 7,
    /// A week, estimated as 7 days.
    Week = 8,
    /// A month, estimated as one twelfth of a year.
    Month = 9,
    /// A year, estimated as 365.2425 days.
    Year = 10,
    /// Ten years.
    Decade = 11,
    /// One hundred years.
    Century = 12,
    /// One thousand years.
    Millennium = 13,
    /// One billion years.
    Era = 14,
    /// An artificial unit with the maximum supported duration.
    Forever = 15,
}

/// The number of seconds in the average Gregorian year.
const SECONDS_PER_YEAR: i64 = 31_556_952;

impl Unit {
    /// The name used when displaying this unit. This is the plural form.
    fn name(&self) -> &'static str {
        match *self {
            Unit::Nanosecond => "Nanos",
            Unit::Microsecond => "Micros",
            Unit::Millisecond => "Millis",
            Unit::Second => "Seconds",
            Unit::Minute => "Minutes",
            Unit::Hour => "Hours",
            Unit::HalfDay => "HalfDays",
            Unit::Day => "Days",
            Unit::Week => "Weeks",
            Unit::Month => "Months",
            Unit::Year => "Years",
            Unit::Decade => "Decades",
            Unit::Century => "Centuries",
            Unit::Millennium => "Millennia",
            Unit::Era => "Eras",
            Unit::Forever => "Forever",
        }
    }

    /// Returns the duration of this unit as a `(seconds, nanos)` pair.
    const fn seconds_nanos(self) -> (i64, i32) {
        match self {
            Unit::Nanosecond => (0, 1),
            Unit::Microsecond => (0, 1_000),
            Unit::Millisecond => (0, 1_000_000),
            Unit::Second => (1, 0),
            Unit::Minute => (60, 0),
            Unit::Hour => (3_600, 0),
            Unit::HalfDay => (43_200, 0),
            Unit::Day => (86_400, 0),
            Unit::Week => (7 * 86_400, 0),
            Unit::Month => (SECONDS_PER_YEAR / 12, 0),
            Unit::Year => (SECONDS_PER_YEAR, 0),
            Unit::Decade => (SECONDS_PER_YEAR * 10, 0),
            Unit::Century => (SECONDS_PER_YEAR * 100, 0),
            Unit::Millennium => (SECONDS_PER_YEAR * 1_000, 0),
            Unit::Era => (SECONDS_PER_YEAR * 1_000_000_000, 0),
            Unit::Forever => (i64::MAX, 999_999_999),
        }
    }
}

impl PeriodUnit for Unit {
    fn estimated_duration(&self) -> FixedPointDuration {
        let (seconds, nanos) = self.seconds_nanos();
        FixedPointDuration::new_unchecked(seconds, nanos)
    }

    fn is_duration_estimated(&self) -> bool {
        *self > Unit::Day
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
impl Unit {
    fn from_usize(n: usize) -> Option<Unit> {
        match n {
            0 => Some(Unit::Nanosecond),
            1 => Some(Unit::Microsecond),
            2 => Some(Unit::Millisecond),
            3 => Some(Unit::Second),
            4 => Some(Unit::Minute),
            5 => Some(Unit::Hour),
            6 => Some(Unit::HalfDay),
            7 => Some(Unit::Day),
            8 => Some(Unit::Week),
            9 => Some(Unit::Month),
            10 => Some(Unit::Year),
            11 => Some(Unit::Decade),
            12 => Some(Unit::Century),
            13 => Some(Unit::Millennium),
            14 => Some(Unit::Era),
            15 => Some(Unit::Forever),
            _ => None,
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        use quickcheck::Arbitrary;

        Unit::from_usize(usize::arbitrary(g) % 16).unwrap()
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        alloc::boxed::Box::new(
            (*self as usize)
                .shrink()
                .map(|n| Unit::from_usize(n % 16).unwrap()),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn exact_durations() {
        let secs = |unit: Unit| unit.estimated_duration();
        assert_eq!(secs(Unit::Nanosecond), FixedPointDuration::of_nanos(1));
        assert_eq!(secs(Unit::Microsecond), FixedPointDuration::of_micros(1));
        assert_eq!(secs(Unit::Millisecond), FixedPointDuration::of_millis(1));
        assert_eq!(
            secs(Unit::HalfDay),
            FixedPointDuration::of_seconds(43_200),
        );
        assert_eq!(secs(Unit::Day), FixedPointDuration::of_seconds(86_400));
        for unit in [Unit::Nanosecond, Unit::Second, Unit::Day] {
            assert!(!unit.is_duration_estimated(), "{unit:?}");
        }
    }

    #[test]
    fn estimated_durations() {
        let secs = |unit: Unit| unit.estimated_duration().seconds();
        assert_eq!(secs(Unit::Week), 604_800);
        assert_eq!(secs(Unit::Month), 2_629_746);
        assert_eq!(secs(Unit::Year), 31_556_952);
        assert_eq!(secs(Unit::Millennium), 31_556_952_000);
        assert_eq!(secs(Unit::Era), 31_556_952_000_000_000);
        assert_eq!(
            Unit::Forever.estimated_duration(),
            FixedPointDuration::MAX,
        );
        for unit in [Unit::Week, Unit::Month, Unit::Era, Unit::Forever] {
            assert!(unit.is_duration_estimated(), "{unit:?}");
        }
    }

    #[test]
    fn names() {
        assert_eq!(Unit::Nanosecond.to_string(), "Nanos");
        assert_eq!(Unit::HalfDay.to_string(), "HalfDays");
        assert_eq!(Unit::Century.to_string(), "Centuries");
        assert_eq!(Unit::Millennium.to_string(), "Millennia");
        assert_eq!(Unit::Forever.to_string(), "Forever");
    }

    quickcheck::quickcheck! {
        fn prop_ordering_agrees_with_duration(a: Unit, b: Unit) -> bool {
            a.cmp(&b) == a.estimated_duration().cmp(&b.estimated_duration())
        }
    }
}
