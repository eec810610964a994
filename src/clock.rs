/*!
Sources of the current instant.

A [`Clock`] provides the current instant along with a fixed offset from UTC
that is used to determine the local date. The system clock is available as
[`SystemClock`] when the `std` feature is enabled. [`FixedClock`] always
reports the same instant, which is mostly useful in tests.

# Example

```
use calendrical::{civil::Year, clock::FixedClock, Instant};

// 2008-12-31T23:00:00Z
let instant = Instant::new(1_230_764_400, 0)?;
let utc = FixedClock::new(instant, 0)?;
assert_eq!(Year::now_with_clock(&utc)?, Year::new(2008)?);
// Two hours ahead of UTC, it's already the next year.
let ahead = FixedClock::new(instant, 2 * 60 * 60)?;
assert_eq!(Year::now_with_clock(&ahead)?, Year::new(2009)?);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::{
    error::{instant::Error as E, Error},
    instant::Instant,
};

/// The maximum magnitude of a clock's UTC offset, in seconds.
const MAX_OFFSET_SECONDS: i32 = 18 * 60 * 60;

/// A source of the current instant and the UTC offset to interpret it with.
pub trait Clock {
    /// Returns the current instant.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the current instant can't be
    /// determined or is outside the range of an [`Instant`].
    fn instant(&self) -> Result<Instant, Error>;

    /// Returns the offset from UTC, in seconds, used to determine the local
    /// date of an instant. This defaults to `0`.
    fn offset_seconds(&self) -> i32 {
        0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn instant(&self) -> Result<Instant, Error> {
        (**self).instant()
    }

    fn offset_seconds(&self) -> i32 {
        (**self).offset_seconds()
    }
}

/// A clock backed by the system's time, interpreted in UTC.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn instant(&self) -> Result<Instant, Error> {
        Instant::now()
    }
}

/// A clock that always reports the same instant and offset.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FixedClock {
    instant: Instant,
    offset_seconds: i32,
}

impl FixedClock {
    /// Creates a clock fixed at the given instant with the given offset from
    /// UTC, in seconds.
    ///
    /// # Errors
    ///
    /// This returns an error when the offset is more than 18 hours away from
    /// UTC in either direction.
    pub fn new(
        instant: Instant,
        offset_seconds: i32,
    ) -> Result<FixedClock, Error> {
        let bounds = -MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS;
        if !bounds.contains(&offset_seconds) {
            return Err(Error::range(
                "offset seconds",
                offset_seconds,
                -MAX_OFFSET_SECONDS,
                MAX_OFFSET_SECONDS,
            )
            .context(E::InvalidClockOffset));
        }
        Ok(FixedClock { instant, offset_seconds })
    }

    /// Creates a clock fixed at the given instant in UTC.
    pub fn utc(instant: Instant) -> FixedClock {
        FixedClock { instant, offset_seconds: 0 }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> Result<Instant, Error> {
        Ok(self.instant)
    }

    fn offset_seconds(&self) -> i32 {
        self.offset_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed() {
        let instant = Instant::new(1_214_818_210, 0).unwrap();
        let clock = FixedClock::new(instant, -5 * 3_600).unwrap();
        assert_eq!(clock.instant().unwrap(), instant);
        assert_eq!(clock.offset_seconds(), -18_000);
        assert_eq!((&clock).instant().unwrap(), instant);
        assert_eq!(FixedClock::utc(instant).offset_seconds(), 0);
    }

    #[test]
    fn fixed_offset_bounds() {
        let instant = Instant::UNIX_EPOCH;
        assert!(FixedClock::new(instant, MAX_OFFSET_SECONDS).is_ok());
        assert!(FixedClock::new(instant, -MAX_OFFSET_SECONDS).is_ok());
        let err =
            FixedClock::new(instant, MAX_OFFSET_SECONDS + 1).unwrap_err();
        assert!(err.is_range());
        insta::assert_snapshot!(
            err,
            @"invalid UTC offset for fixed clock: parameter 'offset seconds' with value 64801 is not in the required range of -64800..=64800",
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn system() {
        let instant = SystemClock.instant().unwrap();
        assert!(instant > Instant::new(1_577_836_800, 0).unwrap());
        assert_eq!(SystemClock.offset_seconds(), 0);
    }
}
