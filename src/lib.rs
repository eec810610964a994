/*!
Calendrical is a small library of immutable, overflow-checked value types for
time arithmetic: a fixed-point duration with nanosecond precision, period
field collections that keep calendar units apart, soft-bounded value ranges
and a proleptic ISO year.

# Overview

The primary types in this crate are:

* [`FixedPointDuration`] is a signed span of time stored as whole seconds
plus a nanosecond fraction in the range `0..1_000_000_000`. It has no
calendar semantics and supports exact, checked arithmetic.
* [`period::PeriodFields`] is a sorted collection of `(amount, unit)` pairs
like "3 months and 10 days". Amounts of different units are never merged,
since months and years have no fixed length.
* [`ValueRange`] describes the legal values of a calendar field where the
edges may vary, such as the day of the month which ends at 28, 29, 30 or 31.
* [`civil::Year`] is a validated proleptic year with leap year rules and
helpers for building dates.

Units are described by the [`PeriodUnit`] trait, and this crate ships a
standard set of units in [`Unit`].

# Example

```
use calendrical::{FixedPointDuration, Unit, period::PeriodFields};

let dur: FixedPointDuration = "PT5M21.123456789S".parse()?;
assert_eq!(dur.seconds(), 321);
assert_eq!(dur.nano(), 123_456_789);
assert_eq!(dur.plus_millis(877)?.to_string(), "PT5M22.000456789S");

let period = PeriodFields::of(3, Unit::Month).plus_amount(10, Unit::Day)?;
assert_eq!(period.to_string(), "[3 Months, 10 Days]");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Errors

Every fallible operation returns a [`Error`]. Nothing in this crate panics on
bad input. The error type offers a few predicates for introspection, like
[`Error::is_overflow`] and [`Error::parse_offset`].

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for
[`Error`] and provides access to the system clock, for example via
[`civil::Year::now`].
* **logging** - Emits log messages via the `log` crate. This is mostly
useful when debugging lenient resolution of dates.
* **serde** - Implements `Serialize` and `Deserialize` for
[`FixedPointDuration`], [`civil::Year`] and [`ValueRange`].
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("calendrical currently not supported on non-{32,64}");

#[cfg(any(test, feature = "std"))]
extern crate std;

// Period collections are backed by a shared `BTreeMap` and errors are
// reference counted, so there is no core-only mode.
extern crate alloc;

pub use crate::{
    duration::FixedPointDuration,
    error::Error,
    instant::Instant,
    range::ValueRange,
    unit::{PeriodUnit, Unit},
};

#[macro_use]
mod logging;

pub mod civil;
pub mod clock;
mod duration;
mod error;
pub mod fmt;
mod instant;
pub mod period;
mod range;
mod unit;
mod util;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn topscratch() {
        let _ = env_logger::try_init();

        let year = civil::Year::new(2011).unwrap();
        let md = civil::MonthDay::new(2, 29).unwrap();
        assert_eq!(year.at_month_day(md).to_string(), "2011-02-28");
    }
}
