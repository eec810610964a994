/*!
Periods made of amounts of calendar units.

A period like "3 months and 10 days" can't be represented as a
[`FixedPointDuration`](crate::FixedPointDuration), since a month has no fixed
length. This module keeps such amounts apart, one per unit:

* [`PeriodField`] is a single amount of a unit.
* [`PeriodFields`] is an immutable collection of amounts keyed by unit.
* [`PeriodProvider`] is implemented by anything that can report amounts by
unit. Both of the types above implement it, and so can types outside of this
crate.

# Example

```
use calendrical::{period::PeriodFields, Unit};

let rent = PeriodFields::of(1, Unit::Month);
let lease = rent.multiplied_by(12)?.plus_amount(14, Unit::Day)?;
assert_eq!(lease.to_string(), "[12 Months, 14 Days]");
// Durations of months are only estimates.
assert_eq!(lease.to_estimated_duration()?.to_string(), "PT9101H49M12S");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::{vec, vec::Vec};

use crate::unit::{PeriodUnit, Unit};

pub use self::{
    field::PeriodField,
    fields::{Iter, PeriodFields},
};

mod field;
mod fields;

/// A source of amounts keyed by unit.
///
/// This is the minimal interface consumed by
/// [`PeriodFields::from_provider`], [`PeriodFields::total`],
/// [`PeriodFields::plus`] and [`PeriodFields::minus`]. Implementors don't
/// need to be a [`PeriodFields`].
///
/// # Example
///
/// ```
/// use calendrical::{period::{PeriodFields, PeriodProvider}, Unit};
///
/// /// A number of hours and minutes worked.
/// struct Timesheet {
///     hours: i64,
///     minutes: i64,
/// }
///
/// impl PeriodProvider for Timesheet {
///     fn period_units(&self) -> Vec<Unit> {
///         vec![Unit::Hour, Unit::Minute]
///     }
///
///     fn period_amount(&self, unit: Unit) -> i64 {
///         match unit {
///             Unit::Hour => self.hours,
///             Unit::Minute => self.minutes,
///             _ => 0,
///         }
///     }
/// }
///
/// let sheet = Timesheet { hours: 7, minutes: 45 };
/// let period = PeriodFields::from_provider(&sheet);
/// assert_eq!(period.to_string(), "[7 Hours, 45 Minutes]");
/// ```
pub trait PeriodProvider<U: PeriodUnit = Unit> {
    /// Returns the units this provider has amounts for.
    ///
    /// Each unit should appear at most once.
    fn period_units(&self) -> Vec<U>;

    /// Returns the amount for the given unit, or zero when this provider has
    /// no amount for it.
    fn period_amount(&self, unit: U) -> i64;
}

impl<U: PeriodUnit> PeriodProvider<U> for PeriodField<U> {
    fn period_units(&self) -> Vec<U> {
        vec![self.unit()]
    }

    fn period_amount(&self, unit: U) -> i64 {
        if unit == self.unit() {
            self.amount()
        } else {
            0
        }
    }
}

impl<U: PeriodUnit, P: PeriodProvider<U> + ?Sized> PeriodProvider<U> for &P {
    fn period_units(&self) -> Vec<U> {
        (**self).period_units()
    }

    fn period_amount(&self, unit: U) -> i64 {
        (**self).period_amount(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_provider() {
        let field = PeriodField::of(5, Unit::Week);
        assert_eq!(field.period_units(), vec![Unit::Week]);
        assert_eq!(field.period_amount(Unit::Week), 5);
        assert_eq!(field.period_amount(Unit::Day), 0);
        assert_eq!(
            PeriodFields::from_provider(&field),
            PeriodFields::of(5, Unit::Week),
        );
        assert_eq!(PeriodFields::from_provider(&&field).len(), 1);
    }
}
