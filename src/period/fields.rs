use alloc::{collections::BTreeMap, sync::Arc, vec::Vec};
use core::cmp::Reverse;

use crate::{
    duration::FixedPointDuration,
    error::{period::Error as E, Error, ErrorContext},
    period::{PeriodField, PeriodProvider},
    unit::{PeriodUnit, Unit},
};

/// The backing map of a non-empty collection, keyed by unit in descending
/// order.
type Amounts<U> = BTreeMap<Reverse<U>, i64>;

/// An immutable collection of amounts keyed by unit, like "3 months and 10
/// days".
///
/// Amounts of different units are never merged together. Each unit appears at
/// most once, and iteration always yields the largest unit first.
///
/// A unit with an amount of zero is still present in the collection. So a
/// collection with zero hours is _not_ equal to a collection without any
/// hours. Use [`PeriodFields::with_zeroes_removed`] to drop zero amounts.
///
/// # Sharing
///
/// The amounts live behind an `Arc`, so cloning is cheap. An empty collection
/// doesn't allocate at all, and every operation that produces an empty
/// collection returns one equivalent to [`PeriodFields::ZERO`].
///
/// # Example
///
/// ```
/// use calendrical::{period::PeriodFields, Unit};
///
/// let period = PeriodFields::of(3, Unit::Month)
///     .plus_amount(10, Unit::Day)?
///     .plus_amount(0, Unit::Hour)?;
/// assert_eq!(period.to_string(), "[3 Months, 10 Days, 0 Hours]");
/// assert_eq!(period.with_zeroes_removed().len(), 2);
/// assert!(!period.is_zero());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct PeriodFields<U: PeriodUnit = Unit> {
    /// This is `None` if and only if the collection is empty.
    amounts: Option<Arc<Amounts<U>>>,
}

impl<U: PeriodUnit> PeriodFields<U> {
    /// An empty collection. This never allocates.
    pub const ZERO: PeriodFields<U> = PeriodFields { amounts: None };

    /// Creates a collection with a single amount.
    pub fn of(amount: i64, unit: U) -> PeriodFields<U> {
        let mut amounts = Amounts::new();
        amounts.insert(Reverse(unit), amount);
        PeriodFields::from_map(amounts)
    }

    /// Creates a collection from pairs of units and amounts.
    ///
    /// When a unit appears more than once, the last amount wins. This is the
    /// same as collecting the pairs via `FromIterator`.
    pub fn from_amounts<I: IntoIterator<Item = (U, i64)>>(
        amounts: I,
    ) -> PeriodFields<U> {
        amounts.into_iter().collect()
    }

    /// Creates a collection with the amounts of every unit in the given
    /// provider.
    pub fn from_provider<P: PeriodProvider<U> + ?Sized>(
        provider: &P,
    ) -> PeriodFields<U> {
        provider
            .period_units()
            .into_iter()
            .map(|unit| (unit, provider.period_amount(unit)))
            .collect()
    }

    /// Sums the amounts from every provider given, unit by unit.
    ///
    /// # Errors
    ///
    /// This returns an error if the sum of any one unit overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{
    ///     period::{PeriodField, PeriodFields, PeriodProvider},
    ///     Unit,
    /// };
    ///
    /// let a = PeriodFields::of(3, Unit::Month);
    /// let b = PeriodField::of(2, Unit::Month);
    /// let c = PeriodField::of(7, Unit::Day);
    /// let providers: [&dyn PeriodProvider; 3] = [&a, &b, &c];
    /// let total = PeriodFields::total(providers)?;
    /// assert_eq!(total.to_string(), "[5 Months, 7 Days]");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn total<'a, P, I>(providers: I) -> Result<PeriodFields<U>, Error>
    where
        P: PeriodProvider<U> + ?Sized + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        providers.into_iter().try_fold(PeriodFields::ZERO, |total, p| {
            total.plus(p).context(E::Total)
        })
    }

    /// Returns the number of units in this collection.
    pub fn len(&self) -> usize {
        self.amounts.as_ref().map_or(0, |amounts| amounts.len())
    }

    /// Returns true when this collection has no units at all.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_none()
    }

    /// Returns true when every amount in this collection is zero.
    ///
    /// This is true for an empty collection.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|field| field.is_zero())
    }

    /// Returns true when no amount in this collection is negative.
    ///
    /// Zero amounts are not negative, so this is true for an empty
    /// collection.
    pub fn is_positive(&self) -> bool {
        !self.iter().any(|field| field.is_negative())
    }

    /// Returns true when this collection has an amount for the given unit.
    pub fn contains(&self, unit: U) -> bool {
        self.amount(unit).is_some()
    }

    /// Returns the field for the given unit, if present.
    pub fn get(&self, unit: U) -> Option<PeriodField<U>> {
        self.amount(unit).map(|amount| PeriodField::of(amount, unit))
    }

    /// Returns the amount for the given unit.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit isn't present. Use
    /// [`PeriodProvider::period_amount`] to get zero instead.
    pub fn get_amount(&self, unit: U) -> Result<i64, Error> {
        self.amount(unit).ok_or_else(|| E::missing_unit(&unit).into())
    }

    /// Returns the amount for the given unit as an `i32`.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit isn't present or when its amount
    /// doesn't fit in an `i32`.
    pub fn get_amount_i32(&self, unit: U) -> Result<i32, Error> {
        let amount = self.get_amount(unit)?;
        i32::try_from(amount).map_err(|_| {
            Error::range("amount", amount, i32::MIN, i32::MAX)
        })
    }

    /// Returns an iterator over the fields of this collection, largest unit
    /// first.
    pub fn iter(&self) -> Iter<'_, U> {
        Iter { it: self.amounts.as_deref().map(|amounts| amounts.iter()) }
    }

    /// Returns the units and amounts of this collection, largest unit first.
    pub fn to_unit_amounts(&self) -> Vec<(U, i64)> {
        self.iter().map(|field| (field.unit(), field.amount())).collect()
    }

    /// Returns a collection with the amount for the given unit replaced or
    /// inserted.
    ///
    /// When the unit already has the given amount, this returns a clone of
    /// this collection that shares its memory.
    pub fn with(&self, amount: i64, unit: U) -> PeriodFields<U> {
        if self.amount(unit) == Some(amount) {
            return self.clone();
        }
        let mut amounts = self.to_map();
        amounts.insert(Reverse(unit), amount);
        PeriodFields::from_map(amounts)
    }

    /// Returns a collection with the fields of `other` merged into this one.
    ///
    /// Amounts in `other` replace amounts for the same unit in this
    /// collection.
    pub fn with_fields(&self, other: &PeriodFields<U>) -> PeriodFields<U> {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut amounts = self.to_map();
        amounts.extend(other.iter().map(|f| (Reverse(f.unit()), f.amount())));
        PeriodFields::from_map(amounts)
    }

    /// Returns a collection without the given unit.
    ///
    /// This returns a clone of this collection if the unit isn't present.
    pub fn with_unit_removed(&self, unit: U) -> PeriodFields<U> {
        if !self.contains(unit) {
            return self.clone();
        }
        let mut amounts = self.to_map();
        amounts.remove(&Reverse(unit));
        PeriodFields::from_map(amounts)
    }

    /// Returns a collection without any zero amounts.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{period::PeriodFields, Unit};
    ///
    /// let period = PeriodFields::from_amounts([
    ///     (Unit::Year, 0),
    ///     (Unit::Day, 5),
    /// ]);
    /// assert_eq!(
    ///     period.with_zeroes_removed(),
    ///     PeriodFields::of(5, Unit::Day),
    /// );
    /// let zeroes = PeriodFields::of(0, Unit::Hour);
    /// assert_eq!(zeroes.with_zeroes_removed(), PeriodFields::ZERO);
    /// ```
    pub fn with_zeroes_removed(&self) -> PeriodFields<U> {
        if !self.iter().any(|field| field.is_zero()) {
            return self.clone();
        }
        self.iter().filter(|field| !field.is_zero()).collect()
    }

    /// Adds the amounts of the given provider to this collection, unit by
    /// unit.
    ///
    /// Units missing from this collection are treated as zero.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn plus<P: PeriodProvider<U> + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<PeriodFields<U>, Error> {
        self.combine(provider, PeriodField::plus)
    }

    /// Adds an amount of a single unit to this collection.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn plus_amount(
        &self,
        amount: i64,
        unit: U,
    ) -> Result<PeriodFields<U>, Error> {
        self.plus(&PeriodField::of(amount, unit))
    }

    /// Subtracts the amounts of the given provider from this collection,
    /// unit by unit.
    ///
    /// Units missing from this collection are treated as zero. So
    /// subtracting from [`PeriodFields::ZERO`] negates the provider.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{period::PeriodFields, Unit};
    ///
    /// let period = PeriodFields::of(3, Unit::Month);
    /// let negated = PeriodFields::ZERO.minus(&period)?;
    /// assert_eq!(negated, PeriodFields::of(-3, Unit::Month));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn minus<P: PeriodProvider<U> + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<PeriodFields<U>, Error> {
        self.combine(provider, PeriodField::minus)
    }

    /// Subtracts an amount of a single unit from this collection.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn minus_amount(
        &self,
        amount: i64,
        unit: U,
    ) -> Result<PeriodFields<U>, Error> {
        self.minus(&PeriodField::of(amount, unit))
    }

    /// Multiplies every amount by a scalar.
    ///
    /// # Errors
    ///
    /// This returns an error if any amount overflows.
    pub fn multiplied_by(
        &self,
        scalar: i64,
    ) -> Result<PeriodFields<U>, Error> {
        if scalar == 1 {
            return Ok(self.clone());
        }
        self.map_fields(|field| field.multiplied_by(scalar))
    }

    /// Divides every amount by a scalar, truncating toward zero.
    ///
    /// # Errors
    ///
    /// This returns an error when `divisor` is zero, even if this collection
    /// is empty, or if any amount overflows.
    pub fn divided_by(&self, divisor: i64) -> Result<PeriodFields<U>, Error> {
        match divisor {
            0 => return Err(E::DivideByZero.into()),
            1 => return Ok(self.clone()),
            _ => {}
        }
        self.map_fields(|field| field.divided_by(divisor))
    }

    /// Negates every amount. This is `multiplied_by(-1)`.
    ///
    /// # Errors
    ///
    /// This returns an error if any amount is `i64::MIN`.
    pub fn negated(&self) -> Result<PeriodFields<U>, Error> {
        self.multiplied_by(-1)
    }

    /// Returns the sum of the estimated durations of every field.
    ///
    /// # Errors
    ///
    /// This returns an error if the sum overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{period::PeriodFields, Unit};
    ///
    /// let period =
    ///     PeriodFields::of(1, Unit::Day).plus_amount(-1, Unit::Hour)?;
    /// assert_eq!(period.to_estimated_duration()?.to_string(), "PT23H");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_estimated_duration(&self) -> Result<FixedPointDuration, Error> {
        self.iter().try_fold(FixedPointDuration::ZERO, |total, field| {
            total.plus(field.to_estimated_duration()?)
        })
    }

    fn amount(&self, unit: U) -> Option<i64> {
        self.amounts.as_ref()?.get(&Reverse(unit)).copied()
    }

    fn to_map(&self) -> Amounts<U> {
        self.amounts.as_deref().cloned().unwrap_or_default()
    }

    fn from_map(amounts: Amounts<U>) -> PeriodFields<U> {
        if amounts.is_empty() {
            return PeriodFields::ZERO;
        }
        PeriodFields { amounts: Some(Arc::new(amounts)) }
    }

    fn combine<P: PeriodProvider<U> + ?Sized>(
        &self,
        provider: &P,
        op: fn(PeriodField<U>, i64) -> Result<PeriodField<U>, Error>,
    ) -> Result<PeriodFields<U>, Error> {
        let units = provider.period_units();
        if units.is_empty() {
            return Ok(self.clone());
        }
        let mut amounts = self.to_map();
        for unit in units {
            let current = amounts.get(&Reverse(unit)).copied().unwrap_or(0);
            let field = op(
                PeriodField::of(current, unit),
                provider.period_amount(unit),
            )?;
            amounts.insert(Reverse(unit), field.amount());
        }
        Ok(PeriodFields::from_map(amounts))
    }

    fn map_fields(
        &self,
        f: impl Fn(PeriodField<U>) -> Result<PeriodField<U>, Error>,
    ) -> Result<PeriodFields<U>, Error> {
        self.iter().map(f).collect()
    }
}

impl<U: PeriodUnit> PeriodProvider<U> for PeriodFields<U> {
    fn period_units(&self) -> Vec<U> {
        self.iter().map(|field| field.unit()).collect()
    }

    fn period_amount(&self, unit: U) -> i64 {
        self.amount(unit).unwrap_or(0)
    }
}

impl<U: PeriodUnit> Default for PeriodFields<U> {
    fn default() -> PeriodFields<U> {
        PeriodFields::ZERO
    }
}

impl<U: PeriodUnit> core::fmt::Debug for PeriodFields<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|field| (field.unit(), field.amount())))
            .finish()
    }
}

impl<U: PeriodUnit> core::fmt::Display for PeriodFields<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, field) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            core::fmt::Display::fmt(&field, f)?;
        }
        f.write_str("]")
    }
}

impl<U: PeriodUnit> FromIterator<(U, i64)> for PeriodFields<U> {
    fn from_iter<I: IntoIterator<Item = (U, i64)>>(
        it: I,
    ) -> PeriodFields<U> {
        PeriodFields::from_map(
            it.into_iter()
                .map(|(unit, amount)| (Reverse(unit), amount))
                .collect(),
        )
    }
}

impl<U: PeriodUnit> FromIterator<PeriodField<U>> for PeriodFields<U> {
    fn from_iter<I: IntoIterator<Item = PeriodField<U>>>(
        it: I,
    ) -> PeriodFields<U> {
        it.into_iter().map(|field| (field.unit(), field.amount())).collect()
    }
}

impl<'a, U: PeriodUnit> IntoIterator for &'a PeriodFields<U> {
    type Item = PeriodField<U>;
    type IntoIter = Iter<'a, U>;

    fn into_iter(self) -> Iter<'a, U> {
        self.iter()
    }
}

/// An iterator over the fields of a [`PeriodFields`], largest unit first.
///
/// This is created by [`PeriodFields::iter`].
#[derive(Debug)]
pub struct Iter<'a, U> {
    it: Option<alloc::collections::btree_map::Iter<'a, Reverse<U>, i64>>,
}

impl<'a, U: PeriodUnit> Iterator for Iter<'a, U> {
    type Item = PeriodField<U>;

    fn next(&mut self) -> Option<PeriodField<U>> {
        let (&Reverse(unit), &amount) = self.it.as_mut()?.next()?;
        Some(PeriodField::of(amount, unit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.as_ref().map_or((0, Some(0)), |it| it.size_hint())
    }
}

impl<'a, U: PeriodUnit> ExactSizeIterator for Iter<'a, U> {}

#[cfg(test)]
impl quickcheck::Arbitrary for PeriodFields {
    fn arbitrary(g: &mut quickcheck::Gen) -> PeriodFields {
        use quickcheck::Arbitrary;

        let pairs: Vec<(Unit, i32)> = quickcheck::Arbitrary::arbitrary(g);
        pairs
            .into_iter()
            .map(|(unit, amount)| (unit, i64::from(amount)))
            .collect()
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = PeriodFields>> {
        use quickcheck::Arbitrary;

        alloc::boxed::Box::new(
            self.to_unit_amounts().shrink().map(PeriodFields::from_amounts),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;

    fn months_days(months: i64, days: i64) -> PeriodFields {
        PeriodFields::from_amounts([(Unit::Month, months), (Unit::Day, days)])
    }

    #[test]
    fn zero() {
        let zero = PeriodFields::<Unit>::ZERO;
        assert!(zero.is_zero());
        assert!(zero.is_empty());
        assert!(zero.is_positive());
        assert_eq!(zero.len(), 0);
        assert_eq!(zero.to_string(), "[]");
        assert_eq!(zero, PeriodFields::default());
        assert_eq!(
            zero.to_estimated_duration().unwrap(),
            FixedPointDuration::ZERO,
        );
        assert_eq!(PeriodFields::from_amounts(vec![]), zero);
    }

    #[test]
    fn months_plus_days() {
        let period = PeriodFields::of(3, Unit::Month)
            .plus_amount(10, Unit::Day)
            .unwrap();
        let stripped = period.with_zeroes_removed();
        assert_eq!(stripped.len(), 2);
        assert!(!stripped.is_zero());
        assert_eq!(
            stripped.to_unit_amounts(),
            vec![(Unit::Month, 3), (Unit::Day, 10)],
        );
        assert_eq!(period.to_string(), "[3 Months, 10 Days]");
    }

    #[test]
    fn iteration_is_largest_first() {
        let period = PeriodFields::from_amounts([
            (Unit::Second, 1),
            (Unit::Year, 2),
            (Unit::Hour, 3),
            (Unit::Year, 4),
        ]);
        let units: Vec<Unit> = period.iter().map(|f| f.unit()).collect();
        assert_eq!(units, vec![Unit::Year, Unit::Hour, Unit::Second]);
        assert_eq!(period.get_amount(Unit::Year).unwrap(), 4);
        assert_eq!(period.iter().len(), 3);
        let again: Vec<PeriodField> = (&period).into_iter().collect();
        assert_eq!(again.len(), 3);
    }

    #[test]
    fn zero_amounts_are_distinct() {
        let hours = PeriodFields::of(0, Unit::Hour);
        let days = PeriodFields::of(0, Unit::Day);
        assert!(hours.is_zero());
        assert!(days.is_zero());
        assert_ne!(hours, days);
        assert_ne!(hours, PeriodFields::ZERO);
        assert_eq!(hours.with_zeroes_removed(), PeriodFields::ZERO);
        assert!(hours.with_zeroes_removed().is_empty());
    }

    #[test]
    fn accessors() {
        let period = months_days(3, -10);
        assert!(period.contains(Unit::Month));
        assert!(!period.contains(Unit::Year));
        assert_eq!(
            period.get(Unit::Day),
            Some(PeriodField::of(-10, Unit::Day)),
        );
        assert_eq!(period.get(Unit::Year), None);
        assert_eq!(period.period_amount(Unit::Year), 0);
        assert_eq!(period.period_units(), vec![Unit::Month, Unit::Day]);
        assert_eq!(period.get_amount_i32(Unit::Day).unwrap(), -10);
        assert!(!period.is_positive());

        let err = period.get_amount(Unit::Year).unwrap_err();
        insta::assert_snapshot!(err, @"period has no amount for unit 'Years'");
        let big = PeriodFields::of(i64::from(i32::MAX) + 1, Unit::Day);
        assert!(big.get_amount_i32(Unit::Day).unwrap_err().is_range());
    }

    #[test]
    fn with() {
        let period = months_days(3, 10);
        let same = period.with(3, Unit::Month);
        assert_eq!(same, period);
        assert!(Arc::ptr_eq(
            same.amounts.as_ref().unwrap(),
            period.amounts.as_ref().unwrap(),
        ));
        assert_eq!(period.with(5, Unit::Month), months_days(5, 10));
        assert_eq!(
            period.with(1, Unit::Year).to_string(),
            "[1 Years, 3 Months, 10 Days]",
        );

        let other =
            PeriodFields::from_amounts([(Unit::Day, 1), (Unit::Hour, 2)]);
        assert_eq!(
            period.with_fields(&other).to_string(),
            "[3 Months, 1 Days, 2 Hours]",
        );
        assert_eq!(PeriodFields::ZERO.with_fields(&other), other);
        assert_eq!(other.with_fields(&PeriodFields::ZERO), other);

        assert_eq!(
            period.with_unit_removed(Unit::Day),
            PeriodFields::of(3, Unit::Month),
        );
        assert_eq!(period.with_unit_removed(Unit::Year), period);
        assert_eq!(
            PeriodFields::of(1, Unit::Day).with_unit_removed(Unit::Day),
            PeriodFields::ZERO,
        );
    }

    #[test]
    fn plus_minus() {
        let period = months_days(3, 10);
        assert_eq!(
            period.plus(&months_days(1, -10)).unwrap(),
            months_days(4, 0),
        );
        assert_eq!(
            period.minus(&months_days(1, -10)).unwrap(),
            months_days(2, 20),
        );
        assert_eq!(
            period.minus_amount(1, Unit::Year).unwrap().to_string(),
            "[-1 Years, 3 Months, 10 Days]",
        );
        assert_eq!(period.plus(&PeriodFields::ZERO).unwrap(), period);
        assert_eq!(PeriodFields::ZERO.plus(&period).unwrap(), period);
        assert_eq!(
            PeriodFields::ZERO.minus(&period).unwrap(),
            months_days(-3, -10),
        );

        let max = PeriodFields::of(i64::MAX, Unit::Day);
        assert!(max.plus_amount(1, Unit::Day).unwrap_err().is_overflow());
        assert!(PeriodFields::ZERO
            .minus(&PeriodFields::of(i64::MIN, Unit::Day))
            .unwrap_err()
            .is_overflow());
    }

    #[test]
    fn total() {
        let a = months_days(1, 2);
        let b = PeriodField::of(3, Unit::Day);
        let c = PeriodFields::of(4, Unit::Hour);
        let providers: [&dyn PeriodProvider; 3] = [&a, &b, &c];
        let total = PeriodFields::total(providers).unwrap();
        assert_eq!(total.to_string(), "[1 Months, 5 Days, 4 Hours]");

        let none: [&PeriodFields; 0] = [];
        assert_eq!(PeriodFields::total(none).unwrap(), PeriodFields::ZERO);

        let max = PeriodFields::of(i64::MAX, Unit::Day);
        let err = PeriodFields::total([&max, &max]).unwrap_err();
        assert!(err.is_overflow());
        insta::assert_snapshot!(
            err,
            @"failed to total period amounts: period amount for unit 'Days' overflowed when adding",
        );
    }

    #[test]
    fn scalar() {
        let period = months_days(6, -9);
        assert_eq!(period.multiplied_by(2).unwrap(), months_days(12, -18));
        assert_eq!(period.multiplied_by(0).unwrap(), months_days(0, 0));
        assert_eq!(period.divided_by(4).unwrap(), months_days(1, -2));
        assert_eq!(period.negated().unwrap(), months_days(-6, 9));
        assert!(period.divided_by(0).unwrap_err().is_divide_by_zero());
        let err = PeriodFields::<Unit>::ZERO.divided_by(0).unwrap_err();
        assert!(err.is_divide_by_zero());
        let err = PeriodFields::of(i64::MIN, Unit::Day).negated().unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn estimated_duration() {
        let period = months_days(1, 1);
        let dur = period.to_estimated_duration().unwrap();
        assert_eq!(dur, FixedPointDuration::of_seconds(2_629_746 + 86_400));
        let forever =
            PeriodFields::from_amounts([(Unit::Forever, 1), (Unit::Day, 1)]);
        assert!(forever.to_estimated_duration().unwrap_err().is_overflow());
    }

    #[test]
    fn debug() {
        let period = months_days(3, 10);
        assert_eq!(alloc::format!("{period:?}"), "{Month: 3, Day: 10}");
    }

    #[test]
    fn custom_unit() {
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
        enum Shift {
            Watch,
            Rotation,
        }

        impl core::fmt::Display for Shift {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str(match *self {
                    Shift::Watch => "Watches",
                    Shift::Rotation => "Rotations",
                })
            }
        }

        impl PeriodUnit for Shift {
            fn estimated_duration(&self) -> FixedPointDuration {
                match *self {
                    Shift::Watch => FixedPointDuration::of_seconds(4 * 3_600),
                    Shift::Rotation => {
                        FixedPointDuration::of_seconds(6 * 4 * 3_600)
                    }
                }
            }

            fn is_duration_estimated(&self) -> bool {
                false
            }
        }

        let period = PeriodFields::of(2, Shift::Watch)
            .plus_amount(1, Shift::Rotation)
            .unwrap();
        assert_eq!(period.to_string(), "[1 Rotations, 2 Watches]");
        assert_eq!(
            period.to_estimated_duration().unwrap().to_string(),
            "PT32H",
        );
    }

    quickcheck::quickcheck! {
        fn prop_zeroes_removed_has_no_zeroes(p: PeriodFields) -> bool {
            p.with_zeroes_removed().iter().all(|f| !f.is_zero())
        }

        fn prop_plus_then_minus(a: PeriodFields, b: PeriodFields) -> bool {
            // Amounts are `i32`, so none of this overflows.
            let sum = a.plus(&b).unwrap();
            let diff = sum.minus(&b).unwrap();
            diff.with_zeroes_removed() == a.with_zeroes_removed()
        }

        fn prop_negate_twice(p: PeriodFields) -> bool {
            p.negated().unwrap().negated().unwrap() == p
        }

        fn prop_from_provider_is_identity(p: PeriodFields) -> bool {
            PeriodFields::from_provider(&p) == p
        }
    }
}
