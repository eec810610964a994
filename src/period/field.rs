use crate::{
    duration::FixedPointDuration,
    error::{period::Error as E, Error},
    unit::{PeriodUnit, Unit},
};

/// A single amount of a unit, like "3 months".
///
/// A field stores its amount verbatim. An amount of zero is a valid amount
/// and is distinct from having no amount at all.
///
/// Fields are ordered by unit first and then by amount.
///
/// # Example
///
/// ```
/// use calendrical::{period::PeriodField, Unit};
///
/// let field = PeriodField::of(3, Unit::Month);
/// assert_eq!(field.to_string(), "3 Months");
/// assert_eq!(field.plus(2)?.amount(), 5);
/// assert_eq!(field.negated()?.amount(), -3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct PeriodField<U = Unit> {
    unit: U,
    amount: i64,
}

impl<U: PeriodUnit> PeriodField<U> {
    /// Creates a field with the given amount of a unit.
    #[inline]
    pub const fn of(amount: i64, unit: U) -> PeriodField<U> {
        PeriodField { unit, amount }
    }

    /// Returns the amount.
    #[inline]
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the unit.
    #[inline]
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Returns a copy of this field with a different amount.
    #[inline]
    pub fn with_amount(self, amount: i64) -> PeriodField<U> {
        PeriodField { amount, ..self }
    }

    /// Returns true when the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true when the amount is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Adds to the amount.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn plus(self, amount: i64) -> Result<PeriodField<U>, Error> {
        self.apply("adding", |a| a.checked_add(amount))
    }

    /// Subtracts from the amount.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn minus(self, amount: i64) -> Result<PeriodField<U>, Error> {
        self.apply("subtracting", |a| a.checked_sub(amount))
    }

    /// Multiplies the amount by a scalar.
    ///
    /// # Errors
    ///
    /// This returns an error on overflow.
    pub fn multiplied_by(self, scalar: i64) -> Result<PeriodField<U>, Error> {
        self.apply("multiplying", |a| a.checked_mul(scalar))
    }

    /// Divides the amount by a scalar, truncating toward zero.
    ///
    /// # Errors
    ///
    /// This returns an error when `divisor` is zero, or on overflow, which
    /// only happens when dividing `i64::MIN` by `-1`.
    pub fn divided_by(self, divisor: i64) -> Result<PeriodField<U>, Error> {
        if divisor == 0 {
            return Err(E::DivideByZero.into());
        }
        self.apply("dividing", |a| a.checked_div(divisor))
    }

    /// Negates the amount.
    ///
    /// # Errors
    ///
    /// This returns an error when the amount is `i64::MIN`.
    pub fn negated(self) -> Result<PeriodField<U>, Error> {
        self.apply("negating", i64::checked_neg)
    }

    /// Returns the duration of this field using the unit's estimated
    /// duration.
    ///
    /// This is exact for units like hours, but only approximate for units
    /// like months.
    ///
    /// # Errors
    ///
    /// This returns an error when the duration overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{period::PeriodField, Unit};
    ///
    /// let dur = PeriodField::of(2, Unit::Day).to_estimated_duration()?;
    /// assert_eq!(dur.to_string(), "PT48H");
    /// let dur = PeriodField::of(1, Unit::Year).to_estimated_duration()?;
    /// assert_eq!(dur.to_string(), "PT8765H49M12S");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_estimated_duration(&self) -> Result<FixedPointDuration, Error> {
        self.unit.estimated_duration().multiplied_by(self.amount)
    }

    fn apply(
        self,
        operation: &'static str,
        f: impl FnOnce(i64) -> Option<i64>,
    ) -> Result<PeriodField<U>, Error> {
        match f(self.amount) {
            Some(amount) => Ok(self.with_amount(amount)),
            None => Err(E::overflow(operation, &self.unit).into()),
        }
    }
}

impl<U: PeriodUnit> core::fmt::Display for PeriodField<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn arithmetic() {
        let f = PeriodField::of(6, Unit::Year);
        assert_eq!(f.plus(3).unwrap().amount(), 9);
        assert_eq!(f.minus(7).unwrap().amount(), -1);
        assert_eq!(f.multiplied_by(-2).unwrap().amount(), -12);
        assert_eq!(f.divided_by(4).unwrap().amount(), 1);
        assert_eq!(f.with_amount(-7).divided_by(2).unwrap().amount(), -3);
        assert_eq!(f.negated().unwrap(), PeriodField::of(-6, Unit::Year));
        assert!(f.minus(6).unwrap().is_zero());
        assert!(f.minus(7).unwrap().is_negative());
    }

    #[test]
    fn arithmetic_errors() {
        let max = PeriodField::of(i64::MAX, Unit::Day);
        let err = max.plus(1).unwrap_err();
        assert!(err.is_overflow());
        insta::assert_snapshot!(
            err,
            @"period amount for unit 'Days' overflowed when adding",
        );
        let min = PeriodField::of(i64::MIN, Unit::Day);
        assert!(min.minus(1).unwrap_err().is_overflow());
        assert!(min.negated().unwrap_err().is_overflow());
        assert!(min.divided_by(-1).unwrap_err().is_overflow());
        assert!(max.multiplied_by(2).unwrap_err().is_overflow());
        let err = max.divided_by(0).unwrap_err();
        assert!(err.is_divide_by_zero());
    }

    #[test]
    fn estimated_duration() {
        let d =
            PeriodField::of(3, Unit::Hour).to_estimated_duration().unwrap();
        assert_eq!(d, FixedPointDuration::of_seconds(10_800));
        let d =
            PeriodField::of(-1, Unit::Month).to_estimated_duration().unwrap();
        assert_eq!(d, FixedPointDuration::of_seconds(-2_629_746));
        let d =
            PeriodField::of(0, Unit::Forever).to_estimated_duration().unwrap();
        assert!(d.is_zero());
        assert!(PeriodField::of(2, Unit::Forever)
            .to_estimated_duration()
            .unwrap_err()
            .is_overflow());
    }

    #[test]
    fn ordering() {
        let small = PeriodField::of(100, Unit::Day);
        let big = PeriodField::of(1, Unit::Month);
        assert!(small < big);
        assert!(PeriodField::of(1, Unit::Day) < small);
    }

    #[test]
    fn display() {
        assert_eq!(PeriodField::of(3, Unit::Month).to_string(), "3 Months");
        assert_eq!(
            PeriodField::of(-1, Unit::HalfDay).to_string(),
            "-1 HalfDays",
        );
        assert_eq!(PeriodField::of(0, Unit::Forever).to_string(), "0 Forever");
    }
}
