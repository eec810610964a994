use crate::error::{value_range::Error as E, Error};

/// The range of valid values for a calendar field.
///
/// A range has an absolute minimum and maximum, and two "soft" bounds in
/// between: the largest minimum and the smallest maximum. The soft bounds
/// describe the edges of the range that vary with context. For example, the
/// day of the month has a minimum of `1`, a smallest maximum of `28` (in
/// February of a common year) and a maximum of `31`. Such a range is written
/// as `1 - 28/31`.
///
/// When both pairs of bounds are equal, the range is _fixed_. A fixed range
/// is written as `min - max`.
///
/// The soft bounds are informational. Only the absolute bounds are used to
/// check whether a value is valid.
///
/// # Example
///
/// ```
/// use calendrical::ValueRange;
///
/// let day_of_month = ValueRange::with_smallest_max(1, 28, 31)?;
/// assert_eq!(day_of_month.minimum(), 1);
/// assert_eq!(day_of_month.largest_minimum(), 1);
/// assert_eq!(day_of_month.smallest_maximum(), 28);
/// assert_eq!(day_of_month.maximum(), 31);
/// assert!(!day_of_month.is_fixed());
/// assert!(day_of_month.is_valid_value(30));
/// assert!(!day_of_month.is_valid_value(32));
/// assert_eq!(day_of_month.to_string(), "1 - 28/31");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ValueRange {
    min: i64,
    largest_min: i64,
    smallest_max: i64,
    max: i64,
}

impl ValueRange {
    /// Creates a fixed range from `min` to `max`, inclusive.
    ///
    /// # Errors
    ///
    /// This returns an error when `min > max`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::ValueRange;
    ///
    /// let month = ValueRange::new(1, 12)?;
    /// assert!(month.is_fixed());
    /// assert_eq!(month.to_string(), "1 - 12");
    /// assert!(ValueRange::new(12, 1).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(min: i64, max: i64) -> Result<ValueRange, Error> {
        if min > max {
            return Err(E::MinimumExceedsMaximum { min, max }.into());
        }
        Ok(ValueRange::fixed_unchecked(min, max))
    }

    /// Creates a fixed range whose bounds are known to satisfy `min <= max`.
    #[inline]
    pub(crate) const fn fixed_unchecked(min: i64, max: i64) -> ValueRange {
        debug_assert!(min <= max);
        ValueRange { min, largest_min: min, smallest_max: max, max }
    }

    /// Creates a range with a fixed minimum and a variable maximum.
    ///
    /// This is equivalent to `ValueRange::with_bounds(min, min,
    /// smallest_max, max)`.
    ///
    /// # Errors
    ///
    /// This returns an error when `smallest_max > max` or when `min > max`.
    pub fn with_smallest_max(
        min: i64,
        smallest_max: i64,
        max: i64,
    ) -> Result<ValueRange, Error> {
        ValueRange::with_bounds(min, min, smallest_max, max)
    }

    /// Creates a range where both the minimum and the maximum may vary.
    ///
    /// The bounds are checked in this order, and the first violation is
    /// reported:
    ///
    /// 1. `min <= largest_min`
    /// 2. `smallest_max <= max`
    /// 3. `largest_min <= max`
    ///
    /// Notably, the largest minimum may exceed the smallest maximum.
    ///
    /// # Errors
    ///
    /// This returns an invalid parameter error on the first violated
    /// constraint.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::ValueRange;
    ///
    /// let range = ValueRange::with_bounds(1, 2, 3, 4)?;
    /// assert_eq!(range.to_string(), "1/2 - 3/4");
    ///
    /// let err = ValueRange::with_bounds(1, 2, 31, 28).unwrap_err();
    /// assert!(err.is_invalid_parameter());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "smallest maximum value 31 must be less than or equal to \
    ///      maximum value 28",
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_bounds(
        min: i64,
        largest_min: i64,
        smallest_max: i64,
        max: i64,
    ) -> Result<ValueRange, Error> {
        if min > largest_min {
            return Err(
                E::MinimumExceedsLargestMinimum { min, largest_min }.into()
            );
        }
        if smallest_max > max {
            return Err(
                E::SmallestMaximumExceedsMaximum { smallest_max, max }.into()
            );
        }
        if largest_min > max {
            return Err(
                E::LargestMinimumExceedsMaximum { largest_min, max }.into()
            );
        }
        Ok(ValueRange { min, largest_min, smallest_max, max })
    }

    /// Returns the absolute minimum.
    #[inline]
    pub fn minimum(&self) -> i64 {
        self.min
    }

    /// Returns the largest possible minimum.
    #[inline]
    pub fn largest_minimum(&self) -> i64 {
        self.largest_min
    }

    /// Returns the smallest possible maximum.
    #[inline]
    pub fn smallest_maximum(&self) -> i64 {
        self.smallest_max
    }

    /// Returns the absolute maximum.
    #[inline]
    pub fn maximum(&self) -> i64 {
        self.max
    }

    /// Returns true when the soft bounds are equal to the absolute bounds.
    pub fn is_fixed(&self) -> bool {
        self.min == self.largest_min && self.smallest_max == self.max
    }

    /// Returns true when every value in this range fits in an `i32`.
    pub fn is_int_value(&self) -> bool {
        i32::try_from(self.min).is_ok() && i32::try_from(self.max).is_ok()
    }

    /// Returns true when `value` is within the absolute bounds of this range.
    pub fn is_valid_value(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns true when `value` is valid and every value in this range fits
    /// in an `i32`.
    ///
    /// A range with bounds outside of `i32` always returns false, even for
    /// values that would fit.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::ValueRange;
    ///
    /// let big =
    ///     ValueRange::with_smallest_max(1, 28, i64::from(i32::MAX) + 1)?;
    /// assert!(big.is_valid_value(1));
    /// assert!(!big.is_valid_int_value(1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_valid_int_value(&self, value: i64) -> bool {
        self.is_int_value() && self.is_valid_value(value)
    }

    /// Returns `value` if it is valid, otherwise a range error naming the
    /// field described by `what`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::ValueRange;
    ///
    /// let month = ValueRange::new(1, 12)?;
    /// assert_eq!(month.check_valid_value(5, "month")?, 5);
    /// let err = month.check_valid_value(13, "month").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "parameter 'month' with value 13 is not in the required range \
    ///      of 1..=12",
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn check_valid_value(
        &self,
        value: i64,
        what: &'static str,
    ) -> Result<i64, Error> {
        if !self.is_valid_value(value) {
            return Err(Error::range(what, value, self.min, self.max));
        }
        Ok(value)
    }

    /// Like [`ValueRange::check_valid_value`], but also requires that this
    /// range fits in an `i32`.
    ///
    /// When it doesn't, the error reports this range clamped to `i32`.
    pub fn check_valid_int_value(
        &self,
        value: i64,
        what: &'static str,
    ) -> Result<i32, Error> {
        if !self.is_valid_int_value(value) {
            let min = self.min.max(i64::from(i32::MIN));
            let max = self.max.min(i64::from(i32::MAX));
            return Err(Error::range(what, value, min, max));
        }
        // OK because the range, and thus the value, fits in an `i32`.
        Ok(value as i32)
    }
}

impl core::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.min)?;
        if self.min != self.largest_min {
            write!(f, "/{}", self.largest_min)?;
        }
        write!(f, " - {}", self.smallest_max)?;
        if self.smallest_max != self.max {
            write!(f, "/{}", self.max)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValueRange {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("ValueRange", 4)?;
        s.serialize_field("minimum", &self.min)?;
        s.serialize_field("largest_minimum", &self.largest_min)?;
        s.serialize_field("smallest_maximum", &self.smallest_max)?;
        s.serialize_field("maximum", &self.max)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ValueRange {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<ValueRange, D::Error> {
        use serde::de;

        const FIELDS: &[&str] =
            &["minimum", "largest_minimum", "smallest_maximum", "maximum"];

        struct ValueRangeVisitor;

        impl<'de> de::Visitor<'de> for ValueRangeVisitor {
            type Value = ValueRange;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a value range with four ordered bounds")
            }

            fn visit_seq<A: de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<ValueRange, A::Error> {
                let mut bounds = [0i64; 4];
                for (i, bound) in bounds.iter_mut().enumerate() {
                    *bound = seq
                        .next_element()?
                        .ok_or_else(|| {
                            <A::Error as de::Error>::invalid_length(i, &self)
                        })?;
                }
                let [min, largest_min, smallest_max, max] = bounds;
                ValueRange::with_bounds(min, largest_min, smallest_max, max)
                    .map_err(de::Error::custom)
            }

            fn visit_map<A: de::MapAccess<'de>>(
                self,
                mut map: A,
            ) -> Result<ValueRange, A::Error> {
                let mut bounds: [Option<i64>; 4] = [None; 4];
                while let Some(key) =
                    map.next_key::<alloc::string::String>()?
                {
                    let Some(i) = FIELDS.iter().position(|f| *f == key) else {
                        return Err(de::Error::unknown_field(&key, FIELDS));
                    };
                    if bounds[i].is_some() {
                        return Err(de::Error::duplicate_field(FIELDS[i]));
                    }
                    bounds[i] = Some(map.next_value()?);
                }
                let mut get = |i: usize| -> Result<i64, A::Error> {
                    bounds[i]
                        .take()
                        .ok_or_else(|| de::Error::missing_field(FIELDS[i]))
                };
                let (min, largest_min) = (get(0)?, get(1)?);
                let (smallest_max, max) = (get(2)?, get(3)?);
                ValueRange::with_bounds(min, largest_min, smallest_max, max)
                    .map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_struct(
            "ValueRange",
            FIELDS,
            ValueRangeVisitor,
        )
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for ValueRange {
    fn arbitrary(g: &mut quickcheck::Gen) -> ValueRange {
        use quickcheck::Arbitrary;

        let mut bounds = [
            i64::arbitrary(g),
            i64::arbitrary(g),
            i64::arbitrary(g),
            i64::arbitrary(g),
        ];
        bounds.sort();
        let [min, largest_min, smallest_max, max] = bounds;
        ValueRange { min, largest_min, smallest_max, max }
    }
}
