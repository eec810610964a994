/*!
A configurable text format for years.

The format is a run of decimal digits with an optional sign in front. How
many digits are required and which signs are accepted is controlled by
[`YearFormat`]. Parsing is strict: exactly the signs allowed by the
[`SignStyle`] are accepted and the whole input must be consumed.

# Example

```
use calendrical::{civil::Year, fmt::year::{SignStyle, YearFormat}};

// The default format needs at least 4 digits and a `+` for years
// with more than 4 digits.
let fmt = YearFormat::new();
assert_eq!(fmt.parse("2024")?, Year::new(2024)?);
assert_eq!(fmt.parse("+12345")?, Year::new(12_345)?);
assert!(fmt.parse("12345").is_err());
assert_eq!(fmt.format(Year::new(7)?)?, "0007");
assert_eq!(fmt.format(Year::new(12_345)?)?, "+12345");

// Formats can also be built from `u` (or `y`) patterns.
let fmt = YearFormat::from_pattern("u")?;
assert_eq!(fmt.format(Year::new(7)?)?, "7");
assert_eq!(fmt.sign_style(SignStyle::Always).format(Year::new(7)?)?, "+7");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::string::String;

use crate::{
    civil::Year,
    error::{
        civil::Error as CivilError,
        fmt::{year::Error as E, Error as FmtError},
        Error, ErrorContext,
    },
    fmt::util::DecimalFormatter,
    range::ValueRange,
};

/// The maximum number of digits in an `i64`.
const MAX_WIDTH: u8 = 19;

/// Controls how the sign of a year is parsed and printed.
///
/// Parsing is strict. The sign rules are:
///
/// | Style | Parse `+` | Parse `-` | Print |
/// | --- | --- | --- | --- |
/// | `Normal` | no | yes | `-` for negative years |
/// | `Always` | yes | yes | always a sign, a sign is required when parsing |
/// | `Never` | no | no | never a sign |
/// | `NotNegative` | no | no | negative years fail to print |
/// | `ExceedsPad` | yes | yes | `+` when the digits exceed the minimum width |
///
/// For `ExceedsPad`, parsing requires a `+` exactly when more digits than the
/// minimum width are given. A negative zero always fails to parse.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SignStyle {
    /// Only negative values carry a sign.
    Normal,
    /// A sign is always written and required when parsing.
    Always,
    /// No sign is ever written, and a sign fails to parse.
    Never,
    /// Like `Never`, but negative values fail to print.
    NotNegative,
    /// A `+` is written when a value has more digits than the minimum
    /// width.
    ExceedsPad,
}

impl SignStyle {
    /// Returns true when the given sign byte may be parsed with this style.
    fn allows(self, sign: u8) -> bool {
        match self {
            SignStyle::Normal => sign == b'-',
            SignStyle::Always | SignStyle::ExceedsPad => true,
            SignStyle::Never | SignStyle::NotNegative => false,
        }
    }
}

/// A format for parsing and printing years as signed decimal numbers.
///
/// A format has a minimum width (the number of digits that are required when
/// parsing, and padded with zeros when printing), a maximum width, a
/// [`SignStyle`] and a field. The field is either the proleptic year (as
/// with pattern letter `u`) or the year of the current era (pattern letter
/// `y`), where year `0` is year `1` of the era before the current one.
///
/// The default format is the one used by [`Year`]'s `FromStr` and `Display`
/// impls. It has a minimum width of 4, a maximum width of 10 and uses
/// [`SignStyle::ExceedsPad`].
///
/// Widths are checked when the format is used. The minimum width must be in
/// `1..=19` and no bigger than the maximum width, which must be at most 19.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct YearFormat {
    min_width: u8,
    max_width: u8,
    sign_style: SignStyle,
    year_of_era: bool,
}

impl YearFormat {
    /// Returns the default year format.
    pub const fn new() -> YearFormat {
        YearFormat {
            min_width: 4,
            max_width: 10,
            sign_style: SignStyle::ExceedsPad,
            year_of_era: false,
        }
    }

    /// Builds a format from a pattern of repeated `u` or `y` letters.
    ///
    /// `u` is the proleptic year and `y` the year of era. The number of
    /// letters determines the widths and sign style:
    ///
    /// * 1 letter: minimum width 1, maximum width 19, [`SignStyle::Normal`].
    /// * 2 letters: not supported.
    /// * 3 letters: minimum width 3, maximum width 19, [`SignStyle::Normal`].
    /// * `n >= 4` letters: minimum width `n`, maximum width 19,
    ///   [`SignStyle::ExceedsPad`].
    ///
    /// # Errors
    ///
    /// This returns an invalid parameter error for empty patterns, mixed or
    /// unknown letters and unsupported lengths (2 letters or more than 19).
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::Year, fmt::year::YearFormat};
    ///
    /// let fmt = YearFormat::from_pattern("uuuuu")?;
    /// assert_eq!(fmt.format(Year::new(2024)?)?, "02024");
    /// assert!(
    ///     YearFormat::from_pattern("uu").unwrap_err().is_invalid_parameter(),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_pattern(pattern: &str) -> Result<YearFormat, Error> {
        let bytes = pattern.as_bytes();
        let Some(&letter) = bytes.first() else {
            return Err(E::EmptyPattern.into());
        };
        if letter != b'u' && letter != b'y' {
            return Err(E::UnknownPatternLetter { byte: letter }.into());
        }
        if let Some(&byte) = bytes.iter().find(|&&b| b != letter) {
            return Err(if byte == b'u' || byte == b'y' {
                E::MixedPattern
            } else {
                E::UnknownPatternLetter { byte }
            }
            .into());
        }
        let count = bytes.len();
        let (min_width, sign_style) = match count {
            1 => (1, SignStyle::Normal),
            3 => (3, SignStyle::Normal),
            4..=19 => (count as u8, SignStyle::ExceedsPad),
            _ => return Err(E::UnsupportedPatternWidth { count }.into()),
        };
        Ok(YearFormat {
            min_width,
            max_width: MAX_WIDTH,
            sign_style,
            year_of_era: letter == b'y',
        })
    }

    /// Sets the minimum number of digits.
    pub const fn min_width(self, digits: u8) -> YearFormat {
        YearFormat { min_width: digits, ..self }
    }

    /// Sets the maximum number of digits.
    pub const fn max_width(self, digits: u8) -> YearFormat {
        YearFormat { max_width: digits, ..self }
    }

    /// Sets the sign style.
    pub const fn sign_style(self, style: SignStyle) -> YearFormat {
        YearFormat { sign_style: style, ..self }
    }

    /// When enabled, the year of era is used instead of the proleptic year.
    pub const fn year_of_era(self, yes: bool) -> YearFormat {
        YearFormat { year_of_era: yes, ..self }
    }

    /// Parses a year using this format.
    ///
    /// # Errors
    ///
    /// This returns an invalid parameter error if the widths of this format
    /// are invalid. Otherwise, this returns a parse error when the text
    /// doesn't match this format or when the year is out of range. The error
    /// reports the offset at which parsing failed.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::fmt::year::YearFormat;
    ///
    /// let err = YearFormat::new().parse("+1234-10").unwrap_err();
    /// assert_eq!(err.parse_offset(), Some(0));
    /// let err = YearFormat::new().parse("2009/12").unwrap_err();
    /// assert_eq!(err.parse_offset(), Some(4));
    /// ```
    pub fn parse<I: AsRef<[u8]>>(&self, input: I) -> Result<Year, Error> {
        let input = input.as_ref();
        self.check_widths()?;
        let value = self.parse_value(input).map_err(|(offset, err)| {
            err.context(FmtError::parse(input, offset))
        })?;
        self.resolve(value).with_context(|| FmtError::parse(input, 0))
    }

    /// Formats a year using this format.
    ///
    /// # Errors
    ///
    /// This returns an invalid parameter error if the widths of this format
    /// are invalid. It also fails when the year has more digits than the
    /// maximum width, or when the year is negative and the sign style is
    /// [`SignStyle::NotNegative`].
    pub fn format(&self, year: Year) -> Result<String, Error> {
        let mut buf = String::new();
        self.print(year, &mut buf)?;
        Ok(buf)
    }

    /// Writes a year using this format to the given writer.
    pub(crate) fn print<W: core::fmt::Write>(
        &self,
        year: Year,
        mut wtr: W,
    ) -> Result<(), Error> {
        self.check_widths()?;
        let value = if self.year_of_era {
            year.get_field(crate::civil::YearField::YearOfEra)
        } else {
            i64::from(year.get())
        };
        let digits = DecimalFormatter::new().format(value.abs());
        let len = digits.as_bytes().len();
        if len > usize::from(self.max_width) {
            return Err(
                E::ExceedsMaximumWidth { value, max_width: self.max_width }
                    .into(),
            );
        }
        let sign = if value >= 0 {
            match self.sign_style {
                SignStyle::Always => Some('+'),
                SignStyle::ExceedsPad
                    if self.min_width < MAX_WIDTH
                        && value >= 10i64.pow(u32::from(self.min_width)) =>
                {
                    Some('+')
                }
                _ => None,
            }
        } else {
            match self.sign_style {
                SignStyle::NotNegative => {
                    return Err(E::NegativeNotAllowed { value }.into())
                }
                SignStyle::Never => None,
                _ => Some('-'),
            }
        };
        let padded = DecimalFormatter::new()
            .padding(self.min_width)
            .format(value.abs());
        let result = match sign {
            Some(sign) => wtr
                .write_char(sign)
                .and_then(|_| wtr.write_str(padded.as_str())),
            None => wtr.write_str(padded.as_str()),
        };
        result.map_err(|_| {
            Error::from_args(format_args!("failed to write formatted year"))
        })
    }

    fn check_widths(&self) -> Result<(), Error> {
        let (min, max) = (self.min_width, self.max_width);
        if min < 1 || min > max || max > MAX_WIDTH {
            return Err(
                E::InvalidWidths { min_width: min, max_width: max }.into()
            );
        }
        Ok(())
    }

    /// Parses the signed digits of a year. Errors carry the offset at which
    /// parsing failed.
    fn parse_value(&self, input: &[u8]) -> Result<i64, (usize, Error)> {
        let mut start = 0;
        let Some(&first) = input.first() else {
            let err = E::ExpectedDigits { min_width: self.min_width };
            return Err((0, err.into()));
        };
        let (mut negative, mut positive) = (false, false);
        if first == b'+' || first == b'-' {
            if !self.sign_style.allows(first) {
                let err =
                    E::SignNotAllowed { sign: first, style: self.sign_style };
                return Err((0, err.into()));
            }
            negative = first == b'-';
            positive = first == b'+';
            start = 1;
        } else if self.sign_style == SignStyle::Always {
            return Err((0, E::SignRequired.into()));
        }

        let min_end = start + usize::from(self.min_width);
        let max_end = input.len().min(start + usize::from(self.max_width));
        let expected_digits = || -> (usize, Error) {
            (start, E::ExpectedDigits { min_width: self.min_width }.into())
        };
        if min_end > input.len() {
            return Err(expected_digits());
        }
        let mut end = start;
        let mut total: i128 = 0;
        while end < max_end {
            let digit = match input[end] {
                byte @ b'0'..=b'9' => byte - b'0',
                _ => break,
            };
            total = total * 10 + i128::from(digit);
            end += 1;
        }
        if end < min_end {
            return Err(expected_digits());
        }

        if negative {
            if total == 0 {
                return Err((start - 1, E::NegativeZero.into()));
            }
        } else if self.sign_style == SignStyle::ExceedsPad {
            let len = end - start;
            if positive && len <= usize::from(self.min_width) {
                let err = E::PlusSignNotNeeded { min_width: self.min_width };
                return Err((start - 1, err.into()));
            }
            if !positive && len > usize::from(self.min_width) {
                let err = E::PlusSignRequired { min_width: self.min_width };
                return Err((start, err.into()));
            }
        }
        // Up to 19 digits might not fit in an `i64`. When that happens, the
        // last digit is left unparsed.
        let limit = if negative { 1i128 << 63 } else { i128::from(i64::MAX) };
        if total > limit {
            total /= 10;
            end -= 1;
        }
        if end < input.len() {
            return Err((end, E::UnparsedInput.into()));
        }
        let total = if negative { -total } else { total };
        // OK because `total` was bounded to the range of `i64` above.
        Ok(total as i64)
    }

    fn resolve(&self, value: i64) -> Result<Year, Error> {
        if !self.year_of_era {
            return Year::from_i64(value);
        }
        ValueRange::new(1, i64::from(Year::MAX.get()))?
            .check_valid_value(value, "year-of-era")
            .and_then(|_| Year::from_i64(value))
            .context(CivilError::YearOfEra { year_of_era: value })
    }
}

impl Default for YearFormat {
    fn default() -> YearFormat {
        YearFormat::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn year(value: i32) -> Year {
        Year::new(value).unwrap()
    }

    #[test]
    fn parse_default_ok() {
        let fmt = YearFormat::new();
        let cases = [
            ("0000", 0),
            ("9999", 9_999),
            ("2000", 2_000),
            ("+12345678", 12_345_678),
            ("+123456", 123_456),
            ("-1234", -1_234),
            ("-12345678", -12_345_678),
            ("+999999999", 999_999_999),
            ("-999999999", -999_999_999),
        ];
        for (input, expected) in cases {
            assert_eq!(fmt.parse(input).unwrap(), year(expected), "{input}");
        }
    }

    #[test]
    fn parse_default_err_offsets() {
        let fmt = YearFormat::new();
        let cases = [
            ("", 0),
            ("-00", 1),
            ("--01-0", 1),
            ("A01", 0),
            ("200", 0),
            ("2009/12", 4),
            ("-0000-10", 0),
            ("-12345678901-10", 11),
            ("+1-10", 1),
            ("+12-10", 1),
            ("+123-10", 1),
            ("+1234-10", 0),
            ("12345-10", 0),
            ("+12345678901-10", 11),
        ];
        for (input, offset) in cases {
            let err = fmt.parse(input).unwrap_err();
            assert_eq!(err.parse_offset(), Some(offset), "{input}: {err}");
            assert_eq!(err.parse_input(), Some(input));
        }
    }

    #[test]
    fn parse_out_of_range() {
        let err = YearFormat::new().parse("+1000000000").unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.parse_offset(), Some(0));
        insta::assert_snapshot!(
            err,
            @r###"failed to parse "+1000000000" at offset 0: parameter 'year' with value 1000000000 is not in the required range of -999999999..=999999999"###,
        );
    }

    #[test]
    fn parse_sign_styles() {
        let fmt = YearFormat::new().min_width(1).max_width(19);
        let parse = |style, input| fmt.sign_style(style).parse(input);

        assert_eq!(parse(SignStyle::Normal, "-5").unwrap(), year(-5));
        assert_eq!(parse(SignStyle::Normal, "5").unwrap(), year(5));
        assert_eq!(
            parse(SignStyle::Normal, "+5").unwrap_err().parse_offset(),
            Some(0),
        );

        assert_eq!(parse(SignStyle::Always, "+5").unwrap(), year(5));
        assert_eq!(parse(SignStyle::Always, "-5").unwrap(), year(-5));
        assert_eq!(
            parse(SignStyle::Always, "5").unwrap_err().parse_offset(),
            Some(0),
        );

        for style in [SignStyle::Never, SignStyle::NotNegative] {
            assert_eq!(parse(style, "5").unwrap(), year(5));
            assert!(parse(style, "+5").is_err());
            assert!(parse(style, "-5").is_err());
        }

        insta::assert_snapshot!(
            parse(SignStyle::Never, "-5").unwrap_err(),
            @r###"failed to parse "-5" at offset 0: sign `-` is not allowed by sign style Never"###,
        );
        insta::assert_snapshot!(
            parse(SignStyle::Normal, "-0").unwrap_err(),
            @r###"failed to parse "-0" at offset 0: negative zero is not a valid year"###,
        );
    }

    #[test]
    fn parse_max_width_overflow() {
        let fmt = YearFormat::new()
            .min_width(1)
            .max_width(19)
            .sign_style(SignStyle::Normal);
        // 19 nines don't fit in an `i64`, so the last digit is unparsed.
        let err = fmt.parse("9999999999999999999").unwrap_err();
        assert_eq!(err.parse_offset(), Some(18));
        // But the most negative `i64` does fit, it's just out of range.
        let err = fmt.parse("-9223372036854775808").unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.parse_offset(), Some(0));
    }

    #[test]
    fn parse_year_of_era() {
        let fmt = YearFormat::from_pattern("yyyy").unwrap();
        assert_eq!(fmt.parse("2024").unwrap(), year(2_024));
        let err = fmt.parse("0000").unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.parse_offset(), Some(0));
    }

    #[test]
    fn patterns() {
        let fmt = |p| YearFormat::from_pattern(p).unwrap();
        let normal = YearFormat::new().sign_style(SignStyle::Normal);
        assert_eq!(fmt("u"), normal.min_width(1).max_width(19));
        assert_eq!(fmt("uuu"), normal.min_width(3).max_width(19));
        assert_eq!(fmt("uuuu"), YearFormat::new().max_width(19));
        assert_eq!(
            fmt("yyyyyy"),
            YearFormat::new().min_width(6).max_width(19).year_of_era(true),
        );

        let err = |p| YearFormat::from_pattern(p).unwrap_err();
        assert!(err("").is_invalid_parameter());
        assert!(err("uu").is_invalid_parameter());
        assert!(err("uuuuuuuuuuuuuuuuuuuu").is_invalid_parameter());
        assert!(err("uy").is_invalid_parameter());
        assert!(err("uuX").is_invalid_parameter());
        insta::assert_snapshot!(
            err("Y"),
            @"unknown year format pattern letter `Y` (expected `u` or `y`)",
        );
    }

    #[test]
    fn invalid_widths() {
        let y = year(1);
        let fmt = YearFormat::new();
        let err = fmt.min_width(0).format(y).unwrap_err();
        assert!(err.is_invalid_parameter());
        let err = fmt.min_width(11).parse("1").unwrap_err();
        assert!(err.is_invalid_parameter());
        let err = fmt.max_width(20).format(y).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn format() {
        let f = |fmt: YearFormat, value| fmt.format(year(value)).unwrap();
        let default = YearFormat::new();
        assert_eq!(f(default, 0), "0000");
        assert_eq!(f(default, 2_024), "2024");
        assert_eq!(f(default, 9_999), "9999");
        assert_eq!(f(default, 10_000), "+10000");
        assert_eq!(f(default, -1), "-0001");
        assert_eq!(f(default, -12_345), "-12345");
        assert_eq!(f(default, 999_999_999), "+999999999");

        let short = default.min_width(1).max_width(2);
        assert_eq!(f(short.sign_style(SignStyle::Always), 5), "+5");
        assert_eq!(f(short.sign_style(SignStyle::Never), -5), "5");
        assert_eq!(f(short.sign_style(SignStyle::Normal), -5), "-5");
        let err = short
            .sign_style(SignStyle::NotNegative)
            .format(year(-5))
            .unwrap_err();
        insta::assert_snapshot!(
            err,
            @"year -5 cannot be printed because negative years are not allowed by the sign style",
        );
        let err = short.format(year(100)).unwrap_err();
        insta::assert_snapshot!(
            err,
            @"year 100 cannot be printed because it exceeds the maximum width of 2 digits",
        );

        let era = YearFormat::from_pattern("y").unwrap();
        assert_eq!(f(era, 0), "1");
        assert_eq!(f(era, -1), "2");
        assert_eq!(f(era, 2_024), "2024");
    }

    quickcheck::quickcheck! {
        fn prop_default_round_trip(y: Year) -> bool {
            let fmt = YearFormat::new();
            fmt.parse(fmt.format(y).unwrap()).unwrap() == y
        }

        fn prop_display_is_plain_integer(y: Year) -> bool {
            y.to_string() == alloc::format!("{}", y.get())
        }

        fn prop_unpadded_format_matches_display(y: Year) -> bool {
            let fmt = YearFormat::from_pattern("u").unwrap();
            fmt.format(y).unwrap() == y.to_string()
        }
    }
}
