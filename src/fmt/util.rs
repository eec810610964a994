/// Formats integers as ASCII decimal numbers without going through
/// `core::fmt`'s integer machinery, which doesn't let us pad and sign in one
/// step.
///
/// By default, the sign is only written for negative numbers. Use
/// `force_sign` to write `+` for non-negative numbers too.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecimalFormatter {
    force_sign: bool,
    minimum_digits: u8,
}

impl DecimalFormatter {
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { force_sign: false, minimum_digits: 0 }
    }

    pub(crate) const fn format(&self, value: i64) -> Decimal {
        Decimal::new(self, value)
    }

    /// When enabled, non-negative numbers (including zero) are written with
    /// a leading `+`.
    pub(crate) const fn force_sign(self, yes: bool) -> DecimalFormatter {
        DecimalFormatter { force_sign: yes, ..self }
    }

    /// Zero pads the digits (not counting the sign) to at least this many.
    ///
    /// This is capped at 19, the number of digits in `i64::MAX`.
    pub(crate) const fn padding(self, digits: u8) -> DecimalFormatter {
        let minimum_digits = if digits > Decimal::MAX_I64_DIGITS {
            Decimal::MAX_I64_DIGITS
        } else {
            digits
        };
        DecimalFormatter { minimum_digits, ..self }
    }
}

/// A formatted decimal number.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_I64_LEN as usize],
    start: u8,
}

impl Decimal {
    /// The length of `i64::MIN.to_string()`.
    const MAX_I64_LEN: u8 = 20;
    /// The length of `i64::MAX.to_string()`.
    const MAX_I64_DIGITS: u8 = 19;

    const fn new(formatter: &DecimalFormatter, value: i64) -> Decimal {
        let mut decimal = Decimal {
            buf: [b'0'; Self::MAX_I64_LEN as usize],
            start: Self::MAX_I64_LEN,
        };
        // Working on the unsigned magnitude handles `i64::MIN`.
        let mut magnitude = value.unsigned_abs();
        loop {
            decimal.start -= 1;
            let digit = (magnitude % 10) as u8;
            decimal.buf[decimal.start as usize] = b'0' + digit;
            magnitude /= 10;
            if magnitude == 0 {
                break;
            }
        }
        while Self::MAX_I64_LEN - decimal.start < formatter.minimum_digits {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'0';
        }
        if value < 0 {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'-';
        } else if formatter.force_sign {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'+';
        }
        decimal
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[usize::from(self.start)..]
    }

    /// Returns this number as a string. It is always valid ASCII.
    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: Every byte in `buf` is either an ASCII digit or an ASCII
        // sign, so any subslice of it is valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

/// Formats a nanosecond fraction as the digits that follow a decimal point.
///
/// Without an explicit precision, trailing zeros are trimmed. So a fraction
/// of `0` formats as an empty string.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FractionalFormatter {
    precision: Option<u8>,
}

impl FractionalFormatter {
    pub(crate) const fn new() -> FractionalFormatter {
        FractionalFormatter { precision: None }
    }

    /// Formats the given fraction, which must be in `0..=999_999_999`.
    pub(crate) const fn format(&self, nanos: i32) -> Fractional {
        Fractional::new(self, nanos)
    }

    /// Sets a fixed number of digits, clamped to 9. Extra digits are
    /// truncated, not rounded.
    pub(crate) const fn precision(self, digits: u8) -> FractionalFormatter {
        let digits = if digits > 9 { 9 } else { digits };
        FractionalFormatter { precision: Some(digits) }
    }
}

/// A formatted fraction. This may be empty.
#[derive(Debug)]
pub(crate) struct Fractional {
    buf: [u8; 9],
    end: u8,
}

impl Fractional {
    const fn new(formatter: &FractionalFormatter, nanos: i32) -> Fractional {
        debug_assert!(0 <= nanos && nanos <= 999_999_999);
        let mut fractional = Fractional { buf: [b'0'; 9], end: 9 };
        let mut value = nanos;
        let mut i = 9;
        while value > 0 {
            i -= 1;
            fractional.buf[i] = b'0' + (value % 10) as u8;
            value /= 10;
        }
        match formatter.precision {
            Some(precision) => fractional.end = precision,
            None => {
                while fractional.end > 0
                    && fractional.buf[fractional.end as usize - 1] == b'0'
                {
                    fractional.end -= 1;
                }
            }
        }
        fractional
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.end == 0
    }

    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: `buf` only ever contains ASCII digits.
        unsafe {
            core::str::from_utf8_unchecked(&self.buf[..usize::from(self.end)])
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn decimal() {
        let f = |fmt: DecimalFormatter, n| fmt.format(n).as_str().to_string();
        let plain = DecimalFormatter::new();

        assert_eq!(f(plain, i64::MIN), "-9223372036854775808");
        assert_eq!(f(plain, i64::MAX), "9223372036854775807");
        assert_eq!(f(plain, 0), "0");
        assert_eq!(f(plain.force_sign(true), 0), "+0");
        assert_eq!(
            f(plain.force_sign(true), i64::MAX),
            "+9223372036854775807",
        );
        assert_eq!(f(plain.padding(4), 0), "0000");
        assert_eq!(f(plain.padding(4), 789), "0789");
        assert_eq!(f(plain.padding(4), -789), "-0789");
        assert_eq!(f(plain.padding(4), 123_456), "123456");
        assert_eq!(f(plain.padding(4).force_sign(true), 12_345), "+12345");
        assert_eq!(f(plain.padding(30), 1), "0000000000000000001");
    }

    #[test]
    fn fractional() {
        let auto =
            |n| FractionalFormatter::new().format(n).as_str().to_string();
        assert_eq!(auto(0), "");
        assert!(FractionalFormatter::new().format(0).is_empty());
        assert_eq!(auto(100_000_000), "1");
        assert_eq!(auto(123_456_000), "123456");
        assert_eq!(auto(1), "000000001");
        assert_eq!(auto(999_999_999), "999999999");

        let fixed = |p, n| {
            let fmt = FractionalFormatter::new().precision(p);
            fmt.format(n).as_str().to_string()
        };
        assert_eq!(fixed(3, 0), "000");
        assert_eq!(fixed(6, 500), "000000");
        assert_eq!(fixed(9, 500), "000000500");
        assert_eq!(fixed(3, 999_999_999), "999");
        assert_eq!(fixed(12, 5), "000000005");
    }
}
