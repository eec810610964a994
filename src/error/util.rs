use crate::{error, util::escape::Byte};

/// An error from parsing a run of decimal digits into an `i64`.
#[derive(Clone, Debug)]
pub(crate) enum ParseIntError {
    Empty,
    InvalidDigit(u8),
    Overflow,
}

impl From<ParseIntError> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: ParseIntError) -> error::Error {
        error::ErrorKind::ParseInt(err).into()
    }
}

impl error::IntoError for ParseIntError {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ParseIntError::*;

        match *self {
            Empty => f.write_str("expected at least one decimal digit"),
            InvalidDigit(got) => {
                write!(f, "expected a decimal digit, but found {}", Byte(got))
            }
            Overflow => {
                f.write_str("number does not fit in a signed 64-bit integer")
            }
        }
    }
}

/// An error from parsing the digits after a decimal separator into a number
/// of nanoseconds.
#[derive(Clone, Debug)]
pub(crate) enum ParseFractionError {
    TooManyDigits,
    InvalidDigit(u8),
}

impl ParseFractionError {
    /// Nanosecond precision.
    pub(crate) const MAX_PRECISION: usize = 9;
}

impl From<ParseFractionError> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: ParseFractionError) -> error::Error {
        error::ErrorKind::ParseFraction(err).into()
    }
}

impl error::IntoError for ParseFractionError {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for ParseFractionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ParseFractionError::*;

        match *self {
            TooManyDigits => write!(
                f,
                "fractional seconds have more than {max} digits",
                max = ParseFractionError::MAX_PRECISION,
            ),
            InvalidDigit(got) => write!(
                f,
                "expected a fractional digit, but found {}",
                Byte(got),
            ),
        }
    }
}
