use alloc::boxed::Box;

use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ConvertNegative,
    ConvertOverflow { unit: &'static str },
    ConvertUnsignedTooBig { seconds: u64 },
    DivideByZero,
    EstimatedUnit { unit: Box<str> },
    Overflow { operation: &'static str },
}

impl Error {
    pub(crate) fn estimated_unit(unit: &dyn core::fmt::Display) -> Error {
        Error::EstimatedUnit {
            unit: alloc::string::ToString::to_string(unit).into(),
        }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ConvertNegative => f.write_str(
                "cannot convert negative fixed-point duration \
                 to unsigned `core::time::Duration`",
            ),
            ConvertOverflow { unit } => write!(
                f,
                "fixed-point duration is too big to be represented \
                 as a 64-bit integer number of {unit}",
            ),
            ConvertUnsignedTooBig { seconds } => write!(
                f,
                "unsigned duration of {seconds} seconds is too big \
                 for a fixed-point duration",
            ),
            DivideByZero => {
                f.write_str("cannot divide fixed-point duration by zero")
            }
            EstimatedUnit { ref unit } => write!(
                f,
                "unit '{unit}' has an estimated duration \
                 and cannot be converted to an exact duration",
            ),
            Overflow { operation } => write!(
                f,
                "fixed-point duration overflowed when {operation}",
            ),
        }
    }
}
