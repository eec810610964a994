use alloc::boxed::Box;

use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DivideByZero,
    MissingUnit { unit: Box<str> },
    Overflow { operation: &'static str, unit: Box<str> },
    Total,
}

impl Error {
    pub(crate) fn missing_unit(unit: &dyn core::fmt::Display) -> Error {
        Error::MissingUnit {
            unit: alloc::string::ToString::to_string(unit).into(),
        }
    }

    pub(crate) fn overflow(
        operation: &'static str,
        unit: &dyn core::fmt::Display,
    ) -> Error {
        Error::Overflow {
            operation,
            unit: alloc::string::ToString::to_string(unit).into(),
        }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Period(err).into()
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
            DivideByZero => f.write_str("cannot divide period by zero"),
            MissingUnit { ref unit } => {
                write!(f, "period has no amount for unit '{unit}'")
            }
            Overflow { operation, ref unit } => write!(
                f,
                "period amount for unit '{unit}' overflowed \
                 when {operation}",
            ),
            Total => f.write_str("failed to total period amounts"),
        }
    }
}
