use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    #[allow(dead_code)] // not used without `std`
    ConvertSystemTime,
    InvalidClockOffset,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Instant(err).into()
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
            ConvertSystemTime => f.write_str(
                "failed to convert `std::time::SystemTime` to instant",
            ),
            InvalidClockOffset => {
                f.write_str("invalid UTC offset for fixed clock")
            }
        }
    }
}
