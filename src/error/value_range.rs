use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    LargestMinimumExceedsMaximum { largest_min: i64, max: i64 },
    MinimumExceedsLargestMinimum { min: i64, largest_min: i64 },
    MinimumExceedsMaximum { min: i64, max: i64 },
    SmallestMaximumExceedsMaximum { smallest_max: i64, max: i64 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::ValueRange(err).into()
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
            LargestMinimumExceedsMaximum { largest_min, max } => write!(
                f,
                "largest minimum value {largest_min} must be less than \
                 or equal to maximum value {max}",
            ),
            MinimumExceedsLargestMinimum { min, largest_min } => write!(
                f,
                "minimum value {min} must be less than or equal to \
                 largest minimum value {largest_min}",
            ),
            MinimumExceedsMaximum { min, max } => write!(
                f,
                "minimum value {min} must be less than or equal to \
                 maximum value {max}",
            ),
            SmallestMaximumExceedsMaximum { smallest_max, max } => write!(
                f,
                "smallest maximum value {smallest_max} must be less than \
                 or equal to maximum value {max}",
            ),
        }
    }
}
