use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DayOfYear { year: i32 },
    NowFromClock,
    YearOfEra { year_of_era: i64 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Civil(err).into()
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
            DayOfYear { year } => {
                write!(f, "failed to resolve day of year in year {year}")
            }
            NowFromClock => {
                f.write_str("failed to determine current year from clock")
            }
            YearOfEra { year_of_era } => write!(
                f,
                "failed to resolve year of era {year_of_era} \
                 in the current era",
            ),
        }
    }
}
