use crate::{error, util::escape::Byte};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Empty,
    ExpectedComponents,
    ExpectedDayDesignatorFoundByte { byte: u8 },
    ExpectedDayDesignatorFoundEndOfInput,
    ExpectedDigitsFoundByte { byte: u8 },
    ExpectedDigitsFoundEndOfInput,
    ExpectedPeriodDesignatorFoundByte { byte: u8 },
    ExpectedPeriodDesignatorFoundEndOfInput,
    ExpectedSecondDesignatorFoundByte { byte: u8 },
    ExpectedSecondDesignatorFoundEndOfInput,
    ExpectedTimeComponents,
    ExpectedTimeDesignatorFoundByte { byte: u8 },
    ExpectedTimeUnitDesignatorFoundByte { byte: u8 },
    ExpectedTimeUnitDesignatorFoundEndOfInput,
    OutOfOrderDesignator { designator: u8 },
    Overflow,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::FmtDuration(err).into()
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
            Empty => f.write_str(
                "an empty string is not a valid ISO 8601 duration",
            ),
            ExpectedComponents => f.write_str(
                "expected a day component or a time designator `T` \
                 after the period designator `P`",
            ),
            ExpectedDayDesignatorFoundByte { byte } => write!(
                f,
                "expected day designator `D` after day amount, \
                 but found `{byte}` instead",
                byte = Byte(byte),
            ),
            ExpectedDayDesignatorFoundEndOfInput => f.write_str(
                "expected day designator `D` after day amount, \
                 but found end of input",
            ),
            ExpectedDigitsFoundByte { byte } => write!(
                f,
                "expected one or more decimal digits, \
                 but found `{byte}` instead",
                byte = Byte(byte),
            ),
            ExpectedDigitsFoundEndOfInput => f.write_str(
                "expected one or more decimal digits, \
                 but found end of input",
            ),
            ExpectedPeriodDesignatorFoundByte { byte } => write!(
                f,
                "expected period designator `P`, \
                 but found `{byte}` instead",
                byte = Byte(byte),
            ),
            ExpectedPeriodDesignatorFoundEndOfInput => f.write_str(
                "expected period designator `P`, but found end of input",
            ),
            ExpectedSecondDesignatorFoundByte { byte } => write!(
                f,
                "expected second designator `S` after fractional \
                 seconds, but found `{byte}` instead",
                byte = Byte(byte),
            ),
            ExpectedSecondDesignatorFoundEndOfInput => f.write_str(
                "expected second designator `S` after fractional \
                 seconds, but found end of input",
            ),
            ExpectedTimeComponents => f.write_str(
                "expected at least one hour, minute or second component \
                 after the time designator `T`",
            ),
            ExpectedTimeDesignatorFoundByte { byte } => write!(
                f,
                "expected time designator `T` or end of input after \
                 day component, but found `{byte}` instead",
                byte = Byte(byte),
            ),
            ExpectedTimeUnitDesignatorFoundByte { byte } => write!(
                f,
                "expected one of the unit designators `H`, `M` or `S`, \
                 but found `{byte}` instead",
                byte = Byte(byte),
            ),
            ExpectedTimeUnitDesignatorFoundEndOfInput => f.write_str(
                "expected one of the unit designators `H`, `M` or `S`, \
                 but found end of input",
            ),
            OutOfOrderDesignator { designator } => write!(
                f,
                "found unit designator `{designator}` out of order \
                 (units must be given as hours, then minutes, then seconds, \
                 each at most once)",
                designator = Byte(designator),
            ),
            Overflow => f.write_str(
                "duration components overflowed the total number \
                 of seconds supported by a fixed-point duration",
            ),
        }
    }
}
