use crate::{error, fmt::year::SignStyle, util::escape::Byte};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    EmptyPattern,
    ExceedsMaximumWidth { value: i64, max_width: u8 },
    ExpectedDigits { min_width: u8 },
    InvalidWidths { min_width: u8, max_width: u8 },
    MixedPattern,
    NegativeNotAllowed { value: i64 },
    NegativeZero,
    PlusSignNotNeeded { min_width: u8 },
    PlusSignRequired { min_width: u8 },
    SignNotAllowed { sign: u8, style: SignStyle },
    SignRequired,
    UnknownPatternLetter { byte: u8 },
    UnparsedInput,
    UnsupportedPatternWidth { count: usize },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::FmtYear(err).into()
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
            EmptyPattern => f.write_str("year format pattern is empty"),
            ExceedsMaximumWidth { value, max_width } => write!(
                f,
                "year {value} cannot be printed because it exceeds \
                 the maximum width of {max_width} digits",
            ),
            ExpectedDigits { min_width } => write!(
                f,
                "expected at least {min_width} decimal digit(s) for year",
            ),
            InvalidWidths { min_width, max_width } => write!(
                f,
                "invalid year widths: minimum width {min_width} must be \
                 at least 1 and at most maximum width {max_width}, \
                 which must be at most 19",
            ),
            MixedPattern => f.write_str(
                "year format pattern must repeat a single letter, \
                 either `u` or `y`",
            ),
            NegativeNotAllowed { value } => write!(
                f,
                "year {value} cannot be printed because \
                 negative years are not allowed by the sign style",
            ),
            NegativeZero => f.write_str("negative zero is not a valid year"),
            PlusSignNotNeeded { min_width } => write!(
                f,
                "a leading `+` is only allowed when more than \
                 {min_width} digits are given",
            ),
            PlusSignRequired { min_width } => write!(
                f,
                "a year with more than {min_width} digits \
                 requires a leading `+`",
            ),
            SignNotAllowed { sign, style } => write!(
                f,
                "sign `{sign}` is not allowed by sign style {style:?}",
                sign = Byte(sign),
            ),
            SignRequired => f.write_str(
                "a leading `+` or `-` is required by sign style Always",
            ),
            UnknownPatternLetter { byte } => write!(
                f,
                "unknown year format pattern letter `{byte}` \
                 (expected `u` or `y`)",
                byte = Byte(byte),
            ),
            UnparsedInput => f.write_str(
                "unexpected trailing input after year",
            ),
            UnsupportedPatternWidth { count } => write!(
                f,
                "year format pattern with {count} letters is not supported \
                 (two letter reduced years are not supported)",
            ),
        }
    }
}
