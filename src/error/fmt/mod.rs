use alloc::{boxed::Box, string::String};

use crate::error;

pub(crate) mod duration;
pub(crate) mod year;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Parse { input: Box<str>, offset: usize },
}

impl Error {
    pub(crate) fn parse(input: &[u8], offset: usize) -> Error {
        Error::Parse {
            input: String::from_utf8_lossy(input).into(),
            offset,
        }
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            Parse { ref input, offset } => {
                write!(f, "failed to parse {input:?} at offset {offset}")
            }
        }
    }
}
