use alloc::{boxed::Box, sync::Arc};

pub(crate) mod civil;
pub(crate) mod duration;
pub(crate) mod fmt;
pub(crate) mod instant;
pub(crate) mod period;
pub(crate) mod util;
pub(crate) mod value_range;

/// An error that can occur in this crate.
///
/// The most common type of error is a result of overflow. But other errors
/// exist as well:
///
/// * Division by zero, for example via
/// [`FixedPointDuration::divided_by`](crate::FixedPointDuration::divided_by).
/// * Invalid parameters, like [`ValueRange`](crate::ValueRange) bounds that
/// are out of order.
/// * Values outside of a supported range, like a
/// [`Year`](crate::civil::Year) beyond `999,999,999`.
/// * Parse errors, which record the input and the offset at which parsing
/// failed.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the
/// `std` feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type provides a handful of
/// predicates like [`Error::is_overflow`]. The predicates are not
/// exhaustive. That is, there exist some errors that do not return `true`
/// for any of the `Error::is_*` predicates.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern," where only one
/// error type exists for a variety of different operations. Errors form a
/// causal chain: the `Display` impl prints every error in the chain from
/// the highest level context down to the root cause, separated by `: `.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheap to clone and to keep its
    /// size equal to one word.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// Callers should generally use their own error types. But in some
    /// circumstances, it can be convenient to manufacture an error value
    /// of this crate specifically. For example, when implementing
    /// [`Clock`](crate::clock::Clock) for a custom time source.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated as a result of arithmetic
    /// overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let err = FixedPointDuration::of_seconds_nanos(
    ///     i64::MAX,
    ///     1_000_000_000,
    /// ).unwrap_err();
    /// assert!(err.is_overflow());
    /// ```
    pub fn is_overflow(&self) -> bool {
        use self::ErrorKind::*;
        use self::{
            duration::Error as DurationError,
            fmt::duration::Error as FmtDurationError,
            period::Error as PeriodError,
        };

        matches!(
            *self.root().kind(),
            Duration(
                DurationError::Overflow { .. }
                    | DurationError::ConvertOverflow { .. }
            ) | Period(PeriodError::Overflow { .. })
                | FmtDuration(FmtDurationError::Overflow)
        )
    }

    /// Returns true when this error originated as a result of a division by
    /// zero.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let err = FixedPointDuration::of_seconds(1).divided_by(0).unwrap_err();
    /// assert!(err.is_divide_by_zero());
    /// ```
    pub fn is_divide_by_zero(&self) -> bool {
        use self::ErrorKind::*;
        use self::{
            duration::Error as DurationError, period::Error as PeriodError,
        };

        matches!(
            *self.root().kind(),
            Duration(DurationError::DivideByZero)
                | Period(PeriodError::DivideByZero)
        )
    }

    /// Returns true when this error originated as a result of a value being
    /// out of its supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Year;
    ///
    /// assert!(Year::new(1_000_000_000).unwrap_err().is_range());
    /// assert!(Year::new(2007).unwrap().at_day(366).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Range(_))
    }

    /// Returns true when this error originated as a result of an invalid
    /// configuration of parameters to a function call.
    ///
    /// This covers bounds of a [`ValueRange`](crate::ValueRange) given out
    /// of order, units with an estimated duration given to an exact
    /// conversion and malformed year format patterns.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{FixedPointDuration, Unit, ValueRange};
    ///
    /// assert!(ValueRange::new(2, 1).unwrap_err().is_invalid_parameter());
    /// let err = FixedPointDuration::of(1, Unit::Month).unwrap_err();
    /// assert!(err.is_invalid_parameter());
    /// ```
    pub fn is_invalid_parameter(&self) -> bool {
        use self::ErrorKind::*;
        use self::{
            duration::Error as DurationError,
            fmt::year::Error as FmtYearError,
        };

        matches!(
            *self.root().kind(),
            ValueRange(_)
                | Duration(DurationError::EstimatedUnit { .. })
                | FmtYear(
                    FmtYearError::EmptyPattern
                        | FmtYearError::MixedPattern
                        | FmtYearError::UnknownPatternLetter { .. }
                        | FmtYearError::UnsupportedPatternWidth { .. }
                        | FmtYearError::InvalidWidths { .. }
                )
        )
    }

    /// Returns true when this error is the result of failing to parse text.
    ///
    /// When this returns true, [`Error::parse_offset`] and
    /// [`Error::parse_input`] both return `Some`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::FixedPointDuration;
    ///
    /// let err = "PT1.1ABC2S".parse::<FixedPointDuration>().unwrap_err();
    /// assert!(err.is_parse());
    /// ```
    pub fn is_parse(&self) -> bool {
        self.parse_failure().is_some()
    }

    /// Returns the character offset at which parsing failed, if this error
    /// is the result of failing to parse text.
    ///
    /// The offset is measured in bytes from the start of the input. Since
    /// all valid inputs are ASCII, this is also a character offset for any
    /// input that fails at or before its first non-ASCII character.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Year;
    ///
    /// let err = "2009/12".parse::<Year>().unwrap_err();
    /// assert_eq!(err.parse_offset(), Some(4));
    /// ```
    pub fn parse_offset(&self) -> Option<usize> {
        self.parse_failure().map(|(_, offset)| offset)
    }

    /// Returns the text that failed to parse, if this error is the result of
    /// failing to parse text.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Year;
    ///
    /// let err = "+1-10".parse::<Year>().unwrap_err();
    /// assert_eq!(err.parse_input(), Some("+1-10"));
    /// ```
    pub fn parse_input(&self) -> Option<&str> {
        self.parse_failure().map(|(input, _)| input)
    }

    fn parse_failure(&self) -> Option<(&str, usize)> {
        self.chain().find_map(|err| match *err.kind() {
            ErrorKind::Fmt(fmt::Error::Parse { ref input, offset }) => {
                Some((&**input, offset))
            }
            _ => None,
        })
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "year")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        let Some(inner) = err.inner.take() else {
            return Error::from(ErrorKind::Unknown).context_impl(self);
        };
        let inner = match Arc::try_unwrap(inner) {
            Ok(mut inner) => {
                debug_assert!(
                    inner.cause.is_none(),
                    "cause of consequence must be `None`"
                );
                inner.cause = Some(self);
                inner
            }
            // A consequent that is shared elsewhere can't be mutated in
            // place, so we give up on the chain and keep the root cause.
            // The root cause is what the predicates inspect.
            Err(_) => return self,
        };
        Error { inner: Some(Arc::new(inner)) }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) =
            err.inner.as_ref().and_then(|inner| inner.cause.as_ref())
        {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f
                    .debug_struct("Error")
                    .field("kind", &"None")
                    .finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Civil(self::civil::Error),
    Duration(self::duration::Error),
    Fmt(self::fmt::Error),
    FmtDuration(self::fmt::duration::Error),
    FmtYear(self::fmt::year::Error),
    Instant(self::instant::Error),
    ParseFraction(self::util::ParseFractionError),
    ParseInt(self::util::ParseIntError),
    Period(self::period::Error),
    Range(RangeError),
    Unknown,
    ValueRange(self::value_range::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Civil(ref err) => err.fmt(f),
            Duration(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            FmtDuration(ref err) => err.fmt(f),
            FmtYear(ref err) => err.fmt(f),
            Instant(ref err) => err.fmt(f),
            ParseFraction(ref err) => err.fmt(f),
            ParseInt(ref err) => err.fmt(f),
            Period(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Unknown => f.write_str("unknown calendrical error"),
            ValueRange(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// A generic error message.
///
/// This exists to support the `Error::from_args` public API, which permits
/// users to manifest their own `Error` values from an arbitrary message.
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls for the crate-internal error enums.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
///
/// This trick was borrowed from `anyhow`.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// This is useful when error construction allocates, like when the
    /// consequent copies the input that failed to parse. The closure avoids
    /// paying that cost in the happy path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    // We test that our 'Error' type is the size we expect. This isn't an API
    // guarantee, but if the size increases, we really want to make sure we
    // decide to do that intentionally.
    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn chain_display_and_root_predicates() {
        let root =
            Error::range("year", 1_000_000_000, -999_999_999, 999_999_999);
        let err = root.context(fmt::Error::parse(b"+1000000000", 0));
        insta::assert_snapshot!(
            err,
            @r#"failed to parse "+1000000000" at offset 0: parameter 'year' with value 1000000000 is not in the required range of -999999999..=999999999"#,
        );
        assert!(err.is_range());
        assert!(err.is_parse());
        assert!(!err.is_overflow());
        assert_eq!(err.parse_offset(), Some(0));
        assert_eq!(err.parse_input(), Some("+1000000000"));
    }

    #[test]
    fn context_on_shared_consequent_keeps_root() {
        let consequent = Error::from_args(format_args!("outer"));
        let _keep_alive = consequent.clone();
        let err = Error::range("x", 5, 0, 1).context(consequent);
        assert!(err.is_range());
        assert_eq!(
            err.to_string(),
            "parameter 'x' with value 5 is not in the required range of 0..=1",
        );
    }

    #[test]
    fn adhoc() {
        let err = Error::from_args(format_args!("clock is {}", "broken"));
        assert_eq!(err.to_string(), "clock is broken");
        assert!(!err.is_parse());
        assert_eq!(err.parse_offset(), None);
    }
}
