use crate::error::util::{ParseFractionError, ParseIntError};

/// Parses an `i64` number from the beginning to the end of the given slice of
/// ASCII digit characters.
///
/// If any byte in the given slice is not `[0-9]`, then this returns an error.
/// Similarly, if the number parsed does not fit into a `i64`, then this
/// returns an error. Notably, this routine does not permit parsing a negative
/// integer. (We use `negative_i64` for that.)
pub(crate) fn i64(bytes: &[u8]) -> Result<i64, ParseIntError> {
    if bytes.is_empty() {
        return Err(ParseIntError::Empty);
    }
    let mut n: i64 = 0;
    for &byte in bytes {
        let digit = match byte.checked_sub(b'0') {
            Some(digit) if digit <= 9 => digit,
            _ => return Err(ParseIntError::InvalidDigit(byte)),
        };
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(i64::from(digit)))
            .ok_or(ParseIntError::Overflow)?;
    }
    Ok(n)
}

/// Like `i64`, but parses the digits as the magnitude of a negative number.
///
/// This accumulates in the negative direction so that `i64::MIN` can be
/// parsed.
pub(crate) fn negative_i64(bytes: &[u8]) -> Result<i64, ParseIntError> {
    if bytes.is_empty() {
        return Err(ParseIntError::Empty);
    }
    let mut n: i64 = 0;
    for &byte in bytes {
        let digit = match byte.checked_sub(b'0') {
            Some(digit) if digit <= 9 => digit,
            _ => return Err(ParseIntError::InvalidDigit(byte)),
        };
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_sub(i64::from(digit)))
            .ok_or(ParseIntError::Overflow)?;
    }
    Ok(n)
}

/// Parses an `i64` fractional number from the beginning to the end of the
/// given slice of ASCII digit characters.
///
/// The fraction's maximum precision is always 9 digits. The returned value
/// is always the number of nanoseconds. An empty slice is a fraction of zero.
///
/// If any byte in the given slice is not `[0-9]`, then this returns an error.
/// Notably, this routine does not permit parsing a negative integer.
pub(crate) fn fraction(bytes: &[u8]) -> Result<i32, ParseFractionError> {
    if bytes.len() > ParseFractionError::MAX_PRECISION {
        return Err(ParseFractionError::TooManyDigits);
    }
    let mut n: i32 = 0;
    for &byte in bytes {
        let digit = match byte.checked_sub(b'0') {
            Some(digit) if digit <= 9 => digit,
            _ => return Err(ParseFractionError::InvalidDigit(byte)),
        };
        n = n * 10 + i32::from(digit);
    }
    // OK because we bounded the number of digits above.
    for _ in bytes.len()..ParseFractionError::MAX_PRECISION {
        n *= 10;
    }
    Ok(n)
}

/// Returns the number of leading ASCII digits in the given slice.
pub(crate) fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
