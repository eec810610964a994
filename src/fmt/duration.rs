/*!
Parsing and printing of [`FixedPointDuration`] in the ISO 8601 duration
format.

The grammar accepted is a subset of ISO 8601 that only supports days, hours,
minutes and fractional seconds:

```text
Duration ::= Sign? 'P' (Days Time? | Time)
Days     ::= Integer 'D'
Time     ::= 'T' Hours? Minutes? Seconds?   (at least one component)
Hours    ::= Integer 'H'
Minutes  ::= Integer 'M'
Seconds  ::= Integer (('.' | ',') Digit{0,9})? 'S'
Integer  ::= Sign? Digit+
Sign     ::= '+' | '-'
```

Designators are case insensitive. The sign of a seconds component also
applies to its fraction, so `PT-0.5S` is negative half a second. A leading
sign negates the entire duration after its components have been summed.

The printer writes hours, minutes and seconds (days are never written), with
zero components omitted and a fraction of at most 9 digits with trailing
zeros trimmed.
*/

use crate::{
    duration::FixedPointDuration,
    error::{
        fmt::{duration::Error as E, Error as FmtError},
        Error, ErrorContext,
    },
    fmt::util::FractionalFormatter,
    util::parse,
};

/// Parses a fixed-point duration from the given ASCII bytes.
///
/// Errors are wrapped with the input and the offset at which the parser
/// failed. A total that overflows is reported at offset `0`.
pub(crate) fn parse(input: &[u8]) -> Result<FixedPointDuration, Error> {
    let mut parser = Parser { input, pos: 0 };
    let components = parser
        .parse_components()
        .with_context(|| FmtError::parse(input, parser.pos))?;
    components.to_duration().with_context(|| FmtError::parse(input, 0))
}

/// Writes the given duration in ISO 8601 format.
pub(crate) fn print<W: core::fmt::Write>(
    dur: &FixedPointDuration,
    mut wtr: W,
) -> core::fmt::Result {
    if dur.is_zero() {
        return wtr.write_str("PT0S");
    }
    let (seconds, nanos) = (dur.seconds(), dur.nano());
    let hours = seconds / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    wtr.write_str("PT")?;
    if hours != 0 {
        write!(wtr, "{hours}H")?;
    }
    if minutes != 0 {
        write!(wtr, "{minutes}M")?;
    }
    if secs == 0 && nanos == 0 {
        return Ok(());
    }
    // For negative seconds, the positive nanosecond fraction has to be
    // folded into the whole seconds. That is, `-5s + 0.25s` is written as
    // `-4.75`. And `-1s + 0.25s` needs an explicit negative zero.
    if secs < 0 && nanos > 0 {
        if secs == -1 {
            wtr.write_str("-0")?;
        } else {
            write!(wtr, "{}", secs + 1)?;
        }
    } else {
        write!(wtr, "{secs}")?;
    }
    if nanos > 0 {
        let fraction = if secs < 0 { 1_000_000_000 - nanos } else { nanos };
        let fraction = FractionalFormatter::new().format(fraction);
        write!(wtr, ".{}", fraction.as_str())?;
    }
    wtr.write_str("S")
}

/// The raw numbers found in a duration, before they are summed.
#[derive(Debug, Default)]
struct Components {
    negate: bool,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    /// Carries the sign of the seconds component.
    nanos: i32,
}

impl Components {
    fn to_duration(&self) -> Result<FixedPointDuration, Error> {
        let total = (|| {
            let days = self.days.checked_mul(86_400)?;
            let hours = self.hours.checked_mul(3_600)?;
            let minutes = self.minutes.checked_mul(60)?;
            let time = hours.checked_add(minutes.checked_add(self.seconds)?)?;
            days.checked_add(time)
        })()
        .ok_or(E::Overflow)?;
        let dur =
            FixedPointDuration::of_seconds_nanos(total, i64::from(self.nanos))
                .context(E::Overflow)?;
        if self.negate {
            dur.negated().context(E::Overflow)
        } else {
            Ok(dur)
        }
    }
}

/// A cursor over the input being parsed.
///
/// `pos` always points at the byte being examined, so when an error is
/// returned it is the offset of the failure.
#[derive(Debug)]
struct Parser<'i> {
    input: &'i [u8],
    pos: usize,
}

impl<'i> Parser<'i> {
    fn parse_components(&mut self) -> Result<Components, Error> {
        if self.input.is_empty() {
            return Err(E::Empty.into());
        }
        let mut components =
            Components { negate: self.parse_sign(), ..Components::default() };
        match self.peek_upper() {
            Some(b'P') => self.pos += 1,
            Some(byte) => {
                return Err(
                    E::ExpectedPeriodDesignatorFoundByte { byte }.into()
                )
            }
            None => {
                return Err(E::ExpectedPeriodDesignatorFoundEndOfInput.into())
            }
        }
        if self.peek().is_none() {
            return Err(E::ExpectedComponents.into());
        }
        if self.peek_upper() != Some(b'T') {
            let (_, days) = self.parse_integer()?;
            match self.peek_upper() {
                Some(b'D') => self.pos += 1,
                Some(byte) => {
                    return Err(
                        E::ExpectedDayDesignatorFoundByte { byte }.into()
                    )
                }
                None => {
                    return Err(E::ExpectedDayDesignatorFoundEndOfInput.into())
                }
            }
            components.days = days;
            match self.peek_upper() {
                None => return Ok(components),
                Some(b'T') => {}
                Some(byte) => {
                    return Err(
                        E::ExpectedTimeDesignatorFoundByte { byte }.into()
                    )
                }
            }
        }
        // Skip past `T`.
        self.pos += 1;
        if self.peek().is_none() {
            return Err(E::ExpectedTimeComponents.into());
        }
        self.parse_time(&mut components)?;
        Ok(components)
    }

    /// Parses the hour, minute and second components after `T` until the
    /// end of input.
    fn parse_time(
        &mut self,
        components: &mut Components,
    ) -> Result<(), Error> {
        // The rank of the last designator seen. Hours are 1, minutes 2 and
        // seconds 3. Ranks must strictly increase.
        let mut last_rank = 0;
        while self.peek().is_some() {
            let (negative, value) = self.parse_integer()?;
            let nanos = match self.peek() {
                Some(b'.' | b',') => {
                    self.pos += 1;
                    let fraction = self.parse_fraction()?;
                    Some(if negative { -fraction } else { fraction })
                }
                _ => None,
            };
            let designator = match (self.peek_upper(), nanos) {
                (Some(b'S'), _) => b'S',
                (Some(d @ (b'H' | b'M')), None) => d,
                (Some(byte), Some(_)) => {
                    return Err(
                        E::ExpectedSecondDesignatorFoundByte { byte }.into()
                    )
                }
                (None, Some(_)) => {
                    return Err(
                        E::ExpectedSecondDesignatorFoundEndOfInput.into()
                    )
                }
                (Some(byte), None) => {
                    return Err(
                        E::ExpectedTimeUnitDesignatorFoundByte { byte }.into()
                    )
                }
                (None, None) => {
                    return Err(
                        E::ExpectedTimeUnitDesignatorFoundEndOfInput.into()
                    )
                }
            };
            let rank = match designator {
                b'H' => 1,
                b'M' => 2,
                _ => 3,
            };
            if rank <= last_rank {
                return Err(E::OutOfOrderDesignator { designator }.into());
            }
            last_rank = rank;
            self.pos += 1;
            match designator {
                b'H' => components.hours = value,
                b'M' => components.minutes = value,
                _ => {
                    components.seconds = value;
                    components.nanos = nanos.unwrap_or(0);
                }
            }
        }
        Ok(())
    }

    /// Parses an optionally signed integer. The boolean returned is true
    /// when a `-` sign was present, even if the integer is zero.
    fn parse_integer(&mut self) -> Result<(bool, i64), Error> {
        let negative = self.parse_sign();
        let len = parse::digits_len(&self.input[self.pos..]);
        if len == 0 {
            return Err(match self.peek() {
                Some(byte) => E::ExpectedDigitsFoundByte { byte },
                None => E::ExpectedDigitsFoundEndOfInput,
            }
            .into());
        }
        let digits = &self.input[self.pos..self.pos + len];
        let value = if negative {
            parse::negative_i64(digits)?
        } else {
            parse::i64(digits)?
        };
        self.pos += len;
        Ok((negative, value))
    }

    /// Parses the (possibly empty) digits after a decimal separator.
    fn parse_fraction(&mut self) -> Result<i32, Error> {
        let len = parse::digits_len(&self.input[self.pos..]);
        let nanos = parse::fraction(&self.input[self.pos..self.pos + len])?;
        self.pos += len;
        Ok(nanos)
    }

    /// Consumes a `+` or `-` if one is present. Returns true only for `-`.
    fn parse_sign(&mut self) -> bool {
        match self.peek() {
            Some(b'+') => {
                self.pos += 1;
                false
            }
            Some(b'-') => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_upper(&self) -> Option<u8> {
        self.peek().map(|byte| byte.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};

    use super::*;

    fn ok(input: &str) -> (i64, i32) {
        let dur = parse(input.as_bytes()).unwrap();
        (dur.seconds(), dur.nano())
    }

    fn offset(input: &str) -> usize {
        parse(input.as_bytes()).unwrap_err().parse_offset().unwrap()
    }

    #[test]
    fn parse_ok() {
        assert_eq!(ok("PT0S"), (0, 0));
        assert_eq!(ok("pt0s"), (0, 0));
        assert_eq!(ok("P1D"), (86_400, 0));
        assert_eq!(ok("P-1D"), (-86_400, 0));
        assert_eq!(ok("P2DT3H"), (183_600, 0));
        assert_eq!(ok("PT1H"), (3_600, 0));
        assert_eq!(ok("PT-1M"), (-60, 0));
        assert_eq!(ok("PT+5S"), (5, 0));
        assert_eq!(ok("PT1H2M3S"), (3_723, 0));
        assert_eq!(ok("PT1H-2M"), (3_480, 0));
        assert_eq!(ok("PT1.S"), (1, 0));
        assert_eq!(ok("PT1.5S"), (1, 500_000_000));
        assert_eq!(ok("PT1,5S"), (1, 500_000_000));
        assert_eq!(ok("PT0.000000001S"), (0, 1));
        assert_eq!(ok("PT-0.1S"), (-1, 900_000_000));
        assert_eq!(ok("PT-0,999999S"), (-1, 1_000));
        assert_eq!(ok("PT12M-0.35S"), (719, 650_000_000));
        assert_eq!(ok("PT5M21.123456789S"), (321, 123_456_789));
        assert_eq!(ok("-PT2S"), (-2, 0));
        assert_eq!(ok("+PT2S"), (2, 0));
        assert_eq!(ok("-PT-2.5S"), (2, 500_000_000));
        assert_eq!(ok("-P1DT1S"), (-86_401, 0));
        assert_eq!(ok("PT9223372036854775807S"), (i64::MAX, 0));
        assert_eq!(ok("PT-9223372036854775808S"), (i64::MIN, 0));
        assert_eq!(
            ok("PT9223372036854775807.999999999S"),
            (i64::MAX, 999_999_999),
        );
        assert_eq!(
            ok("PT-2562047788015215H-30M-8S"),
            (i64::MIN, 0),
        );
    }

    #[test]
    fn parse_err_offsets() {
        assert_eq!(offset(""), 0);
        assert_eq!(offset("AT0S"), 0);
        assert_eq!(offset("PA0S"), 1);
        assert_eq!(offset("P"), 1);
        assert_eq!(offset("PT"), 2);
        assert_eq!(offset("PTS"), 2);
        assert_eq!(offset("PT0A"), 3);
        assert_eq!(offset("PT+S"), 3);
        assert_eq!(offset("PT-S"), 3);
        assert_eq!(offset("PT.S"), 2);
        assert_eq!(offset("PT.1S"), 2);
        assert_eq!(offset("PT,1S"), 2);
        assert_eq!(offset("PTAS"), 2);
        assert_eq!(offset("PT-.S"), 3);
        assert_eq!(offset("PT+.S"), 3);
        assert_eq!(offset("PT1ABC2S"), 3);
        assert_eq!(offset("PT1.1ABC2S"), 5);
        assert_eq!(offset("PT2.-3"), 4);
        assert_eq!(offset("PT2.-3S"), 4);
        assert_eq!(offset("PT1.1234567890S"), 4);
        assert_eq!(offset("PT1S2H"), 5);
        assert_eq!(offset("PT1H1H"), 5);
        assert_eq!(offset("PT1SX"), 4);
        assert_eq!(offset("P1DX"), 3);
        assert_eq!(offset("P1"), 2);
        assert_eq!(offset("PT1H1.5M"), 7);
        assert_eq!(offset("PT9223372036854775808S"), 2);
        assert_eq!(offset("PT-9223372036854775809S"), 3);
    }

    #[test]
    fn parse_err_overflow() {
        let overflows = [
            "PT9223372036854775807M",
            "PT2562047788015216H",
            "P106751991167301D",
            "PT9223372036854775807S1",
            "-PT-9223372036854775808S",
        ];
        for input in overflows {
            let err = parse(input.as_bytes()).unwrap_err();
            assert!(err.is_parse(), "{input}");
            // The last one fails on the trailing digit, not overflow.
            if !input.ends_with("S1") {
                assert!(err.is_overflow(), "{input}: {err}");
                assert_eq!(err.parse_offset(), Some(0), "{input}");
            }
        }

        let input = format!("PT{}.1S", i64::MIN);
        let err = parse(input.as_bytes()).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn parse_err_messages() {
        let err = |input: &str| parse(input.as_bytes()).unwrap_err();

        insta::assert_snapshot!(
            err(""),
            @r###"failed to parse "" at offset 0: an empty string is not a valid ISO 8601 duration"###,
        );
        insta::assert_snapshot!(
            err("PT"),
            @r###"failed to parse "PT" at offset 2: expected at least one hour, minute or second component after the time designator `T`"###,
        );
        insta::assert_snapshot!(
            err("PT1ABC2S"),
            @r###"failed to parse "PT1ABC2S" at offset 3: expected one of the unit designators `H`, `M` or `S`, but found `A` instead"###,
        );
        insta::assert_snapshot!(
            err("PT1.1234567890S"),
            @r###"failed to parse "PT1.1234567890S" at offset 4: fractional seconds have more than 9 digits"###,
        );
        insta::assert_snapshot!(
            err("PT1S1M"),
            @r###"failed to parse "PT1S1M" at offset 5: found unit designator `M` out of order (units must be given as hours, then minutes, then seconds, each at most once)"###,
        );
        insta::assert_snapshot!(
            err("PT9223372036854775808S"),
            @r###"failed to parse "PT9223372036854775808S" at offset 2: number does not fit in a signed 64-bit integer"###,
        );
        insta::assert_snapshot!(
            err("PT9223372036854775807M"),
            @r###"failed to parse "PT9223372036854775807M" at offset 0: duration components overflowed the total number of seconds supported by a fixed-point duration"###,
        );
    }

    #[test]
    fn print_reference() {
        let p = |seconds, nanos| {
            FixedPointDuration::of_seconds_nanos(seconds, nanos)
                .unwrap()
                .to_string()
        };
        assert_eq!(p(0, 0), "PT0S");
        assert_eq!(p(59, 0), "PT59S");
        assert_eq!(p(60, 0), "PT1M");
        assert_eq!(p(61, 0), "PT1M1S");
        assert_eq!(p(3_600, 0), "PT1H");
        assert_eq!(p(3_660, 0), "PT1H1M");
        assert_eq!(p(7_261, 0), "PT2H1M1S");
        assert_eq!(p(-7_261, 0), "PT-2H-1M-1S");
        assert_eq!(p(-60, 500_000_000), "PT-1M0.5S");
        assert_eq!(p(0, 1), "PT0.000000001S");
        assert_eq!(p(0, 10), "PT0.00000001S");
        assert_eq!(p(0, 100_000_000), "PT0.1S");
        assert_eq!(p(-1, 1_000), "PT-0.999999S");
        assert_eq!(p(-1, 900_000_000), "PT-0.1S");
        assert_eq!(p(-3, 1), "PT-2.999999999S");
        assert_eq!(p(86_400, 0), "PT24H");
    }

    #[test]
    fn print_then_parse() {
        let cases =
            [(-61, 1), (-1, 999_999_999), (3_599, 5), (-3_601, 7)];
        for (seconds, nanos) in cases {
            let dur =
                FixedPointDuration::of_seconds_nanos(seconds, nanos).unwrap();
            assert_eq!(
                parse(dur.to_string().as_bytes()).unwrap(),
                dur,
                "{dur}",
            );
        }
    }
}
