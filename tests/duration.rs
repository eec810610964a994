use calendrical::{FixedPointDuration, Instant, Unit};

use crate::Result;

#[test]
fn normalizes_nanosecond_adjustments() -> Result {
    let dur = FixedPointDuration::of_seconds_nanos(2, -1)?;
    assert_eq!((dur.seconds(), dur.nano()), (1, 999_999_999));

    let dur = FixedPointDuration::of_seconds_nanos(-2, 1_000_000_001)?;
    assert_eq!((dur.seconds(), dur.nano()), (-1, 1));

    let err =
        FixedPointDuration::of_seconds_nanos(i64::MAX, 1_000_000_000)
            .unwrap_err();
    assert!(err.is_overflow());
    Ok(())
}

#[test]
fn parse_and_print() -> Result {
    let dur = FixedPointDuration::parse("PT12M-0.35S")?;
    assert_eq!((dur.seconds(), dur.nano()), (719, 650_000_000));

    let dur = FixedPointDuration::of_seconds_nanos(321, 123_456_789)?;
    assert_eq!(dur.to_string(), "PT5M21.123456789S");
    assert_eq!(dur.to_string().parse::<FixedPointDuration>()?, dur);

    let err = "PT1ABC2S".parse::<FixedPointDuration>().unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.parse_input(), Some("PT1ABC2S"));
    assert_eq!(err.parse_offset(), Some(3));
    Ok(())
}

#[test]
fn unit_arithmetic() -> Result {
    let dur = FixedPointDuration::of(2, Unit::Day)?
        .plus_amount(90, Unit::Minute)?
        .minus_millis(1)?;
    assert_eq!(dur.to_string(), "PT49H29M59.999S");

    let err = FixedPointDuration::of(1, Unit::Month).unwrap_err();
    assert!(err.is_invalid_parameter());
    Ok(())
}

#[test]
fn scalar_arithmetic() -> Result {
    let dur = FixedPointDuration::of_millis(1_500);
    assert_eq!(dur.multiplied_by(3)?.divided_by(3)?, dur);
    assert_eq!(dur.negated()?.abs()?, dur);
    assert!(dur.divided_by(0).unwrap_err().is_divide_by_zero());
    assert!(
        FixedPointDuration::MAX.multiplied_by(2).unwrap_err().is_overflow(),
    );
    Ok(())
}

#[test]
fn between_instants() -> Result {
    let start = Instant::from_millisecond(-1)?;
    let end = Instant::new(1, 0)?;
    let dur = FixedPointDuration::between(start, end);
    assert_eq!(dur.to_millis()?, 1_001);
    assert_eq!(start.checked_add(dur)?, end);
    Ok(())
}

#[test]
fn std_duration_conversions() -> Result {
    let std = std::time::Duration::new(5, 7);
    let dur = FixedPointDuration::try_from(std)?;
    assert_eq!(std::time::Duration::try_from(dur)?, std);
    assert!(std::time::Duration::try_from(dur.negated()?).is_err());
    Ok(())
}

#[cfg(feature = "std")]
#[test]
fn mixed_error_sources() -> anyhow::Result<()> {
    let seconds: i64 = "321".parse()?;
    let dur = FixedPointDuration::of_seconds(seconds)
        .plus_nanos("123456789".parse()?)?;
    assert_eq!(dur.to_string(), "PT5M21.123456789S");
    Ok(())
}
