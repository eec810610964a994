use calendrical::{
    civil::{Date, MonthDay, Year, YearField},
    clock::FixedClock,
    fmt::year::{SignStyle, YearFormat},
    Instant,
};

use crate::Result;

#[test]
fn leap_years() -> Result {
    assert!(Year::new(2008)?.is_leap());
    assert!(!Year::new(1900)?.is_leap());
    assert!(Year::new(2000)?.is_leap());
    assert!(Year::new(0)?.is_leap());
    for year in -2_000..=2_000 {
        let expected =
            (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        assert_eq!(Year::new(year)?.is_leap(), expected, "year {year}");
    }
    Ok(())
}

#[test]
fn lenient_leap_day() -> Result {
    crate::init_logging();

    let leap_day = MonthDay::new(2, 29)?;
    let date = Year::new(2011)?.at_month_day(leap_day);
    assert_eq!(date, Date::new(2011, 2, 28)?);
    assert_eq!(Year::new(2011)?.adjust_date(Date::new(2012, 2, 29)?), date);
    Ok(())
}

#[test]
fn day_of_year_out_of_range() -> Result {
    let err = Year::new(2007)?.at_day(366).unwrap_err();
    assert!(err.is_range());
    assert!(Year::new(2008)?.at_day(366).is_ok());
    Ok(())
}

#[test]
fn eras() -> Result {
    let year = Year::new(0)?;
    assert_eq!(year.get_field(YearField::YearOfEra), 1);
    assert_eq!(year.get_field(YearField::Era), 0);
    assert_eq!(year.range(YearField::YearOfEra).maximum(), 1_000_000_000);
    Ok(())
}

#[test]
fn current_year_from_clock() -> Result {
    // 2015-12-31T23:30:00Z
    let instant = Instant::new(1_451_604_600, 0)?;
    assert_eq!(Year::now_with_clock(&FixedClock::utc(instant))?.get(), 2015);
    let ahead = FixedClock::new(instant, 45 * 60)?;
    assert_eq!(Year::now_with_clock(&ahead)?.get(), 2016);
    Ok(())
}

#[test]
fn display_is_plain_integer() -> Result {
    for year in -4..=2104 {
        assert_eq!(Year::new(year)?.to_string(), year.to_string());
    }
    assert_eq!(Year::new(12_345)?.to_string(), "12345");
    assert_eq!(Year::new(-1)?.to_string(), "-1");
    Ok(())
}

#[test]
fn text_formats() -> Result {
    let year: Year = "2009".parse()?;
    assert_eq!(year.to_string(), "2009");

    let err = "2009/12".parse::<Year>().unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.parse_offset(), Some(4));

    let fmt = YearFormat::from_pattern("u")?.sign_style(SignStyle::Always);
    assert_eq!(year.format_with(&fmt)?, "+2009");
    assert_eq!(Year::parse_with("-12", &fmt)?, Year::new(-12)?);
    assert!(Year::parse_with("12", &fmt).unwrap_err().is_parse());
    Ok(())
}
