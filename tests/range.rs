use calendrical::ValueRange;

use crate::Result;

#[test]
fn day_of_month() -> Result {
    let range = ValueRange::with_smallest_max(1, 28, 31)?;
    assert_eq!(range.minimum(), 1);
    assert_eq!(range.largest_minimum(), 1);
    assert_eq!(range.smallest_maximum(), 28);
    assert_eq!(range.maximum(), 31);
    assert!(!range.is_fixed());
    assert!(range.is_int_value());
    assert_eq!(range.check_valid_int_value(29, "day of month")?, 29);
    assert!(
        range.check_valid_value(32, "day of month").unwrap_err().is_range(),
    );
    Ok(())
}

#[test]
fn invalid_bounds() {
    let err = ValueRange::with_smallest_max(1, 31, 28).unwrap_err();
    assert!(err.is_invalid_parameter());
    for (min, max) in [(2, 1), (0, -1), (i64::MAX, i64::MIN)] {
        assert!(ValueRange::new(min, max).unwrap_err().is_invalid_parameter());
    }
    assert!(ValueRange::new(5, 5).is_ok());
}
