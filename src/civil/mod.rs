/*!
Dates and years in the proleptic ISO calendar.

The main type in this module is [`Year`]. [`Date`], [`MonthDay`] and
[`YearMonth`] exist so that a year can be combined with the rest of a date.

# Eras

Years may be zero or negative. Common practice excludes the year `0` and
labels earlier years with an era instead, so the year `1 BCE` is year `0`
here and `2 BCE` is year `-1`. The era and the year within it are available
via [`Year::get_field`] with [`YearField::Era`] and [`YearField::YearOfEra`].

# Example

```
use calendrical::civil::{Date, MonthDay, Year, YearField};

let year = Year::new(-43)?;
assert_eq!(year.get_field(YearField::YearOfEra), 44);
assert_eq!(year.get_field(YearField::Era), 0);

let ides = MonthDay::new(3, 15)?;
assert_eq!(year.at_month_day(ides), Date::new(-43, 3, 15)?);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::{
    date::Date,
    month_day::MonthDay,
    year::{Year, YearField},
    year_month::YearMonth,
};

mod date;
mod month_day;
mod year;
mod year_month;
