/*!
Parsing and printing of the types in this crate.

The ISO 8601 duration format used by
[`FixedPointDuration`](crate::FixedPointDuration) is handled by its `FromStr`
and `Display` impls. Years are handled by [`year::YearFormat`], which can be
configured with different widths and sign styles.
*/

pub(crate) mod duration;
pub(crate) mod util;
pub mod year;
