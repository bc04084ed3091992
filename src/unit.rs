use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value type carrying no information.
///
/// `Unit` is the success payload of operations that either work or fail with
/// an error, with nothing meaningful to return on the success side. The bare
/// [`Outcome`](crate::Outcome) shape defaults to it.
///
/// Any two `Unit` values are equal, compare as equal in ordering, and hash
/// identically. Unlike `()`, `Unit` is a nameable type that participates in
/// trait resolution and serialization like any other payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Unit};
///
/// let done: Outcome = Outcome::Ok(Unit);
/// assert!(done.is_ok());
/// assert_eq!(Unit, Unit);
/// assert_eq!(Unit.to_string(), "unit");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unit")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
