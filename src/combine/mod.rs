//! Aggregation of many [`Outcome`]s into one.
//!
//! [`combine`] turns a sequence of outcomes into one outcome over sequences:
//! all successes in input order, or every error in input order when at least
//! one element failed. The remaining functions are post-processing layers
//! over `combine` - they fold either side into a single value without ever
//! re-evaluating the inputs.
//!
//! Inputs are consumed in a single pass, so side-effecting iterators are
//! evaluated exactly once.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::combine::combine;
//! use outcome_rail::Outcome;
//!
//! let mixed = vec![
//!     Outcome::<&str, i32>::Ok("foo"),
//!     Outcome::Err(1),
//!     Outcome::Ok("bar"),
//!     Outcome::Err(2),
//! ];
//!
//! let collected = combine(mixed);
//! assert_eq!(collected.unwrap_err().as_slice(), &[1, 2]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::outcome::Outcome;
use crate::unit::Unit;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for up to 1 elements to avoid heap allocations
/// in the common all-success and single-failure cases.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Combines multiple outcomes into a single outcome.
///
/// The combined outcome is `Err` if any of the inputs are, holding every
/// error in input order; otherwise it is `Ok` holding every success value in
/// input order. The input is enumerated exactly once.
///
/// # Arguments
///
/// * `results` - The outcomes to be combined
///
/// # Examples
///
/// ```
/// use outcome_rail::combine::combine;
/// use outcome_rail::Outcome;
///
/// let all_ok = vec![
///     Outcome::<&str, i32>::Ok("foo"),
///     Outcome::Ok("bar"),
///     Outcome::Ok("baz"),
/// ];
/// assert_eq!(combine(all_ok).unwrap(), vec!["foo", "bar", "baz"]);
/// ```
pub fn combine<T, E, I>(results: I) -> Outcome<Vec<T>, ErrorVec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = ErrorVec::new();
    for result in results {
        match result {
            Outcome::Ok(value) => values.push(value),
            Outcome::Err(error) => errors.push(error),
        }
    }
    if errors.is_empty() {
        Outcome::Ok(values)
    } else {
        Outcome::Err(errors)
    }
}

/// Combines multiple outcomes, folding whichever side wins with the matching
/// combinator function.
///
/// # Arguments
///
/// * `results` - The outcomes to be combined
/// * `combine_ok` - Folds the collected success values into one value
/// * `combine_err` - Folds the collected errors into one error
///
/// # Examples
///
/// ```
/// use outcome_rail::combine::combine_with;
/// use outcome_rail::Outcome;
///
/// let totals = combine_with(
///     vec![Outcome::<i32, &str>::Ok(1), Outcome::Ok(2)],
///     |values| values.into_iter().sum::<i32>(),
///     |errors| errors.len(),
/// );
/// assert_eq!(totals.unwrap(), 3);
/// ```
pub fn combine_with<T, E, U, F, I, FO, FE>(
    results: I,
    combine_ok: FO,
    combine_err: FE,
) -> Outcome<U, F>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    FO: FnOnce(Vec<T>) -> U,
    FE: FnOnce(ErrorVec<E>) -> F,
{
    combine(results).bimap(combine_ok, combine_err)
}

/// Combines multiple outcomes, folding only the collected success values.
pub fn combine_map<T, E, U, I, FO>(results: I, combine_ok: FO) -> Outcome<U, ErrorVec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    FO: FnOnce(Vec<T>) -> U,
{
    combine(results).map(combine_ok)
}

/// Combines multiple outcomes, folding only the collected errors.
pub fn combine_map_err<T, E, F, I, FE>(results: I, combine_err: FE) -> Outcome<Vec<T>, F>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    FE: FnOnce(ErrorVec<E>) -> F,
{
    combine(results).map_err(combine_err)
}

/// Combines outcomes of sequences, flattening one extra level of nesting.
///
/// Each input holds a sequence of values or a sequence of errors; the
/// combined outcome concatenates all nested success sequences, or all nested
/// error sequences if any input failed.
///
/// # Examples
///
/// ```
/// use outcome_rail::combine::combine_many;
/// use outcome_rail::Outcome;
///
/// let batches = vec![
///     Outcome::<Vec<i32>, Vec<&str>>::Ok(vec![1, 2]),
///     Outcome::Ok(vec![3]),
/// ];
/// assert_eq!(combine_many(batches).unwrap(), vec![1, 2, 3]);
/// ```
pub fn combine_many<T, E, TS, ES, I>(results: I) -> Outcome<Vec<T>, ErrorVec<E>>
where
    TS: IntoIterator<Item = T>,
    ES: IntoIterator<Item = E>,
    I: IntoIterator<Item = Outcome<TS, ES>>,
{
    combine(results).bimap(
        |values| values.into_iter().flatten().collect(),
        |errors| errors.into_iter().flatten().collect(),
    )
}

/// Combines outcomes with message errors, joining every error with the
/// provided separator.
///
/// # Examples
///
/// ```
/// use outcome_rail::combine::combine_joined;
/// use outcome_rail::Outcome;
///
/// let results = vec![
///     Outcome::<i32>::Ok(1),
///     Outcome::Err("too small".to_string()),
///     Outcome::Err("too big".to_string()),
/// ];
/// assert_eq!(combine_joined(results, "; ").unwrap_err(), "too small; too big");
/// ```
pub fn combine_joined<T, I>(results: I, separator: &str) -> Outcome<Vec<T>, String>
where
    I: IntoIterator<Item = Outcome<T, String>>,
{
    combine(results).map_err(|errors| errors.join(separator))
}

/// Combines value-less outcomes, joining every failure message with the
/// provided separator.
///
/// Returns `Ok` if and only if every input was `Ok`.
///
/// # Examples
///
/// ```
/// use outcome_rail::combine::combine_unit;
/// use outcome_rail::{Outcome, Unit};
///
/// let checks = vec![
///     Outcome::Ok(Unit),
///     Outcome::Err("foo".to_string()),
///     Outcome::Ok(Unit),
///     Outcome::Err("bar".to_string()),
/// ];
/// assert_eq!(combine_unit(checks, "\n").unwrap_err(), "foo\nbar");
/// ```
pub fn combine_unit<I>(results: I, separator: &str) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    combine_joined(results, separator).map(|_| Unit)
}

/// Collecting a sequence of outcomes accumulates every error, like
/// [`combine`], rather than stopping at the first.
///
/// # Examples
///
/// ```
/// use outcome_rail::combine::ErrorVec;
/// use outcome_rail::Outcome;
///
/// let inputs = vec![
///     Outcome::<i32, &str>::Ok(1),
///     Outcome::Err("err1"),
///     Outcome::Err("err2"),
/// ];
/// let collected: Outcome<Vec<i32>, ErrorVec<&str>> = inputs.into_iter().collect();
///
/// assert!(collected.is_err());
/// assert_eq!(collected.unwrap_err().len(), 2);
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, ErrorVec<E>>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors = ErrorVec::new();
        for item in iter {
            match item {
                Outcome::Ok(value) => {
                    if errors.is_empty() {
                        values.push(value);
                    }
                }
                Outcome::Err(error) => errors.push(error),
            }
        }
        if errors.is_empty() {
            Outcome::Ok(values.into_iter().collect())
        } else {
            Outcome::Err(errors)
        }
    }
}
