//! Conversion helpers between [`Outcome`] and the core library types.
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally: wrap the `Result`s an existing API hands out, or flatten
//! an `Outcome` back into a `Result` at the boundary where `?` takes over.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let parsed: Result<i32, String> = Ok(42);
//! let outcome = result_to_outcome(parsed);
//! assert!(outcome.is_ok());
//!
//! let missing: Option<i32> = None;
//! let outcome = option_to_outcome(missing, "value was required");
//! assert_eq!(outcome.unwrap_err(), "value was required");
//! ```

use alloc::string::String;

use crate::outcome::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<'a, T> From<&'a str> for Outcome<T, String> {
    /// A bare message converts to the failure side of the message-error
    /// shape; successes are built with an explicit constructor.
    #[inline]
    fn from(message: &'a str) -> Self {
        Outcome::Err(String::from(message))
    }
}

impl<T> From<String> for Outcome<T, String> {
    #[inline]
    fn from(message: String) -> Self {
        Outcome::Err(message)
    }
}

/// Converts a core library `Result` to an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let failed: Result<i32, &str> = Err("offline");
/// assert!(result_to_outcome(failed).is_err());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` to a core library `Result`.
///
/// The reverse `From` impl is ruled out by coherence (`Result` and the
/// blanket parameters both live upstream), so the free function and
/// [`Outcome::into_result`] carry this direction.
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts an `Option` to an `Outcome`, supplying the error for `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
///
/// let present = option_to_outcome(Some(3), "missing");
/// assert_eq!(present.unwrap(), 3);
/// ```
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(error),
    }
}

/// Converts the success side of an `Outcome` to an `Option`.
#[inline]
pub fn outcome_to_option<T, E>(outcome: Outcome<T, E>) -> Option<T> {
    outcome.ok()
}
