//! Intermediate single-state payload carriers.
//!
//! [`Success`] and [`Failure`] hold only one side of an [`Outcome`], so a
//! constructor site can commit to a state without naming the other type
//! parameter; the `From` conversions pick it up from context. They also
//! serve as comparison shorthands: an `Outcome` equals a wrapper iff it is
//! in the matching state with an equal payload.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Failure, Outcome, Success};
//!
//! let accepted: Outcome<u32, &str> = Success(7).into();
//! assert_eq!(accepted, Success(7));
//! assert_ne!(accepted, Failure("rejected"));
//!
//! let rejected: Outcome<u32, &str> = Failure("rejected").into();
//! assert_eq!(rejected, Failure("rejected"));
//! ```

use super::Outcome;

/// Intermediate type holding only the success payload of an [`Outcome`].
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Success<T>(pub T);

/// Intermediate type holding only the error payload of an [`Outcome`].
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Failure<E>(pub E);

impl<T> Success<T> {
    /// Consumes the wrapper and returns the held success value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<E> Failure<E> {
    /// Consumes the wrapper and returns the held error value.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<T, E> From<Success<T>> for Outcome<T, E> {
    #[inline]
    fn from(success: Success<T>) -> Self {
        Outcome::Ok(success.0)
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    #[inline]
    fn from(failure: Failure<E>) -> Self {
        Outcome::Err(failure.0)
    }
}

impl<T: PartialEq, E> PartialEq<Success<T>> for Outcome<T, E> {
    #[inline]
    fn eq(&self, other: &Success<T>) -> bool {
        self.as_ref().fold(|value| *value == other.0, |_| false)
    }
}

impl<T, E: PartialEq> PartialEq<Failure<E>> for Outcome<T, E> {
    #[inline]
    fn eq(&self, other: &Failure<E>) -> bool {
        self.as_ref().fold(|_| false, |error| *error == other.0)
    }
}

impl<T: PartialEq, E> PartialEq<Outcome<T, E>> for Success<T> {
    #[inline]
    fn eq(&self, other: &Outcome<T, E>) -> bool {
        other == self
    }
}

impl<T, E: PartialEq> PartialEq<Outcome<T, E>> for Failure<E> {
    #[inline]
    fn eq(&self, other: &Outcome<T, E>) -> bool {
        other == self
    }
}
