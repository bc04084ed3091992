//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts, plus the free-function constructors. Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`assert_ok!`], [`assert_err!`]
//! - **Types**: [`Outcome`], [`Unit`], [`Success`], [`Failure`]
//! - **Constructors**: [`ok`], [`err`], [`ok_unit`], [`success`],
//!   [`failure`], the conditional factories, and (with `std`) the panic
//!   capture functions
//! - **Aggregation**: the `combine` family
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn reserve(seats: u32, wanted: u32) -> Outcome<u32, String> {
//!     ok_if_with(
//!         wanted <= seats,
//!         || seats - wanted,
//!         || format!("only {seats} seats left"),
//!     )
//! }
//!
//! assert_eq!(reserve(10, 4).unwrap(), 6);
//! assert!(reserve(2, 4).is_err());
//! ```

// Macros
pub use crate::{assert_err, assert_ok, fail};

// Core types
pub use crate::outcome::{Failure, Outcome, Success};
pub use crate::unit::Unit;

// Aggregation
pub use crate::combine::{
    combine, combine_joined, combine_many, combine_map, combine_map_err, combine_unit,
    combine_with, ErrorVec,
};

#[cfg(feature = "std")]
pub use crate::catch::{catch, catch_as, CaughtPanic};

use alloc::string::String;

/// Wraps a value as a success outcome.
///
/// The error type parameter is inferred from context.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude::*;
///
/// let value: Outcome<i32, String> = ok(3);
/// assert!(value.is_ok());
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Wraps an error as a failure outcome.
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// The value-less success: `Ok(Unit)` in the bare [`Outcome`] shape.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude::*;
///
/// let done = ok_unit();
/// assert!(done.is_ok());
/// ```
#[inline]
pub fn ok_unit() -> Outcome {
    Outcome::Ok(Unit)
}

/// Wraps a value in the [`Success`] intermediate, convertible into any
/// outcome whose success type matches.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude::*;
///
/// let outcome: Outcome<i32, String> = success(3).into();
/// assert_eq!(outcome, success(3));
/// ```
#[inline]
pub fn success<T>(value: T) -> Success<T> {
    Success(value)
}

/// Wraps an error in the [`Failure`] intermediate, convertible into any
/// outcome whose error type matches.
#[inline]
pub fn failure<E>(error: E) -> Failure<E> {
    Failure(error)
}

/// Free-function form of [`Outcome::ok_if`].
#[inline]
pub fn ok_if<T, E>(condition: bool, value: T, error: E) -> Outcome<T, E> {
    Outcome::ok_if(condition, value, error)
}

/// Free-function form of [`Outcome::err_if`].
#[inline]
pub fn err_if<T, E>(condition: bool, value: T, error: E) -> Outcome<T, E> {
    Outcome::err_if(condition, value, error)
}

/// Free-function form of [`Outcome::ok_if_with`].
#[inline]
pub fn ok_if_with<T, E, V, W>(condition: bool, value: V, error: W) -> Outcome<T, E>
where
    V: FnOnce() -> T,
    W: FnOnce() -> E,
{
    Outcome::ok_if_with(condition, value, error)
}

/// Free-function form of [`Outcome::err_if_with`].
#[inline]
pub fn err_if_with<T, E, V, W>(condition: bool, value: V, error: W) -> Outcome<T, E>
where
    V: FnOnce() -> T,
    W: FnOnce() -> E,
{
    Outcome::err_if_with(condition, value, error)
}

/// Builds a message failure from anything stringy, for the string-error
/// shapes.
///
/// The expression-friendly sibling of the [`fail!`] macro.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude::*;
///
/// let denied: Outcome<i32, String> = err_msg("permission denied");
/// assert_eq!(denied.unwrap_err(), "permission denied");
/// ```
#[inline]
pub fn err_msg<T>(message: impl Into<String>) -> Outcome<T, String> {
    Outcome::Err(message.into())
}
