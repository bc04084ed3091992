//! The [`Outcome`] union type and its combinator surface.
//!
//! `Outcome<T, E>` is a tagged union in one of two states: `Ok(T)` or
//! `Err(E)`. Both type parameters default so the common shapes stay short:
//!
//! - `Outcome<T, E>` - fully generic,
//! - `Outcome<T>` - error pinned to `String`,
//! - `Outcome` - success pinned to [`Unit`], for operations with nothing to
//!   return.
//!
//! Every adapter in this module is a thin layer over [`Outcome::fold`], the
//! single matching primitive, so state handling lives in exactly one place.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn checked_div(num: i32, den: i32) -> Outcome<i32, &'static str> {
//!     Outcome::ok_if(den != 0, num / den.max(1), "division by zero")
//! }
//!
//! let quotient = checked_div(10, 2).map(|q| q * 10);
//! assert_eq!(quotient.unwrap(), 50);
//!
//! let failed = checked_div(10, 0).unwrap_or(0);
//! assert_eq!(failed, 0);
//! ```
pub mod iter;
pub mod wrap;

pub use self::wrap::{Failure, Success};

use alloc::string::String;
use core::fmt;

use crate::unit::Unit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Union type that can be in one of two states: `Ok(T)` or `Err(E)`.
///
/// Exactly one payload is present at any time, and the state never changes
/// after construction; a new `Outcome` must be built to represent a different
/// result. Equality, ordering, and hashing are derived from the pair of
/// state and payload, so `Ok(x)` and `Err(x)` never compare equal and hash
/// apart even when `T` and `E` overlap.
///
/// # Type Parameters
///
/// * `T` - The success value type (defaults to [`Unit`])
/// * `E` - The error value type (defaults to `String`)
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let found: Outcome<u32, &str> = Outcome::Ok(7);
/// assert!(found.is_ok());
///
/// let missing: Outcome<u32, &str> = Outcome::Err("not found");
/// assert_eq!(missing.unwrap_or(0), 0);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T = Unit, E = String> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `Ok(value)` if the condition holds, otherwise `Err(error)`.
    ///
    /// Both branches are evaluated eagerly; use [`Outcome::ok_if_with`] when
    /// producing the unused branch is expensive or has side effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let admitted: Outcome<&str, &str> = Outcome::ok_if(21 >= 18, "welcome", "too young");
    /// assert_eq!(admitted.unwrap(), "welcome");
    /// ```
    #[inline]
    pub fn ok_if(condition: bool, value: T, error: E) -> Self {
        if condition {
            Self::Ok(value)
        } else {
            Self::Err(error)
        }
    }

    /// Lazy form of [`Outcome::ok_if`]; only the chosen branch is evaluated.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let cached = true;
    /// let value: Outcome<String, &str> =
    ///     Outcome::ok_if_with(cached, || "hit".to_string(), || "expensive miss");
    /// assert_eq!(value.unwrap(), "hit");
    /// ```
    #[inline]
    pub fn ok_if_with<V, W>(condition: bool, value: V, error: W) -> Self
    where
        V: FnOnce() -> T,
        W: FnOnce() -> E,
    {
        if condition {
            Self::Ok(value())
        } else {
            Self::Err(error())
        }
    }

    /// Returns `Err(error)` if the condition holds, otherwise `Ok(value)`.
    ///
    /// Exactly `ok_if(!condition, value, error)`.
    #[inline]
    pub fn err_if(condition: bool, value: T, error: E) -> Self {
        Self::ok_if(!condition, value, error)
    }

    /// Lazy form of [`Outcome::err_if`]; only the chosen branch is evaluated.
    #[inline]
    pub fn err_if_with<V, W>(condition: bool, value: V, error: W) -> Self
    where
        V: FnOnce() -> T,
        W: FnOnce() -> E,
    {
        Self::ok_if_with(!condition, value, error)
    }

    /// Returns `true` if the outcome is in the `Ok` state.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome is in the `Err` state.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Folds both states into a single value.
    ///
    /// Calls exactly one of the two functions depending on state and returns
    /// its result. This is the fundamental match operation; every other
    /// adapter on `Outcome` is defined in terms of it.
    ///
    /// # Arguments
    ///
    /// * `on_ok` - Applied to the success value in the `Ok` state
    /// * `on_err` - Applied to the error value in the `Err` state
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let label = Outcome::<i32, &str>::Ok(3).fold(|v| v * 2, |_| -1);
    /// assert_eq!(label, 6);
    ///
    /// let fallback = Outcome::<i32, &str>::Err("gone").fold(|v| v * 2, |_| -1);
    /// assert_eq!(fallback, -1);
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Calls `f` with a reference to the success value, then returns `self`.
    ///
    /// The side-effecting companion to [`Outcome::fold`] for the `Ok` state.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::<i32, &str>::Ok(5).inspect(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(5));
    /// assert!(outcome.is_ok());
    /// ```
    #[inline]
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Ok(ref value) = self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error value, then returns `self`.
    #[inline]
    pub fn inspect_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Self::Err(ref error) = self {
            f(error);
        }
        self
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the success value, passing an error through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::Ok(21).map(|x| x * 2);
    /// assert_eq!(doubled.unwrap(), 42);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(|value| Outcome::Ok(f(value)), Outcome::Err)
    }

    /// Maps the error value, passing a success through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let coded = Outcome::<i32, &str>::Err("timeout").map_err(|e| format!("io: {e}"));
    /// assert_eq!(coded.unwrap_err(), "io: timeout");
    /// ```
    #[inline]
    pub fn map_err<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        self.fold(Outcome::Ok, |error| Outcome::Err(f(error)))
    }

    /// Applies the matching projection regardless of state.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let scaled: Outcome<i64, String> =
    ///     Outcome::<i32, &str>::Ok(21).bimap(|v| i64::from(v) * 2, |e| e.to_string());
    /// assert_eq!(scaled.unwrap(), 42);
    /// ```
    #[inline]
    pub fn bimap<U, F, G, H>(self, on_ok: G, on_err: H) -> Outcome<U, F>
    where
        G: FnOnce(T) -> U,
        H: FnOnce(E) -> F,
    {
        self.fold(
            |value| Outcome::Ok(on_ok(value)),
            |error| Outcome::Err(on_err(error)),
        )
    }

    /// Maps the success value or returns the provided default.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.fold(f, |_| default)
    }

    /// Maps the success value or computes a fallback from the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.fold(f, default)
    }

    /// Returns `other` if `self` is `Ok`, otherwise propagates the error.
    ///
    /// `other` is already computed by the caller; use [`Outcome::and_then`]
    /// for lazy chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let a: Outcome<i32, &str> = Outcome::Ok(1);
    /// let b: Outcome<&str, &str> = Outcome::Ok("two");
    /// assert_eq!(a.and(b).unwrap(), "two");
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("broken");
    /// assert_eq!(failed.and(Outcome::<&str, &str>::Ok("two")).unwrap_err(), "broken");
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        self.fold(|_| other, Outcome::Err)
    }

    /// Calls `f` with the success value, otherwise propagates the error.
    ///
    /// The monadic bind: `f` is never invoked in the `Err` state, so a
    /// failed chain short-circuits without running later steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, &'static str> {
    ///     Outcome::ok_if(x % 2 == 0, x / 2, "odd")
    /// }
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(8).and_then(half).unwrap(), 4);
    /// assert!(Outcome::<i32, &str>::Ok(7).and_then(half).is_err());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.fold(f, Outcome::Err)
    }

    /// Returns `self`'s success if present, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let primary: Outcome<i32, &str> = Outcome::Err("unreachable");
    /// let fallback: Outcome<i32, u8> = Outcome::Ok(9);
    /// assert_eq!(primary.or(fallback).unwrap(), 9);
    /// ```
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        self.fold(Outcome::Ok, |_| other)
    }

    /// Calls `f` with the error value, otherwise propagates the success.
    ///
    /// Lazy dual of [`Outcome::or`].
    #[inline]
    pub fn or_else<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        self.fold(Outcome::Ok, f)
    }

    /// Returns the success value, or the provided default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.fold(|value| value, |_| default)
    }

    /// Returns the success value, or computes a fallback from the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<usize, &str>::Err("boom").unwrap_or_else(|e| e.len());
    /// assert_eq!(recovered, 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.fold(|value| value, f)
    }

    /// Returns the success value, or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.fold(|value| value, |_| T::default())
    }

    /// Returns the success value, or panics with exactly `msg`.
    ///
    /// Unlike [`Outcome::unwrap`], nothing is appended to the message: the
    /// caller asserts this state cannot occur and owns the diagnostic text.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the outcome is an `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        self.fold(|value| value, |_| expect_failed(msg))
    }

    /// Returns the error value, or panics with exactly `msg`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the outcome is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        self.fold(|_| expect_failed(msg), |error| error)
    }

    /// Converts the success value into an `Option`, discarding any error.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        self.fold(Some, |_| None)
    }

    /// Converts the error value into an `Option`, discarding any success.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<E> {
        self.fold(|_| None, Some)
    }

    /// Returns `true` if the outcome is `Ok` holding a value equal to `value`.
    ///
    /// The by-value convenience comparison; use the [`Success`] wrapper for
    /// `==` syntax.
    #[must_use]
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_ref().fold(|held| held == value, |_| false)
    }

    /// Returns `true` if the outcome is `Err` holding an error equal to `error`.
    #[must_use]
    #[inline]
    pub fn contains_err(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        self.as_ref().fold(|_| false, |held| held == error)
    }

    /// Converts an `Outcome` into the core library `Result`.
    ///
    /// Lets a chain terminate in `?`-compatible territory.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn run() -> Result<i32, String> {
    ///     let value = Outcome::<i32>::Ok(2).into_result()?;
    ///     Ok(value * 10)
    /// }
    ///
    /// assert_eq!(run(), Ok(20));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.fold(Ok, Err)
    }

    /// Builds an `Outcome` from the core library `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an `Err`, with a message embedding the
    /// stringified error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let value: Outcome<i32, &str> = Outcome::Ok(3);
    /// assert_eq!(value.unwrap(), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(ref error) => {
                unwrap_failed("called `Outcome::unwrap()` on an `Err` value", error)
            }
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an `Ok`, with a message embedding the
    /// stringified success value.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(ref value) => {
                unwrap_failed("called `Outcome::unwrap_err()` on an `Ok` value", value)
            }
            Self::Err(error) => error,
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting on the success side.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Transposes an `Outcome` of an `Option` into an `Option` of an `Outcome`.
    ///
    /// `Ok(None)` maps to `None`; `Ok(Some(v))` to `Some(Ok(v))`; `Err(e)`
    /// to `Some(Err(e))`.
    #[inline]
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        match self {
            Self::Ok(Some(value)) => Some(Outcome::Ok(value)),
            Self::Ok(None) => None,
            Self::Err(error) => Some(Outcome::Err(error)),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value})"),
            Self::Err(error) => write!(f, "Err({error})"),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed(msg: &str, payload: &dyn fmt::Debug) -> ! {
    panic!("{msg}: {payload:?}")
}

#[cold]
#[inline(never)]
#[track_caller]
fn expect_failed(msg: &str) -> ! {
    panic!("{msg}")
}
