//! Panic capture as data.
//!
//! Rust's only exception-like channel is unwinding, so the functions here
//! run a closure under [`std::panic::catch_unwind`] and surface the unwind
//! payload as the error side of an [`Outcome`]. [`catch`] captures any
//! payload; [`catch_as`] captures only payloads of one declared type and
//! lets everything else keep unwinding, so unexpected panics stay fatal.
//!
//! Requires the `std` feature.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::catch::catch;
//!
//! let fine = catch(|| 40 + 2);
//! assert_eq!(fine.unwrap(), 42);
//!
//! let blown: outcome_rail::Outcome<i32, _> = catch(|| panic!("integer overflow"));
//! assert_eq!(blown.unwrap_err().message(), Some("integer overflow"));
//! ```

use core::any::Any;
use core::fmt;

use std::panic::{self, AssertUnwindSafe};

use crate::outcome::Outcome;

/// An unwind payload captured by [`catch`].
///
/// Wraps the raw `Box<dyn Any + Send>` panic payload and exposes the panic
/// message when the payload is one of the string types produced by the
/// `panic!` macro.
pub struct CaughtPanic {
    payload: Box<dyn Any + Send>,
}

impl CaughtPanic {
    fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Returns the panic message, if the payload carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Returns `true` if the payload can be downcast to `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Borrows the raw unwind payload.
    #[must_use]
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// Consumes the wrapper and returns the raw unwind payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CaughtPanic")
            .field(&self.message().unwrap_or("<non-string payload>"))
            .finish()
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panic: {message}"),
            None => f.write_str("panic with non-string payload"),
        }
    }
}

/// Runs `op`, capturing any unwind as the error side of an [`Outcome`].
///
/// A normal return becomes `Ok`; a panic becomes `Err` holding the payload
/// as a [`CaughtPanic`].
///
/// # Examples
///
/// ```
/// use outcome_rail::catch::catch;
///
/// let outcome = catch(|| "fine");
/// assert_eq!(outcome.unwrap(), "fine");
/// ```
pub fn catch<T, F>(op: F) -> Outcome<T, CaughtPanic>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => Outcome::Err(CaughtPanic::new(payload)),
    }
}

/// Runs `op`, capturing only unwind payloads of type `E`.
///
/// A panic whose payload is an `E` (typically raised with
/// [`std::panic::panic_any`]) is converted into `Err`; any other payload
/// resumes unwinding unchanged, so only the declared error family is
/// captured as data.
///
/// # Examples
///
/// ```
/// use outcome_rail::catch::catch_as;
/// use std::panic::panic_any;
///
/// #[derive(Debug, PartialEq)]
/// struct Overflow(u64);
///
/// let captured = catch_as::<i32, Overflow, _>(|| panic_any(Overflow(9)));
/// assert_eq!(captured.unwrap_err(), Overflow(9));
/// ```
pub fn catch_as<T, E, F>(op: F) -> Outcome<T, E>
where
    E: Any,
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => match payload.downcast::<E>() {
            Ok(error) => Outcome::Err(*error),
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

impl<T, E: Any> Outcome<T, E> {
    /// Chains into a panic-capturing call to `f`.
    ///
    /// The composition of [`Outcome::and_then`] and [`catch_as`]: in the
    /// `Ok` state, `f` runs and its panics of type `E` become `Err`; other
    /// panic payloads resume unwinding. The `Err` state short-circuits
    /// without invoking `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    /// use std::panic::panic_any;
    ///
    /// let halved = Outcome::<i32, String>::Ok(8).and_then_catch(|x| {
    ///     if x % 2 != 0 {
    ///         panic_any(format!("{x} is odd"));
    ///     }
    ///     x / 2
    /// });
    /// assert_eq!(halved.unwrap(), 4);
    /// ```
    pub fn and_then_catch<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.and_then(|value| catch_as(|| f(value)))
    }
}
