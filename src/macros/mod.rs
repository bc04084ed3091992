//! Ergonomic macros for building and asserting on [`Outcome`](crate::Outcome)s.
//!
//! - [`macro@crate::fail`] - Builds a message failure with `format!` syntax,
//!   for the string-error shape.
//! - [`macro@crate::assert_ok`] - Asserts the `Ok` state and returns the
//!   success value, panicking with the error otherwise.
//! - [`macro@crate::assert_err`] - Asserts the `Err` state and returns the
//!   error value, panicking with the success value otherwise.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{assert_ok, fail, Outcome};
//!
//! fn lookup(port: u16) -> Outcome<u16> {
//!     if port < 1024 {
//!         return fail!("port {port} is reserved");
//!     }
//!     Outcome::Ok(port)
//! }
//!
//! let port = assert_ok!(lookup(8080));
//! assert_eq!(port, 8080);
//! assert!(lookup(80).is_err());
//! ```

/// Builds a message failure with `format!` syntax.
///
/// Expands to an `Outcome::Err` holding the formatted `String`, so it fits
/// any `Outcome<T, String>` return type (including the bare `Outcome` and
/// `Outcome<T>` shapes).
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let denied: Outcome<i32> = fail!("user {} lacks permission", 42);
/// assert_eq!(denied.unwrap_err(), "user 42 lacks permission");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::Err($crate::__private::format!($($arg)*))
    };
}

/// Asserts that an [`Outcome`](crate::Outcome) is `Ok` and returns the
/// success value.
///
/// An optional trailing message (with `format!` syntax) replaces the
/// default panic text.
///
/// # Examples
///
/// ```
/// use outcome_rail::{assert_ok, Outcome};
///
/// let value = assert_ok!(Outcome::<i32, &str>::Ok(3));
/// assert_eq!(value, 3);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(error) => {
                ::core::panic!("expected Ok, got Err({:?})", error)
            }
        }
    };
    ($outcome:expr, $($arg:tt)+) => {
        match $outcome {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(_) => ::core::panic!($($arg)+),
        }
    };
}

/// Asserts that an [`Outcome`](crate::Outcome) is `Err` and returns the
/// error value.
///
/// # Examples
///
/// ```
/// use outcome_rail::{assert_err, Outcome};
///
/// let error = assert_err!(Outcome::<i32, &str>::Err("boom"));
/// assert_eq!(error, "boom");
/// ```
#[macro_export]
macro_rules! assert_err {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Err(error) => error,
            $crate::Outcome::Ok(value) => {
                ::core::panic!("expected Err, got Ok({:?})", value)
            }
        }
    };
    ($outcome:expr, $($arg:tt)+) => {
        match $outcome {
            $crate::Outcome::Err(error) => error,
            $crate::Outcome::Ok(_) => ::core::panic!($($arg)+),
        }
    };
}
