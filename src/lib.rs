//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Basic Outcomes
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::Ok(port),
//!         Err(err) => Outcome::Err(err.to_string()),
//!     }
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1);
//! assert_eq!(port.unwrap(), 8081);
//! assert!(parse_port("not a port").is_err());
//! ```
//!
//! ## Combining Many Outcomes
//!
//! ```
//! use outcome_rail::combine::combine;
//! use outcome_rail::Outcome;
//!
//! let parsed = combine(["1", "2", "3"].map(|s| {
//!     Outcome::<i32, String>::from_result(s.parse().map_err(|_| s.to_string()))
//! }));
//!
//! assert_eq!(parsed.unwrap(), vec![1, 2, 3]);
//! ```
//!
//! ## Conditional Construction
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let quota = 3;
//! let slot: Outcome<u32, &str> = Outcome::ok_if(quota > 0, quota - 1, "quota exhausted");
//! assert_eq!(slot.unwrap(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Aggregation of many outcomes into one
pub mod combine;
/// Conversions between `Outcome` and the core `Result`/`Option` types
pub mod convert;
/// Assertion and construction macros
pub mod macros;
/// The `Outcome` union type and its combinator surface
pub mod outcome;
/// Convenience re-exports and free-function constructors
pub mod prelude;
/// The zero-information `Unit` success payload
pub mod unit;

/// Panic capture as data (requires `std` feature)
#[cfg(feature = "std")]
pub mod catch;

pub use combine::{
    combine, combine_joined, combine_many, combine_map, combine_map_err, combine_unit,
    combine_with, ErrorVec,
};
pub use convert::*;
pub use outcome::{Failure, Outcome, Success};
pub use unit::Unit;

#[cfg(feature = "std")]
pub use catch::{catch, catch_as, CaughtPanic};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
