//! Quick Start Example
//!
//! This example demonstrates the minimal API surface of outcome-rail.
//! No feature flags required - works with the default configuration.
//!
//! Run with: `cargo run --example quick_start`
//!
//! ## What You'll Learn
//!
//! 1. Build outcomes with the prelude constructors
//! 2. Chain fallible steps with `and_then`
//! 3. Recover or extract with the unwrap family

use outcome_rail::prelude::*;

/// Parses a port number out of raw input.
fn parse_port(raw: &str) -> Outcome<u16, String> {
    match raw.trim().parse::<u16>() {
        Ok(port) => ok(port),
        Err(parse_err) => fail!("'{raw}' is not a port: {parse_err}"),
    }
}

/// Rejects ports below the unprivileged range.
fn check_unprivileged(port: u16) -> Outcome<u16, String> {
    ok_if_with(port >= 1024, || port, || format!("port {port} is reserved"))
}

fn main() {
    println!("=== outcome-rail quick start ===\n");

    for raw in ["8080", "80", "eighty"] {
        let checked = parse_port(raw).and_then(check_unprivileged);

        checked.fold(
            |port| println!("{raw:>8} -> listening on {port}"),
            |error| println!("{raw:>8} -> rejected: {error}"),
        );
    }

    // The panicking accessors are for states the caller has already ruled out.
    let port = parse_port("9000").expect("literal above is a valid port");
    println!("\ndefault port: {port}");

    // Fallbacks never panic.
    let fallback = parse_port("oops").unwrap_or(8080);
    println!("fallback port: {fallback}");
}
