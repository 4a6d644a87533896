//! This module defines the single error type returned by the strict parsers in this crate. The
//! lenient, interface-facing functions (`hex_to_hsv`, `hsl_string_to_rgb`, and friends) never
//! return it: they fall back to a zero triple instead.

use thiserror::Error;

/// An error in parsing a color from a string.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The hex code did not contain exactly six digits after the optional `#`. Holds the number of
    /// characters that were found.
    #[error("expected 6 hex digits, found {0} characters")]
    InvalidHexLength(usize),
    /// The hex code had the right length, but contained a character outside `0-9a-fA-F`.
    #[error("invalid hex digit in {0:?}")]
    InvalidHexDigit(String),
    /// A functional color string such as `hsl(...)` did not match the expected syntax.
    #[error("invalid color syntax: {0:?}")]
    InvalidColorSyntax(String),
}
