//! # typeterm-literals
//!
//! Canonicalization of numeric literal text.
//!
//! Literals arrive from the lexer as raw text: digits, an optional decimal
//! point, and an optional underscore-introduced radix (`ff_16`,
//! `1.1_two`). This crate decodes them into normal forms so that two
//! spellings of the same literal in the same radix compare and hash
//! identically:
//!
//! - [`FixedPointLiteral`]: the quadruple
//!   `(int_part, numerator, denominator_base, denominator_power)`
//! - [`Integer`](typeterm_integers::Integer) for integer literals
//!
//! ## Example
//!
//! ```
//! use typeterm_literals::parse_fixed_point;
//!
//! let a = parse_fixed_point("1.50").unwrap();
//! let b = parse_fixed_point("1.5").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.denominator_base(), 10);
//! assert_eq!(a.denominator_power(), 1);
//! ```
//!
//! ## Errors
//!
//! Literal text is produced by the grammar, so a [`LiteralError`] always
//! means an upstream bug. Callers should report it as an internal compiler
//! error, never as a user diagnostic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canonicalizer;
pub mod config;
pub mod error;
pub mod fixed_point;
pub mod radix;

#[cfg(test)]
mod proptests;

pub use canonicalizer::{parse_fixed_point, parse_int_literal, Canonicalizer};
pub use config::LiteralConfig;
pub use error::LiteralError;
pub use fixed_point::FixedPointLiteral;
