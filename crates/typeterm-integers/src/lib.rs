//! # typeterm-integers
//!
//! Arbitrary precision numbers for the typeterm engine.
//!
//! This crate wraps `dashu` to provide:
//! - Signed integers (`Integer`) for literal integer parts
//! - Non-negative naturals (`Natural`) for natural-number static arguments
//!   and fractional numerators
//! - Exact rationals (`Rational`) for the value a fixed-point literal denotes
//!
//! All three types order, compare and hash by numeric value, so two values
//! built from different text are interchangeable once parsed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod natural;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use dashu::base::error::ParseError;
pub use integer::Integer;
pub use natural::Natural;
pub use rational::Rational;
