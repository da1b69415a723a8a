//! # typeterm
//!
//! Type-level terms for a statically typed, dimension-aware language.
//!
//! typeterm gives a compiler front end one place to build type terms,
//! compare them, and use them as keys.
//!
//! ## Features
//!
//! - **Term catalog**: named, generic, tuple, arrow, array, matrix and
//!   collection types, plus static arguments and parameters
//! - **Total order**: deterministic, tag-first, field-by-field
//! - **Consistent equality and hashing**: equality is derived from the
//!   order and each term caches its hash
//! - **Literal canonicalization**: fixed-point literals in any radix from 2
//!   up to a configurable maximum, with dozenal digits
//!
//! ## Quick Start
//!
//! ```
//! use typeterm::prelude::*;
//!
//! let meter = StaticArg::dim_ref(StaticArg::unit_ref("meter"));
//! let area = StaticArg::dim_exponent(meter, StaticArg::nat(2u64));
//! let field = TypeTerm::parameterized(
//!     TypeTerm::simple("Quantity"),
//!     [StaticArg::ty(TypeTerm::simple("RR64")), area],
//! );
//! assert_eq!(field.to_string(), "Quantity[\\RR64, meter^2\\]");
//!
//! // One half, spelled in binary and in decimal.
//! let binary = parse_fixed_point("0.1_2").unwrap();
//! let decimal = parse_fixed_point("0.5").unwrap();
//! assert_eq!(binary.to_rational(), decimal.to_rational());
//! assert_ne!(binary, decimal);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use typeterm_core as core;
pub use typeterm_integers as integers;
pub use typeterm_literals as literals;
pub use typeterm_terms as terms;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use typeterm_core::{Name, QualifiedName, Session};
    pub use typeterm_integers::{Integer, Natural, Rational};
    pub use typeterm_literals::{
        parse_fixed_point, parse_int_literal, FixedPointLiteral, LiteralError,
    };
    pub use typeterm_terms::{
        sorted_unique, ExtentRange, Indices, KeywordType, StaticArg, StaticArgKind, StaticParam,
        TermId, TermTable, TypeKind, TypeTerm,
    };
}
