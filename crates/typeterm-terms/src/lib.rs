//! # typeterm-terms
//!
//! The type-term catalog and its structural order.
//!
//! This crate provides:
//! - [`TypeTerm`]: ordinary types, generic instantiations, tuples, arrows,
//!   arrays, matrices and the other structural type shapes
//! - [`StaticArg`]: type-level arguments, including the natural-number and
//!   dimension/unit sub-algebras
//! - [`StaticParam`]: declared static parameters
//! - A total order over each root (`Ord`), with equality and hashing
//!   derived from the same comparison
//! - [`TermTable`] and [`sorted_unique`] for keying and deduplicating terms
//!
//! ## Ordering
//!
//! Terms of different variants order by their variant tag alone. Terms of
//! the same variant compare field by field in declaration order. Nothing is
//! normalized first: `m*s` and `s*m` are different terms.
//!
//! ## Example
//!
//! ```
//! use typeterm_terms::StaticArg;
//!
//! let meter = StaticArg::dim_ref(StaticArg::unit_ref("meter"));
//! let second = StaticArg::dim_ref(StaticArg::unit_ref("second"));
//!
//! let ms = StaticArg::dim_product(meter.clone(), second.clone());
//! let sm = StaticArg::dim_product(second, meter);
//! assert_ne!(ms, sm);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod extent;
pub mod hash;
pub mod order;
pub mod static_arg;
pub mod static_param;
pub mod table;
pub mod tag;
pub mod type_term;

#[cfg(test)]
mod proptests;

pub use extent::{ExtentRange, Indices};
pub use static_arg::{StaticArg, StaticArgKind};
pub use static_param::StaticParam;
pub use table::{sorted_unique, TermId, TermTable};
pub use tag::{ArgTag, ParamTag, TypeTag};
pub use type_term::{KeywordType, TypeKind, TypeTerm};
