//! # typeterm-core
//!
//! Shared building blocks for the typeterm ordering engine.
//!
//! This crate provides:
//! - Stateless ordering combinators over optional values and sequences
//! - Reference-counted names and non-empty qualified names
//! - A write-once, lock-free cell for memoized structural hashes
//! - A compilation `Session` that hands out fresh synthetic names
//!
//! ## Design Principles
//!
//! - **No global state**: everything that counts is owned by a `Session`
//! - **Pure comparisons**: combinators never allocate or mutate

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compare;
pub mod error;
pub mod hash_cell;
pub mod name;
pub mod session;

#[cfg(test)]
mod proptests;

pub use compare::{compare_flag, compare_optional, compare_sequence};
pub use error::NameError;
pub use hash_cell::HashCell;
pub use name::{Name, QualifiedName};
pub use session::Session;
