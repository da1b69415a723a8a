//! Ordering combinators.
//!
//! These are the leaves every term comparison bottoms out in. They hold no
//! state, so they compose freely inside recursive comparisons.

use std::cmp::Ordering;

/// Compares two optional values: absent sorts before present.
///
/// When both are present the values are compared with `cmp`.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use typeterm_core::compare_optional;
///
/// assert_eq!(compare_optional(None, Some(&1), i32::cmp), Ordering::Less);
/// assert_eq!(compare_optional(Some(&2), Some(&1), i32::cmp), Ordering::Greater);
/// ```
pub fn compare_optional<T: ?Sized, F>(a: Option<&T>, b: Option<&T>, cmp: F) -> Ordering
where
    F: FnOnce(&T, &T) -> Ordering,
{
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

/// Compares two sequences lexicographically.
///
/// Elements are compared pairwise with `cmp` until one differs. If one
/// sequence is a strict prefix of the other, the shorter one sorts first.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use typeterm_core::compare_sequence;
///
/// assert_eq!(compare_sequence(&[1, 2], &[1, 2, 3], i32::cmp), Ordering::Less);
/// assert_eq!(compare_sequence(&[1, 3], &[1, 2], i32::cmp), Ordering::Greater);
/// ```
pub fn compare_sequence<T, F>(xs: &[T], ys: &[T], mut cmp: F) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    for (x, y) in xs.iter().zip(ys) {
        match cmp(x, y) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    xs.len().cmp(&ys.len())
}

/// Compares two flags: `false` sorts before `true`.
#[must_use]
pub fn compare_flag(a: bool, b: bool) -> Ordering {
    match (a, b) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
