//! # Ordinal Comparison
//!
//! Numeric, element-wise ordering of fixed-length sequences. Addresses are
//! compared component by component from the most significant end, so
//! `9.0.0.0 < 10.0.0.0` even though `"9" > "10"` as text.

use std::cmp::Ordering;

/// Compares two equal-length sequences element by element.
///
/// Returns at the first differing element. Panics if the lengths differ.
pub fn cmp<T: Ord>(a: &[T], b: &[T]) -> Ordering {
    assert_eq!(a.len(), b.len(), "ordinal comparison of unequal lengths");

    for (x, y) in a.iter().zip(b) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Maps an [`Ordering`] to the classic `-1 / 0 / 1` form.
pub fn to_sign(ord: Ordering) -> i8 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
