//! # Item Arithmetic
//!
//! The two primitives every address family shares, parameterised by the
//! width of one item (8 bits for IPv4 octets, 16 bits for IPv6 words):
//!
//! * **Prefix masking**: keep the leading `bits` of an address and clear (or
//!   set) everything after them, yielding a network or broadcast address.
//! * **Ripple-carry stepping**: treat the items as one big-endian counter
//!   and add or subtract one.

use num_traits::{PrimInt, Unsigned};

/// What the host bits outside a prefix are replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Host bits cleared, the first address of a block.
    Network,
    /// Host bits set, the last address of a block.
    Broadcast,
}

/// Width of one item in bits.
fn width<T: PrimInt + Unsigned>() -> u32 {
    T::zero().count_zeros()
}

/// Masks `items` to a prefix of `bits` leading bits.
///
/// For item `i` the number of trailing bits lying outside the prefix is
/// `clamp((i + 1) * WIDTH - bits, 0, WIDTH)`; those bits are cleared and,
/// for [`Fill::Broadcast`], set again. `bits` larger than the total width
/// leaves every item untouched.
pub fn apply<T, const N: usize>(items: [T; N], bits: u32, fill: Fill) -> [T; N]
where
    T: PrimInt + Unsigned,
{
    let item_width = width::<T>();
    let mut out = items;

    for (i, item) in out.iter_mut().enumerate() {
        let end = (i as u32 + 1) * item_width;
        let host_bits = end.saturating_sub(bits).min(item_width);
        let low: T = if host_bits == 0 {
            T::zero()
        } else {
            T::max_value() >> (item_width - host_bits) as usize
        };

        *item = match fill {
            Fill::Network => *item & !low,
            Fill::Broadcast => *item | low,
        };
    }

    out
}

/// Adds one to the big-endian counter formed by `items`.
///
/// Returns `None` when every item is already at its maximum.
pub fn increment<T: PrimInt + Unsigned, const N: usize>(items: [T; N]) -> Option<[T; N]> {
    if items.iter().all(|&item| item == T::max_value()) {
        return None;
    }

    let mut out = items;
    for item in out.iter_mut().rev() {
        if *item == T::max_value() {
            *item = T::zero();
        } else {
            *item = *item + T::one();
            break;
        }
    }
    Some(out)
}

/// Subtracts one from the big-endian counter formed by `items`.
///
/// Returns `None` when every item is zero.
pub fn decrement<T: PrimInt + Unsigned, const N: usize>(items: [T; N]) -> Option<[T; N]> {
    if items.iter().all(|&item| item.is_zero()) {
        return None;
    }

    let mut out = items;
    for item in out.iter_mut().rev() {
        if item.is_zero() {
            *item = T::max_value();
        } else {
            *item = *item - T::one();
            break;
        }
    }
    Some(out)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
