//! # Address Range Model
//!
//! An inclusive, same-family span of addresses, built from a CIDR block, an
//! explicit `first-last` pair, or a single address.
//!
//! Enumeration through [`IpRange::ips`] is lazy: an IPv6 `/0` can be walked
//! (or abandoned) at constant memory cost.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::address::{IpAddress, Version, parse_ip};
use crate::error::{ParseError, RangeError};
use crate::mask::Fill;

/// Inclusive range of addresses with `first <= last`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpRange {
    first: IpAddress,
    last: IpAddress,
}

impl IpRange {
    /// Builds a range from two addresses of the same family, in either order.
    pub fn new(a: IpAddress, b: IpAddress) -> Result<Self, RangeError> {
        if a.version() != b.version() {
            return Err(RangeError::VersionMismatch {
                first: a.version(),
                last: b.version(),
            });
        }

        let (first, last) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self { first, last })
    }

    /// A range holding exactly `addr`.
    pub fn single(addr: IpAddress) -> Self {
        Self {
            first: addr.clone(),
            last: addr,
        }
    }

    /// The network block of `prefix` leading bits containing `addr`.
    pub fn cidr(addr: &IpAddress, prefix: u32) -> Result<Self, RangeError> {
        let max = addr.version().bits();
        if prefix > max {
            return Err(RangeError::PrefixOutOfRange { prefix, max });
        }

        Ok(Self {
            first: addr.mask(prefix, Fill::Network),
            last: addr.mask(prefix, Fill::Broadcast),
        })
    }

    /// Parses a range. See [`parse_range`].
    pub fn parse(text: &str) -> Option<Self> {
        parse_range(text)
    }

    pub fn first(&self) -> &IpAddress {
        &self.first
    }

    pub fn last(&self) -> &IpAddress {
        &self.last
    }

    pub fn version(&self) -> Version {
        self.first.version()
    }

    pub fn is_single(&self) -> bool {
        self.first == self.last
    }

    pub fn contains(&self, addr: &IpAddress) -> bool {
        addr.version() == self.version() && self.first <= *addr && *addr <= self.last
    }

    /// Number of addresses in the range.
    ///
    /// `None` only for the whole IPv6 space, whose size does not fit a `u128`.
    pub fn size(&self) -> Option<u128> {
        (self.last.to_u128() - self.first.to_u128()).checked_add(1)
    }

    /// Lazily yields every address from `first` to `last` inclusive.
    ///
    /// Each call starts a fresh walk.
    pub fn ips(&self) -> Addresses {
        Addresses {
            front: Some(self.first.clone()),
            back: Some(self.last.clone()),
        }
    }
}

/// Parses a range literal.
///
/// Three forms are tried in order:
/// * **CIDR**: `<ip>/<prefix>` when the text holds a `/`; the prefix must be
///   decimal and no longer than the address.
/// * **Span**: `<ip>-<ip>` when the text holds a `-`; both ends must be of
///   the same family. Reversed ends are swapped.
/// * **Host**: a single address.
pub fn parse_range(text: &str) -> Option<IpRange> {
    let parsed = if let Some((ip, prefix)) = text.split_once('/') {
        parse_cidr(ip, prefix)
    } else if text.contains('-') {
        parse_span(text)
    } else {
        parse_ip(text).map(IpRange::single)
    };

    match &parsed {
        Some(range) => debug!(input = text, first = %range.first, last = %range.last, "parsed range"),
        None => trace!(input = text, "rejected range literal"),
    }
    parsed
}

/// The block of `prefix` leading bits containing `addr`.
pub fn cidr(addr: &IpAddress, prefix: u32) -> Result<IpRange, RangeError> {
    IpRange::cidr(addr, prefix)
}

fn parse_cidr(ip: &str, prefix: &str) -> Option<IpRange> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let addr = parse_ip(ip)?;
    let prefix = prefix.parse::<u32>().ok()?;
    IpRange::cidr(&addr, prefix).ok()
}

fn parse_span(text: &str) -> Option<IpRange> {
    let mut pieces = text.split('-');
    let (Some(start), Some(end), None) = (pieces.next(), pieces.next(), pieces.next()) else {
        return None;
    };

    let start = parse_ip(start)?;
    let end = parse_ip(end)?;
    IpRange::new(start, end).ok()
}

impl From<IpAddress> for IpRange {
    fn from(addr: IpAddress) -> Self {
        IpRange::single(addr)
    }
}

impl FromStr for IpRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s).ok_or_else(|| ParseError::InvalidRange(s.to_string()))
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

impl<'a> IntoIterator for &'a IpRange {
    type Item = IpAddress;
    type IntoIter = Addresses;

    fn into_iter(self) -> Self::IntoIter {
        self.ips()
    }
}

/// Iterator over the addresses of an [`IpRange`].
#[derive(Debug, Clone)]
pub struct Addresses {
    front: Option<IpAddress>,
    back: Option<IpAddress>,
}

impl Addresses {
    fn remaining(&self) -> Option<u128> {
        match (&self.front, &self.back) {
            (Some(front), Some(back)) if front <= back => {
                (back.to_u128() - front.to_u128()).checked_add(1)
            }
            _ => Some(0),
        }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl Iterator for Addresses {
    type Item = IpAddress;

    fn next(&mut self) -> Option<Self::Item> {
        let front = self.front.take()?;
        let Some(back) = &self.back else {
            return None;
        };

        if front > *back {
            self.finish();
            return None;
        }
        if front == *back {
            self.finish();
        } else {
            self.front = front.successor();
        }
        Some(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for Addresses {
    fn next_back(&mut self) -> Option<Self::Item> {
        let back = self.back.take()?;
        let Some(front) = &self.front else {
            return None;
        };

        if back < *front {
            self.finish();
            return None;
        }
        if back == *front {
            self.finish();
        } else {
            self.back = back.predecessor();
        }
        Some(back)
    }
}

impl FusedIterator for Addresses {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
