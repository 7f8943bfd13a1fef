//! # Address Façade
//!
//! [`IpAddress`] is the closed union of the two families. Parsing tries IPv4
//! first and falls back to IPv6; ordering puts every IPv4 address before
//! every IPv6 address.

pub mod v4;
pub mod v6;

use std::cmp::Ordering;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::{ParseError, RangeError};
use crate::mask::Fill;
use crate::ordinal;
use crate::range::IpRange;

use v4::Ipv4;
use v6::Ipv6;

/// Address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Version {
    V4,
    V6,
}

impl Version {
    /// `4` or `6`.
    pub fn number(self) -> u8 {
        match self {
            Version::V4 => 4,
            Version::V6 => 6,
        }
    }

    /// Address width in bits.
    pub fn bits(self) -> u32 {
        match self {
            Version::V4 => Ipv4::BITS,
            Version::V6 => Ipv6::BITS,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// An IPv4 or IPv6 address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IpAddress {
    V4(Ipv4),
    V6(Ipv6),
}

impl IpAddress {
    /// Parses either family. See [`parse_ip`].
    pub fn parse(text: &str) -> Option<Self> {
        parse_ip(text)
    }

    pub fn version(&self) -> Version {
        match self {
            IpAddress::V4(_) => Version::V4,
            IpAddress::V6(_) => Version::V6,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, IpAddress::V4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, IpAddress::V6(_))
    }

    /// The address as an unsigned integer.
    pub fn to_u128(&self) -> u128 {
        match self {
            IpAddress::V4(addr) => u128::from(addr.to_u32()),
            IpAddress::V6(addr) => addr.to_u128(),
        }
    }

    /// Canonical text form.
    pub fn as_str(&self) -> &str {
        match self {
            IpAddress::V4(addr) => addr.as_str(),
            IpAddress::V6(addr) => addr.as_str(),
        }
    }

    pub fn mask(&self, bits: u32, fill: Fill) -> Self {
        match self {
            IpAddress::V4(addr) => IpAddress::V4(addr.mask(bits, fill)),
            IpAddress::V6(addr) => IpAddress::V6(addr.mask(bits, fill)),
        }
    }

    pub fn cidr(&self, prefix: u32) -> Result<IpRange, RangeError> {
        IpRange::cidr(self, prefix)
    }

    /// The next address of the same family, `None` at the maximum.
    pub fn successor(&self) -> Option<Self> {
        match self {
            IpAddress::V4(addr) => addr.successor().map(IpAddress::V4),
            IpAddress::V6(addr) => addr.successor().map(IpAddress::V6),
        }
    }

    /// The previous address of the same family, `None` at the minimum.
    pub fn predecessor(&self) -> Option<Self> {
        match self {
            IpAddress::V4(addr) => addr.predecessor().map(IpAddress::V4),
            IpAddress::V6(addr) => addr.predecessor().map(IpAddress::V6),
        }
    }
}

/// Parses an IPv4 literal, or failing that an IPv6 literal.
pub fn parse_ip(text: &str) -> Option<IpAddress> {
    v4::parse_ipv4(text)
        .map(IpAddress::V4)
        .or_else(|| v6::parse_ipv6(text).map(IpAddress::V6))
}

/// Canonical text of an address.
pub fn format_address(addr: &IpAddress) -> &str {
    addr.as_str()
}

/// Three-way comparison as `-1`, `0` or `1`.
pub fn compare_address(a: &IpAddress, b: &IpAddress) -> i8 {
    ordinal::to_sign(a.cmp(b))
}

impl PartialOrd for IpAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IpAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (IpAddress::V4(a), IpAddress::V4(b)) => a.cmp(b),
            (IpAddress::V6(a), IpAddress::V6(b)) => a.cmp(b),
            (IpAddress::V4(_), IpAddress::V6(_)) => Ordering::Less,
            (IpAddress::V6(_), IpAddress::V4(_)) => Ordering::Greater,
        }
    }
}

impl From<Ipv4> for IpAddress {
    fn from(addr: Ipv4) -> Self {
        IpAddress::V4(addr)
    }
}

impl From<Ipv6> for IpAddress {
    fn from(addr: Ipv6) -> Self {
        IpAddress::V6(addr)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => IpAddress::V4(v4.into()),
            IpAddr::V6(v6) => IpAddress::V6(v6.into()),
        }
    }
}

impl From<&IpAddress> for IpAddr {
    fn from(addr: &IpAddress) -> Self {
        match addr {
            IpAddress::V4(v4) => IpAddr::V4(v4.into()),
            IpAddress::V6(v6) => IpAddr::V6(v6.into()),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(addr: IpAddress) -> Self {
        IpAddr::from(&addr)
    }
}

impl FromStr for IpAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ip(s).ok_or_else(|| ParseError::InvalidIp(s.to_string()))
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
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
