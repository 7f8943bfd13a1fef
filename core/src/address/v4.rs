//! # IPv4 Engine
//!
//! Dotted-quad parsing, formatting, masking and stepping.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::trace;

use crate::address::{IpAddress, Version};
use crate::error::{ParseError, RangeError};
use crate::mask::{self, Fill};
use crate::ordinal;
use crate::range::IpRange;

/// An IPv4 address.
///
/// The canonical text is computed on first use and cached.
#[derive(Debug, Clone)]
pub struct Ipv4 {
    octets: [u8; 4],
    text: OnceLock<String>,
}

impl Ipv4 {
    pub const BITS: u32 = 32;

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
            text: OnceLock::new(),
        }
    }

    /// Parses a dotted-quad literal. See [`parse_ipv4`].
    pub fn parse(text: &str) -> Option<Self> {
        parse_ipv4(text)
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    pub fn version(&self) -> Version {
        Version::V4
    }

    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// Canonical dotted-quad form.
    pub fn as_str(&self) -> &str {
        self.text.get_or_init(|| {
            let [a, b, c, d] = self.octets;
            format!("{a}.{b}.{c}.{d}")
        })
    }

    /// Keeps the leading `bits` bits and replaces the rest according to `fill`.
    ///
    /// A `bits` of 32 or more returns the address unchanged.
    pub fn mask(&self, bits: u32, fill: Fill) -> Self {
        Self::from(mask::apply(self.octets, bits, fill))
    }

    /// The block of `prefix` leading bits containing this address.
    pub fn cidr(&self, prefix: u32) -> Result<IpRange, RangeError> {
        IpRange::cidr(&IpAddress::V4(self.clone()), prefix)
    }

    /// The next address, or `None` for `255.255.255.255`.
    pub fn successor(&self) -> Option<Self> {
        mask::increment(self.octets).map(Self::from)
    }

    /// The previous address, or `None` for `0.0.0.0`.
    pub fn predecessor(&self) -> Option<Self> {
        mask::decrement(self.octets).map(Self::from)
    }
}

/// Parses a strict dotted-quad literal.
///
/// Exactly four groups of one to three decimal digits, each at most 255 and
/// without leading zeros (`"0"` itself is allowed). Anything else, including
/// whitespace, yields `None`.
pub fn parse_ipv4(text: &str) -> Option<Ipv4> {
    let parsed = parse_octets(text).map(Ipv4::from);
    if parsed.is_none() {
        trace!(input = text, "rejected IPv4 literal");
    }
    parsed
}

pub(crate) fn parse_octets(text: &str) -> Option<[u8; 4]> {
    let mut groups = text.split('.');
    let mut octets = [0u8; 4];

    for octet in octets.iter_mut() {
        *octet = parse_group(groups.next()?)?;
    }

    if groups.next().is_some() {
        return None;
    }
    Some(octets)
}

fn parse_group(group: &str) -> Option<u8> {
    let digits = group.as_bytes();

    if digits.is_empty() || digits.len() > 3 || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if digits.len() > 1 && digits[0] == b'0' {
        return None;
    }

    group.parse::<u8>().ok()
}

impl From<[u8; 4]> for Ipv4 {
    fn from(octets: [u8; 4]) -> Self {
        let [a, b, c, d] = octets;
        Self::new(a, b, c, d)
    }
}

impl From<Ipv4Addr> for Ipv4 {
    fn from(addr: Ipv4Addr) -> Self {
        Self::from(addr.octets())
    }
}

impl From<&Ipv4> for Ipv4Addr {
    fn from(addr: &Ipv4) -> Self {
        Ipv4Addr::from(addr.octets)
    }
}

impl From<Ipv4> for Ipv4Addr {
    fn from(addr: Ipv4) -> Self {
        Ipv4Addr::from(&addr)
    }
}

impl FromStr for Ipv4 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ipv4(s).ok_or_else(|| ParseError::InvalidIpv4(s.to_string()))
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Self) -> bool {
        self.octets == other.octets
    }
}

impl Eq for Ipv4 {}

impl Hash for Ipv4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.octets.hash(state);
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ipv4 {
    fn cmp(&self, other: &Self) -> Ordering {
        ordinal::cmp(&self.octets, &other.octets)
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
