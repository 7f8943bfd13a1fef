use thiserror::Error;

use crate::address::Version;

/// Returned by the `FromStr` impls when a literal does not parse.
///
/// The `parse_*` functions report the same failures as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid IPv4 address: {0:?}")]
    InvalidIpv4(String),
    #[error("invalid IPv6 address: {0:?}")]
    InvalidIpv6(String),
    #[error("invalid IP address: {0:?}")]
    InvalidIp(String),
    #[error("invalid IP range: {0:?}")]
    InvalidRange(String),
}

/// Caller errors when building a range from already-parsed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Both ends of a range must belong to the same family.
    #[error("range ends have different versions: IPv{first} and IPv{last}")]
    VersionMismatch { first: Version, last: Version },
    /// The prefix is longer than the address.
    #[error("invalid prefix: {prefix} > {max}")]
    PrefixOutOfRange { prefix: u32, max: u32 },
}
