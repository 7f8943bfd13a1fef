//! # ipvx
//!
//! Strict parsing, canonical formatting, ordering and range expansion for
//! IPv4 and IPv6 literals.
//!
//! ## Module Overview
//! * **[`ordinal`]**: Element-wise three-way comparison of fixed-width arrays.
//!     * *Used by every comparison in the crate*.
//! * **[`mask`]**: Prefix masking and ripple-carry stepping over address items.
//! * **[`address`]**: The IPv4 and IPv6 engines plus the [`IpAddress`] façade.
//! * **[`range`]**: Inclusive address ranges, CIDR / `a-b` parsing and lazy enumeration.
//! * **[`error`]**: Parse and contract errors.
//!
//! Validation failures are reported as `None` by the `parse_*` functions.
//! Misuse (mixing families in one range, over-long prefixes) is an
//! [`error::RangeError`].

pub mod address;
pub mod error;
pub mod mask;
pub mod ordinal;
pub mod range;

pub use address::v4::{Ipv4, parse_ipv4};
pub use address::v6::{Ipv6, parse_ipv6};
pub use address::{IpAddress, Version, compare_address, format_address, parse_ip};
pub use error::{ParseError, RangeError};
pub use mask::Fill;
pub use range::{Addresses, IpRange, cidr, parse_range};
