//! # IPv6 Engine
//!
//! Colon-hex parsing with `::` expansion and an optional dotted-quad tail,
//! canonical formatting (lowercase, no leading zeros, leftmost-longest zero
//! run compressed), masking and stepping over eight 16-bit words.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::Ipv6Addr;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::trace;

use crate::address::{IpAddress, Version, v4};
use crate::error::{ParseError, RangeError};
use crate::mask::{self, Fill};
use crate::ordinal;
use crate::range::IpRange;

const WORDS: usize = 8;
const MIN_LEN: usize = 2;
const MAX_LEN: usize = 39;
const MAX_WORD_DIGITS: usize = 4;

/// An IPv6 address.
///
/// The canonical text is computed on first use and cached.
#[derive(Debug, Clone)]
pub struct Ipv6 {
    words: [u16; WORDS],
    text: OnceLock<String>,
}

impl Ipv6 {
    pub const BITS: u32 = 128;

    pub const fn new(words: [u16; WORDS]) -> Self {
        Self {
            words,
            text: OnceLock::new(),
        }
    }

    /// Parses a colon-hex literal. See [`parse_ipv6`].
    pub fn parse(text: &str) -> Option<Self> {
        parse_ipv6(text)
    }

    pub fn words(&self) -> [u16; WORDS] {
        self.words
    }

    pub fn version(&self) -> Version {
        Version::V6
    }

    pub fn to_u128(&self) -> u128 {
        self.words
            .iter()
            .fold(0u128, |acc, &word| (acc << 16) | u128::from(word))
    }

    /// Canonical text form.
    ///
    /// Embedded IPv4 notation is never produced.
    pub fn as_str(&self) -> &str {
        self.text.get_or_init(|| canonical(&self.words))
    }

    /// Keeps the leading `bits` bits and replaces the rest according to `fill`.
    ///
    /// A `bits` of 128 or more returns the address unchanged.
    pub fn mask(&self, bits: u32, fill: Fill) -> Self {
        Self::new(mask::apply(self.words, bits, fill))
    }

    /// The block of `prefix` leading bits containing this address.
    pub fn cidr(&self, prefix: u32) -> Result<IpRange, RangeError> {
        IpRange::cidr(&IpAddress::V6(self.clone()), prefix)
    }

    /// The next address, or `None` for the all-ones address.
    pub fn successor(&self) -> Option<Self> {
        mask::increment(self.words).map(Self::new)
    }

    /// The previous address, or `None` for `::`.
    pub fn predecessor(&self) -> Option<Self> {
        mask::decrement(self.words).map(Self::new)
    }
}

/// Parses an IPv6 literal.
///
/// Accepts eight colon-separated words of one to four hex digits, or fewer
/// words with a single `::` standing in for at least one zero word. The last
/// two words may instead be written as a dotted quad (`::ffff:192.0.2.1`).
/// Zone identifiers are not supported.
pub fn parse_ipv6(text: &str) -> Option<Ipv6> {
    let parsed = parse_words(text).map(Ipv6::new);
    if parsed.is_none() {
        trace!(input = text, "rejected IPv6 literal");
    }
    parsed
}

fn parse_words(text: &str) -> Option<[u16; WORDS]> {
    let (head, last) = text.rsplit_once(':')?;

    match v4::parse_octets(last) {
        Some([a, b, c, d]) => {
            let mut words = parse_hex(&format!("{head}:0:0"))?;
            words[6] = u16::from_be_bytes([a, b]);
            words[7] = u16::from_be_bytes([c, d]);
            Some(words)
        }
        None => parse_hex(text),
    }
}

fn parse_hex(text: &str) -> Option<[u16; WORDS]> {
    if !(MIN_LEN..=MAX_LEN).contains(&text.len()) {
        return None;
    }
    if !text.contains(':') || !text.bytes().all(|b| b == b':' || b.is_ascii_hexdigit()) {
        return None;
    }

    let mut words = [0u16; WORDS];

    let Some((head, tail)) = text.split_once("::") else {
        let count = split_words(text, &mut words)?;
        return (count == WORDS).then_some(words);
    };

    if tail.contains("::") {
        return None;
    }

    // `::` covers at least one word, so each side holds at most seven.
    let mut head_words = [0u16; WORDS - 1];
    let mut tail_words = [0u16; WORDS - 1];
    let head_count = split_words(head, &mut head_words)?;
    let tail_count = split_words(tail, &mut tail_words)?;

    if head_count + tail_count > WORDS - 1 {
        return None;
    }

    words[..head_count].copy_from_slice(&head_words[..head_count]);
    words[WORDS - tail_count..].copy_from_slice(&tail_words[..tail_count]);
    Some(words)
}

/// Parses colon-separated words into `out`, returning how many were written.
///
/// An empty `part` holds zero words.
fn split_words(part: &str, out: &mut [u16]) -> Option<usize> {
    if part.is_empty() {
        return Some(0);
    }

    let mut count = 0;
    for word in part.split(':') {
        if count == out.len() || word.is_empty() || word.len() > MAX_WORD_DIGITS {
            return None;
        }
        out[count] = u16::from_str_radix(word, 16).ok()?;
        count += 1;
    }
    Some(count)
}

fn canonical(words: &[u16; WORDS]) -> String {
    let (start, len) = longest_zero_run(words);

    if len < 2 {
        return join(words);
    }
    format!("{}::{}", join(&words[..start]), join(&words[start + len..]))
}

/// Start and length of the longest run of zero words, leftmost on ties.
fn longest_zero_run(words: &[u16]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut i = 0;

    while i < words.len() {
        if words[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < words.len() && words[i] == 0 {
            i += 1;
        }
        if i - start > best.1 {
            best = (start, i - start);
        }
    }
    best
}

fn join(words: &[u16]) -> String {
    words
        .iter()
        .map(|word| format!("{word:x}"))
        .collect::<Vec<_>>()
        .join(":")
}

impl From<Ipv6Addr> for Ipv6 {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr.segments())
    }
}

impl From<&Ipv6> for Ipv6Addr {
    fn from(addr: &Ipv6) -> Self {
        Ipv6Addr::from(addr.words)
    }
}

impl From<Ipv6> for Ipv6Addr {
    fn from(addr: Ipv6) -> Self {
        Ipv6Addr::from(&addr)
    }
}

impl FromStr for Ipv6 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ipv6(s).ok_or_else(|| ParseError::InvalidIpv6(s.to_string()))
    }
}

impl fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for Ipv6 {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Ipv6 {}

impl Hash for Ipv6 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words.hash(state);
    }
}

impl PartialOrd for Ipv6 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ipv6 {
    fn cmp(&self, other: &Self) -> Ordering {
        ordinal::cmp(&self.words, &other.words)
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
