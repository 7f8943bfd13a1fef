use tracing::warn;

use ipvx_core::IpRange;

use crate::config::Config;
use crate::terminal::print;

/// Prints the addresses of `range` one per line.
///
/// Enumeration is lazy, so `--limit` keeps huge IPv6 ranges cheap.
pub fn expand(range: &IpRange, cfg: &Config) {
    let limit: usize = cfg.limit.unwrap_or(usize::MAX);
    let mut printed: usize = 0;

    for addr in range.ips().take(limit) {
        print::plain(addr.as_str());
        printed += 1;
    }

    let truncated: bool = match range.size() {
        Some(size) => size > printed as u128,
        None => true,
    };
    if truncated {
        warn!("stopped after {printed} addresses of {range}");
    }

    let unit: &str = if printed == 1 { "address" } else { "addresses" };
    print::summary(&format!("{printed} {unit} listed"), cfg.quiet);
}
