use tracing::debug;

use ipvx_core::IpAddress;

use crate::terminal::print;

pub fn cidr(addr: &IpAddress, prefix: u32) -> anyhow::Result<()> {
    let range = addr.cidr(prefix)?;
    debug!(%addr, prefix, "derived network block");

    let size: String = match range.size() {
        Some(n) => n.to_string(),
        None => "2^128".to_string(),
    };

    print::aligned_line("first", range.first().as_str());
    print::aligned_line("last", range.last().as_str());
    print::aligned_line("size", size);
    Ok(())
}
