use ipvx_core::IpAddress;

use crate::terminal::print;

pub fn sort(mut addrs: Vec<IpAddress>) {
    addrs.sort();
    for addr in &addrs {
        print::plain(addr.as_str());
    }
}
