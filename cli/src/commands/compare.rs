use std::cmp::Ordering;

use ipvx_core::IpAddress;

use crate::terminal::print;

pub fn compare(a: &IpAddress, b: &IpAddress) {
    let symbol = match a.cmp(b) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    print::plain(format!("{a} {symbol} {b}"));
}
