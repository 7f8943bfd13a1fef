use std::net::{Ipv4Addr, Ipv6Addr};

use ipvx_core::{IpAddress, IpRange, Ipv4, Ipv6, Version, parse_range};
use pnet::ipnetwork::{Ipv4Network, Ipv6Network};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 1_000;

#[test]
fn ipv4_cidr_matches_pnet() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(0x4c);

    for _ in 0..SAMPLES {
        let ip = Ipv4Addr::from(rng.random::<u32>());
        let prefix: u8 = rng.random_range(0..=32);

        let network = Ipv4Network::new(ip, prefix)?;
        let range = Ipv4::from(ip).cidr(u32::from(prefix))?;

        assert_eq!(range.first(), &IpAddress::V4(network.network().into()));
        assert_eq!(range.last(), &IpAddress::V4(network.broadcast().into()));
    }
    Ok(())
}

#[test]
fn ipv6_cidr_matches_pnet() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(0x6c);

    for _ in 0..SAMPLES {
        let bits: u128 = rng.random();
        let prefix: u8 = rng.random_range(0..=128);

        let network = Ipv6Network::new(Ipv6Addr::from(bits), prefix)?;
        let host_mask: u128 = u128::MAX.checked_shr(u32::from(prefix)).unwrap_or(0);
        let range = Ipv6::from(Ipv6Addr::from(bits)).cidr(u32::from(prefix))?;

        assert_eq!(range.first(), &IpAddress::V6(network.network().into()));
        assert_eq!(range.last().to_u128(), bits | host_mask);
    }
    Ok(())
}

#[test]
fn documented_cidr_examples() {
    let range = parse_range("1.2.3.255/25").unwrap();
    assert_eq!(range.first().as_str(), "1.2.3.128");
    assert_eq!(range.last().as_str(), "1.2.3.255");

    let range = parse_range("1:2:3:ffff:5:6:7:8/49").unwrap();
    assert_eq!(range.first().as_str(), "1:2:3:8000::");
    assert_eq!(range.last().as_str(), "1:2:3:ffff:ffff:ffff:ffff:ffff");
}

#[test]
fn prefix_beyond_family_width_fails() {
    assert!(parse_range("::/129").is_none());
    assert!(parse_range("0.0.0.0/33").is_none());
    assert!(parse_range("::/128").is_some());
    assert!(parse_range("0.0.0.0/32").is_some());
}

#[test]
fn reversed_span_is_normalized() {
    let range = parse_range("2.2.3.4-1.2.3.4").unwrap();
    assert_eq!(range.first().as_str(), "1.2.3.4");
    assert_eq!(range.last().as_str(), "2.2.3.4");
    assert_eq!(range.version(), Version::V4);
}

#[test]
fn mixed_family_span_fails() {
    assert!(parse_range("1.2.3.4-::1").is_none());

    let v4 = IpAddress::V4(Ipv4::new(1, 2, 3, 4));
    let v6 = IpAddress::V6(Ipv6::new([0, 0, 0, 0, 0, 0, 0, 1]));
    assert!(IpRange::new(v4, v6).is_err());
}

#[test]
fn enumeration_count_matches_block_size() -> anyhow::Result<()> {
    for prefix in 20..=32u32 {
        let range = Ipv4::new(10, 20, 30, 40).cidr(prefix)?;
        let expected = 1usize << (32 - prefix);
        assert_eq!(range.ips().count(), expected, "/{prefix}");
        assert_eq!(range.size(), Some(expected as u128));
    }

    let range = Ipv6::new([0xfe80, 0, 0, 0, 0, 0, 0, 0]).cidr(118)?;
    assert_eq!(range.ips().count(), 1024);
    Ok(())
}

#[test]
fn enumeration_is_ascending_and_contiguous() {
    let range = parse_range("::fffe:fffe-::1:0:2").unwrap();
    let ips: Vec<IpAddress> = range.ips().collect();

    assert_eq!(ips.first(), Some(range.first()));
    assert_eq!(ips.last(), Some(range.last()));
    for pair in ips.windows(2) {
        assert_eq!(pair[0].successor().as_ref(), Some(&pair[1]));
    }
}

#[test]
fn single_address_range_yields_one() {
    let range = parse_range("1.2.3.4-1.2.3.4").unwrap();
    assert_eq!(range.ips().count(), 1);

    let range = parse_range("::1").unwrap();
    assert_eq!(range.ips().count(), 1);
}

#[test]
fn successor_of_maximum_is_none() {
    let max_v4 = parse_range("255.255.255.255").unwrap();
    assert!(max_v4.first().successor().is_none());

    let max_v6 = parse_range("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff").unwrap();
    assert!(max_v6.first().successor().is_none());
}

#[test]
fn huge_ranges_can_be_abandoned_early() {
    let range = parse_range("::/0").unwrap();
    let head: Vec<String> = range.ips().skip(65_535).take(2).map(|a| a.to_string()).collect();
    assert_eq!(head, ["::ffff", "::1:0"]);

    let tail: Vec<String> = range.ips().rev().take(2).map(|a| a.to_string()).collect();
    assert_eq!(
        tail,
        [
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe"
        ]
    );
}
