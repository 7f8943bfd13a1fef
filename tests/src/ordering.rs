use std::cmp::Ordering;
use std::net::{Ipv4Addr, Ipv6Addr};

use ipvx_core::{IpAddress, Ipv4, Ipv6, compare_address, parse_ip};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 500;

fn random_address(rng: &mut StdRng) -> IpAddress {
    if rng.random_bool(0.5) {
        IpAddress::V4(Ipv4::from(rng.random::<[u8; 4]>()))
    } else {
        IpAddress::V6(Ipv6::new(rng.random()))
    }
}

#[test]
fn ordering_matches_numeric_value_within_family() {
    let mut rng = StdRng::seed_from_u64(0xc0);

    for _ in 0..SAMPLES {
        let (a, b): (u32, u32) = (rng.random(), rng.random());
        let (x, y) = (
            IpAddress::V4(Ipv4Addr::from(a).into()),
            IpAddress::V4(Ipv4Addr::from(b).into()),
        );
        assert_eq!(x.cmp(&y), a.cmp(&b));

        let (a, b): (u128, u128) = (rng.random(), rng.random());
        let (x, y) = (
            IpAddress::V6(Ipv6Addr::from(a).into()),
            IpAddress::V6(Ipv6Addr::from(b).into()),
        );
        assert_eq!(x.cmp(&y), a.cmp(&b));
    }
}

#[test]
fn compare_is_a_total_order() {
    let mut rng = StdRng::seed_from_u64(0xc1);
    let addrs: Vec<IpAddress> = (0..60).map(|_| random_address(&mut rng)).collect();

    for x in &addrs {
        assert_eq!(compare_address(x, x), 0);
        for y in &addrs {
            assert_eq!(compare_address(x, y), -compare_address(y, x));
            for z in &addrs {
                if compare_address(x, y) <= 0 && compare_address(y, z) <= 0 {
                    assert!(compare_address(x, z) <= 0);
                }
            }
        }
    }
}

#[test]
fn every_ipv4_sorts_before_every_ipv6() {
    let mut rng = StdRng::seed_from_u64(0xc2);

    for _ in 0..SAMPLES {
        let v4 = IpAddress::V4(Ipv4::from(rng.random::<[u8; 4]>()));
        let v6 = IpAddress::V6(Ipv6::new(rng.random()));
        assert_eq!(v4.cmp(&v6), Ordering::Less);
    }

    let max_v4 = parse_ip("255.255.255.255").unwrap();
    let min_v6 = parse_ip("::").unwrap();
    assert_eq!(compare_address(&max_v4, &min_v6), -1);
}

#[test]
fn comparison_is_numeric_not_lexical() {
    let nine = parse_ip("9.0.0.0").unwrap();
    let ten = parse_ip("10.0.0.0").unwrap();
    assert_eq!(compare_address(&nine, &ten), -1);

    let low = parse_ip("::ff").unwrap();
    let high = parse_ip("::100").unwrap();
    assert_eq!(compare_address(&low, &high), -1);
}
