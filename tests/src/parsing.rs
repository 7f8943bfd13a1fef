use std::net::{Ipv4Addr, Ipv6Addr};

use ipvx_core::{IpAddress, Ipv6, parse_ip, parse_ipv4, parse_ipv6};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 2_000;

/// Random words with roughly one in three being zero, so zero runs of every
/// length show up.
fn random_words(rng: &mut StdRng) -> [u16; 8] {
    let mut words = [0u16; 8];
    for word in words.iter_mut() {
        if rng.random_range(0..3) != 0 {
            *word = rng.random();
        }
    }
    words
}

#[test]
fn ipv4_round_trips_through_canonical_form() {
    let mut rng = StdRng::seed_from_u64(0x1b4);

    for _ in 0..SAMPLES {
        let octets: [u8; 4] = rng.random();
        let text = Ipv4Addr::from(octets).to_string();

        let addr = parse_ipv4(&text).expect("valid dotted quad");
        assert_eq!(addr.as_str(), text);
        assert_eq!(addr.octets(), octets);
    }
}

#[test]
fn ipv4_leading_zeros_rejected_everywhere() {
    for text in ["01.1.1.1", "1.01.1.1", "1.1.01.1", "1.1.1.01", "1.1.1.001", "00.0.0.0"] {
        assert!(parse_ipv4(text).is_none(), "accepted {text}");
        assert!(parse_ip(text).is_none(), "accepted {text}");
    }
}

#[test]
fn ipv6_canonical_form_matches_std() {
    let mut rng = StdRng::seed_from_u64(0x6);

    for _ in 0..SAMPLES {
        let words = random_words(&mut rng);
        if words[..5].iter().all(|&w| w == 0) {
            // std may render these with a dotted-quad tail.
            continue;
        }

        let expected = Ipv6Addr::from(words).to_string();
        assert_eq!(Ipv6::new(words).as_str(), expected, "words {words:x?}");
    }
}

#[test]
fn ipv6_canonical_form_reparses_to_same_value() {
    let mut rng = StdRng::seed_from_u64(0x66);

    for _ in 0..SAMPLES {
        let addr = Ipv6::new(random_words(&mut rng));
        let text = addr.as_str();

        assert!(!text.chars().any(|c| c.is_ascii_uppercase()));
        assert_eq!(parse_ipv6(text).as_ref(), Some(&addr), "text {text}");
    }
}

#[test]
fn ipv6_uncompressed_uppercase_padded_parses() {
    let mut rng = StdRng::seed_from_u64(0x666);

    for _ in 0..SAMPLES {
        let words = random_words(&mut rng);
        let text = words
            .iter()
            .map(|w| format!("{w:04X}"))
            .collect::<Vec<_>>()
            .join(":");

        let addr = parse_ipv6(&text).expect("full form");
        assert_eq!(addr.words(), words);
    }
}

#[test]
fn ipv6_embedded_ipv4_matches_hex_words() {
    let mut rng = StdRng::seed_from_u64(0x46);

    for _ in 0..SAMPLES {
        let [a, b, c, d]: [u8; 4] = rng.random();
        let dotted = format!("::ffff:{a}.{b}.{c}.{d}");
        let hex = format!(
            "::ffff:{:x}:{:x}",
            u16::from_be_bytes([a, b]),
            u16::from_be_bytes([c, d])
        );

        assert_eq!(parse_ipv6(&dotted), parse_ipv6(&hex));
        assert_eq!(
            parse_ipv6(&dotted).map(Ipv6Addr::from),
            Some(Ipv4Addr::new(a, b, c, d).to_ipv6_mapped())
        );
    }
}

#[test]
fn parse_ip_prefers_ipv4() -> anyhow::Result<()> {
    let addr: IpAddress = "192.0.2.1".parse()?;
    assert!(addr.is_ipv4());

    let addr: IpAddress = "::192.0.2.1".parse()?;
    assert!(addr.is_ipv6());
    assert_eq!(addr.as_str(), "::c000:201");
    Ok(())
}

#[test]
fn zone_identifiers_are_not_supported() {
    assert!(parse_ip("fe80::1%eth0").is_none());
    assert!(parse_ip("fe80::1%1").is_none());
}
