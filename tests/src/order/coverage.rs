#![cfg(test)]
use scattr_common::config::{CipherWidth, Config};
use scattr_common::error::ConfigError;
use scattr_common::network::cidr::Network;
use scattr_common::network::exclude;
use scattr_core::AddressIterator;
use scattr_core::generator::RangeGenerator;
use std::collections::HashSet;
use std::net::Ipv4Addr;

use crate::utils::{distinct, net, set_difference};

/// The ranges must tile exactly "target minus excludes".
#[test]
fn ranges_tile_the_set_difference() {
    let target = "172.16.0.0/20";
    let excludes = ["172.16.0.0/24", "172.16.4.128/25", "172.16.15.255/32", "10.0.0.0/8"];
    let ranges = exclude::compute_target_ranges(
        net(target),
        &excludes.iter().map(|s| net(s)).collect::<Vec<Network>>(),
    );

    let mut covered = HashSet::new();
    for range in &ranges {
        for ip in range.base()..=range.last() {
            assert!(covered.insert(Ipv4Addr::from(ip)), "{range} overlaps another range");
        }
    }
    assert_eq!(covered, set_difference(target, &excludes));
}

/// Every address is produced once, except each range's own network address.
#[test]
fn full_run_covers_everything_but_range_bases() {
    let target = "198.51.100.0/24";
    let excludes = ["198.51.100.16/28", "198.51.100.200/29"];
    let config = Config::for_target(target).with_excludes(&excludes).with_seed(2024);

    let iter = AddressIterator::new(&config).unwrap();
    let bases: HashSet<Ipv4Addr> = iter.ranges().iter().map(Network::network_address).collect();
    let expected_total = iter.total();

    let addrs: Vec<Ipv4Addr> = iter.collect();
    let seen = distinct(&addrs);

    assert_eq!(addrs.len() as u64, expected_total);
    let expected: HashSet<Ipv4Addr> = set_difference(target, &excludes)
        .difference(&bases)
        .copied()
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn slash_30_yields_three_addresses() {
    let addrs: Vec<Ipv4Addr> = AddressIterator::new(&Config::for_target("192.168.1.0/30"))
        .unwrap()
        .collect();

    let seen = distinct(&addrs);
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|a| a.octets()[..3] == [192, 168, 1] && a.octets()[3] <= 3));
}

#[test]
fn fully_excluded_target_is_exhausted_immediately() {
    let config = Config::for_target("10.0.0.0/8").with_excludes(&["10.0.0.0/8"]);
    let mut iter = AddressIterator::new(&config).unwrap();

    assert!(iter.ranges().is_empty());
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn malformed_networks_fail_before_generation() {
    let bad_target = Config::for_target("300.0.0.0/8");
    assert!(matches!(
        AddressIterator::new(&bad_target),
        Err(ConfigError::InvalidNetwork { .. })
    ));

    let host_bits = Config::for_target("10.0.0.0/8").with_excludes(&["10.0.0.1/24"]);
    assert!(matches!(
        AddressIterator::new(&host_bits),
        Err(ConfigError::HostBitsSet { .. })
    ));
}

fn slash_29(octets: [u8; 7]) -> Vec<Ipv4Addr> {
    octets.iter().map(|d| Ipv4Addr::new(203, 0, 113, *d)).collect()
}

/// Seed 4 draws cipher seed 0xFCAECF22 from ChaCha8; the order below follows from it.
#[test]
fn pinned_slash_29_order_from_seed() {
    let config = Config::for_target("203.0.113.0/29").with_seed(4);

    let iter = AddressIterator::new(&config).unwrap();
    assert_eq!(iter.cipher_seed(), 0xFCAE_CF22);
    let addrs: Vec<Ipv4Addr> = iter.collect();
    assert_eq!(addrs, slash_29([5, 2, 6, 7, 3, 1, 4]));

    let legacy = config.with_cipher(CipherWidth::Legacy16);
    let addrs: Vec<Ipv4Addr> = AddressIterator::new(&legacy).unwrap().collect();
    assert_eq!(addrs, slash_29([5, 2, 7, 4, 1, 6, 3]));
}

#[test]
fn pinned_slash_29_order_from_cipher_seed() {
    let addrs: Vec<Ipv4Addr> =
        RangeGenerator::new(net("203.0.113.0/29"), 0xDEAD_BEEF, CipherWidth::Adaptive).collect();
    assert_eq!(addrs, slash_29([5, 2, 3, 1, 4, 6, 7]));
}

/// No seed may leave a range in plain ascending order.
#[test]
fn output_is_never_sequential() {
    for (target, sample) in [("198.51.100.0/24", 255), ("100.64.0.0/16", 200)] {
        let first = u32::from(net(target).network_address()) + 1;
        let ascending: Vec<Ipv4Addr> = (first..first + sample).map(Ipv4Addr::from).collect();

        for seed in 0..300 {
            let config = Config::for_target(target).with_seed(seed);
            let head: Vec<Ipv4Addr> = AddressIterator::new(&config)
                .unwrap()
                .take(sample as usize)
                .collect();
            assert_ne!(head, ascending, "{target} left in order by seed {seed}");
        }
    }
}

#[test]
fn same_seed_same_sequence() {
    for cipher in [CipherWidth::Adaptive, CipherWidth::Legacy16] {
        let config = Config::for_target("100.64.0.0/20")
            .with_excludes(&["100.64.3.0/24", "100.64.8.0/22"])
            .with_seed(77)
            .with_cipher(cipher);

        let a: Vec<Ipv4Addr> = AddressIterator::new(&config).unwrap().collect();
        let b: Vec<Ipv4Addr> = AddressIterator::new(&config).unwrap().collect();
        assert_eq!(a, b);
    }
}

/// A range bigger than the legacy cipher's 16-bit domain still comes out collision free.
#[test]
fn large_range_is_collision_free() {
    let config = Config::for_target("100.64.0.0/14").with_seed(9);
    let iter = AddressIterator::new(&config).unwrap();
    let total = iter.total();

    let addrs: Vec<Ipv4Addr> = iter.collect();
    assert_eq!(addrs.len() as u64, total);
    assert_eq!(distinct(&addrs).len() as u64, (1 << 18) - 1);
}
