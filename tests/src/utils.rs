use std::collections::HashSet;
use std::net::Ipv4Addr;

use scattr_common::network::cidr::Network;

pub fn net(s: &str) -> Network {
    s.parse().unwrap()
}

/// Addresses of `target` not covered by any of `excludes`, as a set.
pub fn set_difference(target: &str, excludes: &[&str]) -> HashSet<Ipv4Addr> {
    let target = net(target);
    let excludes: Vec<Network> = excludes.iter().map(|s| net(s)).collect();
    (target.base()..=target.last())
        .map(Ipv4Addr::from)
        .filter(|addr| !excludes.iter().any(|e| e.contains_addr(*addr)))
        .collect()
}

/// Asserts every address is unique and returns them as a set.
pub fn distinct(addrs: &[Ipv4Addr]) -> HashSet<Ipv4Addr> {
    let mut seen = HashSet::with_capacity(addrs.len());
    for addr in addrs {
        assert!(seen.insert(*addr), "{addr} produced twice");
    }
    seen
}
