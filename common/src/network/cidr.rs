//! # IPv4 Network Model
//!
//! A [`Network`] is a CIDR block: a base address plus a prefix length.
//!
//! The address count is carried as a `u64` so that `0.0.0.0/0` (2^32 addresses)
//! is representable without overflow.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::ConfigError;

/// An immutable IPv4 CIDR block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Network {
    base: u32,
    prefix: u8,
}

impl Network {
    /// Creates a network from its base address and prefix length.
    ///
    /// Fails if the prefix is longer than 32 bits or if `addr` has host bits set.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, ConfigError> {
        if prefix > 32 {
            return Err(ConfigError::InvalidNetwork {
                input: format!("{addr}/{prefix}"),
                reason: format!("prefix {prefix} > 32"),
            });
        }

        let ip_u32 = u32::from(addr);
        let base = ip_u32 & mask(prefix);
        if base != ip_u32 {
            return Err(ConfigError::HostBitsSet {
                input: format!("{addr}/{prefix}"),
                network: Network { base, prefix }.to_string(),
            });
        }

        Ok(Self { base, prefix })
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn network_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base)
    }

    pub fn broadcast_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.last())
    }

    /// Number of addresses in the block, including network and broadcast.
    pub fn size(&self) -> u64 {
        1u64 << (32 - u32::from(self.prefix))
    }

    /// Highest address of the block as an integer.
    pub fn last(&self) -> u32 {
        self.base | !mask(self.prefix)
    }

    pub fn contains_addr(&self, addr: Ipv4Addr) -> bool {
        u32::from(addr) & mask(self.prefix) == self.base
    }

    /// True if `other` lies entirely inside this block.
    pub fn contains(&self, other: &Network) -> bool {
        other.prefix >= self.prefix && other.base & mask(self.prefix) == self.base
    }

    /// CIDR blocks are either nested or disjoint, so overlap means one contains the other.
    pub fn overlaps(&self, other: &Network) -> bool {
        self.contains(other) || other.contains(self)
    }

    /// Splits the block into its two halves, or `None` for a `/32`.
    pub fn subnets(&self) -> Option<(Network, Network)> {
        if self.prefix == 32 {
            return None;
        }
        let prefix = self.prefix + 1;
        let upper_bit = 1u32 << (31 - u32::from(self.prefix));
        Some((
            Network { base: self.base, prefix },
            Network { base: self.base | upper_bit, prefix },
        ))
    }

    /// Returns the smallest set of blocks covering `self` minus `other`.
    ///
    /// * Disjoint blocks leave `self` untouched.
    /// * If `other` swallows `self`, nothing is left.
    /// * Otherwise `self` is bisected down to `other`, keeping every half that
    ///   does not contain it.
    pub fn address_exclude(&self, other: &Network) -> Vec<Network> {
        if !self.overlaps(other) {
            return vec![*self];
        }
        if other.contains(self) {
            return Vec::new();
        }

        let mut remaining = Vec::with_capacity(usize::from(other.prefix - self.prefix));
        let mut current = *self;
        while current != *other {
            let Some((lower, upper)) = current.subnets() else {
                break;
            };
            if lower.contains(other) {
                remaining.push(upper);
                current = lower;
            } else {
                remaining.push(lower);
                current = upper;
            }
        }
        remaining
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network_address(), self.prefix)
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    /// Parses `a.b.c.d/p` or a bare `a.b.c.d` (treated as `/32`).
    ///
    /// Parsing is strict: `10.0.0.1/8` is rejected rather than silently masked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed: Ipv4Network = s.parse().map_err(|e| ConfigError::InvalidNetwork {
            input: s.to_string(),
            reason: format!("{e}"),
        })?;

        Network::new(parsed.ip(), parsed.prefix()).map_err(|e| match e {
            ConfigError::HostBitsSet { network, .. } => ConfigError::HostBitsSet {
                input: s.to_string(),
                network,
            },
            other => other,
        })
    }
}

/// Parses every entry, failing on the first malformed one.
pub fn parse_networks<S: AsRef<str>>(items: &[S]) -> Result<Vec<Network>, ConfigError> {
    items.iter().map(|s| s.as_ref().parse()).collect()
}

fn mask(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> Network {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_cidr() {
        let n = net("192.168.1.0/24");
        assert_eq!(n.network_address(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(n.broadcast_address(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(n.prefix(), 24);
        assert_eq!(n.size(), 256);
        assert_eq!(n.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_parse_bare_address_is_host_route() {
        let n = net("8.8.8.8");
        assert_eq!(n.prefix(), 32);
        assert_eq!(n.size(), 1);
    }

    #[test]
    fn test_whole_space() {
        let n = net("0.0.0.0/0");
        assert_eq!(n.size(), 1u64 << 32);
        assert_eq!(n.last(), u32::MAX);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "not-a-network".parse::<Network>(),
            Err(ConfigError::InvalidNetwork { .. })
        ));
        assert!(matches!(
            "10.0.0.0/33".parse::<Network>(),
            Err(ConfigError::InvalidNetwork { .. })
        ));
        assert!(matches!(
            "10.0.0.256/8".parse::<Network>(),
            Err(ConfigError::InvalidNetwork { .. })
        ));
        assert_eq!(
            "10.0.0.1/8".parse::<Network>(),
            Err(ConfigError::HostBitsSet {
                input: "10.0.0.1/8".to_string(),
                network: "10.0.0.0/8".to_string(),
            })
        );
    }

    #[test]
    fn test_new_rejects_long_prefix() {
        assert!(Network::new(Ipv4Addr::new(1, 2, 3, 4), 33).is_err());
    }

    #[test]
    fn test_contains_and_overlaps() {
        let big = net("10.0.0.0/8");
        let small = net("10.20.0.0/16");
        let other = net("11.0.0.0/8");

        assert!(big.contains(&small));
        assert!(!small.contains(&big));
        assert!(big.overlaps(&small));
        assert!(small.overlaps(&big));
        assert!(!big.overlaps(&other));
        assert!(big.contains_addr(Ipv4Addr::new(10, 255, 0, 1)));
        assert!(!big.contains_addr(Ipv4Addr::new(11, 0, 0, 0)));
    }

    #[test]
    fn test_subnets() {
        let (lo, hi) = net("192.168.0.0/23").subnets().unwrap();
        assert_eq!(lo, net("192.168.0.0/24"));
        assert_eq!(hi, net("192.168.1.0/24"));
        assert!(net("1.1.1.1/32").subnets().is_none());
    }

    #[test]
    fn test_address_exclude_middle() {
        let mut parts = net("192.168.0.0/24").address_exclude(&net("192.168.0.64/26"));
        parts.sort();
        assert_eq!(
            parts,
            vec![net("192.168.0.0/26"), net("192.168.0.128/25")]
        );
    }

    #[test]
    fn test_address_exclude_disjoint_and_covering() {
        let target = net("172.16.0.0/12");
        assert_eq!(target.address_exclude(&net("10.0.0.0/8")), vec![target]);
        assert!(target.address_exclude(&net("172.0.0.0/8")).is_empty());
        assert!(target.address_exclude(&target).is_empty());
    }

    #[test]
    fn test_address_exclude_single_host() {
        let parts = net("10.0.0.0/30").address_exclude(&net("10.0.0.3/32"));
        let total: u64 = parts.iter().map(Network::size).sum();
        assert_eq!(total, 3);
        assert!(parts.iter().all(|p| !p.contains_addr(Ipv4Addr::new(10, 0, 0, 3))));
    }

    #[test]
    fn test_parse_networks_fails_on_first_bad_entry() {
        assert_eq!(parse_networks(&["10.0.0.0/8", "1.2.3.0/24"]).unwrap().len(), 2);
        assert!(parse_networks(&["10.0.0.0/8", "bogus"]).is_err());
    }
}
