//! # Range Generator
//!
//! A lazy cursor over one contiguous range, producing its addresses in
//! shuffled order.

use std::iter::FusedIterator;
use std::net::Ipv4Addr;

use scattr_common::config::CipherWidth;
use scattr_common::network::cidr::Network;

use crate::cipher::{DEFAULT_ROUNDS, FeistelPermutation};

/// Cursor yielding `base + permute(i)` for `i` in `1..size`.
///
/// Index `0` is skipped: the cipher maps it to itself, which would always make
/// the network address the first value out of every range. Nothing else is
/// filtered, so the broadcast address is produced like any other.
#[derive(Clone, Debug)]
pub struct RangeGenerator {
    network: Network,
    permutation: FeistelPermutation,
    cursor: u64,
}

impl RangeGenerator {
    pub fn new(network: Network, seed: u32, width: CipherWidth) -> Self {
        Self {
            network,
            permutation: FeistelPermutation::new(network.size(), seed, DEFAULT_ROUNDS, width),
            cursor: 1,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Addresses still to be produced.
    pub fn remaining(&self) -> u64 {
        self.network.size().saturating_sub(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl Iterator for RangeGenerator {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }

        let offset = self.permutation.permute(self.cursor);
        self.cursor += 1;

        // offset < size <= 2^(32 - prefix), so this stays inside the block.
        let addr = self.network.base().wrapping_add(offset as u32);
        Some(Ipv4Addr::from(addr))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RangeGenerator {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
