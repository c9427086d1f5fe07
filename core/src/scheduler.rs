//! # Scan Order Scheduler
//!
//! Interleaves every range's [`RangeGenerator`] into a single stream.
//!
//! Each step picks one live generator uniformly at random, regardless of how
//! much it has left, and pulls one address from it. Small ranges therefore tend
//! to finish early; once a generator runs dry it is dropped from the draw.

use std::iter::FusedIterator;
use std::net::Ipv4Addr;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use scattr_common::config::CipherWidth;
use scattr_common::network::cidr::Network;
use tracing::trace;

use crate::generator::RangeGenerator;

mod shared;

pub use shared::SharedScheduler;

#[derive(Clone, Debug)]
pub struct ScanOrderScheduler {
    /// Generators that can still produce at least one address.
    live: Vec<RangeGenerator>,
    rng: ChaCha8Rng,
}

impl ScanOrderScheduler {
    /// Builds one generator per range, all sharing `cipher_seed`.
    ///
    /// `rng` drives the choice of range at every step.
    pub fn new(ranges: &[Network], cipher_seed: u32, width: CipherWidth, rng: ChaCha8Rng) -> Self {
        let generators = ranges
            .iter()
            .map(|network| RangeGenerator::new(*network, cipher_seed, width))
            .collect();
        Self::from_generators(generators, rng)
    }

    pub fn from_generators(generators: Vec<RangeGenerator>, rng: ChaCha8Rng) -> Self {
        let live = generators
            .into_iter()
            .filter(|generator| !generator.is_exhausted())
            .collect();
        Self { live, rng }
    }

    /// Number of ranges that still have addresses left.
    pub fn live_ranges(&self) -> usize {
        self.live.len()
    }

    /// Addresses still to be produced across all ranges.
    pub fn remaining(&self) -> u64 {
        self.live.iter().map(RangeGenerator::remaining).sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.live.is_empty()
    }

    pub fn into_shared(self) -> SharedScheduler {
        SharedScheduler::new(self)
    }
}

impl Iterator for ScanOrderScheduler {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.live.is_empty() {
            return None;
        }

        let idx = self.rng.random_range(0..self.live.len());
        let addr = self.live[idx].next();
        if self.live[idx].is_exhausted() {
            let done = self.live.swap_remove(idx);
            trace!(network = %done.network(), left = self.live.len(), "range exhausted");
        }
        addr
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for ScanOrderScheduler {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
