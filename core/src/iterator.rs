//! # Address Iterator
//!
//! Entry point for consumers: turns a [`Config`] into a ready-to-drain stream
//! of addresses.
//!
//! All validation happens in [`AddressIterator::new`]. Either every network in
//! the config parses and a complete iterator is returned, or nothing is built.

use std::iter::FusedIterator;
use std::net::Ipv4Addr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scattr_common::config::Config;
use scattr_common::error::ConfigError;
use scattr_common::network::cidr::{self, Network};
use scattr_common::network::exclude;
use tracing::{debug, info};

use crate::scheduler::{ScanOrderScheduler, SharedScheduler};

/// A single-use, shuffled enumeration of `target` minus `excludes`.
#[derive(Debug)]
pub struct AddressIterator {
    ranges: Vec<Network>,
    cipher_seed: u32,
    scheduler: ScanOrderScheduler,
}

impl AddressIterator {
    /// Validates `config`, computes the target ranges and seeds the shuffle.
    ///
    /// With `config.seed` set, two iterators built from equal configs produce
    /// identical sequences. Without it the shuffle is seeded from the thread RNG.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let target: Network = config.target.parse()?;
        let excludes = cidr::parse_networks(config.excludes.as_slice())?;
        let ranges = exclude::compute_target_ranges(target, &excludes);
        report_ranges(config, target, &ranges);

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        let cipher_seed: u32 = rng.random();
        let scheduler = ScanOrderScheduler::new(&ranges, cipher_seed, config.cipher, rng);
        debug!(
            cipher_seed,
            cipher = ?config.cipher,
            live = scheduler.live_ranges(),
            "Shuffle seeded"
        );

        Ok(Self {
            ranges,
            cipher_seed,
            scheduler,
        })
    }

    /// The disjoint ranges left after exclusion.
    pub fn ranges(&self) -> &[Network] {
        &self.ranges
    }

    pub fn cipher_seed(&self) -> u32 {
        self.cipher_seed
    }

    /// Total addresses a fresh iterator would produce: one less than each range size.
    pub fn total(&self) -> u64 {
        self.ranges.iter().map(|range| range.size() - 1).sum()
    }

    pub fn remaining(&self) -> u64 {
        self.scheduler.remaining()
    }

    pub fn into_shared(self) -> SharedScheduler {
        self.scheduler.into_shared()
    }
}

impl Iterator for AddressIterator {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        self.scheduler.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.scheduler.size_hint()
    }
}

impl FusedIterator for AddressIterator {}

fn report_ranges(config: &Config, target: Network, ranges: &[Network]) {
    let message = if config.excludes.is_empty() {
        format!("Targeting entire range: {target}")
    } else {
        format!(
            "Found {} subnets of {} after excluding ranges: {}",
            ranges.len(),
            target,
            config.excludes.join(", ")
        )
    };

    if config.verbose {
        info!("{message}");
    } else {
        debug!("{message}");
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
