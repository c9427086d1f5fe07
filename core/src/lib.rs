//! # Scattr Core
//!
//! Produces every address of an IPv4 target, minus excluded blocks, exactly
//! once and in a pseudo-random order.
//!
//! ## Pipeline
//! * [`exclusion`](scattr_common::network::exclude) splits the target into disjoint ranges.
//! * [`cipher`] shuffles the indices of a single range.
//! * [`generator`] walks one range through the cipher.
//! * [`scheduler`] interleaves all ranges at random.
//! * [`iterator`] wires the above together from a [`Config`](scattr_common::config::Config).
//!
//! Nothing here performs I/O or spawns threads. Use
//! [`scheduler::SharedScheduler`] to feed several workers from one iterator.

pub mod cipher;
pub mod generator;
pub mod iterator;
pub mod scheduler;

pub use iterator::AddressIterator;
