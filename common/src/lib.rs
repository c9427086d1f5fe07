//! # Scattr Common
//!
//! Shared value types for the scan-order generator.
//!
//! * [`network::cidr::Network`]: an immutable IPv4 CIDR block.
//! * [`network::exclude`]: subtracting excluded blocks from a target block.
//! * [`config::Config`]: construction parameters for an address iterator.
//! * [`error::ConfigError`]: everything that can go wrong before generation starts.

pub mod config;
pub mod error;
pub mod network;
