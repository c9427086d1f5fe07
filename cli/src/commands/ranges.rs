use std::io::{self, BufWriter, Write};

use anyhow::Context;
use scattr_common::config::Config;
use scattr_common::network::cidr::Network;
use scattr_common::network::exclude;
use scattr_core::AddressIterator;
use tracing::warn;

use crate::terminal::print;

/// Lists the ranges left after exclusion on stdout, with a summary on stderr.
pub fn ranges(cfg: &Config) -> anyhow::Result<()> {
    let iter = AddressIterator::new(cfg)?;

    let mut ranges: Vec<Network> = iter.ranges().to_vec();
    ranges.sort();

    let mut out = BufWriter::new(io::stdout().lock());
    for range in &ranges {
        writeln!(out, "{}", range_row(range)).context("failed to write range")?;
    }
    out.flush().context("failed to write range")?;

    if ranges.is_empty() {
        warn!("Target {} is fully excluded, nothing to scan", cfg.target);
    }

    print::header("target ranges");
    print::aligned_line("target", &cfg.target);
    print::aligned_line("excludes", cfg.excludes.len());
    print::aligned_line("ranges", ranges.len());
    print::aligned_line("span", exclude::total_addresses(&ranges));
    print::aligned_line("addresses", iter.total());
    print::fat_separator();
    Ok(())
}

/// `network  last-address  size`, padded for a fixed-width table.
fn range_row(range: &Network) -> String {
    format!(
        "{:<18} {:<15} {:>10}",
        range.to_string(),
        range.broadcast_address().to_string(),
        range.size()
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
