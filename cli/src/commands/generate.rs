use std::io::{self, BufWriter, ErrorKind, Write};

use anyhow::Context;
use scattr_common::config::Config;
use scattr_core::AddressIterator;
use tracing::debug;

/// Streams addresses to stdout until the iterator or `limit` runs out.
///
/// A closed pipe (e.g. `| head`) ends the run quietly.
pub fn generate(cfg: &Config, limit: Option<u64>) -> anyhow::Result<()> {
    let iter = AddressIterator::new(cfg)?;
    let limit = limit.map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));

    let mut out = BufWriter::new(io::stdout().lock());
    let mut written: u64 = 0;

    for addr in iter.take(limit) {
        if let Err(e) = writeln!(out, "{addr}") {
            return quiet_on_broken_pipe(e);
        }
        written += 1;
    }

    if let Err(e) = out.flush() {
        return quiet_on_broken_pipe(e);
    }

    debug!("{written} addresses written");
    Ok(())
}

fn quiet_on_broken_pipe(e: io::Error) -> anyhow::Result<()> {
    if e.kind() == ErrorKind::BrokenPipe {
        debug!("Output closed early");
        return Ok(());
    }
    Err(e).context("failed to write address")
}
