use std::hint::black_box;
use std::time::{Duration, Instant};

use colored::*;
use scattr_common::config::Config;
use scattr_core::AddressIterator;

use crate::terminal::{print, spinner};

const REPORT_EVERY: u64 = 1 << 20;

/// Drains the iterator without printing and reports the generation rate.
pub fn bench(cfg: &Config, limit: Option<u64>) -> anyhow::Result<()> {
    let iter = AddressIterator::new(cfg)?;
    let total = limit.map_or(iter.total(), |n| n.min(iter.total()));
    let take = usize::try_from(total).unwrap_or(usize::MAX);

    let pb = spinner::start(format!("Generating {total} addresses..."));
    let start: Instant = Instant::now();
    let mut count: u64 = 0;

    for addr in iter.take(take) {
        black_box(addr);
        count += 1;
        if count % REPORT_EVERY == 0 {
            pb.set_message(format!("{} addresses so far...", count.to_string().green().bold()));
        }
    }

    let elapsed: Duration = start.elapsed();
    pb.finish_and_clear();

    let rate = count as f64 / elapsed.as_secs_f64().max(f64::EPSILON);

    print::header("benchmark");
    print::aligned_line("addresses", count);
    print::aligned_line("elapsed", format!("{:.2}s", elapsed.as_secs_f64()));
    print::aligned_line("rate", format!("{:.0} addr/s", rate).bold().yellow());
    print::fat_separator();
    Ok(())
}
