use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::scheduler::ScanOrderScheduler;

/// Cloneable handle for pulling from one scheduler on several threads.
///
/// Selecting a range, pulling from it and dropping it once empty happen under
/// a single lock, so no address is skipped or produced twice.
#[derive(Clone, Debug)]
pub struct SharedScheduler {
    inner: Arc<Mutex<ScanOrderScheduler>>,
}

impl SharedScheduler {
    pub fn new(scheduler: ScanOrderScheduler) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    /// Pulls up to `max` addresses while holding the lock once.
    pub fn next_batch(&self, max: usize) -> Vec<Ipv4Addr> {
        let mut scheduler = self.lock();
        scheduler.by_ref().take(max).collect()
    }

    pub fn remaining(&self) -> u64 {
        self.lock().remaining()
    }

    pub fn is_exhausted(&self) -> bool {
        self.lock().is_exhausted()
    }

    // The scheduler is consistent between calls, so a panic elsewhere does not
    // invalidate it.
    fn lock(&self) -> MutexGuard<'_, ScanOrderScheduler> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Iterator for SharedScheduler {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        self.lock().next()
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
