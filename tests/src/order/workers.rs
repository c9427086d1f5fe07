#![cfg(test)]
use scattr_common::config::Config;
use scattr_core::AddressIterator;
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::thread;

/// Workers sharing one iterator must split the output without overlap or loss.
#[test]
fn workers_share_one_iterator() {
    let config = Config::for_target("198.51.100.0/22")
        .with_excludes(&["198.51.101.0/24"])
        .with_seed(31337);
    let iter = AddressIterator::new(&config).unwrap();
    let total = iter.total();
    let shared = iter.into_shared();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut pulled = Vec::new();
                loop {
                    let batch = shared.next_batch(16);
                    if batch.is_empty() {
                        break;
                    }
                    pulled.extend(batch);
                }
                pulled
            })
        })
        .collect();

    let mut seen: HashSet<Ipv4Addr> = HashSet::new();
    for handle in handles {
        for addr in handle.join().unwrap() {
            assert!(seen.insert(addr), "{addr} handed to two workers");
        }
    }

    assert_eq!(seen.len() as u64, total);
    assert_eq!(shared.remaining(), 0);
}
