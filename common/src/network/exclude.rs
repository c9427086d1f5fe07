//! # Subnet Exclusion
//!
//! Computes the disjoint set of blocks covering a target network once every
//! excluded block has been carved out of it.

use tracing::trace;

use crate::network::cidr::Network;

/// Subtracts `excludes` from `target`, in order.
///
/// The result is pairwise disjoint and shares no address with any exclude. It
/// is empty when the excludes cover the whole target, which is a valid outcome
/// rather than an error.
pub fn compute_target_ranges(target: Network, excludes: &[Network]) -> Vec<Network> {
    let mut targets = vec![target];

    for exclude in excludes {
        targets = targets
            .into_iter()
            .flat_map(|network| {
                if exclude.overlaps(&network) {
                    trace!(%network, %exclude, "carving exclude out of range");
                    network.address_exclude(exclude)
                } else {
                    vec![network]
                }
            })
            .collect();
    }

    targets
}

/// Total number of addresses spanned by `ranges`.
pub fn total_addresses(ranges: &[Network]) -> u64 {
    ranges.iter().map(Network::size).sum()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
