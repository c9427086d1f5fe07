//! # Permutation Cipher
//!
//! A small Feistel network used to visit every index of a range exactly once in
//! a seed-dependent order. It is a shuffle, not a cryptographic primitive.
//!
//! Two widths are supported (see [`CipherWidth`]):
//! * **Adaptive**: the halves are sized to the domain, each round multiplies by
//!   its own odd key derived from the seed, and out-of-range outputs are cycle
//!   walked, so the mapping is a bijection on `[0, domain)`.
//! * **Legacy16**: fixed 8-bit halves followed by `mod domain`. This matches the
//!   historical output but is only collision free on small power-of-two domains.
//!
//! Index `0` is a fixed point under both widths for every seed.

use scattr_common::config::CipherWidth;

pub const DEFAULT_ROUNDS: u32 = 4;

/// Legacy 8-bit/8-bit Feistel mix reduced modulo `domain_size`.
///
/// `domain_size` of zero is treated as one.
pub fn permute(index: u64, domain_size: u64, seed: u32, rounds: u32) -> u64 {
    let mut l = index >> 8;
    let mut r = index & 0xFF;
    for _ in 0..rounds {
        let new_r = l ^ (r.wrapping_mul(u64::from(seed)) & 0xFF);
        l = r;
        r = new_r;
    }
    ((l << 8) | r) % domain_size.max(1)
}

/// A seeded permutation over `[0, domain)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeistelPermutation {
    domain: u64,
    seed: u32,
    rounds: u32,
    half_bits: u32,
    width: CipherWidth,
    /// Odd per-round multipliers, only used by the adaptive width.
    round_keys: Vec<u64>,
}

impl FeistelPermutation {
    pub fn new(domain: u64, seed: u32, rounds: u32, width: CipherWidth) -> Self {
        let domain = domain.max(1);
        let bits = u64::BITS - (domain - 1).leading_zeros();
        let half_bits = bits.div_ceil(2).max(1);
        let round_keys = match width {
            CipherWidth::Adaptive => (0..rounds).map(|round| round_key(seed, round)).collect(),
            CipherWidth::Legacy16 => Vec::new(),
        };

        Self {
            domain,
            seed,
            rounds,
            half_bits,
            width,
            round_keys,
        }
    }

    /// Maps `index` to its shuffled position. Indices outside the domain wrap.
    pub fn permute(&self, index: u64) -> u64 {
        let index = index % self.domain;
        match self.width {
            CipherWidth::Legacy16 => permute(index, self.domain, self.seed, self.rounds),
            CipherWidth::Adaptive => {
                // Terminates: `index` is on its own cycle and is below the domain.
                let mut out = self.encrypt(index);
                while out >= self.domain {
                    out = self.encrypt(out);
                }
                out
            }
        }
    }

    fn encrypt(&self, value: u64) -> u64 {
        let mask = (1u64 << self.half_bits) - 1;

        let mut l = value >> self.half_bits;
        let mut r = value & mask;
        for key in &self.round_keys {
            // An odd key makes the round function a bijection that is zero only at zero.
            let new_r = l ^ (r.wrapping_mul(*key) & mask);
            l = r;
            r = new_r;
        }
        (l << self.half_bits) | r
    }
}

/// SplitMix64 finalizer over `(seed, round)`, forced odd.
fn round_key(seed: u32, round: u32) -> u64 {
    let mut z = ((u64::from(seed) << 32) | u64::from(round)).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (z ^ (z >> 31)) | 1
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
