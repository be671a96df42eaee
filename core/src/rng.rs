//! Deterministic random number generation.
//!
//! RULE: Generators never call any platform RNG.
//! All randomness flows through GeneratorRng instances derived
//! from the master seed held by the RngBank.
//!
//! Each request gets its own stream per generator slot, seeded from
//! (master_seed, slot, request nonce). This means:
//!   - The same seed and request sequence reproduce the same output.
//!   - Account and transaction streams never share draws.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for one generator run.
pub struct GeneratorRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GeneratorRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Roll an integer in [lo, hi], both ends inclusive.
    pub fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        self.inner.gen_range(lo..=hi)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element uniformly. Repeated entries weight the draw.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "pick from empty slice");
        let idx = self.inner.gen_range(0..items.len());
        &items[idx]
    }
}

/// Hands out per-request generator streams from one master seed.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_request(&self, slot: GeneratorSlot, nonce: u64) -> GeneratorRng {
        let derived = self.master_seed
            ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ nonce.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        GeneratorRng::from_seed(derived).with_name(slot.name())
    }
}

/// Stable generator slot assignments.
/// NEVER reorder or remove entries, only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum GeneratorSlot {
    Accounts = 0,
    Transactions = 1,
}

impl GeneratorSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Transactions => "transactions",
        }
    }
}
